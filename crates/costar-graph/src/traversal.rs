//! Breadth-first traversal over a labeled graph.
//!
//! This module builds shortest-path trees and answers the questions that
//! fall out of them: the chain from the root to any vertex, the vertices a
//! tree never reached, and how far apart the tree says everyone is on
//! average.
//!
//! A shortest-path tree is itself a graph, with one invariant: every vertex
//! except the root has exactly one outgoing edge, pointing at its BFS
//! parent and carrying the label of the corresponding edge in the source
//! graph. The root has none.

use crate::adjacency::AdjacencyGraph;
use crate::graph::Graph;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Builds the BFS shortest-path tree of `graph` rooted at `source`.
///
/// Every vertex in the returned tree sits at its true shortest-path
/// distance from `source`; vertices unreachable from `source` are absent.
/// Which of several equally-short parents a vertex ends up under depends on
/// the graph's neighbor iteration order and is not guaranteed.
///
/// If `source` is not a vertex of `graph`, the tree is empty. Runs in
/// O(vertices + edges).
pub fn bfs<V, E, G>(graph: &G, source: &V) -> AdjacencyGraph<V, E>
where
    G: Graph<V, E>,
    V: Clone + Eq + Hash,
    E: Clone,
{
    let mut tree = AdjacencyGraph::new();
    if !graph.has_vertex(source) {
        return tree;
    }

    let mut discovered: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    discovered.insert(source.clone());
    tree.insert_vertex(source.clone());
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.out_neighbors(&current) {
            if discovered.contains(neighbor) {
                continue;
            }
            discovered.insert(neighbor.clone());
            tree.insert_vertex(neighbor.clone());

            // Tree edges run child -> parent, labeled from the source graph.
            if let Some(label) = graph.get_label(&current, neighbor) {
                tree.insert_directed(neighbor, &current, label.clone());
            }

            queue.push_back(neighbor.clone());
        }
    }

    tree
}

/// Reconstructs the root-to-`v` path in a BFS tree, both endpoints
/// included.
///
/// Returns an empty path when `v` is not in the tree. The input must be a
/// BFS tree as produced by [`bfs`]; handing this a cyclic graph will loop
/// forever.
pub fn path_to<V, E, G>(tree: &G, v: &V) -> Vec<V>
where
    G: Graph<V, E>,
    V: Clone + Eq + Hash,
{
    let mut path = Vec::new();
    if !tree.has_vertex(v) {
        return path;
    }

    // Walk child -> parent; the root is the one vertex with no parent.
    let mut current = v.clone();
    loop {
        path.push(current.clone());
        match tree.out_neighbors(&current).first() {
            Some(parent) => current = (*parent).clone(),
            None => break,
        }
    }

    path.reverse();
    path
}

/// The vertices of `graph` that `subgraph` does not contain.
///
/// Typically used with a BFS tree as the subgraph, which makes this the set
/// of vertices the traversal never reached.
pub fn missing_vertices<V, E, G, H>(graph: &G, subgraph: &H) -> HashSet<V>
where
    G: Graph<V, E>,
    H: Graph<V, E>,
    V: Clone + Eq + Hash,
{
    graph
        .vertices()
        .into_iter()
        .filter(|v| !subgraph.has_vertex(v))
        .cloned()
        .collect()
}

/// Distance from `root` to every vertex of a BFS tree, `root` itself at 0.
///
/// Walks the tree forward (root to leaves): since tree edges point child ->
/// parent, the children of a vertex are exactly its in-neighbors. Empty if
/// `root` is not in the tree.
pub fn separation_map<V, E, G>(tree: &G, root: &V) -> HashMap<V, usize>
where
    G: Graph<V, E>,
    V: Clone + Eq + Hash,
{
    let mut distance: HashMap<V, usize> = HashMap::new();
    if !tree.has_vertex(root) {
        return distance;
    }

    let mut queue: VecDeque<(V, usize)> = VecDeque::new();
    distance.insert(root.clone(), 0);
    queue.push_back((root.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        for child in tree.in_neighbors(&current) {
            if !distance.contains_key(child) {
                distance.insert(child.clone(), depth + 1);
                queue.push_back((child.clone(), depth + 1));
            }
        }
    }

    distance
}

/// Mean distance from `root` to the other vertices of a BFS tree.
///
/// Returns 0.0 when the tree holds nothing but the root (or not even that),
/// so callers never divide by zero.
pub fn average_separation<V, E, G>(tree: &G, root: &V) -> f64
where
    G: Graph<V, E>,
    V: Clone + Eq + Hash,
{
    let mut total = 0usize;
    let mut count = 0usize;
    for (_, depth) in separation_map(tree, root) {
        if depth > 0 {
            total += depth;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestGraph = AdjacencyGraph<&'static str, &'static str>;

    fn undirected(edges: &[(&'static str, &'static str, &'static str)]) -> TestGraph {
        let mut g = TestGraph::new();
        for (a, b, label) in edges {
            g.insert_vertex(*a);
            g.insert_vertex(*b);
            g.insert_undirected(a, b, *label);
        }
        g
    }

    /// Alice - Bob - Carol chain.
    fn chain() -> TestGraph {
        undirected(&[("Alice", "Bob", "M1"), ("Bob", "Carol", "M2")])
    }

    #[test]
    fn test_bfs_of_chain_hangs_children_under_parents() {
        let tree = bfs(&chain(), &"Alice");

        assert_eq!(tree.vertex_count(), 3);
        assert_eq!(tree.out_neighbors(&"Bob"), vec![&"Alice"]);
        assert_eq!(tree.out_neighbors(&"Carol"), vec![&"Bob"]);
        assert!(tree.out_neighbors(&"Alice").is_empty(), "root has no parent");
        assert_eq!(tree.get_label(&"Bob", &"Alice"), Some(&"M1"));
        assert_eq!(tree.get_label(&"Carol", &"Bob"), Some(&"M2"));
    }

    #[test]
    fn test_bfs_with_unknown_source_is_empty() {
        let tree = bfs(&chain(), &"Zed");

        assert_eq!(tree.vertex_count(), 0);
        assert_eq!(tree.edge_count(), 0);
    }

    #[test]
    fn test_bfs_depths_equal_shortest_distance() {
        // Diamond with a far side: two routes to "d", one longer via "e".
        let g = undirected(&[
            ("a", "b", "x"),
            ("a", "c", "x"),
            ("b", "d", "x"),
            ("c", "d", "x"),
            ("d", "e", "x"),
        ]);
        let tree = bfs(&g, &"a");
        let depths = separation_map(&tree, &"a");

        assert_eq!(depths[&"a"], 0);
        assert_eq!(depths[&"b"], 1);
        assert_eq!(depths[&"c"], 1);
        assert_eq!(depths[&"d"], 2);
        assert_eq!(depths[&"e"], 3);
        // Exactly one parent per non-root vertex.
        for v in ["b", "c", "d", "e"] {
            assert_eq!(tree.out_degree(&v), 1);
        }
    }

    #[test]
    fn test_bfs_skips_unreachable_component() {
        let mut g = chain();
        g.insert_vertex("Loner");
        let tree = bfs(&g, &"Alice");

        assert!(!tree.has_vertex(&"Loner"));
        let missing = missing_vertices(&g, &tree);
        assert_eq!(missing.len(), 1);
        assert!(missing.contains(&"Loner"));
    }

    #[test]
    fn test_path_runs_from_root_to_target() {
        let tree = bfs(&chain(), &"Alice");

        assert_eq!(path_to(&tree, &"Carol"), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(path_to(&tree, &"Alice"), vec!["Alice"]);
    }

    #[test]
    fn test_path_to_vertex_outside_tree_is_empty() {
        let tree = bfs(&chain(), &"Alice");

        assert!(path_to(&tree, &"Zed").is_empty());
    }

    #[test]
    fn test_path_length_matches_depth() {
        let g = undirected(&[
            ("a", "b", "x"),
            ("b", "c", "x"),
            ("c", "d", "x"),
            ("a", "e", "x"),
        ]);
        let tree = bfs(&g, &"a");
        let depths = separation_map(&tree, &"a");

        for v in ["a", "b", "c", "d", "e"] {
            let path = path_to(&tree, &v);
            assert_eq!(path.len(), depths[&v] + 1);
            assert_eq!(path.first(), Some(&"a"));
            assert_eq!(path.last(), Some(&v));
        }
    }

    #[test]
    fn test_missing_vertices_partition_the_graph() {
        let mut g = chain();
        g.insert_vertex("Loner");
        g.insert_vertex("Hermit");
        g.insert_undirected(&"Loner", &"Hermit", "M3");

        let tree = bfs(&g, &"Alice");
        let missing = missing_vertices(&g, &tree);

        assert_eq!(missing.len() + tree.vertex_count(), g.vertex_count());
        for v in g.vertices() {
            assert!(missing.contains(v) != tree.has_vertex(v));
        }
    }

    #[test]
    fn test_average_separation_of_chain() {
        let tree = bfs(&chain(), &"Alice");

        // Bob at 1, Carol at 2.
        assert_eq!(average_separation(&tree, &"Alice"), 1.5);
    }

    #[test]
    fn test_average_separation_of_lone_root_is_zero() {
        let mut g = TestGraph::new();
        g.insert_vertex("Alice");
        let tree = bfs(&g, &"Alice");

        assert_eq!(average_separation(&tree, &"Alice"), 0.0);
    }

    #[test]
    fn test_average_separation_of_empty_tree_is_zero() {
        let tree = bfs(&chain(), &"Zed");

        assert_eq!(average_separation(&tree, &"Zed"), 0.0);
    }

    #[test]
    fn test_separation_map_with_root_outside_tree_is_empty() {
        let tree = bfs(&chain(), &"Alice");

        assert!(separation_map(&tree, &"Zed").is_empty());
    }
}
