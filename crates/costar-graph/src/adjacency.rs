//! Petgraph-backed graph storage.
//!
//! `AdjacencyGraph` wraps a petgraph `DiGraph` and adds a vertex-value index
//! for lookups by value rather than by node index. It is the storage used
//! for both the co-appearance graph and the BFS trees built over it.

use crate::graph::Graph;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::hash::Hash;

/// A directed labeled graph stored as petgraph adjacency lists.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E> {
    graph: DiGraph<V, E>,

    /// Maps vertex values to graph node indexes.
    index: HashMap<V, NodeIndex>,
}

impl<V, E> AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
{
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    fn node(&self, v: &V) -> Option<NodeIndex> {
        self.index.get(v).copied()
    }
}

impl<V, E> Default for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
{
    fn insert_vertex(&mut self, v: V) {
        if !self.index.contains_key(&v) {
            let idx = self.graph.add_node(v.clone());
            self.index.insert(v, idx);
        }
    }

    fn insert_directed(&mut self, from: &V, to: &V, label: E) {
        let (Some(a), Some(b)) = (self.node(from), self.node(to)) else {
            return;
        };
        // At most one label per ordered pair: replace rather than parallel.
        match self.graph.find_edge(a, b) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    *weight = label;
                }
            }
            None => {
                self.graph.add_edge(a, b, label);
            }
        }
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    fn vertices(&self) -> Vec<&V> {
        self.graph.node_weights().collect()
    }

    fn out_neighbors(&self, v: &V) -> Vec<&V> {
        self.node(v)
            .map(|idx| {
                self.graph
                    .neighbors_directed(idx, petgraph::Direction::Outgoing)
                    .filter_map(|n| self.graph.node_weight(n))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn in_neighbors(&self, v: &V) -> Vec<&V> {
        self.node(v)
            .map(|idx| {
                self.graph
                    .neighbors_directed(idx, petgraph::Direction::Incoming)
                    .filter_map(|n| self.graph.node_weight(n))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_label(&self, a: &V, b: &V) -> Option<&E> {
        let edge = self.graph.find_edge(self.node(a)?, self.node(b)?)?;
        self.graph.edge_weight(edge)
    }

    fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_graph() -> AdjacencyGraph<&'static str, u32> {
        let mut g = AdjacencyGraph::new();
        g.insert_vertex("a");
        g.insert_vertex("b");
        g
    }

    #[test]
    fn test_insert_vertex_is_idempotent() {
        let mut g = pair_graph();
        g.insert_vertex("a");

        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_undirected_edge_visible_from_both_endpoints() {
        let mut g = pair_graph();
        g.insert_undirected(&"a", &"b", 7);

        assert_eq!(g.out_neighbors(&"a"), vec![&"b"]);
        assert_eq!(g.out_neighbors(&"b"), vec![&"a"]);
        assert_eq!(g.get_label(&"a", &"b"), Some(&7));
        assert_eq!(g.get_label(&"b", &"a"), Some(&7));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_reinserting_an_edge_replaces_the_label() {
        let mut g = pair_graph();
        g.insert_undirected(&"a", &"b", 1);
        g.insert_undirected(&"a", &"b", 2);

        assert_eq!(g.get_label(&"a", &"b"), Some(&2));
        assert_eq!(g.edge_count(), 2, "no parallel edges");
    }

    #[test]
    fn test_edge_with_missing_endpoint_is_dropped() {
        let mut g = pair_graph();
        g.insert_directed(&"a", &"zzz", 1);

        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.get_label(&"a", &"zzz"), None);
    }

    #[test]
    fn test_directed_edge_and_degrees() {
        let mut g = pair_graph();
        g.insert_vertex("c");
        g.insert_directed(&"a", &"b", 1);
        g.insert_directed(&"a", &"c", 2);

        assert_eq!(g.out_degree(&"a"), 2);
        assert_eq!(g.out_degree(&"b"), 0);
        assert_eq!(g.in_neighbors(&"b"), vec![&"a"]);
        assert!(g.get_label(&"b", &"a").is_none());
    }

    #[test]
    fn test_queries_on_unknown_vertex_are_empty() {
        let g: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();

        assert!(!g.has_vertex(&"a"));
        assert!(g.out_neighbors(&"a").is_empty());
        assert!(g.in_neighbors(&"a").is_empty());
        assert_eq!(g.out_degree(&"a"), 0);
    }
}
