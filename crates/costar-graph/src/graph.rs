//! The graph capability contract.
//!
//! Everything in this crate that traverses or queries a graph goes through
//! this trait, never a concrete storage type. That keeps the BFS engine and
//! the query layer independent of how adjacency is actually stored.

/// A mutable graph of labeled vertices and edges.
///
/// Vertices are compared by value. Each ordered pair of vertices carries at
/// most one label; an undirected insertion is visible from both endpoints'
/// adjacency views. Iteration order of [`vertices`](Graph::vertices) and the
/// neighbor methods is unspecified but stable within a single instance.
pub trait Graph<V, E> {
    /// Adds a vertex. Inserting a vertex that already exists is a no-op.
    fn insert_vertex(&mut self, v: V);

    /// Adds (or replaces) the labeled edge `from -> to`.
    ///
    /// Both endpoints must already be vertices; the call is a no-op
    /// otherwise.
    fn insert_directed(&mut self, from: &V, to: &V, label: E);

    /// Adds (or replaces) a labeled edge in both directions between `a` and
    /// `b`.
    fn insert_undirected(&mut self, a: &V, b: &V, label: E)
    where
        E: Clone,
    {
        self.insert_directed(a, b, label.clone());
        self.insert_directed(b, a, label);
    }

    /// Whether `v` is a vertex of this graph.
    fn has_vertex(&self, v: &V) -> bool;

    /// All vertices, in the graph's native order.
    fn vertices(&self) -> Vec<&V>;

    /// Vertices reachable from `v` along one outgoing edge.
    ///
    /// Empty if `v` is not a vertex.
    fn out_neighbors(&self, v: &V) -> Vec<&V>;

    /// Vertices with an edge into `v`. Empty if `v` is not a vertex.
    fn in_neighbors(&self, v: &V) -> Vec<&V>;

    /// The label on the edge `a -> b`, if that edge exists.
    fn get_label(&self, a: &V, b: &V) -> Option<&E>;

    /// Count of distinct out-neighbors of `v`.
    fn out_degree(&self, v: &V) -> usize {
        self.out_neighbors(v).len()
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of directed edges (an undirected insertion counts twice).
    fn edge_count(&self) -> usize;
}
