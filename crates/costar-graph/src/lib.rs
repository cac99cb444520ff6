//! Costar Graph - Co-appearance graph and separation queries
//!
//! This crate holds the core of Costar: a labeled graph capability, a
//! petgraph-backed implementation of it, a BFS engine that builds
//! shortest-path trees, and the center-relative query layer (the "Kevin
//! Bacon game" semantics).
//!
//! # Architecture
//!
//! The traversal and query code depends only on the [`Graph`] trait, never
//! on concrete storage. BFS trees are graphs too, with edges directed
//! child -> parent so a path is recovered by walking out-edges to the root.
//!
//! # Example
//!
//! ```
//! use costar_graph::{AdjacencyGraph, Graph, Universe};
//!
//! let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::new();
//! graph.insert_vertex("Alice");
//! graph.insert_vertex("Bob");
//! graph.insert_undirected(&"Alice", &"Bob", "Footloose");
//!
//! let mut universe = Universe::new(graph);
//! universe.set_center("Alice").unwrap();
//! let info = universe.connectivity().unwrap();
//! assert_eq!(info.connected, 1);
//! ```

mod adjacency;
mod graph;
pub mod traversal;
mod universe;

pub use adjacency::AdjacencyGraph;
pub use graph::Graph;
pub use universe::{
    CenterChange, CenterScore, Connection, Connectivity, DegreeEntry, Hop, QueryError,
    SeparationEntry, Universe,
};
