//! Costar Data - Dataset loading and graph construction
//!
//! Reads the pipe-delimited actor/movie flat files and turns them into the
//! co-appearance graph that `costar-graph` queries: vertices are actor
//! names, edge labels are the sets of titles two actors share.

mod dataset;

use std::collections::BTreeSet;

pub use dataset::{DataError, Dataset};

/// Titles two actors appeared in together. Semantically unordered; a
/// `BTreeSet` only so printed chains come out deterministic.
pub type TitleSet = BTreeSet<String>;

/// The co-appearance graph: actor names labeled with shared titles.
pub type CostarGraph = costar_graph::AdjacencyGraph<String, TitleSet>;
