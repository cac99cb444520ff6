//! Center-relative queries over a co-appearance graph.
//!
//! A [`Universe`] owns the graph, the current "center of the universe"
//! vertex, and a lazily rebuilt shortest-path tree rooted at that center.
//! Changing the center only marks the tree stale; the next query that needs
//! it rebuilds it.

use crate::adjacency::AdjacencyGraph;
use crate::graph::Graph;
use crate::traversal;
use serde::Serialize;
use std::fmt::Display;
use std::hash::Hash;
use thiserror::Error;
use tracing::debug;

/// A query that named a vertex the graph does not contain, or that needed a
/// center before one was chosen.
///
/// "In the graph but not connected to the center" is not an error; see
/// [`Connection::Unreached`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{0} is not in the dataset")]
    NotFound(String),
    #[error("no center of the universe has been chosen")]
    NoCenter,
}

/// Outcome of [`Universe::set_center`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterChange {
    /// The center moved to the requested vertex.
    Changed,
    /// The requested vertex already was the center; nothing changed.
    AlreadyCenter,
}

/// One step of a path to the center: `from` and `to` appeared together, and
/// `label` says in what.
///
/// The label is read from the co-appearance graph itself, not the tree, and
/// is present for every hop of a path through a tree built from that graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop<V, E> {
    pub from: V,
    pub to: V,
    pub label: Option<E>,
}

/// How a vertex relates to the current center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Connection<V, E> {
    /// The vertex is the center itself; distance 0.
    Center,
    /// The vertex is in the graph but in a different component than the
    /// center.
    Unreached,
    /// The shortest chain of shared appearances leading to the center.
    Chain(Vec<Hop<V, E>>),
}

impl<V, E> Connection<V, E> {
    /// Separation from the center, or `None` when not connected.
    pub fn distance(&self) -> Option<usize> {
        match self {
            Connection::Center => Some(0),
            Connection::Unreached => None,
            Connection::Chain(hops) => Some(hops.len()),
        }
    }
}

/// A vertex and its out-degree, from [`Universe::by_degree`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeEntry<V> {
    pub actor: V,
    pub degree: usize,
}

/// A vertex and its distance from the center, from
/// [`Universe::by_separation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeparationEntry<V> {
    pub actor: V,
    pub separation: usize,
}

/// A candidate center and its average separation, from
/// [`Universe::best_centers`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterScore<V> {
    pub actor: V,
    pub average_separation: f64,
}

/// How well the current center reaches the rest of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connectivity {
    /// Vertices reachable from the center, the center excluded.
    pub connected: usize,
    pub average_separation: f64,
}

/// The query engine: graph, current center, and cached shortest-path tree.
#[derive(Debug)]
pub struct Universe<V, E>
where
    V: Clone + Eq + Hash,
{
    graph: AdjacencyGraph<V, E>,

    /// The current center of the universe, if one has been chosen.
    center: Option<V>,

    /// Shortest-path tree rooted at `center`. `None` when absent or stale;
    /// rebuilt on demand by whichever query next needs it.
    tree: Option<AdjacencyGraph<V, E>>,
}

impl<V, E> Universe<V, E>
where
    V: Clone + Eq + Hash + Display,
    E: Clone,
{
    /// Wraps a graph with no center chosen yet.
    pub fn new(graph: AdjacencyGraph<V, E>) -> Self {
        Self {
            graph,
            center: None,
            tree: None,
        }
    }

    /// The underlying co-appearance graph.
    pub fn graph(&self) -> &AdjacencyGraph<V, E> {
        &self.graph
    }

    /// The current center, if any.
    pub fn center(&self) -> Option<&V> {
        self.center.as_ref()
    }

    /// Moves the center of the universe.
    ///
    /// Fails if `name` is not in the graph. Re-choosing the current center
    /// reports [`CenterChange::AlreadyCenter`] and leaves the cached tree
    /// alone; otherwise the cache is invalidated and rebuilt lazily.
    pub fn set_center(&mut self, name: V) -> Result<CenterChange, QueryError> {
        if !self.graph.has_vertex(&name) {
            return Err(QueryError::NotFound(name.to_string()));
        }
        if self.center.as_ref() == Some(&name) {
            return Ok(CenterChange::AlreadyCenter);
        }
        debug!(center = %name, "center changed, shortest-path tree now stale");
        self.center = Some(name);
        self.tree = None;
        Ok(CenterChange::Changed)
    }

    /// Rebuilds the shortest-path tree if it is stale or absent.
    fn ensure_tree(&mut self) -> Result<(), QueryError> {
        let center = self.center.clone().ok_or(QueryError::NoCenter)?;
        if self.tree.is_none() {
            debug!(center = %center, "rebuilding shortest-path tree");
            self.tree = Some(traversal::bfs(&self.graph, &center));
        }
        Ok(())
    }

    /// The center and its fresh tree. Call [`Self::ensure_tree`] first.
    fn cached(&self) -> Result<(&V, &AdjacencyGraph<V, E>), QueryError> {
        match (&self.center, &self.tree) {
            (Some(center), Some(tree)) => Ok((center, tree)),
            _ => Err(QueryError::NoCenter),
        }
    }

    /// How `actor` connects to the current center.
    ///
    /// Fails if `actor` is not in the graph at all. An actor in the graph
    /// but cut off from the center is the [`Connection::Unreached`]
    /// sentinel, not an error.
    pub fn path_to_center(&mut self, actor: &V) -> Result<Connection<V, E>, QueryError> {
        if !self.graph.has_vertex(actor) {
            return Err(QueryError::NotFound(actor.to_string()));
        }
        self.ensure_tree()?;
        let (center, tree) = self.cached()?;

        if actor == center {
            return Ok(Connection::Center);
        }
        if !tree.has_vertex(actor) {
            return Ok(Connection::Unreached);
        }

        let path = traversal::path_to(tree, actor);
        let hops = path
            .windows(2)
            .map(|step| Hop {
                from: step[0].clone(),
                to: step[1].clone(),
                label: self.graph.get_label(&step[0], &step[1]).cloned(),
            })
            .collect();
        Ok(Connection::Chain(hops))
    }

    /// Vertices whose out-degree lies in `low..=high`, ascending by degree.
    ///
    /// Ties keep the graph's vertex order.
    pub fn by_degree(&self, low: usize, high: usize) -> Vec<DegreeEntry<V>> {
        let mut entries: Vec<DegreeEntry<V>> = self
            .graph
            .vertices()
            .into_iter()
            .filter_map(|v| {
                let degree = self.graph.out_degree(v);
                (low..=high).contains(&degree).then(|| DegreeEntry {
                    actor: v.clone(),
                    degree,
                })
            })
            .collect();
        entries.sort_by_key(|e| e.degree);
        entries
    }

    /// Vertices whose separation from the center lies in `low..=high`,
    /// ascending by separation.
    pub fn by_separation(&mut self, low: usize, high: usize) -> Result<Vec<SeparationEntry<V>>, QueryError> {
        self.ensure_tree()?;
        let (center, tree) = self.cached()?;

        let mut entries: Vec<SeparationEntry<V>> = traversal::separation_map(tree, center)
            .into_iter()
            .filter(|(_, sep)| (low..=high).contains(sep))
            .map(|(actor, separation)| SeparationEntry { actor, separation })
            .collect();
        entries.sort_by_key(|e| e.separation);
        Ok(entries)
    }

    /// The `n` vertices with the lowest average separation, ascending.
    ///
    /// Runs a full BFS per vertex, so expect latency proportional to
    /// vertices x (vertices + edges) on large graphs.
    pub fn best_centers(&self, n: usize) -> Vec<CenterScore<V>> {
        debug!(candidates = self.graph.vertex_count(), "ranking centers");
        let mut scores: Vec<CenterScore<V>> = self
            .graph
            .vertices()
            .into_iter()
            .map(|v| {
                let tree = traversal::bfs(&self.graph, v);
                CenterScore {
                    actor: v.clone(),
                    average_separation: traversal::average_separation(&tree, v),
                }
            })
            .collect();
        scores.sort_by(|a, b| a.average_separation.total_cmp(&b.average_separation));
        scores.truncate(n);
        scores
    }

    /// How many vertices the current center reaches, and at what average
    /// separation.
    pub fn connectivity(&mut self) -> Result<Connectivity, QueryError> {
        self.ensure_tree()?;
        let (center, tree) = self.cached()?;

        Ok(Connectivity {
            connected: tree.vertex_count().saturating_sub(1),
            average_separation: traversal::average_separation(tree, center),
        })
    }
}
