//! Loading the actor/movie dataset from pipe-delimited flat files.
//!
//! A dataset directory holds three files:
//!
//! - `actors.txt` - `actorID|actorName`
//! - `movies.txt` - `movieID|movieTitle`
//! - `movie-actors.txt` - `movieID|actorID`, one line per appearance
//!
//! Lines that do not split into exactly two fields are skipped with a
//! warning, as are appearance records that reference unknown actor or movie
//! IDs.

use crate::{CostarGraph, TitleSet};
use costar_graph::{AdjacencyGraph, Graph};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Names of the three dataset files within a dataset directory.
const ACTORS_FILE: &str = "actors.txt";
const MOVIES_FILE: &str = "movies.txt";
const MOVIE_ACTORS_FILE: &str = "movie-actors.txt";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// The raw dataset: ID-to-name tables and per-movie casts.
#[derive(Debug, Default)]
pub struct Dataset {
    /// Actor ID -> actor name.
    actors: HashMap<String, String>,

    /// Movie ID -> movie title.
    movies: HashMap<String, String>,

    /// Movie ID -> set of actor IDs appearing in it.
    appearances: HashMap<String, HashSet<String>>,
}

impl Dataset {
    /// Loads `actors.txt`, `movies.txt`, and `movie-actors.txt` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, DataError> {
        let actors: HashMap<String, String> =
            read_pairs(&dir.join(ACTORS_FILE))?.into_iter().collect();
        let movies: HashMap<String, String> =
            read_pairs(&dir.join(MOVIES_FILE))?.into_iter().collect();

        let mut appearances: HashMap<String, HashSet<String>> = HashMap::new();
        for (movie_id, actor_id) in read_pairs(&dir.join(MOVIE_ACTORS_FILE))? {
            appearances.entry(movie_id).or_default().insert(actor_id);
        }

        info!(
            actors = actors.len(),
            movies = movies.len(),
            casts = appearances.len(),
            "dataset loaded"
        );
        Ok(Self {
            actors,
            movies,
            appearances,
        })
    }

    /// Number of actor records.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Number of movie records.
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of movies with at least one recorded appearance.
    pub fn cast_count(&self) -> usize {
        self.appearances.len()
    }

    /// Builds the co-appearance graph.
    ///
    /// Every pair of actors sharing a movie gets an undirected edge whose
    /// label is the set of titles they share; the set grows by union when
    /// the same pair turns up in another movie. Appearance records with
    /// dangling IDs are skipped with a warning.
    pub fn build_graph(&self) -> CostarGraph {
        let mut graph: CostarGraph = AdjacencyGraph::new();

        for (movie_id, cast_ids) in &self.appearances {
            let Some(title) = self.movies.get(movie_id) else {
                warn!(movie_id = %movie_id, "appearance references an unknown movie");
                continue;
            };

            let cast: Vec<&String> = cast_ids
                .iter()
                .filter_map(|id| {
                    let name = self.actors.get(id);
                    if name.is_none() {
                        warn!(actor_id = %id, movie_id = %movie_id, "appearance references an unknown actor");
                    }
                    name
                })
                .collect();

            for (i, &a) in cast.iter().enumerate() {
                for &b in &cast[i + 1..] {
                    if a == b {
                        continue;
                    }
                    graph.insert_vertex(a.clone());
                    graph.insert_vertex(b.clone());

                    let mut shared: TitleSet = graph.get_label(a, b).cloned().unwrap_or_default();
                    shared.insert(title.clone());
                    graph.insert_undirected(a, b, shared);
                }
            }
        }

        info!(
            actors = graph.vertex_count(),
            links = graph.edge_count() / 2,
            "co-appearance graph built"
        );
        graph
    }
}

/// Reads a pipe-delimited two-column file, skipping malformed lines.
fn read_pairs(path: &Path) -> Result<Vec<(String, String)>, DataError> {
    let contents = fs::read_to_string(path).map_err(|source| DataError::Read {
        file: path.display().to_string(),
        source,
    })?;

    let mut pairs = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match line.split_once('|') {
            Some((left, right)) if !left.is_empty() && !right.is_empty() && !right.contains('|') => {
                pairs.push((left.to_string(), right.to_string()));
            }
            _ => warn!(
                file = %path.display(),
                line = number + 1,
                "skipping malformed record"
            ),
        }
    }
    Ok(pairs)
}
