//! CLI command implementations.

use colored::Colorize;
use costar_data::{CostarGraph, Dataset};
use costar_graph::{Graph, Universe};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::shell;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());
    Ok(spinner)
}

/// Load the dataset and build the co-appearance graph.
fn load(path: &Path) -> Result<(Dataset, CostarGraph)> {
    let spinner = spinner("Loading dataset...")?;
    let dataset = Dataset::load(path)?;

    spinner.set_message("Building co-appearance graph...");
    let graph = dataset.build_graph();
    spinner.finish_and_clear();

    println!(
        "{} Loaded {} actors with {} co-star links",
        "✓".green(),
        graph.vertex_count().to_string().cyan(),
        (graph.edge_count() / 2).to_string().cyan()
    );

    Ok((dataset, graph))
}

/// Start the interactive game shell.
pub fn play(path: &Path, center: &str) -> Result<()> {
    let (_, graph) = load(path)?;
    let mut universe = Universe::new(graph);

    match universe.set_center(center.to_string()) {
        Ok(_) => println!(
            "{} is now the center of the acting universe.",
            center.cyan()
        ),
        Err(e) => println!("{} {}. Choose one with 'u <name>'.", "⚠".yellow(), e),
    }

    shell::run(&mut universe)
}

/// Rank the best centers by average separation.
pub fn centers(path: &Path, count: usize, json: bool) -> Result<()> {
    let (_, graph) = load(path)?;
    let universe: Universe<String, costar_data::TitleSet> = Universe::new(graph);

    let spinner = spinner("Ranking centers (one BFS per actor)...")?;
    let ranked = universe.best_centers(count);
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    println!("Top {} centers of the universe:", ranked.len());
    for (rank, score) in ranked.iter().enumerate() {
        println!(
            "  {:>3}. {} (avg separation: {:.4})",
            rank + 1,
            score.actor.cyan(),
            score.average_separation
        );
    }

    Ok(())
}

/// Show dataset and graph statistics.
pub fn stats(path: &Path, json: bool) -> Result<()> {
    let (dataset, graph) = load(path)?;
    let links = graph.edge_count() / 2;

    if json {
        let doc = serde_json::json!({
            "actorRecords": dataset.actor_count(),
            "movieRecords": dataset.movie_count(),
            "moviesWithCast": dataset.cast_count(),
            "graphActors": graph.vertex_count(),
            "costarLinks": links,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Dataset:");
    println!("  actor records:    {}", dataset.actor_count());
    println!("  movie records:    {}", dataset.movie_count());
    println!("  movies with cast: {}", dataset.cast_count());
    println!("Graph:");
    println!("  actors:        {}", graph.vertex_count());
    println!("  co-star links: {}", links);

    Ok(())
}
