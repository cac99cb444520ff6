//! Costar CLI - Command-line interface for Costar
//!
//! This is the entry point for playing the "center of the universe" game
//! over an actor co-appearance dataset, and for the batch queries (best
//! centers, dataset statistics) that don't need the interactive shell.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod shell;

#[derive(Parser)]
#[command(name = "costar")]
#[command(author = "Costar Contributors")]
#[command(version)]
#[command(about = "Shortest co-appearance chains over an actor graph", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a dataset and start the interactive game shell
    Play {
        /// Directory holding actors.txt, movies.txt, and movie-actors.txt
        data_dir: PathBuf,

        /// Initial center of the universe
        #[arg(short, long, default_value = "Kevin Bacon")]
        center: String,
    },

    /// Rank actors by average separation from everyone else
    Centers {
        /// Directory holding actors.txt, movies.txt, and movie-actors.txt
        data_dir: PathBuf,

        /// How many centers to list
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show dataset and graph statistics
    Stats {
        /// Directory holding actors.txt, movies.txt, and movie-actors.txt
        data_dir: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Play { data_dir, center } => commands::play(&data_dir, &center),
        Commands::Centers {
            data_dir,
            count,
            json,
        } => commands::centers(&data_dir, count, json),
        Commands::Stats { data_dir, json } => commands::stats(&data_dir, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
