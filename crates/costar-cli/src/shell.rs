//! The interactive game shell.
//!
//! Reads single-line commands from stdin and dispatches them against the
//! universe. All argument validation (counts, numeric bounds) happens here,
//! at the boundary; the query layer only ever sees well-formed requests.

use colored::Colorize;
use costar_data::TitleSet;
use costar_graph::{CenterChange, Connection, Universe};
use std::io::{self, BufRead, Write};

type ActorUniverse = Universe<String, TitleSet>;

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

/// Run the shell until `q` or end of input.
pub fn run(universe: &mut ActorUniverse) -> crate::commands::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n{} ", "costar >".bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        if dispatch(universe, line?.trim()) == Action::Quit {
            break;
        }
    }

    Ok(())
}

fn dispatch(universe: &mut ActorUniverse, line: &str) -> Action {
    if line.is_empty() {
        println!("Enter a command or type 'h' for help.");
        return Action::Continue;
    }

    let (cmd, rest) = line
        .split_once(char::is_whitespace)
        .map(|(cmd, rest)| (cmd, rest.trim()))
        .unwrap_or((line, ""));

    match cmd {
        "q" => {
            println!("Goodbye!");
            return Action::Quit;
        }
        "h" => help(),
        "p" if rest.is_empty() => usage("p <name>"),
        "p" => print_path(universe, rest),
        "u" if rest.is_empty() => usage("u <actor name>"),
        "u" => change_center(universe, rest),
        "d" => match parse_range(rest) {
            Some((low, high)) => list_by_degree(universe, low, high),
            None => usage("d <low> <high>"),
        },
        "s" => match parse_range(rest) {
            Some((low, high)) => list_by_separation(universe, low, high),
            None => usage("s <low> <high>"),
        },
        "c" => match rest.parse::<usize>() {
            Ok(n) => best_centers(universe, n),
            Err(_) => usage("c <n>"),
        },
        "i" => connectivity(universe),
        _ => println!("Unknown command. Enter 'h' to see available commands."),
    }

    Action::Continue
}

/// Two whitespace-separated non-negative integers, or nothing.
fn parse_range(rest: &str) -> Option<(usize, usize)> {
    let mut bounds = rest.split_whitespace();
    let low = bounds.next()?.parse().ok()?;
    let high = bounds.next()?.parse().ok()?;
    match bounds.next() {
        Some(_) => None,
        None => Some((low, high)),
    }
}

fn usage(usage: &str) {
    println!("Usage: {}", usage);
}

fn help() {
    println!("Commands:");
    println!("  p <name>       - find the shortest path from <name> to the current center");
    println!("  u <name>       - change the center of the universe");
    println!("  d <low> <high> - list actors with between <low> and <high> co-stars");
    println!("  s <low> <high> - list actors by separation from the center");
    println!("  c <n>          - find the top <n> best centers of the universe");
    println!("  i              - show connected actor count and average separation");
    println!("  h              - this help");
    println!("  q              - quit");
}

fn current_center(universe: &ActorUniverse) -> String {
    universe.center().cloned().unwrap_or_default()
}

fn format_titles(titles: Option<TitleSet>) -> String {
    titles
        .map(|t| t.into_iter().collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}

fn print_path(universe: &mut ActorUniverse, actor: &str) {
    match universe.path_to_center(&actor.to_string()) {
        Err(e) => println!("{}.", e),
        Ok(Connection::Center) => {
            println!("{} is the center of the universe.", actor.cyan());
        }
        Ok(Connection::Unreached) => {
            println!(
                "{} is not connected to {}",
                actor,
                current_center(universe).cyan()
            );
        }
        Ok(Connection::Chain(hops)) => {
            println!("{}'s number is {}", actor.cyan(), hops.len());
            for hop in hops {
                println!(
                    "{} appeared in [{}] with {}",
                    hop.from,
                    format_titles(hop.label),
                    hop.to
                );
            }
        }
    }
}

fn change_center(universe: &mut ActorUniverse, actor: &str) {
    match universe.set_center(actor.to_string()) {
        Ok(CenterChange::Changed) => {
            println!("{} is now the center of the acting universe.", actor.cyan());
        }
        Ok(CenterChange::AlreadyCenter) => {
            println!("{} is already the center of the universe.", actor);
        }
        Err(e) => println!("{}. Center not changed.", e),
    }
}

fn list_by_degree(universe: &ActorUniverse, low: usize, high: usize) {
    let entries = universe.by_degree(low, high);
    if entries.is_empty() {
        println!("No actors found with degree between {} and {}.", low, high);
        return;
    }

    println!("Actors with degree between {} and {}:", low, high);
    for entry in entries {
        println!("  {} ({} co-stars)", entry.actor, entry.degree);
    }
}

fn list_by_separation(universe: &mut ActorUniverse, low: usize, high: usize) {
    let entries = match universe.by_separation(low, high) {
        Ok(entries) => entries,
        Err(e) => {
            println!("{}.", e);
            return;
        }
    };
    if entries.is_empty() {
        println!(
            "No actors found with separation between {} and {}.",
            low, high
        );
        return;
    }

    println!("Actors with separation between {} and {}:", low, high);
    for entry in entries {
        println!("  {} (separation: {})", entry.actor, entry.separation);
    }
}

fn best_centers(universe: &ActorUniverse, n: usize) {
    println!("Computing best centers... This may take a while.");
    let ranked = universe.best_centers(n);

    println!("Top {} best centers of the universe:", ranked.len());
    for score in ranked {
        println!(
            "  {} (avg separation: {:.4})",
            score.actor.cyan(),
            score.average_separation
        );
    }
}

fn connectivity(universe: &mut ActorUniverse) {
    match universe.connectivity() {
        Err(e) => println!("{}.", e),
        Ok(info) => {
            println!(
                "{} is connected to {} actors.",
                current_center(universe).cyan(),
                info.connected
            );
            println!("Average separation: {:.4}", info.average_separation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costar_graph::{AdjacencyGraph, Graph};

    fn sample() -> ActorUniverse {
        let mut g: AdjacencyGraph<String, TitleSet> = AdjacencyGraph::new();
        for name in ["Alice", "Bob"] {
            g.insert_vertex(name.to_string());
        }
        let titles: TitleSet = ["M1".to_string()].into_iter().collect();
        g.insert_undirected(&"Alice".to_string(), &"Bob".to_string(), titles);
        Universe::new(g)
    }

    #[test]
    fn test_parse_range_accepts_exactly_two_integers() {
        assert_eq!(parse_range("1 5"), Some((1, 5)));
        assert_eq!(parse_range("  2   3 "), Some((2, 3)));
        assert_eq!(parse_range("1"), None);
        assert_eq!(parse_range("1 2 3"), None);
        assert_eq!(parse_range("one two"), None);
        assert_eq!(parse_range("-1 2"), None);
        assert_eq!(parse_range(""), None);
    }

    #[test]
    fn test_quit_stops_the_loop_and_others_continue() {
        let mut universe = sample();

        assert_eq!(dispatch(&mut universe, "q"), Action::Quit);
        assert_eq!(dispatch(&mut universe, ""), Action::Continue);
        assert_eq!(dispatch(&mut universe, "h"), Action::Continue);
        assert_eq!(dispatch(&mut universe, "nonsense"), Action::Continue);
    }

    #[test]
    fn test_commands_survive_bad_arguments() {
        let mut universe = sample();

        for line in ["p", "u", "d", "d 1", "d x y", "s 1 2 3", "c", "c x"] {
            assert_eq!(dispatch(&mut universe, line), Action::Continue);
        }
    }

    #[test]
    fn test_commands_work_without_a_center() {
        let mut universe = sample();

        // Queries that need a center report the error instead of panicking.
        for line in ["p Alice", "s 0 3", "i", "u Alice", "p Alice", "i"] {
            assert_eq!(dispatch(&mut universe, line), Action::Continue);
        }
    }

    #[test]
    fn test_format_titles() {
        let titles: TitleSet = ["B".to_string(), "A".to_string()].into_iter().collect();
        assert_eq!(format_titles(Some(titles)), "A, B");
        assert_eq!(format_titles(None), "");
    }
}
