use std::time::Instant;

use checkers_core::perft::perft;
use checkers_core::rules::Rules;
use colored::Colorize;
use num_format::{Locale, ToFormattedString};

/// Runs perft for every depth from 1 to `max_depth` and prints one row per
/// depth.
pub fn run(rules: &Rules, max_depth: u32) {
    println!(
        "{}",
        format!("{:>5} | {:>15} | {:>9} | {:>13}", "depth", "nodes", "time", "nps").bright_cyan()
    );
    println!("{}", "-".repeat(52));

    let mut total_nodes: u64 = 0;
    let start = Instant::now();
    for depth in 1..=max_depth {
        let depth_start = Instant::now();
        let nodes = perft(rules, depth);
        let elapsed = depth_start.elapsed().as_secs_f64();
        total_nodes += nodes;

        println!(
            "{:>5} | {:>15} | {:>8.3}s | {:>13}",
            depth,
            nodes.to_formatted_string(&Locale::en),
            elapsed,
            nodes_per_second(nodes, elapsed).to_formatted_string(&Locale::en),
        );
    }

    let elapsed = start.elapsed().as_secs_f64();
    println!("{}", "-".repeat(52));
    println!(
        "{} {} nodes in {:.3}s ({} nps)",
        "Total:".bright_green(),
        total_nodes.to_formatted_string(&Locale::en),
        elapsed,
        nodes_per_second(total_nodes, elapsed).to_formatted_string(&Locale::en),
    );
}

fn nodes_per_second(nodes: u64, secs: f64) -> u64 {
    if secs > 0.0 {
        (nodes as f64 / secs).round() as u64
    } else {
        0
    }
}
