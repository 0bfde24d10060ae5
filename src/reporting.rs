// src/reporting.rs
//! Text and JSON rendering of query results.

use std::fmt::Write as _;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::graph::{RankedWord, WordGraph};

/// One line per source word: `src -> dst (weight: n), ...`.
#[must_use]
pub fn graph_listing(graph: &WordGraph) -> String {
    if graph.edge_count() == 0 {
        return "The graph is empty.".to_string();
    }

    let mut out = String::from("Directed Graph Representation:\n");
    for (src, word) in graph.words().enumerate() {
        let edges = graph.successors(src);
        if edges.is_empty() {
            continue;
        }
        let targets: Vec<String> = edges
            .iter()
            .map(|e| format!("{} (weight: {})", graph.word(e.target), e.weight))
            .collect();
        let _ = writeln!(out, "{word} -> {}", targets.join(", "));
    }
    out.truncate(out.trim_end().len());
    out
}

#[must_use]
pub fn rank_line(word: &str, score: f64) -> String {
    format!("PageRank of \"{word}\": {score:.4}")
}

/// Numbered `rank. word score` rows.
#[must_use]
pub fn ranked_table(rows: &[RankedWord]) -> String {
    let width = rows.iter().map(|r| r.word.len()).max().unwrap_or(0);
    rows.iter()
        .enumerate()
        .map(|(i, r)| format!("{:>4}. {:<width$}  {:.4}", i + 1, r.word, r.score))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON for any serializable result.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Prints a successful result line.
pub fn print_ok(message: &str) {
    println!("{}", message.green());
}

/// Prints a recoverable query miss (absent word, no path, no bridges).
pub fn print_miss(message: &str) {
    println!("{}", message.yellow());
}
