// src/graph/path.rs
//! Single-pair shortest path (Dijkstra over integer edge weights).

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use log::debug;
use serde::Serialize;

use super::store::WordGraph;
use crate::error::{GraphError, Result};

/// A shortest path and its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Source first, destination last.
    pub words: Vec<String>,
    pub length: usize,
}

impl ShortestPath {
    #[must_use]
    pub fn source(&self) -> &str {
        self.words.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn target(&self) -> &str {
        self.words.last().map_or("", String::as_str)
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The shortest path from \"{}\" to \"{}\" is: {} (length: {})",
            self.source(),
            self.target(),
            self.words.join(" -> "),
            self.length
        )
    }
}

/// Computes the shortest path between two words, case-insensitively.
///
/// # Errors
/// [`GraphError::WordNotFound`] if either word is absent,
/// [`GraphError::Unreachable`] if no directed path exists.
pub fn find(graph: &WordGraph, word1: &str, word2: &str) -> Result<ShortestPath> {
    let [src, dst] = graph.resolve([word1, word2])?;

    if src == dst {
        return Ok(ShortestPath {
            words: vec![graph.word(src).to_string()],
            length: 0,
        });
    }

    let (dist, prev) = dijkstra(graph, src);
    let Some(length) = dist[dst] else {
        return Err(GraphError::Unreachable {
            from: graph.word(src).to_string(),
            to: graph.word(dst).to_string(),
        });
    };

    let mut words = vec![graph.word(dst).to_string()];
    let mut cursor = dst;
    while let Some(p) = prev[cursor] {
        words.push(graph.word(p).to_string());
        cursor = p;
    }
    words.reverse();

    Ok(ShortestPath { words, length })
}

const MISSING_WORDS: &str = "One or both words are not in the graph.";

/// Renders the path or the failure report as a single message. Absent words
/// get one combined report rather than naming each word.
#[must_use]
pub fn describe(graph: &WordGraph, word1: &str, word2: &str) -> String {
    match find(graph, word1, word2) {
        Ok(path) => path.to_string(),
        Err(GraphError::WordNotFound { .. }) => MISSING_WORDS.to_string(),
        Err(e) => e.to_string(),
    }
}

/// Distances (`None` = unreached) and single predecessors from `src`.
fn dijkstra(graph: &WordGraph, src: usize) -> (Vec<Option<usize>>, Vec<Option<usize>>) {
    let n = graph.node_count();
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut queue = BinaryHeap::new();

    dist[src] = Some(0);
    queue.push(Reverse((0usize, src)));
    let mut settled = 0usize;

    while let Some(Reverse((d, u))) = queue.pop() {
        if dist[u].is_some_and(|best| d > best) {
            continue;
        }
        settled += 1;

        for edge in graph.successors(u) {
            let candidate = d + edge.weight;
            if dist[edge.target].map_or(true, |best| candidate < best) {
                dist[edge.target] = Some(candidate);
                prev[edge.target] = Some(u);
                queue.push(Reverse((candidate, edge.target)));
            }
        }
    }

    debug!("dijkstra from \"{}\" settled {settled} entries", graph.word(src));
    (dist, prev)
}
