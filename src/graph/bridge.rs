// src/graph/bridge.rs
//! Bridge-word lookup: words `b` with edges `word1 -> b` and `b -> word2`.

use std::fmt;

use serde::Serialize;

use super::store::WordGraph;
use crate::error::Result;

/// Outcome of a bridge-word query between two present words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeWords {
    pub from: String,
    pub to: String,
    /// In insertion order of `from`'s outgoing edges.
    pub words: Vec<String>,
}

impl BridgeWords {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for BridgeWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = (&self.from, &self.to);
        match self.words.as_slice() {
            [] => write!(f, "No bridge words from \"{from}\" to \"{to}\"!"),
            [only] => write!(
                f,
                "The bridge words from \"{from}\" to \"{to}\" is: \"{only}\"."
            ),
            [init @ .., last] => {
                let head = init
                    .iter()
                    .map(|w| format!("\"{w}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "The bridge words from \"{from}\" to \"{to}\" are: {head} and \"{last}\"."
                )
            }
        }
    }
}

/// Finds the bridge words between two words, case-insensitively.
///
/// # Errors
/// Returns [`crate::error::GraphError::WordNotFound`] naming each absent word.
pub fn find(graph: &WordGraph, word1: &str, word2: &str) -> Result<BridgeWords> {
    let [src, dst] = graph.resolve([word1, word2])?;
    let words = between(graph, src, dst)
        .into_iter()
        .map(|id| graph.word(id).to_string())
        .collect();

    Ok(BridgeWords {
        from: graph.word(src).to_string(),
        to: graph.word(dst).to_string(),
        words,
    })
}

/// Renders the query result or the not-found report as a single message.
#[must_use]
pub fn describe(graph: &WordGraph, word1: &str, word2: &str) -> String {
    match find(graph, word1, word2) {
        Ok(bridges) => bridges.to_string(),
        Err(e) => e.to_string(),
    }
}

/// Bridge vertex ids between two resolved vertices.
pub(crate) fn between(graph: &WordGraph, src: usize, dst: usize) -> Vec<usize> {
    graph
        .successors(src)
        .iter()
        .map(|e| e.target)
        .filter(|&mid| graph.edge_weight(mid, dst).is_some())
        .collect()
}
