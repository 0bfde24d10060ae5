// src/graph/builder.rs
//! Graph construction: interns tokens and accumulates edge weights.

use std::collections::HashMap;

use log::{debug, info};

use super::store::{Edge, WordGraph};
use crate::error::{GraphError, Result};
use crate::text;

/// Builds a graph from raw text.
///
/// # Errors
/// Returns [`GraphError::InsufficientInput`] when fewer than two words remain
/// after normalization.
pub fn build(raw: &str) -> Result<WordGraph> {
    let tokens = text::normalize(raw);
    debug!("normalized input into {} tokens", tokens.len());
    from_tokens(&tokens)
}

/// Builds a graph from already-normalized tokens.
pub(crate) fn from_tokens(tokens: &[String]) -> Result<WordGraph> {
    if tokens.len() < 2 {
        return Err(GraphError::InsufficientInput {
            tokens: tokens.len(),
        });
    }

    let mut builder = GraphBuilder::default();
    for pair in tokens.windows(2) {
        let src = builder.intern(&pair[0]);
        let dst = builder.intern(&pair[1]);
        builder.link(src, dst);
    }

    let graph = builder.finish();
    info!(
        "built word graph: {} words, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[derive(Default)]
struct GraphBuilder {
    graph: WordGraph,
    /// (source, destination) -> position in the source's adjacency list.
    slots: HashMap<(usize, usize), usize>,
}

impl GraphBuilder {
    fn intern(&mut self, word: &str) -> usize {
        if let Some(id) = self.graph.index.get(word) {
            return *id;
        }
        let id = self.graph.words.len();
        self.graph.words.push(word.to_string());
        self.graph.index.insert(word.to_string(), id);
        self.graph.adjacency.push(Vec::new());
        id
    }

    fn link(&mut self, src: usize, dst: usize) {
        let out = &mut self.graph.adjacency[src];
        match self.slots.get(&(src, dst)) {
            Some(&pos) => out[pos].weight += 1,
            None => {
                self.slots.insert((src, dst), out.len());
                out.push(Edge {
                    target: dst,
                    weight: 1,
                });
            }
        }
    }

    fn finish(self) -> WordGraph {
        self.graph
    }
}
