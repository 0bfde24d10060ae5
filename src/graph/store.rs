// src/graph/store.rs
//! The word graph structure and its read-only accessors.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::text;

/// An outgoing edge: destination vertex id and occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: usize,
    pub weight: usize,
}

/// Directed word-adjacency graph.
///
/// Vertices are dense ids assigned in order of first appearance. Each vertex
/// owns its outgoing edges in insertion order; weights are always `>= 1`.
/// The graph is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGraph {
    pub(crate) words: Vec<String>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) adjacency: Vec<Vec<Edge>>,
}

impl WordGraph {
    /// An empty graph. Only useful as the degenerate input of queries;
    /// text-built graphs always hold at least one edge.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Looks up a stored word exactly as given.
    #[must_use]
    pub fn id(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.id(&text::fold(word)).is_some()
    }

    /// The word stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    #[must_use]
    pub fn word(&self, id: usize) -> &str {
        &self.words[id]
    }

    /// All words in vertex-id order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Outgoing edges of `id` in insertion order.
    #[must_use]
    pub fn successors(&self, id: usize) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of outgoing edge weights; zero for sinks.
    #[must_use]
    pub fn out_weight(&self, id: usize) -> usize {
        self.successors(id).iter().map(|e| e.weight).sum()
    }

    /// Weight of the edge `from -> to`, case-insensitive.
    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<usize> {
        let src = self.id(&text::fold(from))?;
        let dst = self.id(&text::fold(to))?;
        self.edge_weight(src, dst)
    }

    pub(crate) fn edge_weight(&self, src: usize, dst: usize) -> Option<usize> {
        self.successors(src)
            .iter()
            .find(|e| e.target == dst)
            .map(|e| e.weight)
    }

    /// Every edge as `(source, destination, weight)`, grouped by source id.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(src, out)| {
            out.iter()
                .map(move |e| (self.word(src), self.word(e.target), e.weight))
        })
    }

    /// Folds each query word and resolves it to a vertex id.
    ///
    /// # Errors
    /// Returns [`GraphError::WordNotFound`] naming every absent word.
    pub(crate) fn resolve<const N: usize>(&self, words: [&str; N]) -> Result<[usize; N]> {
        let folded = words.map(text::fold);
        let mut ids = [0; N];
        let mut missing = Vec::new();

        for (slot, word) in ids.iter_mut().zip(&folded) {
            match self.id(word) {
                Some(id) => *slot = id,
                None => missing.push(word.clone()),
            }
        }

        if missing.is_empty() {
            Ok(ids)
        } else {
            Err(GraphError::WordNotFound { missing })
        }
    }
}
