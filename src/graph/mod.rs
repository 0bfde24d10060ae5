// src/graph/mod.rs
pub mod bridge;
pub mod builder;
pub mod generate;
pub mod pagerank;
pub mod path;
pub mod store;
pub mod walk;

pub use bridge::BridgeWords;
pub use pagerank::{PageRankScores, PageRankSettings, RankedWord};
pub use path::ShortestPath;
pub use store::{Edge, WordGraph};
pub use walk::{WalkEnd, Walker};

use std::path::Path;

use crate::error::Result;
use crate::picker::IndexPicker;

impl WordGraph {
    /// Builds a graph from raw text.
    ///
    /// # Errors
    /// Returns error if fewer than two words remain after normalization.
    pub fn from_text(raw: &str) -> Result<Self> {
        builder::build(raw)
    }

    /// Reads `path` and builds a graph from its contents.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or holds fewer than two words.
    pub fn from_file(path: &Path) -> Result<Self> {
        builder::build(&crate::source::read_text(path)?)
    }

    /// Bridge words from `word1` to `word2`.
    ///
    /// # Errors
    /// Returns error if either word is absent.
    pub fn bridge_words(&self, word1: &str, word2: &str) -> Result<BridgeWords> {
        bridge::find(self, word1, word2)
    }

    /// Bridge-word query rendered as a message, including the not-found case.
    #[must_use]
    pub fn query_bridge_words(&self, word1: &str, word2: &str) -> String {
        bridge::describe(self, word1, word2)
    }

    pub fn generate_text<P: IndexPicker + ?Sized>(&self, input: &str, picker: &mut P) -> String {
        generate::generate(self, input, picker)
    }

    /// Shortest path from `word1` to `word2`.
    ///
    /// # Errors
    /// Returns error if either word is absent or the target is unreachable.
    pub fn shortest_path(&self, word1: &str, word2: &str) -> Result<ShortestPath> {
        path::find(self, word1, word2)
    }

    #[must_use]
    pub fn describe_shortest_path(&self, word1: &str, word2: &str) -> String {
        path::describe(self, word1, word2)
    }

    #[must_use]
    pub fn page_rank(&self, word: &str) -> Option<f64> {
        pagerank::rank_of(self, word, &PageRankSettings::default())
    }

    #[must_use]
    pub fn page_rank_with(&self, word: &str, settings: &PageRankSettings) -> Option<f64> {
        pagerank::rank_of(self, word, settings)
    }

    #[must_use]
    pub fn page_ranks(&self, settings: &PageRankSettings) -> PageRankScores {
        pagerank::compute(self, settings)
    }

    /// A lazy walk driven by `picker`.
    pub fn walker<P: IndexPicker>(&self, picker: P) -> Walker<'_, P> {
        Walker::new(self, picker)
    }

    pub fn random_walk<P: IndexPicker>(&self, picker: P) -> Vec<String> {
        walk::random_walk(self, picker)
    }
}
