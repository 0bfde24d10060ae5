//! Weighted word-adjacency graphs built from free text.
//!
//! Consecutive words become directed edges whose weight counts how often the
//! pair occurs. The graph answers bridge-word queries, augments new text with
//! bridge words, finds shortest paths, scores words with `PageRank`, and
//! produces weighted random walks.
//!
//! ```
//! use wordgraph_core::graph::WordGraph;
//!
//! let graph = WordGraph::from_text("to seek out new life and new civilizations").unwrap();
//! assert_eq!(graph.weight("new", "life"), Some(1));
//! ```

pub mod cancel;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod picker;
pub mod reporting;
pub mod source;
pub mod text;
