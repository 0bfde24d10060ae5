// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Not enough words to build a graph (found {tokens}, need at least 2).")]
    InsufficientInput { tokens: usize },

    #[error("No {} in the graph!", quote_all(.missing))]
    WordNotFound { missing: Vec<String> },

    #[error("\"{from}\" and \"{to}\" are unreachable.")]
    Unreachable { from: String, to: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// True for the recoverable query outcomes (absent words, no path).
    #[must_use]
    pub fn is_query_miss(&self) -> bool {
        matches!(self, Self::WordNotFound { .. } | Self::Unreachable { .. })
    }
}

// Allow `?` on std::io::Error by converting to GraphError::Io with unknown path.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(e: toml::de::Error) -> Self {
        GraphError::Config(e.to_string())
    }
}

fn quote_all(words: &[String]) -> String {
    words
        .iter()
        .map(|w| format!("\"{w}\""))
        .collect::<Vec<_>>()
        .join(" and ")
}
