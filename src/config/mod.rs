// src/config/mod.rs
pub mod types;

pub use self::types::{Config, WalkConfig};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, warn};

use crate::error::{GraphError, Result};

pub const CONFIG_FILE: &str = "wordgraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `wordgraph.toml` from the working directory, falling back to
    /// defaults when it is missing or malformed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_or_default(Path::new(CONFIG_FILE))
    }

    /// Like [`Config::load`] for an explicit path.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Strictly reads and validates a config file. `Ok(None)` if it does not exist.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, malformed, or out of range.
    pub fn from_path(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(GraphError::Io {
                    source,
                    path: path.to_path_buf(),
                })
            }
        };
        Self::parse_toml(&content).map(Some)
    }

    /// Parses and validates TOML content.
    ///
    /// # Errors
    /// Returns error on syntax errors or invalid values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if a PageRank parameter is out of range.
    pub fn validate(&self) -> Result<()> {
        self.pagerank.validate()
    }
}
