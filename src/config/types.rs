use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::graph::PageRankSettings;

/// Contents of `wordgraph.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pagerank: PageRankSettings,
    #[serde(default)]
    pub walk: WalkConfig,
}

/// Presentation settings for random walks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Delay after each emitted word.
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,
    #[serde(default = "default_words_per_line")]
    pub words_per_line: usize,
    /// Where the emitted words are saved; empty disables saving.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            pace_ms: default_pace_ms(),
            words_per_line: default_words_per_line(),
            output: default_output(),
        }
    }
}

impl WalkConfig {
    #[must_use]
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }

    #[must_use]
    pub fn output_path(&self) -> Option<&PathBuf> {
        if self.output.as_os_str().is_empty() {
            None
        } else {
            Some(&self.output)
        }
    }
}

const fn default_pace_ms() -> u64 { 1000 }
const fn default_words_per_line() -> usize { 10 }
fn default_output() -> PathBuf { PathBuf::from("random_walk_output.txt") }
