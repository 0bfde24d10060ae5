use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordgraph", version, about = "Explore word adjacency graphs built from text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Input text file (prompted for in interactive mode when omitted)
    #[arg(long, short, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Configuration file (defaults to ./wordgraph.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Emit results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// Increase log verbosity (-v warn, -vv info, -vvv debug)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print every word with its outgoing edges
    Show,
    /// Find bridge words between two words
    Bridge { word1: String, word2: String },
    /// Insert bridge words into new text
    Generate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Shortest path between two words
    Path { word1: String, word2: String },
    /// PageRank of a word, or the top-ranked words
    Rank {
        word: Option<String>,
        #[arg(long, default_value = "10")]
        top: usize,
    },
    /// Weighted random walk; press ENTER to stop
    Walk {
        #[arg(long)]
        seed: Option<u64>,
        /// Delay between words (overrides the config)
        #[arg(long)]
        pace_ms: Option<u64>,
    },
    /// Menu-driven session (default)
    Interactive,
}
