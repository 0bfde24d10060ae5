// src/cli/mod.rs
//! CLI command handlers and the interactive session.

pub mod args;
pub mod dispatch;
pub mod handlers;
pub mod input;
pub mod menu;
pub mod walk;

pub use args::{Cli, Commands};
