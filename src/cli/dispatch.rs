// src/cli/dispatch.rs
//! Routes parsed arguments to one-shot handlers or the interactive session.

use std::io;
use std::path::Path;

use anyhow::{anyhow, Result};
use log::info;

use super::args::{Cli, Commands};
use super::handlers::{self, RunContext};
use super::input::spawn_stdin_reader;
use super::menu::{self, Session};
use crate::config::Config;
use crate::error::GraphError;
use crate::exit::WordGraphExit;
use crate::graph::WordGraph;
use crate::picker::RandomPicker;

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if the configuration or input cannot be loaded, or a
/// handler fails.
pub fn execute(cli: Cli) -> Result<WordGraphExit> {
    let config = load_config(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Interactive);

    if command == Commands::Interactive {
        return run_interactive(cli.file.as_deref(), &config);
    }

    let file = cli
        .file
        .ok_or_else(|| anyhow!("no input file given; pass --file <FILE>"))?;
    let ctx = RunContext {
        graph: WordGraph::from_file(&file)?,
        config,
        json: cli.json,
    };
    run_command(&ctx, command)
}

fn run_command(ctx: &RunContext, command: Commands) -> Result<WordGraphExit> {
    match command {
        Commands::Show => handlers::handle_show(ctx),
        Commands::Bridge { word1, word2 } => handlers::handle_bridge(ctx, &word1, &word2),
        Commands::Generate { text, seed } => handlers::handle_generate(ctx, &text, seed),
        Commands::Path { word1, word2 } => handlers::handle_path(ctx, &word1, &word2),
        Commands::Rank { word, top } => handlers::handle_rank(ctx, word.as_deref(), top),
        Commands::Walk { seed, pace_ms } => handlers::handle_walk(ctx, seed, pace_ms),
        Commands::Interactive => {
            Err(anyhow!("Internal error: interactive is not a one-shot command"))
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        return Ok(Config::load());
    };
    match Config::from_path(path)? {
        Some(config) => Ok(config),
        None => Err(GraphError::Config(format!("{} does not exist", path.display())).into()),
    }
}

fn run_interactive(file: Option<&Path>, config: &Config) -> Result<WordGraphExit> {
    let input = spawn_stdin_reader();
    let mut stdout = io::stdout();

    let path = match file {
        Some(path) => path.to_path_buf(),
        None => match menu::prompt_for_file(&input, &mut stdout)? {
            Some(path) => path,
            None => return Ok(WordGraphExit::InvalidInput),
        },
    };

    let graph = match WordGraph::from_file(&path) {
        Ok(graph) => graph,
        Err(e) => {
            println!("{e}");
            println!("Failed to build graph. Exiting.");
            return Ok(WordGraphExit::for_error(&e));
        }
    };
    info!("interactive session over {}", path.display());

    Session::new(&graph, config, &input, RandomPicker::thread_local(), stdout).run()?;
    Ok(WordGraphExit::Success)
}
