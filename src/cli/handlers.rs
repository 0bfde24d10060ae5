// src/cli/handlers.rs
use std::io;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cancel::Playback;
use crate::config::Config;
use crate::error::GraphError;
use crate::exit::WordGraphExit;
use crate::graph::{WalkEnd, WordGraph};
use crate::picker::{IndexPicker, RandomPicker};
use crate::reporting::{self, print_miss, print_ok};

use super::input::spawn_stdin_reader;
use super::walk;

/// Everything a one-shot command needs.
pub struct RunContext {
    pub graph: WordGraph,
    pub config: Config,
    pub json: bool,
}

#[derive(Serialize)]
struct EdgeRow<'a> {
    from: &'a str,
    to: &'a str,
    weight: usize,
}

#[derive(Serialize)]
struct Generated<'a> {
    input: &'a str,
    output: String,
}

#[derive(Serialize)]
struct WalkReport<'a> {
    words: &'a [String],
    stopped: bool,
    end: Option<WalkEnd>,
}

#[derive(Serialize)]
struct WordRank<'a> {
    word: &'a str,
    score: f64,
}

fn picker_for(seed: Option<u64>) -> Box<dyn IndexPicker> {
    match seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::thread_local()),
    }
}

/// Reports a recoverable query miss; anything else propagates.
fn miss_or_fail(err: GraphError, json: bool) -> Result<WordGraphExit> {
    if !err.is_query_miss() {
        return Err(err.into());
    }
    if json {
        println!("{}", reporting::to_json(&serde_json::json!({ "error": err.to_string() }))?);
    } else {
        print_miss(&err.to_string());
    }
    Ok(WordGraphExit::for_error(&err))
}

/// Handles the show command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_show(ctx: &RunContext) -> Result<WordGraphExit> {
    if ctx.json {
        let rows: Vec<EdgeRow> = ctx
            .graph
            .edges()
            .map(|(from, to, weight)| EdgeRow { from, to, weight })
            .collect();
        println!("{}", reporting::to_json(&rows)?);
    } else {
        println!("{}", reporting::graph_listing(&ctx.graph));
    }
    Ok(WordGraphExit::Success)
}

/// Handles the bridge command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_bridge(ctx: &RunContext, word1: &str, word2: &str) -> Result<WordGraphExit> {
    let bridges = match ctx.graph.bridge_words(word1, word2) {
        Ok(bridges) => bridges,
        Err(e) => return miss_or_fail(e, ctx.json),
    };
    if ctx.json {
        println!("{}", reporting::to_json(&bridges)?);
    } else if bridges.is_empty() {
        print_miss(&bridges.to_string());
    } else {
        print_ok(&bridges.to_string());
    }
    Ok(WordGraphExit::Success)
}

/// Handles the generate command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_generate(
    ctx: &RunContext,
    words: &[String],
    seed: Option<u64>,
) -> Result<WordGraphExit> {
    let input = words.join(" ");
    let mut picker = picker_for(seed);
    let output = ctx.graph.generate_text(&input, &mut *picker);
    if ctx.json {
        println!("{}", reporting::to_json(&Generated { input: &input, output })?);
    } else {
        println!("{} {output}", "Generated Text:".bold());
    }
    Ok(WordGraphExit::Success)
}

/// Handles the path command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_path(ctx: &RunContext, word1: &str, word2: &str) -> Result<WordGraphExit> {
    match ctx.graph.shortest_path(word1, word2) {
        Ok(path) if ctx.json => println!("{}", reporting::to_json(&path)?),
        Ok(path) => print_ok(&path.to_string()),
        Err(e) => return miss_or_fail(e, ctx.json),
    }
    Ok(WordGraphExit::Success)
}

/// Handles the rank command: one word, or the `top` highest-ranked words.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_rank(ctx: &RunContext, word: Option<&str>, top: usize) -> Result<WordGraphExit> {
    let scores = ctx.graph.page_ranks(&ctx.config.pagerank);

    let Some(word) = word else {
        let mut ranked = scores.ranked(&ctx.graph);
        ranked.truncate(top);
        if ctx.json {
            println!("{}", reporting::to_json(&ranked)?);
        } else {
            println!("{}", reporting::ranked_table(&ranked));
        }
        return Ok(WordGraphExit::Success);
    };

    match scores.get(&ctx.graph, word) {
        Some(score) if ctx.json => println!("{}", reporting::to_json(&WordRank { word, score })?),
        Some(score) => print_ok(&reporting::rank_line(word, score)),
        None => {
            let missing = vec![crate::text::fold(word)];
            return miss_or_fail(GraphError::WordNotFound { missing }, ctx.json);
        }
    }
    Ok(WordGraphExit::Success)
}

/// Handles the walk command. In JSON mode the walk is computed without
/// pacing and printed at once, with the reason it ended.
///
/// # Errors
/// Returns error if writing output fails.
pub fn handle_walk(
    ctx: &RunContext,
    seed: Option<u64>,
    pace_ms: Option<u64>,
) -> Result<WordGraphExit> {
    let mut picker = picker_for(seed);
    let settings = &ctx.config.walk;

    if ctx.json {
        let mut walker = ctx.graph.walker(&mut *picker);
        let words: Vec<String> = walker.by_ref().map(str::to_string).collect();
        let end = walker.end();
        let playback = Playback {
            words,
            stopped: false,
        };
        walk::save(&playback, settings, &mut io::stderr())?;
        let report = WalkReport {
            words: &playback.words,
            stopped: playback.stopped,
            end,
        };
        println!("{}", reporting::to_json(&report)?);
        return Ok(WordGraphExit::Success);
    }

    let pace = pace_ms.map_or_else(|| settings.pace(), std::time::Duration::from_millis);
    let input = spawn_stdin_reader();
    let mut stdout = io::stdout();
    let outcome = walk::present(&ctx.graph, &mut *picker, settings, pace, &input, &mut stdout)?;
    walk::save(&outcome.playback, settings, &mut stdout)?;
    Ok(WordGraphExit::Success)
}
