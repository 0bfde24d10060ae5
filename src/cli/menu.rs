// src/cli/menu.rs
//! Menu-driven interactive session.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use crossbeam_channel::Receiver;

use crate::config::Config;
use crate::graph::WordGraph;
use crate::picker::IndexPicker;
use crate::reporting;

use super::walk;

const MENU: &str = "\n--- Graph Operations Menu ---\n\
1. Show Directed Graph\n\
2. Query Bridge Words\n\
3. Generate New Text\n\
4. Calculate Shortest Path\n\
5. Calculate PageRank\n\
6. Random Walk\n\
0. Exit";

/// Drives the menu over lines from `input`, writing to `out`.
pub struct Session<'a, P, W> {
    graph: &'a WordGraph,
    config: &'a Config,
    input: &'a Receiver<String>,
    picker: P,
    out: W,
    /// A line already read off `input` that the next prompt consumes first.
    pending: Option<String>,
}

impl<'a, P: IndexPicker, W: Write> Session<'a, P, W> {
    pub fn new(
        graph: &'a WordGraph,
        config: &'a Config,
        input: &'a Receiver<String>,
        picker: P,
        out: W,
    ) -> Self {
        Self {
            graph,
            config,
            input,
            picker,
            out,
            pending: None,
        }
    }

    /// Runs until the user chooses `0` or input ends.
    ///
    /// # Errors
    /// Returns error if writing output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            match line.trim().parse::<u8>() {
                Ok(0) => {
                    writeln!(self.out, "Exiting program.")?;
                    return Ok(());
                }
                Ok(choice @ 1..=6) => {
                    if !self.dispatch(choice)? {
                        return Ok(());
                    }
                }
                _ => writeln!(self.out, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Returns `false` when input ended mid-command.
    fn dispatch(&mut self, choice: u8) -> Result<bool> {
        match choice {
            1 => {
                writeln!(self.out, "{}", reporting::graph_listing(self.graph))?;
                Ok(true)
            }
            2 => self.bridge(),
            3 => self.generate(),
            4 => self.shortest_path(),
            5 => self.page_rank(),
            _ => self.random_walk(),
        }
    }

    fn bridge(&mut self) -> Result<bool> {
        let Some((w1, w2)) = self.two_words("Enter word1: ", "Enter word2: ")? else {
            return Ok(false);
        };
        writeln!(self.out, "{}", self.graph.query_bridge_words(&w1, &w2))?;
        Ok(true)
    }

    fn generate(&mut self) -> Result<bool> {
        let Some(text) = self.prompt("Enter new text: ")? else {
            return Ok(false);
        };
        let generated = self.graph.generate_text(&text, &mut self.picker);
        writeln!(self.out, "Generated Text: {generated}")?;
        Ok(true)
    }

    fn shortest_path(&mut self) -> Result<bool> {
        let Some((from, to)) = self.two_words("Enter start word: ", "Enter end word: ")? else {
            return Ok(false);
        };
        writeln!(self.out, "{}", self.graph.describe_shortest_path(&from, &to))?;
        Ok(true)
    }

    fn page_rank(&mut self) -> Result<bool> {
        let Some(word) = self.prompt("Enter word to calculate PageRank for: ")? else {
            return Ok(false);
        };
        let word = word.trim();
        match self.graph.page_rank_with(word, &self.config.pagerank) {
            Some(score) => writeln!(self.out, "{}", reporting::rank_line(word, score))?,
            None => writeln!(self.out, "No \"{}\" in the graph!", word.to_lowercase())?,
        }
        Ok(true)
    }

    fn random_walk(&mut self) -> Result<bool> {
        let config = self.config;
        let settings = &config.walk;
        let outcome = walk::present(
            self.graph,
            &mut self.picker,
            settings,
            settings.pace(),
            self.input,
            &mut self.out,
        )?;
        walk::save(&outcome.playback, settings, &mut self.out)?;
        self.pending = outcome.unread;
        Ok(true)
    }

    fn two_words(&mut self, first: &str, second: &str) -> Result<Option<(String, String)>> {
        let Some(a) = self.prompt(first)? else {
            return Ok(None);
        };
        let Some(b) = self.prompt(second)? else {
            return Ok(None);
        };
        Ok(Some((a.trim().to_string(), b.trim().to_string())))
    }

    /// Writes `label` and waits for the next line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        Ok(self.input.recv().ok())
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Asks for the input file when none was given on the command line.
///
/// # Errors
/// Returns error if writing the prompt fails.
pub fn prompt_for_file<W: Write>(
    input: &Receiver<String>,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    write!(out, "Enter text file path: ")?;
    out.flush()?;
    Ok(input
        .recv()
        .ok()
        .map(|line| Path::new(line.trim()).to_path_buf()))
}
