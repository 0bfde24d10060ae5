// src/cli/walk.rs
//! Paced, stoppable random-walk presentation.

use std::fs;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::{bounded, Receiver};
use log::info;

use crate::cancel::{play_walk, Playback, StopToken};
use crate::config::WalkConfig;
use crate::graph::WordGraph;
use crate::picker::IndexPicker;

use super::input::watch_for_stop;

/// A presented walk and any input line read after it had finished.
#[derive(Debug)]
pub struct WalkOutcome {
    pub playback: Playback,
    /// A line the stop watcher took after the walk ended on its own; it
    /// belongs to whoever reads input next.
    pub unread: Option<String>,
}

/// Streams a walk to `out`, one word per `pace`, until it ends or a line
/// arrives on `input`.
///
/// # Errors
/// Returns error if writing to `out` fails.
pub fn present<P, W>(
    graph: &WordGraph,
    picker: P,
    settings: &WalkConfig,
    pace: Duration,
    input: &Receiver<String>,
    out: &mut W,
) -> Result<WalkOutcome>
where
    P: IndexPicker,
    W: Write,
{
    writeln!(out, "Starting random walk. Press ENTER at any time to stop.")?;
    out.flush()?;

    let token = StopToken::new();
    let per_line = settings.words_per_line.max(1);
    let mut write_err = None;
    let (done_tx, done_rx) = bounded::<()>(0);

    let (playback, taken) = thread::scope(|s| {
        let watcher = s.spawn(|| watch_for_stop(input, &done_rx, &token));

        let playback = play_walk(graph.walker(picker), &token, pace, |i, word| {
            if write_err.is_some() {
                return;
            }
            if let Err(e) = emit_word(out, i, word, per_line) {
                write_err = Some(e);
                token.stop();
            }
        });
        // Disconnecting `done` releases the watcher.
        drop(done_tx);
        (playback, watcher.join().unwrap_or_default())
    });

    if let Some(e) = write_err {
        return Err(e.into());
    }
    if playback.stopped {
        writeln!(out, "\nStopping random walk...")?;
    }
    writeln!(out, "\nRandom walk finished or stopped.")?;
    info!(
        "walk emitted {} words (stopped: {})",
        playback.words.len(),
        playback.stopped
    );

    let unread = taken.filter(|_| !playback.stopped);
    Ok(WalkOutcome { playback, unread })
}

fn emit_word<W: Write>(out: &mut W, index: usize, word: &str, per_line: usize) -> io::Result<()> {
    write!(out, "{word} ")?;
    if (index + 1) % per_line == 0 {
        writeln!(out)?;
    }
    out.flush()
}

const SAVED_PREFIX: &str = "Random Walk Path:";

/// Saves the emitted words, space-separated after a `Random Walk Path:`
/// label, to the configured output file.
/// Reports the outcome on `out` rather than failing.
///
/// # Errors
/// Returns error only if writing the report to `out` fails.
pub fn save<W: Write>(playback: &Playback, settings: &WalkConfig, out: &mut W) -> Result<()> {
    let Some(path) = settings.output_path() else {
        return Ok(());
    };
    let line = format!("{SAVED_PREFIX} {}", playback.words.join(" "));
    match fs::write(path, line.trim_end()) {
        Ok(()) => writeln!(out, "Random walk saved to {}", path.display())?,
        Err(e) => writeln!(out, "Failed saving file: {e}")?,
    }
    Ok(())
}
