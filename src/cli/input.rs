// src/cli/input.rs
//! Line input shared by the menu and the walk stop watcher.

use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::{select, unbounded, Receiver, TryRecvError};
use log::debug;

use crate::cancel::StopToken;

/// Spawns a thread forwarding stdin lines into a channel.
///
/// The channel disconnects at end of input.
#[must_use]
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("stdin reader finished");
    });
    rx
}

/// Waits for one line on `input` until `done` disconnects.
///
/// A line that arrives while the walk is still playing trips `token`. The
/// line is returned either way, so a caller can hand back one that arrived
/// after the walk had already finished.
pub fn watch_for_stop(
    input: &Receiver<String>,
    done: &Receiver<()>,
    token: &StopToken,
) -> Option<String> {
    select! {
        recv(input) -> line => {
            let line = line.ok();
            if line.is_some() && !is_finished(done) {
                debug!("stop requested from input");
                token.stop();
            }
            line
        }
        recv(done) -> _ => None,
    }
}

fn is_finished(done: &Receiver<()>) -> bool {
    matches!(done.try_recv(), Err(TryRecvError::Disconnected))
}
