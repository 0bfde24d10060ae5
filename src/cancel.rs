// src/cancel.rs
//! Cooperative cancellation for paced walk presentation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

const PACE_SLICE: Duration = Duration::from_millis(25);

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Sleeps up to `pace`, returning early once stopped.
    /// Returns `true` if the token was stopped.
    pub fn wait(&self, pace: Duration) -> bool {
        let deadline = Instant::now() + pace;
        loop {
            if self.is_stopped() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            thread::sleep(PACE_SLICE.min(deadline - now));
        }
    }
}

/// What a paced presentation emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playback {
    pub words: Vec<String>,
    /// True if the token was tripped before playback returned.
    pub stopped: bool,
}

/// Emits `words` one at a time, pausing `pace` after each, until the
/// sequence ends or `token` is stopped.
///
/// The token is checked before every emission and once more when the
/// sequence runs out; a word being emitted is never interrupted.
pub fn play_walk<I, S, F>(words: I, token: &StopToken, pace: Duration, mut emit: F) -> Playback
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(usize, &str),
{
    let mut emitted = Vec::new();
    for word in words {
        if token.is_stopped() {
            return Playback {
                words: emitted,
                stopped: true,
            };
        }
        let word: String = word.into();
        emit(emitted.len(), &word);
        emitted.push(word);
        token.wait(pace);
    }
    Playback {
        words: emitted,
        stopped: token.is_stopped(),
    }
}
