// src/exit.rs
//! Standardized process exit codes for `wordgraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WordGraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO on output, config).
    Error = 1,
    /// Input could not be turned into a graph (unreadable file, too few words).
    InvalidInput = 2,
    /// A query named an absent word or asked for an unreachable path.
    QueryFailed = 3,
}

impl WordGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit code a library error maps to.
    #[must_use]
    pub fn for_error(err: &GraphError) -> Self {
        match err {
            GraphError::InsufficientInput { .. } | GraphError::Io { .. } => Self::InvalidInput,
            GraphError::WordNotFound { .. } | GraphError::Unreachable { .. } => Self::QueryFailed,
            GraphError::Config(_) => Self::Error,
        }
    }

    /// Exit code for an error surfaced through `anyhow`; anything that is not
    /// a [`GraphError`] is a generic failure.
    #[must_use]
    pub fn for_anyhow(err: &anyhow::Error) -> Self {
        err.downcast_ref::<GraphError>().map_or(Self::Error, Self::for_error)
    }
}

impl Termination for WordGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
