// src/source.rs
//! Loading raw input text.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{GraphError, Result};

/// Reads a text file. Invalid UTF-8 sequences are replaced, not rejected;
/// they are stripped by normalization anyway.
///
/// # Errors
/// Returns [`GraphError::Io`] carrying the path if the file cannot be read.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
