//! Corpus error module.
//!
//! This module defines error types that may occur while reading corpus files.
//! Malformed records are not errors; the loader skips and counts them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during corpus ingestion.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Error when the corpus file is missing.
    #[error("Corpus file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when reading the corpus fails midway.
    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
}
