//! Prompt loading and lookup errors
//!
//! Returned while walking prompt directories, reading prompt files, or
//! resolving a prompt by name.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the prompt item source
#[derive(Debug, Error)]
pub enum PromptError {
    /// A directory could not be walked
    #[error("Failed to scan {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A prompt file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An ignore pattern is not a valid glob
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Name lookup was given an empty query
    #[error("Prompt name cannot be empty")]
    EmptyName,

    /// No prompt carries the requested name or alias
    #[error("Prompt '{0}' not found")]
    NotFound(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
