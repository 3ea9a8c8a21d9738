//! pmc - a prompt library manager
//!
//! Loads a directory tree of prompt files, ranks them against a fuzzy query,
//! and lets the user pick one interactively or by name. The chosen prompt's
//! body is printed for piping into other tools.

use std::path::PathBuf;
use thiserror::Error;

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod completions;
pub mod config;
pub mod prompt;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PmError {
    /// Prompt loading or lookup error
    #[error(transparent)]
    Prompt(#[from] prompt::PromptError),
    /// Selector error
    #[error(transparent)]
    Ui(#[from] ui::UiError),
    /// Clipboard error
    #[error(transparent)]
    Clipboard(#[from] clipboard::ClipboardError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No prompt directory yielded any prompt
    #[error("no prompts found; prompt dirs: {}; config: {}", format_dirs(.dirs), .config.display())]
    NoPrompts { dirs: Vec<PathBuf>, config: PathBuf },
    /// Prompts exist but none matches the query
    #[error("no prompts found for query {query:?}; prompt dirs: {}; config: {}", format_dirs(.dirs), .config.display())]
    NoMatch {
        query: String,
        dirs: Vec<PathBuf>,
        config: PathBuf,
    },
}

/// Result type for the command layer
pub type Result<T> = std::result::Result<T, PmError>;

/// Comma separated directory list for messages
#[must_use]
pub fn format_dirs(dirs: &[PathBuf]) -> String {
    if dirs.is_empty() {
        return "(none configured)".to_string();
    }
    dirs.iter()
        .map(|dir| dir.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
