//! UI error types

use thiserror::Error;

/// Errors that can occur while selecting a prompt
#[derive(Debug, Error)]
pub enum UiError {
    /// A selector was asked to start with nothing to show
    #[error("No prompts available to select from")]
    NoCandidates,

    /// The numbered fallback received an answer it could not map to a prompt
    #[error("Invalid selection")]
    InvalidSelection,

    /// The interactive terminal could not be set up or driven
    #[error("Terminal error: {0}")]
    Terminal(std::io::Error),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
