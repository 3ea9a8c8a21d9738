//! Status message output
//!
//! Prompt text goes to stdout so it can be piped. Everything addressed to
//! the person at the terminal goes through an [`OutputWriter`], which the
//! CLI backs with stderr.

use colored::Colorize;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    /// Dimmed, secondary information
    Info,
}

/// Sink for status messages
///
/// # Examples
///
/// ```
/// use pmc::ui::output::{OutputWriter, StderrWriter};
///
/// let output = StderrWriter::new();
/// output.success("Wrote default config");
/// output.info("Selection cancelled.");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a message at the given level
    fn message(&self, level: MessageLevel, message: &str);

    /// Write a normal message
    fn write(&self, message: &str) {
        self.message(MessageLevel::Normal, message);
    }

    /// Write an error message
    fn error(&self, message: &str) {
        self.message(MessageLevel::Error, message);
    }

    /// Write a success message
    fn success(&self, message: &str) {
        self.message(MessageLevel::Success, message);
    }

    /// Write a warning message
    fn warning(&self, message: &str) {
        self.message(MessageLevel::Warning, message);
    }

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str) {
        self.message(MessageLevel::Info, message);
    }
}

/// CLI implementation, colored messages on stderr
pub struct StderrWriter;

impl StderrWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StderrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StderrWriter {
    fn message(&self, level: MessageLevel, message: &str) {
        eprintln!("{}", styled(level, message));
    }
}

/// Apply the color and marker for `level`
#[must_use]
pub fn styled(level: MessageLevel, message: &str) -> String {
    match level {
        MessageLevel::Normal => message.to_string(),
        MessageLevel::Error => format!("{} {}", "error:".red().bold(), message),
        MessageLevel::Success => format!("{} {}", "✓".green(), message),
        MessageLevel::Warning => format!("{} {}", "warning:".yellow(), message),
        MessageLevel::Info => message.dimmed().to_string(),
    }
}
