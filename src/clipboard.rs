//! System clipboard access

use thiserror::Error;

/// Errors from the system clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (no display server, headless session)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    /// The clipboard rejected the text
    #[error("Clipboard error: {0}")]
    Write(#[source] arboard::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Replace the clipboard contents with `text`
///
/// # Errors
///
/// Returns `ClipboardError::Unavailable` when the clipboard cannot be opened
/// and `ClipboardError::Write` when setting the text fails.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard.set_text(text).map_err(ClipboardError::Write)?;
    log::info!("Copied {} bytes to the clipboard", text.len());
    Ok(())
}
