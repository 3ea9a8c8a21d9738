//! Testing utilities for pmc
//!
//! Fixtures for building prompts in memory and on disk, and an output
//! writer that records status messages.
//!
//! Only available when compiled with `cfg(test)`.

use crate::commands::Context;
use crate::config::Settings;
use crate::prompt::Prompt;
use crate::ui::output::{MessageLevel, OutputWriter};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Temporary prompt directory that is removed on drop
///
/// # Examples
/// ```ignore
/// let dir = PromptDir::new();
/// dir.write("review.md", "Review this diff");
/// let prompts = load_from_dirs(&[dir.path()], &LoadOptions::default()).unwrap();
/// ```
pub struct PromptDir {
    dir: TempDir,
}

impl PromptDir {
    /// Create an empty prompt directory
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp prompt dir"),
        }
    }

    /// Root of the directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a text file at `relative`, creating parent directories
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        self.write_bytes(relative, content.as_bytes())
    }

    /// Write raw bytes at `relative`, creating parent directories
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_bytes(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write prompt file");
        path
    }
}

/// Command context reading prompts from `dir` only, with default settings
#[must_use]
pub fn context_for(dir: &PromptDir) -> Context {
    Context::new(
        Settings::default(),
        PathBuf::from("/cfg/settings.toml"),
        &[dir.path().to_path_buf()],
    )
}

/// In-memory prompt with the given name and body
#[must_use]
pub fn prompt(name: &str, content: &str) -> Prompt {
    Prompt {
        name: name.to_string(),
        path: PathBuf::from(format!("/prompts/{name}.md")),
        content: content.to_string(),
        ..Prompt::default()
    }
}

/// In-memory prompt carrying tags
#[must_use]
pub fn tagged_prompt(name: &str, content: &str, tags: &[&str]) -> Prompt {
    Prompt {
        tags: tags.iter().map(ToString::to_string).collect(),
        ..prompt(name, content)
    }
}

/// In-memory prompts named after `names`, each with a short body
#[must_use]
pub fn prompts(names: &[&str]) -> Vec<Prompt> {
    names
        .iter()
        .map(|name| prompt(name, &format!("Body of {name}")))
        .collect()
}

/// Output writer that keeps every message for later assertions
#[derive(Default)]
pub struct RecordingWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl RecordingWriter {
    /// Messages written so far, oldest first
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Text of the messages written at `level`
    pub fn texts(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text)
            .collect()
    }
}

impl OutputWriter for RecordingWriter {
    fn message(&self, level: MessageLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}
