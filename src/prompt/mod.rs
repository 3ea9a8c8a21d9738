//! Prompt files and their metadata
//!
//! A prompt is a small text file found under one of the configured prompt
//! directories. Its name is the file stem; optional YAML front matter
//! supplies tags, a summary and aliases.

pub mod error;
pub mod front_matter;
mod loader;
mod resolve;

pub use error::PromptError;
pub use front_matter::FrontMatter;
pub use loader::{LoadOptions, load_from_dirs};
pub use resolve::{normalize_name, resolve_by_name};

use crate::search::Candidate;
use std::path::{Path, PathBuf};

/// Result type for prompt operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// A single prompt loaded from disk
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Prompt {
    /// File stem, used as the display and lookup name
    pub name: String,
    /// Path the file was discovered at
    pub path: PathBuf,
    /// Body text with any front matter removed
    pub content: String,
    /// Parsed front matter, when the file has a usable block
    pub front_matter: Option<FrontMatter>,
    /// Tags from the front matter
    pub tags: Vec<String>,
}

impl Prompt {
    /// Build a prompt from a file path and its full text
    #[must_use]
    pub fn parse(path: impl AsRef<Path>, text: &str) -> Self {
        let path = path.as_ref();
        let (front_matter, content) = front_matter::parse(text);
        let tags = front_matter.as_ref().map(FrontMatter::tags).unwrap_or_default();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            name,
            path: path.to_path_buf(),
            content,
            front_matter,
            tags,
        }
    }

    /// The `summary` front matter field
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.front_matter.as_ref()?.string("summary")
    }

    /// Alternative names from the `aliases` front matter field
    #[must_use]
    pub fn aliases(&self) -> Vec<String> {
        self.front_matter
            .as_ref()
            .map(|front| front.list("aliases"))
            .unwrap_or_default()
    }
}

impl Candidate for Prompt {
    fn name(&self) -> &str {
        &self.name
    }
}
