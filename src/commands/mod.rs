//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and a [`Context`]. Prompt text and listings go to the `out` writer
//! (stdout in the binary); notices go through an [`OutputWriter`].

pub mod cat;
pub mod completion;
pub mod config;
pub mod list;
pub mod mesh;
pub mod pick;
pub mod search;

// Re-export execute functions for convenience
pub use cat::execute as cat;
pub use completion::execute as completion;
pub use config::execute as config;
pub use list::execute as list;
pub use mesh::execute as mesh;
pub use pick::execute as pick;
pub use search::execute as search;

use crate::config::{Settings, expand_tilde};
use crate::prompt::{Prompt, load_from_dirs};
use crate::ui::{OutputWriter, Outcome};
use crate::{PmError, Result, clipboard};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings and prompt directories in effect for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub config_path: PathBuf,
    dirs: Vec<PathBuf>,
}

impl Context {
    /// Build a context; a non-empty `dir_override` replaces the configured
    /// prompt directories
    #[must_use]
    pub fn new(settings: Settings, config_path: PathBuf, dir_override: &[PathBuf]) -> Self {
        let dirs = if dir_override.is_empty() {
            settings.prompt_dirs()
        } else {
            dir_override
                .iter()
                .map(|dir| expand_tilde(&dir.to_string_lossy()))
                .collect()
        };
        Self {
            settings,
            config_path,
            dirs,
        }
    }

    /// Load settings from the standard location
    ///
    /// # Errors
    ///
    /// Returns `PmError::Config` if the config directory cannot be determined.
    pub fn load(dir_override: &[PathBuf]) -> Result<Self> {
        let config_path = Settings::config_path()?;
        let settings = Settings::load_from(&config_path);
        Ok(Self::new(settings, config_path, dir_override))
    }

    /// Prompt directories, in scan order
    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Load every prompt from the effective directories
    ///
    /// # Errors
    ///
    /// Returns `PmError::NoPrompts` when nothing was found, or the loader's
    /// error when a directory cannot be read.
    pub fn load_prompts(&self) -> Result<Vec<Prompt>> {
        let prompts = load_from_dirs(&self.dirs, &self.settings.load_options())?;
        log::debug!("Loaded {} prompts from {} directories", prompts.len(), self.dirs.len());
        if prompts.is_empty() {
            return Err(PmError::NoPrompts {
                dirs: self.dirs.clone(),
                config: self.config_path.clone(),
            });
        }
        Ok(prompts)
    }

    /// The error for a query that matched nothing
    #[must_use]
    pub fn no_match(&self, query: &str) -> PmError {
        PmError::NoMatch {
            query: query.to_string(),
            dirs: self.dirs.clone(),
            config: self.config_path.clone(),
        }
    }
}

/// Prompt summary used by `--json` output
#[derive(Debug, Serialize)]
pub struct PromptRecord<'a> {
    pub name: &'a str,
    pub path: &'a Path,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl<'a> PromptRecord<'a> {
    #[must_use]
    pub fn new(prompt: &'a Prompt) -> Self {
        Self {
            name: &prompt.name,
            path: &prompt.path,
            tags: &prompt.tags,
            summary: prompt.summary(),
            score: None,
        }
    }

    #[must_use]
    pub const fn with_score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }
}

/// Print a prompt body: trailing line breaks trimmed, then one newline
///
/// # Errors
///
/// Returns `PmError::Io` if writing fails.
pub fn output_prompt<W: Write + ?Sized>(out: &mut W, prompt: &Prompt) -> Result<()> {
    writeln!(out, "{}", prompt.content.trim_end_matches(['\r', '\n']))?;
    Ok(())
}

/// Copy a prompt body to the clipboard, reporting the result as a status
/// message. Clipboard failures do not fail the command.
pub fn copy_prompt(prompt: &Prompt, status: &dyn OutputWriter) {
    match clipboard::copy(prompt.content.trim_end_matches(['\r', '\n'])) {
        Ok(()) => status.success(&format!("Copied '{}' to the clipboard", prompt.name)),
        Err(e) => status.warning(&e.to_string()),
    }
}

/// Act on the end of an interactive session
///
/// # Errors
///
/// Returns `PmError::NoMatch` for an empty selection and `PmError::Io` if
/// writing fails.
pub fn finish_selection<W: Write + ?Sized>(
    ctx: &Context,
    outcome: Outcome,
    query: &str,
    copy: bool,
    out: &mut W,
    status: &dyn OutputWriter,
) -> Result<()> {
    match outcome {
        Outcome::Chosen(prompt) => {
            output_prompt(out, &prompt)?;
            if copy {
                copy_prompt(&prompt, status);
            }
            Ok(())
        }
        Outcome::EmptySelection => Err(ctx.no_match(query)),
        Outcome::Cancelled => {
            status.info("Selection cancelled.");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{PromptDir, RecordingWriter, context_for, prompt, tagged_prompt};
    use crate::ui::MessageLevel;

    #[test]
    fn test_context_uses_configured_dirs() {
        let settings = Settings {
            default_dirs: vec!["/one".to_string(), "/two".to_string()],
            ..Settings::default()
        };
        let ctx = Context::new(settings, PathBuf::from("/cfg"), &[]);
        assert_eq!(ctx.dirs(), &[PathBuf::from("/one"), PathBuf::from("/two")]);
    }

    #[test]
    fn test_context_override_replaces_dirs() {
        let ctx = Context::new(Settings::default(), PathBuf::from("/cfg"), &[PathBuf::from("/x")]);
        assert_eq!(ctx.dirs(), &[PathBuf::from("/x")]);
    }

    #[test]
    fn test_load_prompts_empty_dir_is_no_prompts() {
        let dir = PromptDir::new();
        let err = context_for(&dir).load_prompts().unwrap_err();
        assert!(matches!(err, PmError::NoPrompts { .. }));
        assert!(err.to_string().contains("/cfg/settings.toml"));
    }

    #[test]
    fn test_output_prompt_trims_trailing_newlines() {
        let mut out = Vec::new();
        output_prompt(&mut out, &prompt("a", "line one\nline two\r\n\n")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_finish_selection_outcomes() {
        let dir = PromptDir::new();
        let ctx = context_for(&dir);
        let status = RecordingWriter::default();

        let mut out = Vec::new();
        finish_selection(&ctx, Outcome::Chosen(prompt("a", "Body")), "q", false, &mut out, &status)
            .unwrap();
        assert_eq!(out, b"Body\n");

        let mut out = Vec::new();
        finish_selection(&ctx, Outcome::Cancelled, "q", false, &mut out, &status).unwrap();
        assert!(out.is_empty());
        assert_eq!(status.texts(MessageLevel::Info), vec!["Selection cancelled."]);

        let err = finish_selection(&ctx, Outcome::EmptySelection, "zz", false, &mut out, &status)
            .unwrap_err();
        assert!(matches!(err, PmError::NoMatch { ref query, .. } if query == "zz"));
    }

    #[test]
    fn test_prompt_record_json() {
        let p = tagged_prompt("review", "Body", &["code"]);
        let json = serde_json::to_value(PromptRecord::new(&p).with_score(7)).unwrap();
        assert_eq!(json["name"], "review");
        assert_eq!(json["path"], "/prompts/review.md");
        assert_eq!(json["tags"][0], "code");
        assert_eq!(json["score"], 7);
        assert!(json.get("summary").is_none());
    }
}
