//! Interactive prompt selection
//!
//! The selector is split into a pure core and thin front ends:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  SelectorState  (events in, outcome out) │
//! └────────────────┬────────────────────────┘
//!                  │ projected by
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  render         (state in, frame out)    │
//! └────────────────┬────────────────────────┘
//!                  │ drawn by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ ratatui       │  │ fallback          │
//! │ (terminals)   │  │ (numbered list)   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! [`select_prompt`] picks the front end: the full-screen selector when
//! stdin and stderr are both terminals, the numbered list otherwise or when
//! the terminal cannot be taken over.

mod error;

pub mod fallback;
pub mod output;
pub mod ratatui_adapter;
pub mod render;
pub mod selector;
pub mod text;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StderrWriter};
pub use ratatui_adapter::RatatuiSelector;
pub use render::{Frame, FrameLine, LineKind, render};
pub use selector::{Mode, Outcome, SelectorEvent, SelectorState};

use crate::prompt::Prompt;
use crate::search::{RankOptions, rank};
use std::io::{self, IsTerminal};

/// Column limit applied to titles and preview text when none is configured
pub const DEFAULT_TRUNCATE_LENGTH: usize = 120;

/// Presentation settings for the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    truncate_length: usize,
}

impl UiOptions {
    /// Options with the given column limit; zero selects the default
    #[must_use]
    pub const fn new(truncate_length: usize) -> Self {
        Self {
            truncate_length: if truncate_length == 0 {
                DEFAULT_TRUNCATE_LENGTH
            } else {
                truncate_length
            },
        }
    }

    #[must_use]
    pub const fn truncate_length(&self) -> usize {
        self.truncate_length
    }
}

impl Default for UiOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TRUNCATE_LENGTH)
    }
}

/// Let the user choose one of `prompts`, starting from `query`.
///
/// # Errors
///
/// Returns `UiError::NoCandidates` for an empty list. The numbered fallback
/// may also return `UiError::InvalidSelection` or `UiError::IoError`.
pub fn select_prompt(
    prompts: &[Prompt],
    query: &str,
    options: RankOptions,
    ui: UiOptions,
) -> Result<Outcome> {
    if prompts.is_empty() {
        return Err(UiError::NoCandidates);
    }

    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        let state = SelectorState::new(prompts.to_vec(), query, options)?;
        match RatatuiSelector::new().run(state, ui) {
            Err(UiError::Terminal(e)) => {
                log::warn!("Interactive selector unavailable ({e}), using numbered list");
            }
            other => return other,
        }
    } else {
        log::debug!("Not a terminal, using numbered list");
    }

    let shown = fallback_candidates(prompts, query, options);
    let chosen = fallback::select(&shown, io::stdin().lock(), &mut io::stderr())?;
    Ok(Outcome::Chosen((*chosen).clone()))
}

/// Prompts listed by the numbered fallback: the matches for `query` when
/// there are any, otherwise everything by name
fn fallback_candidates<'a>(prompts: &'a [Prompt], query: &str, options: RankOptions) -> Vec<&'a Prompt> {
    let query = query.trim();
    if !query.is_empty() {
        let matches = rank(prompts, query, options);
        if !matches.is_empty() {
            return matches;
        }
    }
    rank(prompts, "", RankOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::prompts;

    fn names(list: &[&Prompt]) -> Vec<String> {
        list.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_ui_options_default() {
        assert_eq!(UiOptions::default().truncate_length(), DEFAULT_TRUNCATE_LENGTH);
        assert_eq!(UiOptions::new(0).truncate_length(), DEFAULT_TRUNCATE_LENGTH);
        assert_eq!(UiOptions::new(40).truncate_length(), 40);
    }

    #[test]
    fn test_select_prompt_empty() {
        let result = select_prompt(&[], "", RankOptions::default(), UiOptions::default());
        assert!(matches!(result, Err(UiError::NoCandidates)));
    }

    #[test]
    fn test_fallback_candidates_uses_matches() {
        let list = prompts(&["beta", "alpine", "alpha"]);
        let shown = fallback_candidates(&list, "alp", RankOptions::default());
        assert_eq!(names(&shown), vec!["alpha", "alpine"]);
    }

    #[test]
    fn test_fallback_candidates_without_matches_lists_all() {
        let list = prompts(&["beta", "alpha"]);
        assert_eq!(
            names(&fallback_candidates(&list, "zzz", RankOptions::default())),
            vec!["alpha", "beta"]
        );
        assert_eq!(
            names(&fallback_candidates(&list, "  ", RankOptions::with_max_results(1))),
            vec!["alpha", "beta"]
        );
    }
}
