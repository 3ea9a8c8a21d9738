//! Pick command - choose one prompt and print its body

use super::{Context, copy_prompt, finish_selection, output_prompt};
use crate::Result;
use crate::search::{RankOptions, rank};
use crate::ui::{self, OutputWriter};
use std::io::Write;

/// How the prompt is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickMode {
    /// Take the best match for the query without asking
    Direct(String),
    /// Open the selector seeded with the query
    Interactive(String),
}

impl PickMode {
    /// Decide the mode from the parsed flags: a query (flag or words)
    /// without `--interactive` is a direct pick
    #[must_use]
    pub fn from_args(query: Option<&str>, words: &[String], interactive: bool) -> Self {
        let query = query
            .map(str::to_string)
            .unwrap_or_else(|| words.join(" "))
            .trim()
            .to_string();
        if interactive || query.is_empty() {
            Self::Interactive(query)
        } else {
            Self::Direct(query)
        }
    }
}

/// Execute the pick command
///
/// # Errors
///
/// Returns `PmError::NoMatch` when the query matches nothing, plus any
/// loading, selector or write error.
pub fn execute<W: Write + ?Sized>(
    ctx: &Context,
    mode: &PickMode,
    copy: bool,
    out: &mut W,
    status: &dyn OutputWriter,
) -> Result<()> {
    let prompts = ctx.load_prompts()?;

    match mode {
        PickMode::Direct(query) => {
            let best = rank(&prompts, query, ctx.settings.rank_options())
                .into_iter()
                .next()
                .ok_or_else(|| ctx.no_match(query))?;
            output_prompt(out, best)?;
            if copy {
                copy_prompt(best, status);
            }
            Ok(())
        }
        PickMode::Interactive(seed) => {
            let outcome = ui::select_prompt(
                &prompts,
                seed,
                RankOptions::default(),
                ctx.settings.ui_options(),
            )?;
            finish_selection(ctx, outcome, seed, copy, out, status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PmError;
    use crate::testing::{PromptDir, RecordingWriter, context_for};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_mode_from_args() {
        assert_eq!(PickMode::from_args(None, &[], false), PickMode::Interactive(String::new()));
        assert_eq!(
            PickMode::from_args(None, &words(&["code", "review"]), false),
            PickMode::Direct("code review".to_string())
        );
        assert_eq!(
            PickMode::from_args(Some("rev"), &[], false),
            PickMode::Direct("rev".to_string())
        );
        assert_eq!(
            PickMode::from_args(None, &words(&["rev"]), true),
            PickMode::Interactive("rev".to_string())
        );
        assert_eq!(PickMode::from_args(Some("  "), &[], false), PickMode::Interactive(String::new()));
    }

    #[test]
    fn test_direct_pick_prints_best_match() {
        let dir = PromptDir::new();
        dir.write("alpha.md", "Alpha body\n\n");
        dir.write("alpine.md", "Alpine body");
        dir.write("beta.md", "Beta body");

        let mut out = Vec::new();
        let status = RecordingWriter::default();
        execute(&context_for(&dir), &PickMode::Direct("alp".to_string()), false, &mut out, &status)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Alpha body\n");
        assert!(status.messages().is_empty());
    }

    #[test]
    fn test_direct_pick_without_match() {
        let dir = PromptDir::new();
        dir.write("alpha.md", "Alpha body");

        let mut out = Vec::new();
        let err = execute(
            &context_for(&dir),
            &PickMode::Direct("zzz".to_string()),
            false,
            &mut out,
            &RecordingWriter::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PmError::NoMatch { .. }));
        assert!(out.is_empty());
    }
}
