//! Search command - list prompts ranked against a fuzzy query

use super::{Context, PromptRecord, finish_selection};
use crate::search::{RankOptions, rank_matches};
use crate::ui::{self, OutputWriter};
use crate::{PmError, Result};
use std::io::Write;

/// Parameters for the search command
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Query words, joined with spaces
    pub query: String,
    /// Result cap overriding `[fuzzy_search] max_results` when positive
    pub limit: usize,
    pub interactive: bool,
    pub json: bool,
}

impl SearchParams {
    /// Ranking options in effect: the limit when given, else the config
    #[must_use]
    pub const fn rank_options(&self, configured: RankOptions) -> RankOptions {
        if self.limit > 0 {
            RankOptions::with_max_results(self.limit)
        } else {
            configured
        }
    }
}

/// Execute the search command
///
/// # Errors
///
/// Returns `PmError::InvalidInput` for a blank query and `PmError::NoMatch`
/// when nothing matches.
pub fn execute<W: Write + ?Sized>(
    ctx: &Context,
    params: &SearchParams,
    out: &mut W,
    status: &dyn OutputWriter,
) -> Result<()> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(PmError::InvalidInput("search query cannot be empty".to_string()));
    }

    let prompts = ctx.load_prompts()?;
    let options = params.rank_options(ctx.settings.rank_options());
    let matches = rank_matches(&prompts, query, options);
    if matches.is_empty() {
        return Err(ctx.no_match(query));
    }

    // the selector keeps the same cap while the query is edited
    if params.interactive {
        let outcome = ui::select_prompt(&prompts, query, options, ctx.settings.ui_options())?;
        return finish_selection(ctx, outcome, query, false, out, status);
    }

    if params.json {
        let records: Vec<PromptRecord> = matches
            .iter()
            .map(|m| PromptRecord::new(m.candidate).with_score(m.score))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
    } else {
        for m in &matches {
            writeln!(out, "{}\t{}", m.candidate.name, m.candidate.path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{PromptDir, RecordingWriter, context_for};
    use crate::ui::{SelectorEvent, SelectorState};

    fn library() -> PromptDir {
        let dir = PromptDir::new();
        dir.write("alpha.md", "Alpha");
        dir.write("alpine.md", "Alpine");
        dir.write("beta.md", "Beta");
        dir
    }

    fn run(dir: &PromptDir, params: &SearchParams) -> Result<String> {
        let mut out = Vec::new();
        execute(&context_for(dir), params, &mut out, &RecordingWriter::default())?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn params(query: &str) -> SearchParams {
        SearchParams {
            query: query.to_string(),
            ..SearchParams::default()
        }
    }

    #[test]
    fn test_search_lists_name_and_path() {
        let dir = library();
        let output = run(&dir, &params("alp")).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("alpha\t"));
        assert!(lines[0].ends_with("alpha.md"));
        assert!(lines[1].starts_with("alpine\t"));
    }

    #[test]
    fn test_search_limit() {
        let dir = library();
        let output = run(
            &dir,
            &SearchParams {
                limit: 1,
                ..params("alp")
            },
        )
        .unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_search_json() {
        let dir = library();
        let output = run(
            &dir,
            &SearchParams {
                json: true,
                ..params("alp")
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "alpha");
        assert_eq!(value[1]["name"], "alpine");
        assert!(value[0]["score"].as_u64().unwrap() >= value[1]["score"].as_u64().unwrap());
    }

    #[test]
    fn test_search_without_match() {
        let dir = library();
        assert!(matches!(run(&dir, &params("zzz")), Err(PmError::NoMatch { .. })));
    }

    #[test]
    fn test_search_blank_query() {
        let dir = library();
        assert!(matches!(run(&dir, &params("  ")), Err(PmError::InvalidInput(_))));
    }

    #[test]
    fn test_limit_caps_selector_while_typing() {
        let dir = library();
        let ctx = context_for(&dir);
        let params = SearchParams {
            limit: 1,
            interactive: true,
            ..params("alp")
        };
        let prompts = ctx.load_prompts().unwrap();

        let options = params.rank_options(ctx.settings.rank_options());
        let mut state = SelectorState::new(prompts, &params.query, options).unwrap();
        assert_eq!(state.filtered_len(), 1);

        state.handle(SelectorEvent::ClearQuery);
        state.handle(SelectorEvent::Input("a".to_string()));
        assert_eq!(state.filtered_len(), 1);
        assert_eq!(state.current().unwrap().name, "alpha");
    }

    #[test]
    fn test_rank_options_prefers_limit() {
        let configured = RankOptions::with_max_results(20);
        assert_eq!(params("x").rank_options(configured), configured);
        assert_eq!(
            SearchParams {
                limit: 3,
                ..params("x")
            }
            .rank_options(configured),
            RankOptions::with_max_results(3)
        );
    }
}
