//! Exact lookup of a prompt by name or alias

use super::error::PromptError;
use super::{Prompt, Result};

/// Lowercase `value` and fold `_ - / . ,` and whitespace runs into single
/// spaces, so `Code_Review`, `code-review` and `code review` compare equal.
#[must_use]
pub fn normalize_name(value: &str) -> String {
    value
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || matches!(c, '_' | '-' | '/' | '.' | ','))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the prompt called `query`.
///
/// A case-insensitive match on name or alias wins; failing that, names and
/// aliases are compared after [`normalize_name`]. Candidates are tried in
/// slice order.
///
/// # Errors
///
/// Returns `PromptError::EmptyName` for a blank query and
/// `PromptError::NotFound` when nothing matches.
pub fn resolve_by_name<'a>(prompts: &'a [Prompt], query: &str) -> Result<&'a Prompt> {
    let query = query.trim();
    if query.is_empty() {
        return Err(PromptError::EmptyName);
    }

    let lowered = query.to_lowercase();
    let exact = prompts.iter().find(|p| {
        p.name.to_lowercase() == lowered || p.aliases().iter().any(|a| a.to_lowercase() == lowered)
    });
    if let Some(prompt) = exact {
        return Ok(prompt);
    }

    let normalized = normalize_name(query);
    if !normalized.is_empty() {
        let loose = prompts.iter().find(|p| {
            normalize_name(&p.name) == normalized
                || p.aliases().iter().any(|a| normalize_name(a) == normalized)
        });
        if let Some(prompt) = loose {
            return Ok(prompt);
        }
    }

    Err(PromptError::NotFound(query.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{prompt, prompts};

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Code_Review-v2.final "), "code review v2 final");
        assert_eq!(normalize_name("a/b,c\td\ne"), "a b c d e");
        assert_eq!(normalize_name("---"), "");
    }

    #[test]
    fn test_exact_name_is_case_insensitive() {
        let list = prompts(&["brainstorm", "Code-Review"]);
        let found = resolve_by_name(&list, "code-review").unwrap();
        assert_eq!(found.name, "Code-Review");
    }

    #[test]
    fn test_alias_match() {
        let list = vec![
            prompt("brainstorm", "x"),
            crate::prompt::Prompt::parse("/p/code-review.md", "---\naliases: [cr, Review]\n---\nbody"),
        ];
        assert_eq!(resolve_by_name(&list, "CR").unwrap().name, "code-review");
        assert_eq!(resolve_by_name(&list, "review").unwrap().name, "code-review");
    }

    #[test]
    fn test_normalized_match() {
        let list = prompts(&["product_brief", "code-review"]);
        assert_eq!(resolve_by_name(&list, "Product Brief").unwrap().name, "product_brief");
        assert_eq!(resolve_by_name(&list, "code  review").unwrap().name, "code-review");
    }

    #[test]
    fn test_exact_wins_over_normalized() {
        let list = prompts(&["code_review", "code review"]);
        assert_eq!(resolve_by_name(&list, "code review").unwrap().name, "code review");
    }

    #[test]
    fn test_missing_and_empty() {
        let list = prompts(&["alpha"]);
        assert!(matches!(resolve_by_name(&list, "beta"), Err(PromptError::NotFound(q)) if q == "beta"));
        assert!(matches!(resolve_by_name(&list, "   "), Err(PromptError::EmptyName)));
    }
}
