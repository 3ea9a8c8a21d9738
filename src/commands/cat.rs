//! Cat command - print a prompt by name

use super::{Context, output_prompt};
use crate::Result;
use crate::prompt::resolve_by_name;
use std::io::Write;

/// Execute the cat command. `name` words are joined with spaces.
///
/// # Errors
///
/// Returns `PromptError::NotFound` (wrapped) when no prompt has that name or
/// alias, plus any loading or write error.
pub fn execute<W: Write + ?Sized>(ctx: &Context, name: &[String], out: &mut W) -> Result<()> {
    let prompts = ctx.load_prompts()?;
    let prompt = resolve_by_name(&prompts, &name.join(" "))?;
    output_prompt(out, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PmError;
    use crate::prompt::PromptError;
    use crate::testing::{PromptDir, context_for};

    fn run(dir: &PromptDir, name: &[&str]) -> Result<String> {
        let name: Vec<String> = name.iter().map(ToString::to_string).collect();
        let mut out = Vec::new();
        execute(&context_for(dir), &name, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cat_by_normalized_name() {
        let dir = PromptDir::new();
        dir.write("code-review.md", "Review the diff.\n");
        assert_eq!(run(&dir, &["code", "review"]).unwrap(), "Review the diff.\n");
        assert_eq!(run(&dir, &["Code-Review"]).unwrap(), "Review the diff.\n");
    }

    #[test]
    fn test_cat_by_alias() {
        let dir = PromptDir::new();
        dir.write("code-review.md", "---\naliases: [cr]\n---\nReview the diff.");
        assert_eq!(run(&dir, &["cr"]).unwrap(), "Review the diff.\n");
    }

    #[test]
    fn test_cat_unknown_name() {
        let dir = PromptDir::new();
        dir.write("alpha.md", "a");
        assert!(matches!(
            run(&dir, &["beta"]),
            Err(PmError::Prompt(PromptError::NotFound(_)))
        ));
    }
}
