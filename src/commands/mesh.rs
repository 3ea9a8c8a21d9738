//! Mesh command - several prompts in order, then piped input

use super::{Context, output_prompt};
use crate::Result;
use crate::prompt::resolve_by_name;
use std::io::{Read, Write};

/// Execute the mesh command
///
/// Each prompt body is followed by a blank line. When `piped` is given its
/// contents are appended unchanged.
///
/// # Errors
///
/// Fails on the first name that does not resolve, before anything is
/// written, or on a read or write error.
pub fn execute<W: Write + ?Sized>(
    ctx: &Context,
    names: &[String],
    piped: Option<&mut dyn Read>,
    out: &mut W,
) -> Result<()> {
    let prompts = ctx.load_prompts()?;
    let chosen = names
        .iter()
        .map(|name| resolve_by_name(&prompts, name))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for prompt in chosen {
        output_prompt(out, prompt)?;
        writeln!(out)?;
    }

    if let Some(input) = piped {
        let mut extra = String::new();
        input.read_to_string(&mut extra)?;
        out.write_all(extra.as_bytes())?;
    }
    Ok(())
}
