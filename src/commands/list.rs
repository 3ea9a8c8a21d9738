//! List command - every prompt in name order

use super::{Context, PromptRecord};
use crate::Result;
use crate::search::sorted_by_name;
use std::io::Write;

/// Execute the list command
///
/// # Errors
///
/// Returns `PmError::NoPrompts` when the library is empty, plus any loading
/// or write error.
pub fn execute<W: Write + ?Sized>(ctx: &Context, json: bool, out: &mut W) -> Result<()> {
    let prompts = ctx.load_prompts()?;
    let sorted = sorted_by_name(&prompts);

    if json {
        let records: Vec<PromptRecord> = sorted.iter().map(|(_, p)| PromptRecord::new(p)).collect();
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
    } else {
        for (_, prompt) in sorted {
            writeln!(out, "{}", prompt.name)?;
        }
    }
    Ok(())
}
