//! Plain numbered selector for non-interactive terminals
//!
//! Prints a numbered list and reads a single answer line: a number, a full
//! name, or part of a name. A blank answer or end of input picks the first
//! entry.

use super::error::{Result, UiError};
use crate::search::Candidate;
use std::io::{BufRead, Write};

/// Ask the user to pick one of `candidates` by number or name.
///
/// # Errors
///
/// Returns `UiError::NoCandidates` for an empty list,
/// `UiError::InvalidSelection` when the answer matches nothing, and
/// `UiError::IoError` when reading or writing fails.
pub fn select<'a, P, R, W>(candidates: &'a [P], mut input: R, output: &mut W) -> Result<&'a P>
where
    P: Candidate,
    R: BufRead,
    W: Write + ?Sized,
{
    let Some(first) = candidates.first() else {
        return Err(UiError::NoCandidates);
    };

    writeln!(output, "Select a prompt:")?;
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(output, "{}) {}", i + 1, candidate.name())?;
    }
    write!(output, "> ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(first);
    }
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(first);
    }

    if let Ok(number) = answer.parse::<i64>() {
        return usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| candidates.get(i))
            .ok_or(UiError::InvalidSelection);
    }

    let wanted = answer.to_lowercase();
    candidates
        .iter()
        .find(|c| c.name().to_lowercase() == wanted)
        .or_else(|| candidates.iter().find(|c| c.name().to_lowercase().contains(&wanted)))
        .ok_or(UiError::InvalidSelection)
}
