//! Completion command - print a shell completion script

use crate::Result;
use crate::completions;
use clap_complete::Shell;
use std::io::Write;

/// Execute the completion command
///
/// # Errors
///
/// Returns `PmError::Io` if the script cannot be flushed.
pub fn execute<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    completions::generate(shell, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fish_script_lists_subcommands() {
        let mut out = Vec::new();
        execute(Shell::Fish, &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("complete -c pm"));
        assert!(script.contains("search"));
    }
}
