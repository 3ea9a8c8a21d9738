//! Shell completion support for pm
//!
//! Completions are static: subcommands, flags and value hints, generated
//! from the clap definition.

use crate::cli::Cli;
use clap::{Command, CommandFactory};
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions for `cmd` into `buf`
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
/// * `buf` - Where the script is written
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}

/// Generate completions for the `pm` binary
pub fn generate<W: Write>(shell: Shell, buf: &mut W) {
    generate_static(shell, &mut Cli::command(), buf);
}
