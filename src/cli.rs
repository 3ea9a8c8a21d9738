//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for `pm` using the `clap` crate.
//!
//! # Commands
//!
//! - **pick**: Choose a prompt and print its body (default)
//! - **search**: List prompts ranked against a fuzzy query
//! - **ls**: List every prompt name
//! - **cat**: Print a prompt by name
//! - **mesh**: Concatenate several prompts and piped input
//! - **completion**: Shell completion scripts
//! - **config**: Inspect or create the settings file
//!
//! # Examples
//!
//! ```
//! use pmc::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! // `pm code review` is shorthand for `pm pick code review`
//! let cli = Cli::parse_from(["pm", "code", "review"]);
//! match cli.get_command() {
//!     Commands::Pick { words, .. } => assert_eq!(words, vec!["code", "review"]),
//!     _ => unreachable!(),
//! }
//! ```

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pm")]
#[command(about = "Find, preview and print prompts from a prompt library", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Words to match; prints the best matching prompt
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Pick a prompt and print its body (default)
    #[command(visible_alias = "p")]
    Pick {
        /// Print the best match for this query instead of opening the selector
        #[arg(short = 'q', long = "query", value_name = "QUERY", conflicts_with = "interactive")]
        query: Option<String>,

        /// Always open the interactive selector, seeded with WORDS
        #[arg(short = 'i', long = "interactive")]
        interactive: bool,

        /// Also copy the prompt to the clipboard
        #[arg(short = 'c', long = "copy")]
        copy: bool,

        /// Query words
        #[arg(value_name = "WORDS")]
        words: Vec<String>,

        #[command(flatten)]
        dir_args: DirArgs,
    },

    /// List prompts matching a fuzzy query
    #[command(visible_alias = "s")]
    Search {
        /// Maximum number of results (overrides config)
        #[arg(short = 'n', long = "limit", value_name = "N", default_value_t = 0)]
        limit: usize,

        /// Open the interactive selector seeded with the query
        #[arg(short = 'i', long = "interactive", conflicts_with = "json")]
        interactive: bool,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,

        /// Query words
        #[arg(value_name = "QUERY", required = true)]
        query: Vec<String>,

        #[command(flatten)]
        dir_args: DirArgs,
    },

    /// List every prompt by name
    #[command(visible_alias = "list")]
    Ls {
        /// Print prompts as JSON
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        dir_args: DirArgs,
    },

    /// Print a prompt by name or alias
    Cat {
        /// Prompt name (words are joined with spaces)
        #[arg(value_name = "NAME", required = true)]
        name: Vec<String>,

        #[command(flatten)]
        dir_args: DirArgs,
    },

    /// Print several prompts in order, followed by any piped input
    Mesh {
        /// Prompt names
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,

        #[command(flatten)]
        dir_args: DirArgs,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the settings file path
    Path,

    /// Print the effective settings as TOML
    Show,

    /// Write the default settings file
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

/// Shared arguments for commands that read prompts
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
pub struct DirArgs {
    /// Prompt directories to use instead of the configured ones (comma separated)
    #[arg(short = 'd', long = "dir", value_name = "DIR", value_delimiter = ',')]
    pub dirs: Vec<PathBuf>,
}

impl Commands {
    /// The default command: interactive pick, or a direct pick for `words`
    #[must_use]
    pub fn pick(words: Vec<String>) -> Self {
        Self::Pick {
            query: None,
            interactive: false,
            copy: false,
            words,
            dir_args: DirArgs::default(),
        }
    }

    /// Helper method to get the directory override from commands
    #[must_use]
    pub fn dir_override(&self) -> &[PathBuf] {
        match self {
            Self::Pick { dir_args, .. }
            | Self::Search { dir_args, .. }
            | Self::Ls { dir_args, .. }
            | Self::Cat { dir_args, .. }
            | Self::Mesh { dir_args, .. } => &dir_args.dirs,
            Self::Completion { .. } | Self::Config { .. } => &[],
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick with the bare words
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::pick(self.words.clone()))
    }
}
