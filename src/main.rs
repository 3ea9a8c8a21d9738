//! pm CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick a prompt interactively (default command)
//! pm
//!
//! # Print the best match for a query
//! pm code review
//! pm pick -q review --copy
//!
//! # List matches, or everything
//! pm search review --limit 5
//! pm ls --json
//!
//! # Print prompts by name, combined with piped input
//! git diff | pm mesh reviewer diff-review
//! ```
//!
//! # Configuration
//!
//! Settings are read from `settings.toml` in the user's config directory
//! (`~/.config/pmc/settings.toml` on Linux); `pm config init` writes the
//! defaults. `PM_`-prefixed environment variables override file values.

use colored::Colorize;
use pmc::{
    PmError,
    cli::{Cli, Commands},
    commands::{self, Context, pick::PickMode, search::SearchParams},
    config::Settings,
    ui::{OutputWriter, StderrWriter},
};
use std::io::{self, IsTerminal, Read, Write};

type Result<T> = std::result::Result<T, PmError>;

/// Initialise `env_logger`; each `-v` raises the default level and
/// `RUST_LOG` still takes precedence
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();
    let status = StderrWriter::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Completion { shell } => commands::completion(shell, &mut out),
        Commands::Config { command } => {
            let path = Settings::config_path()?;
            commands::config(&command, &path, &mut out, &status)
        }
        other => {
            let ctx = Context::load(other.dir_override())?;
            log::debug!("Prompt directories: {}", pmc::format_dirs(ctx.dirs()));
            dispatch(&ctx, other, &mut out, &status)
        }
    }?;

    out.flush()?;
    Ok(())
}

fn dispatch(ctx: &Context, command: Commands, out: &mut impl Write, status: &dyn OutputWriter) -> Result<()> {
    match command {
        Commands::Pick {
            query,
            interactive,
            copy,
            words,
            ..
        } => {
            let mode = PickMode::from_args(query.as_deref(), &words, interactive);
            commands::pick(ctx, &mode, copy, out, status)
        }
        Commands::Search {
            limit,
            interactive,
            json,
            query,
            ..
        } => {
            let params = SearchParams {
                query: query.join(" "),
                limit,
                interactive,
                json,
            };
            commands::search(ctx, &params, out, status)
        }
        Commands::Ls { json, .. } => commands::list(ctx, json, out),
        Commands::Cat { name, .. } => commands::cat(ctx, &name, out),
        Commands::Mesh { names, .. } => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                commands::mesh(ctx, &names, None, out)
            } else {
                let mut piped = stdin.lock();
                commands::mesh(ctx, &names, Some(&mut piped as &mut dyn Read), out)
            }
        }
        Commands::Completion { .. } | Commands::Config { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
