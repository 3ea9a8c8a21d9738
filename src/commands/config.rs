//! Config command - inspect or create the settings file

use crate::cli::ConfigCommands;
use crate::config::Settings;
use crate::ui::OutputWriter;
use crate::{PmError, Result};
use std::io::Write;
use std::path::Path;

/// Execute a config subcommand against the settings file at `path`
///
/// # Errors
///
/// Returns `PmError::InvalidInput` when `init` would overwrite a file without
/// `--force`, and `PmError::Config` when the file cannot be written.
pub fn execute<W: Write + ?Sized>(
    command: &ConfigCommands,
    path: &Path,
    out: &mut W,
    status: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigCommands::Show => {
            let settings = Settings::load_from(path);
            write!(out, "{}", settings.to_toml()?)?;
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(PmError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Settings::default().save_to(path)?;
            status.success(&format!("Wrote default settings to {}", path.display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingWriter;
    use crate::ui::MessageLevel;
    use std::fs;
    use tempfile::TempDir;

    fn run(command: &ConfigCommands, path: &Path, status: &RecordingWriter) -> Result<String> {
        let mut out = Vec::new();
        execute(command, path, &mut out, status)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_config_path() {
        let status = RecordingWriter::default();
        let output = run(&ConfigCommands::Path, Path::new("/cfg/settings.toml"), &status).unwrap();
        assert_eq!(output, "/cfg/settings.toml\n");
    }

    #[test]
    fn test_config_init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pmc").join("settings.toml");
        let status = RecordingWriter::default();

        run(&ConfigCommands::Init { force: false }, &path, &status).unwrap();

        assert!(path.exists());
        assert_eq!(Settings::try_load_from(&path).unwrap(), Settings::default());
        assert_eq!(status.texts(MessageLevel::Success).len(), 1);
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "default_dir = \"/mine\"\n").unwrap();
        let status = RecordingWriter::default();

        let result = run(&ConfigCommands::Init { force: false }, &path, &status);
        assert!(matches!(result, Err(PmError::InvalidInput(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "default_dir = \"/mine\"\n");

        run(&ConfigCommands::Init { force: true }, &path, &status).unwrap();
        assert_eq!(Settings::try_load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_config_show() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "[fuzzy_search]\nmax_results = 5\n").unwrap();

        let output = run(&ConfigCommands::Show, &path, &RecordingWriter::default()).unwrap();
        assert!(output.contains("max_results = 5"));
        assert!(output.contains("truncate_length = 120"));
    }
}
