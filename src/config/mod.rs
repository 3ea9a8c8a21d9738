//! Configuration module for pmc
//!
//! Settings live in `settings.toml` under the user's config directory
//! (`~/.config/pmc/settings.toml` on Linux). Environment variables prefixed
//! with `PM_` override file values, using `__` to reach nested tables
//! (`PM_FUZZY_SEARCH__MAX_RESULTS=5`).
//!
//! Every field has a default. Missing, empty or non-positive values fall
//! back to the default one field at a time, and a file that cannot be read
//! or parsed yields the full defaults.

use crate::prompt::LoadOptions;
use crate::search::RankOptions;
use crate::ui::{DEFAULT_TRUNCATE_LENGTH, UiOptions};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_DIR: &str = "~/prompts";
const DEFAULT_CACHE_DIR: &str = "~/.cache/pmc";
const DEFAULT_EXTENSIONS: [&str; 2] = [".md", ".txt"];
const DEFAULT_IGNORE_PATTERNS: [&str; 1] = [".DS_Store"];
const DEFAULT_MAX_FILE_SIZE_KB: u64 = 128;
const DEFAULT_MAX_RESULTS: usize = 20;

/// Filesystem discovery settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FileSystemSettings {
    /// File extensions treated as prompts
    pub extensions: Vec<String>,
    /// Glob patterns to skip while scanning
    pub ignore_patterns: Vec<String>,
    /// Largest prompt file to load, in KiB
    pub max_file_size_kb: u64,
}

impl Default for FileSystemSettings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS.iter().map(ToString::to_string).collect(),
            max_file_size_kb: DEFAULT_MAX_FILE_SIZE_KB,
        }
    }
}

/// Ranking settings
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FuzzySearchSettings {
    /// Result cap for one-shot searches
    pub max_results: usize,
}

impl Default for FuzzySearchSettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Display settings
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct UiSettings {
    /// Longest entry or preview text shown before truncation
    pub truncate_length: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
        }
    }
}

/// Application settings with defaults applied
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prompt directories, scanned in order
    #[serde(rename = "default_dir")]
    pub default_dirs: Vec<String>,
    /// Cache location
    pub cache_dir: String,
    pub file_system: FileSystemSettings,
    pub fuzzy_search: FuzzySearchSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_dirs: vec![DEFAULT_DIR.to_string()],
            cache_dir: DEFAULT_CACHE_DIR.to_string(),
            file_system: FileSystemSettings::default(),
            fuzzy_search: FuzzySearchSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

/// `default_dir` accepts a single path or a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFileSystem {
    extensions: Option<Vec<String>>,
    ignore_patterns: Option<Vec<String>>,
    max_file_size_kb: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFuzzySearch {
    max_results: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawUi {
    truncate_length: Option<i64>,
}

/// Settings as written by the user, before defaults are applied
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    default_dir: Option<OneOrMany>,
    cache_dir: Option<String>,
    file_system: RawFileSystem,
    fuzzy_search: RawFuzzySearch,
    ui: RawUi,
}

fn non_empty(values: Option<Vec<String>>) -> Option<Vec<String>> {
    let values: Vec<String> = values?
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    (!values.is_empty()).then_some(values)
}

fn positive(value: Option<i64>) -> Option<u64> {
    value.filter(|v| *v > 0).and_then(|v| u64::try_from(v).ok())
}

impl RawSettings {
    fn normalize(self) -> Settings {
        let defaults = Settings::default();

        let dirs = match self.default_dir {
            Some(OneOrMany::One(dir)) => Some(vec![dir]),
            Some(OneOrMany::Many(dirs)) => Some(dirs),
            None => None,
        };

        Settings {
            default_dirs: non_empty(dirs).unwrap_or(defaults.default_dirs),
            cache_dir: self
                .cache_dir
                .map(|dir| dir.trim().to_string())
                .filter(|dir| !dir.is_empty())
                .unwrap_or(defaults.cache_dir),
            file_system: FileSystemSettings {
                extensions: non_empty(self.file_system.extensions)
                    .unwrap_or(defaults.file_system.extensions),
                ignore_patterns: non_empty(self.file_system.ignore_patterns)
                    .unwrap_or(defaults.file_system.ignore_patterns),
                max_file_size_kb: positive(self.file_system.max_file_size_kb)
                    .unwrap_or(defaults.file_system.max_file_size_kb),
            },
            fuzzy_search: FuzzySearchSettings {
                max_results: positive(self.fuzzy_search.max_results)
                    .and_then(|v| usize::try_from(v).ok())
                    .unwrap_or(defaults.fuzzy_search.max_results),
            },
            ui: UiSettings {
                truncate_length: positive(self.ui.truncate_length)
                    .and_then(|v| usize::try_from(v).ok())
                    .unwrap_or(defaults.ui.truncate_length),
            },
        }
    }
}

impl Settings {
    /// Get the path to the settings file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("pmc").join("settings.toml"))
    }

    /// Load settings from `path` with environment overrides.
    ///
    /// A missing file is not an error; its values simply come from defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or a
    /// value has the wrong type.
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("PM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(raw.normalize())
    }

    /// Load settings from `path`, falling back to defaults on any error
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings at {}: {e}", path.display());
            Self::default()
        })
    }

    /// Save settings to `path` as TOML, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the settings
    /// cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the settings as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Configured prompt directories with `~` expanded
    #[must_use]
    pub fn prompt_dirs(&self) -> Vec<PathBuf> {
        self.default_dirs.iter().map(|dir| expand_tilde(dir)).collect()
    }

    /// Scanner filters derived from `[file_system]`
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            extensions: self.file_system.extensions.clone(),
            ignore_patterns: self.file_system.ignore_patterns.clone(),
            max_file_size: self.file_system.max_file_size_kb.saturating_mul(1024),
        }
    }

    /// Ranking options derived from `[fuzzy_search]`
    #[must_use]
    pub const fn rank_options(&self) -> RankOptions {
        RankOptions::with_max_results(self.fuzzy_search.max_results)
    }

    /// Selector display options derived from `[ui]`
    #[must_use]
    pub const fn ui_options(&self) -> UiOptions {
        UiOptions::new(self.ui.truncate_length)
    }
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// Other paths, including `~user`, are returned unchanged, as is everything
/// when the home directory is unknown.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path {
        "~" => "",
        _ => match path.strip_prefix("~/") {
            Some(rest) => rest,
            None => return PathBuf::from(path),
        },
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
