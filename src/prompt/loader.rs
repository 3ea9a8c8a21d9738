//! Discovery of prompt files under configured directories

use super::error::PromptError;
use super::{Prompt, Result};
use glob::{MatchOptions, Pattern as GlobPattern};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filters applied while scanning prompt directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Allowed file extensions, compared case-insensitively. `.md` and `md`
    /// are equivalent. Empty allows every file.
    pub extensions: Vec<String>,
    /// Glob patterns matched against the basename and the slash-separated
    /// path. Matching directories are not descended into.
    pub ignore_patterns: Vec<String>,
    /// Files larger than this many bytes are skipped; `0` disables the limit
    pub max_file_size: u64,
}

struct Filter {
    extensions: Vec<String>,
    ignore: Vec<GlobPattern>,
    max_file_size: u64,
}

impl Filter {
    fn new(options: &LoadOptions) -> Result<Self> {
        let ignore = options
            .ignore_patterns
            .iter()
            .map(|p| {
                GlobPattern::new(p).map_err(|source| PromptError::Pattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<_>>()?;

        let extensions = options
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Ok(Self {
            extensions,
            ignore,
            max_file_size: options.max_file_size,
        })
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let base = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let slash_path = path.to_string_lossy().replace('\\', "/");
        let path_opts = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };

        self.ignore
            .iter()
            .any(|p| p.matches(&base) || p.matches_with(&slash_path, path_opts))
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Accept `entry` as a prompt file, returning its size-checked path
    fn accept(&self, entry: &DirEntry) -> Option<PathBuf> {
        if entry.file_type().is_dir() || self.is_ignored(entry.path()) {
            return None;
        }
        if !self.has_allowed_extension(entry.path()) {
            return None;
        }

        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::debug!("Skipping {}: {e}", entry.path().display());
                return None;
            }
        };
        if !metadata.is_file() {
            return None;
        }
        if self.max_file_size > 0 && metadata.len() > self.max_file_size {
            log::debug!(
                "Skipping {} ({} bytes exceeds limit of {})",
                entry.path().display(),
                metadata.len(),
                self.max_file_size
            );
            return None;
        }
        Some(entry.path().to_path_buf())
    }
}

/// Load every prompt under `dirs`, in directory order then file-name order.
///
/// Missing directories are skipped. A file reachable from more than one
/// directory is loaded once.
///
/// # Errors
///
/// Returns `PromptError::Pattern` for an invalid ignore glob,
/// `PromptError::Walk` when a directory cannot be read, and
/// `PromptError::Read` when a prompt file cannot be read.
pub fn load_from_dirs<P: AsRef<Path>>(dirs: &[P], options: &LoadOptions) -> Result<Vec<Prompt>> {
    use rayon::prelude::*;

    let filter = Filter::new(options)?;
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.exists() {
            log::debug!("Prompt directory {} does not exist", dir.display());
            continue;
        }

        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !(e.file_type().is_dir() && filter.is_ignored(e.path())));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_not_found(&e) => continue,
                Err(source) => {
                    return Err(PromptError::Walk {
                        path: dir.to_path_buf(),
                        source,
                    });
                }
            };

            let Some(path) = filter.accept(&entry) else {
                continue;
            };
            let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if seen.insert(key) {
                paths.push(path);
            }
        }
    }

    log::debug!("Found {} prompt files in {} directories", paths.len(), dirs.len());

    paths
        .into_par_iter()
        .map(|path| {
            let bytes = fs::read(&path).map_err(|source| PromptError::Read {
                path: path.clone(),
                source,
            })?;
            Ok(Prompt::parse(&path, &String::from_utf8_lossy(&bytes)))
        })
        .collect()
}

fn is_not_found(error: &walkdir::Error) -> bool {
    error
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PromptDir;

    fn default_options() -> LoadOptions {
        LoadOptions {
            extensions: vec![".md".into(), ".txt".into()],
            ignore_patterns: vec![".DS_Store".into()],
            max_file_size: 128 * 1024,
        }
    }

    fn names(prompts: &[Prompt]) -> Vec<&str> {
        prompts.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_loads_nested_prompts_in_order() {
        let dir = PromptDir::new();
        dir.write("b.md", "second");
        dir.write("a.txt", "first");
        dir.write("nested/c.md", "---\ntags: x\n---\nthird");

        let prompts = load_from_dirs(&[dir.path()], &default_options()).unwrap();
        assert_eq!(names(&prompts), vec!["a", "b", "c"]);
        assert_eq!(prompts[2].tags, vec!["x"]);
        assert_eq!(prompts[2].content, "third");
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        let dir = PromptDir::new();
        dir.write("upper.MD", "x");
        dir.write("script.sh", "x");
        dir.write("plain.txt", "x");

        let prompts = load_from_dirs(&[dir.path()], &default_options()).unwrap();
        assert_eq!(names(&prompts), vec!["plain", "upper"]);
    }

    #[test]
    fn test_empty_extension_list_allows_everything() {
        let dir = PromptDir::new();
        dir.write("script.sh", "x");
        let options = LoadOptions {
            extensions: Vec::new(),
            ..default_options()
        };
        let prompts = load_from_dirs(&[dir.path()], &options).unwrap();
        assert_eq!(names(&prompts), vec!["script"]);
    }

    #[test]
    fn test_ignore_patterns_skip_files_and_directories() {
        let dir = PromptDir::new();
        dir.write("keep.md", "x");
        dir.write("draft-one.md", "x");
        dir.write("archive/old.md", "x");
        let options = LoadOptions {
            ignore_patterns: vec!["draft-*".into(), "archive".into()],
            ..default_options()
        };

        let prompts = load_from_dirs(&[dir.path()], &options).unwrap();
        assert_eq!(names(&prompts), vec!["keep"]);
    }

    #[test]
    fn test_large_files_are_skipped() {
        let dir = PromptDir::new();
        dir.write("small.md", "tiny");
        dir.write("large.md", &"x".repeat(2048));
        let options = LoadOptions {
            max_file_size: 1024,
            ..default_options()
        };

        let prompts = load_from_dirs(&[dir.path()], &options).unwrap();
        assert_eq!(names(&prompts), vec!["small"]);
    }

    #[test]
    fn test_missing_directory_is_ignored() {
        let dir = PromptDir::new();
        dir.write("only.md", "x");
        let missing = dir.path().join("does-not-exist");

        let prompts = load_from_dirs(&[missing, dir.path().to_path_buf()], &default_options()).unwrap();
        assert_eq!(names(&prompts), vec!["only"]);
    }

    #[test]
    fn test_overlapping_directories_load_once() {
        let dir = PromptDir::new();
        dir.write("sub/one.md", "x");

        let dirs = [dir.path().to_path_buf(), dir.path().join("sub")];
        let prompts = load_from_dirs(&dirs, &default_options()).unwrap();
        assert_eq!(names(&prompts), vec!["one"]);
    }

    #[test]
    fn test_invalid_ignore_pattern_is_an_error() {
        let dir = PromptDir::new();
        let options = LoadOptions {
            ignore_patterns: vec!["[".into()],
            ..default_options()
        };
        let result = load_from_dirs(&[dir.path()], &options);
        assert!(matches!(result, Err(PromptError::Pattern { .. })));
    }

    #[test]
    fn test_non_utf8_content_is_lossy() {
        let dir = PromptDir::new();
        dir.write_bytes("bin.md", &[b'h', b'i', 0xff]);
        let prompts = load_from_dirs(&[dir.path()], &default_options()).unwrap();
        assert_eq!(prompts[0].content, "hi\u{fffd}");
    }
}
