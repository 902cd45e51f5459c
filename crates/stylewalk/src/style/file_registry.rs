//! Stylesheet registry for file-based style loading.
//!
//! [`StylesheetRegistry`] collects stylesheets from inline YAML and from
//! directories, then [`build`](StylesheetRegistry::build)s one [`Styles`]
//! repository out of them.
//!
//! # Resolution Rules
//!
//! 1. **Inline stylesheets** (added via [`StylesheetRegistry::add_inline`])
//!    have highest priority; a later inline sheet overrides an earlier one.
//! 2. **Directories** are searched in registration order. When two
//!    directories define the same style, the first directory wins.
//! 3. Inside one directory, files are read in path order and the first
//!    definition of a style wins.
//!
//! # Supported Extensions
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.yaml` |
//! | 2 (lowest) | `.yml` |
//!
//! If `themes.yaml` and `themes.yml` sit side by side, only `themes.yaml`
//! is read.
//!
//! # Example
//!
//! ```rust,ignore
//! use stylewalk::StylesheetRegistry;
//!
//! let mut registry = StylesheetRegistry::new();
//! registry.add_dir("./res/styles")?;
//! registry.add_inline("overrides", "AppTheme: Theme.AppCompat.Light")?;
//!
//! let styles = registry.build()?;
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::registry::Styles;
use crate::error::StylesheetError;

/// Recognized stylesheet file extensions in priority order.
pub const STYLESHEET_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// Registry of stylesheet sources.
#[derive(Debug, Default, Clone)]
pub struct StylesheetRegistry {
    inline: Vec<(String, Styles)>,
    dirs: Vec<PathBuf>,
}

impl StylesheetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an inline stylesheet. The YAML is parsed immediately.
    pub fn add_inline(&mut self, name: &str, yaml: &str) -> Result<(), StylesheetError> {
        let styles = Styles::from_yaml(yaml)?;
        tracing::debug!(name, styles = styles.len(), "added inline stylesheet");
        self.inline.push((name.to_string(), styles));
        Ok(())
    }

    /// Adds a directory to search for stylesheet files.
    ///
    /// Files are read when [`build`](Self::build) is called, so edits made
    /// after registration are picked up.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<(), StylesheetError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(StylesheetError::Load {
                message: format!("{} is not a directory", path.display()),
            });
        }
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    /// Names of the inline stylesheets, in registration order.
    pub fn inline_names(&self) -> Vec<&str> {
        self.inline.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Stylesheet files that [`build`](Self::build) would read, in read order.
    pub fn files(&self) -> Result<Vec<PathBuf>, StylesheetError> {
        let mut files = Vec::new();
        for dir in &self.dirs {
            files.extend(stylesheet_files(dir)?);
        }
        Ok(files)
    }

    /// Reads every source and merges them into one repository.
    pub fn build(&self) -> Result<Styles, StylesheetError> {
        let mut styles = Styles::new();

        for file in self.files()? {
            styles.merge_missing(Styles::from_file(&file)?);
        }

        for (_, inline) in &self.inline {
            styles = styles.merge(inline.clone());
        }

        tracing::debug!(
            dirs = self.dirs.len(),
            inline = self.inline.len(),
            styles = styles.len(),
            "built style repository"
        );
        Ok(styles)
    }
}

/// Returns the extension priority for a filename (lower = higher priority).
///
/// Returns `usize::MAX` if no extension matches.
pub fn extension_priority(name: &str, extensions: &[&str]) -> usize {
    extensions
        .iter()
        .position(|ext| name.ends_with(ext))
        .unwrap_or(usize::MAX)
}

/// Strips a recognized extension from a filename.
pub fn strip_extension(name: &str, extensions: &[&str]) -> String {
    for ext in extensions {
        if let Some(base) = name.strip_suffix(ext) {
            return base.to_string();
        }
    }
    name.to_string()
}

/// Stylesheet files under `root`, one per base name, sorted by path.
fn stylesheet_files(root: &Path) -> Result<Vec<PathBuf>, StylesheetError> {
    let mut found = Vec::new();
    walk_dir_recursive(root, &mut found)?;

    // base path -> (priority, file)
    let mut best: BTreeMap<PathBuf, (usize, PathBuf)> = BTreeMap::new();
    for file in found {
        let Some(file_name) = file.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let priority = extension_priority(file_name, STYLESHEET_EXTENSIONS);
        if priority == usize::MAX {
            continue;
        }
        let base = file.with_file_name(strip_extension(file_name, STYLESHEET_EXTENSIONS));
        match best.get(&base) {
            Some((existing, _)) if *existing <= priority => {}
            _ => {
                best.insert(base, (priority, file));
            }
        }
    }

    Ok(best.into_values().map(|(_, file)| file).collect())
}

/// Recursive helper for directory walking.
///
/// Symlinked directories are skipped, so a link back into the tree can't loop.
/// Symlinked files are read.
fn walk_dir_recursive(current: &Path, files: &mut Vec<PathBuf>) -> Result<(), StylesheetError> {
    let entries = std::fs::read_dir(current).map_err(|e| StylesheetError::Load {
        message: format!("Failed to read {}: {}", current.display(), e),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| StylesheetError::Load {
            message: format!("Failed to read {}: {}", current.display(), e),
        })?;
        let path = entry.path();
        let is_link = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);

        if is_link && path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping symlinked directory");
        } else if path.is_dir() {
            walk_dir_recursive(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }

    Ok(())
}
