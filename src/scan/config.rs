//! Scan parameters shared by every scanner.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ExcavateError;
use crate::evidence::extract::DEFAULT_MAX_SNIPPET_CHARS;
use crate::filter::GlobList;

pub const DEFAULT_MAX_FILES: usize = 2000;
pub const DEFAULT_MAX_MATCHES_PER_FILE: usize = 5;
pub const DEFAULT_CONTEXT_LINES: usize = 2;
pub const DEFAULT_MAX_FILE_BYTES: u64 = 8 * 1024 * 1024;

/// Upper bound for `context_lines`
pub const MAX_CONTEXT_LINES: usize = 50;

/// Parameters for one scanner invocation.
///
/// Empty `include`/`exclude` lists mean "use the scan domain's defaults".
/// `extra_exclude` is appended to whichever exclude list applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub extra_exclude: Vec<String>,
    pub max_files: usize,
    pub max_matches_per_file: usize,
    pub context_lines: usize,
    pub max_file_bytes: u64,
    pub max_snippet_chars: usize,
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include: Vec::new(),
            exclude: Vec::new(),
            extra_exclude: Vec::new(),
            max_files: DEFAULT_MAX_FILES,
            max_matches_per_file: DEFAULT_MAX_MATCHES_PER_FILE,
            context_lines: DEFAULT_CONTEXT_LINES,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_snippet_chars: DEFAULT_MAX_SNIPPET_CHARS,
            follow_symlinks: false,
        }
    }
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_include<S: Into<String>>(mut self, globs: impl IntoIterator<Item = S>) -> Self {
        self.include = globs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude<S: Into<String>>(mut self, globs: impl IntoIterator<Item = S>) -> Self {
        self.exclude = globs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extra_exclude<S: Into<String>>(mut self, globs: impl IntoIterator<Item = S>) -> Self {
        self.extra_exclude = globs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_max_matches_per_file(mut self, max: usize) -> Self {
        self.max_matches_per_file = max;
        self
    }

    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    pub fn with_max_file_bytes(mut self, bytes: u64) -> Self {
        self.max_file_bytes = bytes;
        self
    }

    pub fn with_max_snippet_chars(mut self, chars: usize) -> Self {
        self.max_snippet_chars = chars;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Check value ranges and that every glob compiles
    pub fn validate(&self) -> Result<(), ExcavateError> {
        if self.context_lines > MAX_CONTEXT_LINES {
            return Err(ExcavateError::Config {
                field: "context_lines".to_string(),
                reason: format!("must be at most {MAX_CONTEXT_LINES}"),
            });
        }
        if self.max_snippet_chars == 0 {
            return Err(ExcavateError::Config {
                field: "max_snippet_chars".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.max_file_bytes == 0 {
            return Err(ExcavateError::Config {
                field: "max_file_bytes".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        GlobList::try_compile(&self.include)?;
        GlobList::try_compile(&self.exclude)?;
        GlobList::try_compile(&self.extra_exclude)?;
        Ok(())
    }

    /// Root as an absolute path; relative roots resolve against the working directory
    pub fn absolute_root(&self) -> PathBuf {
        absolute_or_self(&self.root)
    }

    /// Include globs, falling back to `defaults` when none were given
    pub fn include_or(&self, defaults: &[&str]) -> Vec<String> {
        or_defaults(&self.include, defaults)
    }

    /// Exclude globs, falling back to `defaults` when none were given, plus `extra_exclude`
    pub fn exclude_or(&self, defaults: &[&str]) -> Vec<String> {
        let mut globs = or_defaults(&self.exclude, defaults);
        globs.extend(self.extra_exclude.iter().cloned());
        globs
    }
}

pub(crate) fn or_defaults(globs: &[String], defaults: &[&str]) -> Vec<String> {
    if globs.is_empty() {
        defaults.iter().map(|g| g.to_string()).collect()
    } else {
        globs.to_vec()
    }
}

pub(crate) fn absolute_or_self(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
