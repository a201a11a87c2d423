//! Glob-based include/exclude matching and directory pruning.
//!
//! Paths are always matched relative to the scan root with `/` separators.
//! `*` stays within one path segment, `**` spans any number of segments.
//! Exclusion is evaluated first and always wins over inclusion.

use glob::{MatchOptions, Pattern};
use std::path::Path;
use tracing::warn;

use crate::error::ExcavateError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// An ordered list of compiled globs
#[derive(Debug, Clone, Default)]
pub struct GlobList {
    patterns: Vec<Pattern>,
}

impl GlobList {
    /// Compile every glob, failing on the first invalid one
    pub fn try_compile<S: AsRef<str>>(globs: &[S]) -> Result<Self, ExcavateError> {
        let patterns = globs
            .iter()
            .map(|g| {
                Pattern::new(g.as_ref()).map_err(|source| ExcavateError::InvalidGlob {
                    pattern: g.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Compile the valid globs and drop the rest with a warning
    pub fn compile<S: AsRef<str>>(globs: &[S]) -> Self {
        let patterns = globs
            .iter()
            .filter_map(|g| match Pattern::new(g.as_ref()) {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!(glob = g.as_ref(), error = %e, "dropping invalid glob");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when any glob matches the relative path
    pub fn matches(&self, relative_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(relative_path, MATCH_OPTIONS))
    }
}

/// Match a relative path against a list of glob strings.
///
/// Invalid globs never match.
pub fn matches<S: AsRef<str>>(relative_path: &str, globs: &[S]) -> bool {
    GlobList::compile(globs).matches(relative_path)
}

/// Decide whether a directory must not be descended into.
///
/// The directory path is tested with a trailing `/` so that a directory-only
/// exclude such as `**/node_modules/**` prunes the whole subtree.
pub fn should_prune(relative_dir: &str, exclude: &GlobList) -> bool {
    if relative_dir.is_empty() {
        return false;
    }
    let with_separator = if relative_dir.ends_with('/') {
        relative_dir.to_string()
    } else {
        format!("{relative_dir}/")
    };
    exclude.matches(&with_separator)
}

/// Convert a path relative to the root into the `/`-separated form globs see
pub fn normalize_relative(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Combined include/exclude filter used by the walker
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: GlobList,
    exclude: GlobList,
    empty_include_matches_all: bool,
}

impl PathFilter {
    /// Filter for scanners: an empty include list selects nothing
    pub fn for_scanning<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Self {
        Self {
            include: GlobList::compile(include),
            exclude: GlobList::compile(exclude),
            empty_include_matches_all: false,
        }
    }

    /// Filter for the plain file lister: an empty include list selects everything
    pub fn for_listing<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Self {
        Self {
            include: GlobList::compile(include),
            exclude: GlobList::compile(exclude),
            empty_include_matches_all: true,
        }
    }

    /// True when the directory subtree must be skipped entirely
    pub fn prunes_dir(&self, relative_dir: &str) -> bool {
        should_prune(relative_dir, &self.exclude)
    }

    /// True when the file is excluded or not included
    pub fn accepts_file(&self, relative_path: &str) -> bool {
        if self.exclude.matches(relative_path) {
            return false;
        }
        if self.include.is_empty() {
            return self.empty_include_matches_all;
        }
        self.include.matches(relative_path)
    }
}
