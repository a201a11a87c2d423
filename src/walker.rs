//! Depth-first repository traversal with directory pruning.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::filter::{normalize_relative, PathFilter};

/// A file accepted by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Root joined with the relative path
    pub path: PathBuf,
    /// Path relative to the root with `/` separators
    pub relative: String,
}

impl WalkedFile {
    /// File name component, empty when the path has none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Walks a directory tree, pruning excluded directories before descending.
///
/// Entries within one directory are visited in file-name order so repeated
/// walks over the same tree yield the same sequence.
pub struct TreeWalker {
    root: PathBuf,
    filter: PathFilter,
    follow_symlinks: bool,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>, filter: PathFilter) -> Self {
        Self {
            root: root.into(),
            filter,
            follow_symlinks: false,
        }
    }

    /// Follow symlinked directories, guarding against cycles by (device, inode)
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yield every accepted file under the root
    pub fn walk(&self) -> impl Iterator<Item = WalkedFile> + '_ {
        let root = self.root.as_path();
        let filter = &self.filter;
        let follow = self.follow_symlinks;
        let mut visited: HashSet<(u64, u64)> = HashSet::new();

        WalkDir::new(root)
            .follow_links(follow)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if !entry.file_type().is_dir() {
                    return true;
                }
                if entry.depth() > 0 {
                    let relative = relative_to(root, entry.path());
                    if filter.prunes_dir(&relative) {
                        debug!(dir = %relative, "pruned");
                        return false;
                    }
                }
                if follow {
                    if let Some(id) = dir_identity(entry) {
                        if !visited.insert(id) {
                            debug!(dir = %entry.path().display(), "already visited, skipping");
                            return false;
                        }
                    }
                }
                true
            })
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(e) => {
                    debug!(error = %e, "walk entry skipped");
                    None
                }
            })
            .filter(is_regular_file)
            .filter_map(move |entry| {
                let relative = relative_to(root, entry.path());
                filter.accepts_file(&relative).then(|| WalkedFile {
                    path: entry.path().to_path_buf(),
                    relative,
                })
            })
    }
}

fn relative_to(root: &Path, path: &Path) -> String {
    normalize_relative(path.strip_prefix(root).unwrap_or(path))
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(unix)]
fn dir_identity(entry: &DirEntry) -> Option<(u64, u64)> {
    use std::os::unix::fs::MetadataExt;
    entry.metadata().ok().map(|m| (m.dev(), m.ino()))
}

// walkdir's own loop detection covers platforms without inode numbers
#[cfg(not(unix))]
fn dir_identity(_entry: &DirEntry) -> Option<(u64, u64)> {
    None
}
