//! File enumeration under a scan budget, with guarded text reads.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::ScanConfig;
use crate::filter::PathFilter;
use crate::walker::{TreeWalker, WalkedFile};

/// Bytes inspected for a NUL when deciding whether a file is binary
pub const BINARY_SNIFF_BYTES: usize = 8 * 1024;

/// A candidate file handed to a scanner
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path, as reported in evidence
    pub path: String,
    /// Root-relative path with `/` separators
    pub relative: String,
    pub file_name: String,
    fs_path: PathBuf,
}

impl SourceFile {
    fn from_walked(file: WalkedFile) -> Self {
        Self {
            path: file.path.to_string_lossy().to_string(),
            file_name: file.file_name(),
            relative: file.relative,
            fs_path: file.path,
        }
    }

    /// Read the file as text, or `None` when it is too large, binary, or unreadable
    pub fn read_text(&self, max_bytes: u64) -> Option<String> {
        read_text(&self.fs_path, max_bytes)
    }
}

/// Read a file as lossy UTF-8 text under the size and binary guards
pub fn read_text(path: &Path, max_bytes: u64) -> Option<String> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable file");
            return None;
        }
    };
    if meta.len() > max_bytes {
        debug!(path = %path.display(), size = meta.len(), "skipping oversized file");
        return None;
    }

    let mut bytes = Vec::with_capacity(meta.len() as usize);
    let read = fs::File::open(path).and_then(|f| f.take(max_bytes).read_to_end(&mut bytes));
    if let Err(e) = read {
        debug!(path = %path.display(), error = %e, "skipping unreadable file");
        return None;
    }
    if is_binary(&bytes) {
        debug!(path = %path.display(), "skipping binary file");
        return None;
    }
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// True when a NUL byte appears within the sniffed prefix
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_BYTES).any(|&b| b == 0)
}

/// Enumerates the files one scanner may visit.
///
/// Exclusion prunes directories during the walk. At most `max_files`
/// accepted files are yielded, so no scanner opens more than that.
pub struct FileSource {
    walker: TreeWalker,
    max_files: usize,
}

impl FileSource {
    /// Build a source for `config`, filling empty glob lists from the domain defaults
    pub fn new(config: &ScanConfig, default_include: &[&str], default_exclude: &[&str]) -> Self {
        let include = config.include_or(default_include);
        let exclude = config.exclude_or(default_exclude);
        let filter = PathFilter::for_scanning(&include, &exclude);
        let walker = TreeWalker::new(config.absolute_root(), filter)
            .follow_symlinks(config.follow_symlinks);
        Self {
            walker,
            max_files: config.max_files,
        }
    }

    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    pub fn files(&self) -> impl Iterator<Item = SourceFile> + '_ {
        self.walker
            .walk()
            .take(self.max_files)
            .map(SourceFile::from_walked)
    }
}
