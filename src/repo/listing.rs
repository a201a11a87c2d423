//! Repository file listing with extension statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::filter::PathFilter;
use crate::patterns::generic::{LIST_EXCLUDE, LIST_INCLUDE};
use crate::scan::config::{absolute_or_self, or_defaults};
use crate::walker::TreeWalker;

pub const DEFAULT_LIST_MAX_FILES: usize = 5000;

/// Number of extensions reported in a listing summary
pub const EXT_TOP: usize = 10;

/// Key used for files without an extension
pub const NO_EXT: &str = "<no_ext>";

/// Listing parameters; empty glob lists use the lister defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub max_files: usize,
    pub output_file: Option<PathBuf>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            max_files: DEFAULT_LIST_MAX_FILES,
            output_file: None,
        }
    }
}

/// Full listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    pub files: Vec<String>,
    pub extensions: BTreeMap<String, usize>,
    pub count: usize,
}

/// Short summary returned when the full listing was written to a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub message: String,
    pub output_file: String,
    pub count: usize,
    pub ext_top: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResult {
    Full(FileListing),
    Summary(ListingSummary),
}

impl FileListing {
    /// Extensions by descending count, ties by name, at most `n`
    pub fn top_extensions(&self, n: usize) -> Vec<(String, usize)> {
        let mut top: Vec<(String, usize)> = self
            .extensions
            .iter()
            .map(|(ext, count)| (ext.clone(), *count))
            .collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top.truncate(n);
        top
    }
}

/// List files under `root`.
///
/// A missing root yields an empty listing. With `output_file` set the full
/// listing is written there and only a summary is returned; if the write
/// fails the full listing is returned instead.
pub fn list_repository_files(root: &Path, opts: &ListOptions) -> ListResult {
    let listing = collect(root, opts);
    info!(root = %root.display(), count = listing.count, "listed repository files");

    let Some(output_file) = &opts.output_file else {
        return ListResult::Full(listing);
    };
    match write_listing(output_file, &listing) {
        Ok(()) => ListResult::Summary(ListingSummary {
            message: "files written".to_string(),
            output_file: output_file.to_string_lossy().to_string(),
            count: listing.count,
            ext_top: listing.top_extensions(EXT_TOP),
        }),
        Err(e) => {
            warn!(path = %output_file.display(), error = %e, "could not write listing, returning inline");
            ListResult::Full(listing)
        }
    }
}

fn collect(root: &Path, opts: &ListOptions) -> FileListing {
    let include = or_defaults(&opts.include, LIST_INCLUDE);
    let exclude = or_defaults(&opts.exclude, LIST_EXCLUDE);
    let walker = TreeWalker::new(absolute_or_self(root), PathFilter::for_listing(&include, &exclude));

    let files: Vec<String> = walker
        .walk()
        .take(opts.max_files)
        .map(|f| f.path.to_string_lossy().to_string())
        .collect();

    let mut extensions = BTreeMap::new();
    for file in &files {
        *extensions.entry(extension_key(Path::new(file))).or_insert(0) += 1;
    }
    FileListing {
        count: files.len(),
        files,
        extensions,
    }
}

/// Lower-cased `.ext`, or `<no_ext>`
pub fn extension_key(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_else(|| NO_EXT.to_string())
}

fn write_listing(path: &Path, listing: &FileListing) -> std::io::Result<()> {
    let json = serde_json::to_string(listing)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join("src/main.PY"), "").unwrap();
        fs::write(root.join("src/util.py"), "").unwrap();
        fs::write(root.join("Makefile"), "").unwrap();
        fs::write(root.join(".git/objects/abc"), "").unwrap();
        temp
    }

    #[test]
    fn test_extension_key() {
        assert_eq!(extension_key(Path::new("/a/b.TS")), ".ts");
        assert_eq!(extension_key(Path::new("/a/Makefile")), "<no_ext>");
        assert_eq!(extension_key(Path::new("/a/.env")), "<no_ext>");
    }

    #[test]
    fn test_list_defaults_skip_git() {
        let temp = create_repo();
        let ListResult::Full(listing) = list_repository_files(temp.path(), &ListOptions::default()) else {
            panic!("expected full listing");
        };
        assert_eq!(listing.count, 3);
        assert_eq!(listing.extensions.get(".py"), Some(&2));
        assert_eq!(listing.extensions.get("<no_ext>"), Some(&1));
        assert!(listing.files.iter().all(|f| !f.contains(".git")));
    }

    #[test]
    fn test_list_caps_max_files() {
        let temp = create_repo();
        let opts = ListOptions {
            max_files: 2,
            ..ListOptions::default()
        };
        let ListResult::Full(listing) = list_repository_files(temp.path(), &opts) else {
            panic!("expected full listing");
        };
        assert_eq!(listing.count, 2);
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let result = list_repository_files(&temp.path().join("nope"), &ListOptions::default());
        assert_eq!(result, ListResult::Full(FileListing::default()));
    }

    #[test]
    fn test_list_with_output_file_returns_summary() {
        let temp = create_repo();
        let out = temp.path().join("listing.json");
        let opts = ListOptions {
            output_file: Some(out.clone()),
            ..ListOptions::default()
        };

        let ListResult::Summary(summary) = list_repository_files(temp.path(), &opts) else {
            panic!("expected summary");
        };
        assert_eq!(summary.message, "files written");
        assert_eq!(summary.count, 3);
        assert_eq!(summary.ext_top[0], (".py".to_string(), 2));

        let written: FileListing = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.count, 3);
    }

    #[test]
    fn test_list_unwritable_output_falls_back_inline() {
        let temp = create_repo();
        let opts = ListOptions {
            output_file: Some(temp.path().join("missing/dir/listing.json")),
            ..ListOptions::default()
        };
        assert!(matches!(
            list_repository_files(temp.path(), &opts),
            ListResult::Full(_)
        ));
    }

    #[test]
    fn test_summary_serializes_ext_top_as_pairs() {
        let summary = ListingSummary {
            message: "files written".to_string(),
            output_file: "/tmp/x.json".to_string(),
            count: 1,
            ext_top: vec![(".rs".to_string(), 1)],
        };
        let value = serde_json::to_value(ListResult::Summary(summary)).unwrap();
        assert_eq!(value["ext_top"], serde_json::json!([[".rs", 1]]));
    }
}
