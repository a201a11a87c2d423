//! Multi-pattern search over a repository with a per-file match cap.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::ScanConfig;
use super::source::FileSource;
use crate::evidence::{extract, ExtractOptions, LineOptions, RangedMatch};
use crate::patterns::{generic, PatternSet};

/// Result of [`search_repo_patterns`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub matches: Vec<RangedMatch>,
}

/// Search the repository for caller-supplied regexes.
///
/// Every line of every visited file is tested against each pattern in order.
/// A file stops contributing once it has produced `max_matches_per_file`
/// records, counted across all patterns. Invalid patterns are dropped.
///
/// # Arguments
/// * `config` - Root, globs and caps; empty globs use the generic defaults
/// * `patterns` - Regex sources; each source doubles as its category
///
/// # Returns
/// `{"matches": [...]}` with integer line bounds
pub fn search_repo_patterns<S: AsRef<str>>(config: &ScanConfig, patterns: &[S]) -> SearchReport {
    let set = PatternSet::from_sources(patterns);
    let source = FileSource::new(config, generic::INCLUDE, generic::EXCLUDE);
    let opts = ExtractOptions {
        line: LineOptions {
            context_lines: config.context_lines,
            max_matches: Some(config.max_matches_per_file),
            every_occurrence: false,
            max_snippet_chars: config.max_snippet_chars,
        },
        ..ExtractOptions::default()
    };

    let mut matches = Vec::new();
    let mut visited = 0usize;
    if !set.is_empty() {
        for file in source.files() {
            visited += 1;
            let Some(content) = file.read_text(config.max_file_bytes) else {
                continue;
            };
            matches.extend(
                extract(&file.path, &content, &set, &opts)
                    .iter()
                    .map(RangedMatch::from),
            );
        }
    }

    info!(
        root = %source.root().display(),
        files = visited,
        matches = matches.len(),
        "pattern search complete"
    );
    SearchReport { matches }
}
