//! Lenient front end for [`search_repo_patterns`] that accepts messy payloads.
//!
//! Parsing is two-stage and total: a strict schema parse of the payload (an
//! object, or the first suitable object in an array), then a heuristic
//! extraction of a root path with the fallback pattern set.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

use super::config::{
    ScanConfig, DEFAULT_CONTEXT_LINES, DEFAULT_MAX_FILES, DEFAULT_MAX_MATCHES_PER_FILE,
    MAX_CONTEXT_LINES,
};
use super::generic::{search_repo_patterns, SearchReport};
use crate::patterns::generic::FALLBACK_PATTERNS;

static ROOT_HINT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"[A-Za-z]:\\\\[^"\n]+|/[^"\n\s]+"#).ok());

/// A search request as accepted by the lenient parser
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchRequest {
    pub repo_root: String,
    pub patterns: Vec<String>,
    #[serde(default)]
    pub include_globs: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_globs: Option<Vec<String>>,
    #[serde(default)]
    pub max_matches_per_file: Option<usize>,
    #[serde(default)]
    pub context_lines: Option<usize>,
    #[serde(default)]
    pub max_files: Option<usize>,
}

impl SearchRequest {
    /// Convert into a scan config, applying the generic search defaults
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig::new(&self.repo_root)
            .with_include(self.include_globs.clone().unwrap_or_default())
            .with_exclude(self.exclude_globs.clone().unwrap_or_default())
            .with_max_matches_per_file(
                self.max_matches_per_file
                    .unwrap_or(DEFAULT_MAX_MATCHES_PER_FILE),
            )
            .with_context_lines(self.context_lines.unwrap_or(DEFAULT_CONTEXT_LINES))
            .with_max_files(self.max_files.unwrap_or(DEFAULT_MAX_FILES))
    }
}

/// Strict stage: the payload must be JSON holding `repo_root` and `patterns`
pub fn try_parse(payload: &str) -> Option<SearchRequest> {
    let value: Value = serde_json::from_str(payload).ok()?;
    match value {
        Value::Object(_) => parse_object(value),
        Value::Array(items) => items.into_iter().find_map(parse_object),
        _ => None,
    }
}

fn parse_object(value: Value) -> Option<SearchRequest> {
    let obj = value.as_object()?;
    if !obj.contains_key("repo_root") || !obj.contains_key("patterns") {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Heuristic stage: first path-like token as root (`.` if none), fallback patterns
pub fn heuristic_extract(payload: &str) -> SearchRequest {
    let repo_root = ROOT_HINT
        .as_ref()
        .and_then(|re| re.find(payload))
        .map_or_else(|| ".".to_string(), |m| m.as_str().to_string());
    SearchRequest {
        repo_root,
        patterns: FALLBACK_PATTERNS.iter().map(|p| p.to_string()).collect(),
        include_globs: None,
        exclude_globs: None,
        max_matches_per_file: None,
        context_lines: None,
        max_files: None,
    }
}

/// Parse any payload into a usable request; never fails
pub fn parse_lenient(payload: &str) -> SearchRequest {
    try_parse(payload).unwrap_or_else(|| {
        debug!("payload not a structured request, using heuristic extraction");
        heuristic_extract(payload)
    })
}

/// Run a generic search from an arbitrary payload
pub fn search_lenient(payload: &str) -> SearchReport {
    let request = parse_lenient(payload);
    let mut config = request.to_config();
    if config.context_lines > MAX_CONTEXT_LINES {
        config.context_lines = DEFAULT_CONTEXT_LINES;
    }
    search_repo_patterns(&config, &request.patterns)
}
