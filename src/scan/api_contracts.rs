//! API contract scanner: OpenAPI/Swagger documents and GraphQL.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

use super::config::ScanConfig;
use super::source::{FileSource, SourceFile};
use super::ScanDomain;
use crate::evidence::snippet::{char_window, line_of_offset, take_chars, truncate_chars};
use crate::evidence::{CategorizedMatch, Evidence};
use crate::patterns::api_contracts::{
    self, GRAPHQL, GRAPHQL_CATEGORIES, GRAPHQL_FILE_CATEGORIES, OPENAPI_PATHS, SET,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiContractReport {
    pub api_contract_matches: Vec<CategorizedMatch>,
}

/// Find API contracts.
///
/// A YAML/JSON file declaring `openapi`/`swagger` yields one record listing
/// its sorted path keys. Any other file yields at most one GraphQL record,
/// taken from the first of: a type definition, an operation, a `gql` tag.
pub fn scan(config: &ScanConfig) -> ApiContractReport {
    let source = FileSource::new(config, api_contracts::INCLUDE, api_contracts::EXCLUDE);

    let mut matches = Vec::new();
    let mut visited = 0usize;
    for file in source.files() {
        visited += 1;
        let Some(content) = file.read_text(config.max_file_bytes) else {
            continue;
        };

        let evidence = if api_contracts::is_openapi_candidate(&file.relative) && is_openapi(&content) {
            Some(openapi_evidence(&file.path, &content, config.max_snippet_chars))
        } else {
            graphql_evidence(&file, &content, config.max_snippet_chars)
        };
        if let Some(ev) = evidence {
            matches.push(CategorizedMatch::from(&ev));
        }
    }

    info!(domain = %ScanDomain::ApiContracts, files = visited, matches = matches.len(), "scan complete");
    ApiContractReport {
        api_contract_matches: matches,
    }
}

fn is_openapi(content: &str) -> bool {
    SET.get("openapi_key")
        .is_some_and(|p| p.regex.is_match(content))
}

/// Sorted, de-duplicated path keys of an OpenAPI document
pub fn openapi_path_keys(content: &str) -> Vec<String> {
    let mut keys = BTreeSet::new();
    if let Some(yaml) = SET.get("openapi_path_yaml") {
        for m in yaml.regex.find_iter(content) {
            let key = m.as_str().trim().trim_end_matches(':').trim();
            keys.insert(key.to_string());
        }
    }
    if let Some(json) = SET.get("openapi_path_json") {
        for m in json.regex.find_iter(content) {
            if let Some(key) = m.as_str().split('"').nth(1) {
                keys.insert(key.to_string());
            }
        }
    }
    keys.into_iter().collect()
}

fn openapi_evidence(path: &str, content: &str, max_snippet_chars: usize) -> Evidence {
    let keys = openapi_path_keys(content);
    let listed: Vec<&str> = keys
        .iter()
        .take(api_contracts::MAX_OPENAPI_PATHS)
        .map(String::as_str)
        .collect();
    let snippet = if listed.is_empty() {
        take_chars(content, api_contracts::OPENAPI_FALLBACK_CHARS).to_string()
    } else {
        listed.join("\n")
    };
    let line_end = content
        .matches('\n')
        .count()
        .min(api_contracts::MAX_OPENAPI_LINES);
    Evidence::new(path, OPENAPI_PATHS, 1, line_end, truncate_chars(&snippet, max_snippet_chars))
}

fn graphql_evidence(file: &SourceFile, content: &str, max_snippet_chars: usize) -> Option<Evidence> {
    let file_only: &[&str] = if api_contracts::is_graphql_file(&file.relative) {
        GRAPHQL_FILE_CATEGORIES
    } else {
        &[]
    };
    let m = GRAPHQL_CATEGORIES
        .iter()
        .chain(file_only)
        .filter_map(|category| SET.get(category))
        .find_map(|p| p.regex.find(content))?;

    let window = char_window(content, m.start(), m.end(), api_contracts::CONTEXT_CHARS);
    let total_lines = content.lines().count();
    let line_start = line_of_offset(content, m.start()).min(total_lines.max(1));
    let line_end = (line_start + window.matches('\n').count()).min(total_lines);
    Some(Evidence::new(
        &file.path,
        GRAPHQL,
        line_start,
        line_end,
        truncate_chars(window.trim(), max_snippet_chars),
    ))
}
