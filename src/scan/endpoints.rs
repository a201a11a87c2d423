//! External endpoint scanner.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::ScanConfig;
use super::source::FileSource;
use super::ScanDomain;
use crate::evidence::{extract, CategorizedMatch, ExtractOptions, LineOptions};
use crate::patterns::endpoints;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointReport {
    pub endpoint_matches: Vec<CategorizedMatch>,
}

/// Find URLs and HTTP/WebSocket client calls.
///
/// Each occurrence on a line is reported separately, with the extracted
/// literal as `value` and the trimmed line as the snippet.
pub fn scan(config: &ScanConfig) -> EndpointReport {
    let source = FileSource::new(config, endpoints::INCLUDE, endpoints::EXCLUDE);
    let opts = ExtractOptions {
        line: LineOptions {
            context_lines: 0,
            max_matches: None,
            every_occurrence: true,
            max_snippet_chars: config.max_snippet_chars,
        },
        ..ExtractOptions::default()
    };

    let mut matches = Vec::new();
    let mut visited = 0usize;
    for file in source.files() {
        visited += 1;
        let Some(content) = file.read_text(config.max_file_bytes) else {
            continue;
        };
        matches.extend(
            extract(&file.path, &content, &endpoints::SET, &opts)
                .iter()
                .map(CategorizedMatch::from),
        );
    }
    info!(domain = %ScanDomain::Endpoints, files = visited, matches = matches.len(), "scan complete");
    EndpointReport {
        endpoint_matches: matches,
    }
}
