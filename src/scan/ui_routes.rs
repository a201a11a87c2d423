//! Front-end routing scanner.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::ScanConfig;
use super::source::FileSource;
use super::ScanDomain;
use crate::evidence::{extract, CategorizedMatch, ContentOptions, Evidence, ExtractOptions};
use crate::patterns::ui_routes;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiRouteReport {
    pub ui_route_matches: Vec<CategorizedMatch>,
}

/// Find router definitions.
///
/// Next.js route files are reported from their path alone, before any
/// content match. Content patterns report only their first match per file.
pub fn scan(config: &ScanConfig) -> UiRouteReport {
    let source = FileSource::new(config, ui_routes::INCLUDE, ui_routes::EXCLUDE);
    let opts = ExtractOptions {
        content: ContentOptions {
            context_chars: ui_routes::CONTEXT_CHARS,
            first_match_only: true,
            max_snippet_chars: config.max_snippet_chars,
        },
        ..ExtractOptions::default()
    };

    let mut matches = Vec::new();
    let mut visited = 0usize;
    for file in source.files() {
        visited += 1;
        // Path is matched with a leading separator so root-level route dirs count
        if ui_routes::is_next_route_file(&format!("/{}", file.relative)) {
            let ev = Evidence::new(&file.path, ui_routes::NEXT_ROUTE_FILE, 1, 1, &file.relative);
            matches.push(CategorizedMatch::from(&ev));
        }

        let Some(content) = file.read_text(config.max_file_bytes) else {
            continue;
        };
        matches.extend(
            extract(&file.path, &content, &ui_routes::SET, &opts)
                .iter()
                .map(CategorizedMatch::from),
        );
    }
    info!(domain = %ScanDomain::UiRoutes, files = visited, matches = matches.len(), "scan complete");
    UiRouteReport {
        ui_route_matches: matches,
    }
}
