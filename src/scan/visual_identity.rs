//! Visual identity scanner: frameworks, design tokens, brand assets.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::ScanConfig;
use super::source::FileSource;
use super::ScanDomain;
use crate::evidence::{extract, AssetHit, ContentOptions, Evidence, ExtractOptions, FrameworkHit, TokenHit};
use crate::patterns::visual_identity;

/// Grouped visual identity hints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualIdentity {
    pub frameworks: Vec<FrameworkHit>,
    pub tokens: Vec<TokenHit>,
    pub assets: Vec<AssetHit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualIdentityReport {
    pub visual_identity: VisualIdentity,
}

/// Collect visual identity hints.
///
/// Frameworks are recognized from the relative path and assets from the file
/// name, so binary images still count. Tokens come from text content.
pub fn scan(config: &ScanConfig) -> VisualIdentityReport {
    let source = FileSource::new(config, visual_identity::INCLUDE, visual_identity::EXCLUDE);
    let opts = ExtractOptions {
        content: ContentOptions {
            context_chars: visual_identity::CONTEXT_CHARS,
            first_match_only: false,
            max_snippet_chars: config.max_snippet_chars,
        },
        ..ExtractOptions::default()
    };

    let mut found = VisualIdentity::default();
    let mut visited = 0usize;
    for file in source.files() {
        visited += 1;
        for pattern in visual_identity::FRAMEWORK_SET.matching_path(&file.relative) {
            let ev = Evidence::new(&file.path, &pattern.category, 1, 1, &file.relative);
            found.frameworks.push(FrameworkHit::from(&ev));
        }

        if visual_identity::is_brand_asset(&file.file_name) {
            let ev = Evidence::new(&file.path, "brand_asset", 1, 1, &file.file_name);
            found.assets.push(AssetHit::from(&ev));
        }

        let Some(content) = file.read_text(config.max_file_bytes) else {
            continue;
        };
        found.tokens.extend(
            extract(&file.path, &content, &visual_identity::TOKEN_SET, &opts)
                .iter()
                .map(TokenHit::from),
        );
    }

    info!(
        domain = %ScanDomain::VisualIdentity,
        files = visited,
        frameworks = found.frameworks.len(),
        tokens = found.tokens.len(),
        assets = found.assets.len(),
        "scan complete"
    );
    VisualIdentityReport {
        visual_identity: found,
    }
}
