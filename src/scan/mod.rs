//! Scan orchestration: one entry point per scan domain.
//!
//! Each scanner wires a [`FileSource`] (walk, filter, file cap) to a domain
//! pattern table and returns a serializable report whose single top-level
//! key names the domain. Scanners never fail: unreadable files are skipped
//! and invalid patterns were already dropped at compile time.

pub mod api_contracts;
pub mod config;
pub mod db_schema;
pub mod endpoints;
pub mod generic;
pub mod lenient;
pub mod source;
pub mod ui_routes;
pub mod validators;
pub mod visual_identity;

pub use config::ScanConfig;
pub use generic::{search_repo_patterns, SearchReport};
pub use lenient::{parse_lenient, search_lenient, SearchRequest};
pub use source::{FileSource, SourceFile};

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::evidence::{extract, CategorizedMatch, ExtractOptions};
use crate::patterns::PatternSet;

/// The specialized scan domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanDomain {
    DbSchema,
    Endpoints,
    UiRoutes,
    VisualIdentity,
    Validators,
    ApiContracts,
}

impl ScanDomain {
    pub const ALL: [ScanDomain; 6] = [
        ScanDomain::DbSchema,
        ScanDomain::Endpoints,
        ScanDomain::UiRoutes,
        ScanDomain::VisualIdentity,
        ScanDomain::Validators,
        ScanDomain::ApiContracts,
    ];

    /// Top-level key of this domain's report
    pub fn report_key(&self) -> &'static str {
        match self {
            ScanDomain::DbSchema => "db_schema_matches",
            ScanDomain::Endpoints => "endpoint_matches",
            ScanDomain::UiRoutes => "ui_route_matches",
            ScanDomain::VisualIdentity => "visual_identity",
            ScanDomain::Validators => "validator_matches",
            ScanDomain::ApiContracts => "api_contract_matches",
        }
    }

    /// Run the domain's scanner and serialize its report
    pub fn run(&self, config: &ScanConfig) -> Value {
        let report = match self {
            ScanDomain::DbSchema => serde_json::to_value(db_schema::scan(config)),
            ScanDomain::Endpoints => serde_json::to_value(endpoints::scan(config)),
            ScanDomain::UiRoutes => serde_json::to_value(ui_routes::scan(config)),
            ScanDomain::VisualIdentity => serde_json::to_value(visual_identity::scan(config)),
            ScanDomain::Validators => serde_json::to_value(validators::scan(config)),
            ScanDomain::ApiContracts => serde_json::to_value(api_contracts::scan(config)),
        };
        // Reports are plain structs of strings and integers
        report.unwrap_or_else(|_| serde_json::json!({ self.report_key(): [] }))
    }
}

impl fmt::Display for ScanDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanDomain::DbSchema => "db-schema",
            ScanDomain::Endpoints => "endpoints",
            ScanDomain::UiRoutes => "ui-routes",
            ScanDomain::VisualIdentity => "visual-identity",
            ScanDomain::Validators => "validators",
            ScanDomain::ApiContracts => "api-contracts",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ScanDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ScanDomain::ALL
            .into_iter()
            .find(|d| d.to_string() == normalized)
            .ok_or_else(|| {
                let names: Vec<String> = ScanDomain::ALL.iter().map(|d| d.to_string()).collect();
                format!("unknown scan domain '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Shared loop for scanners that apply one table to the content of every file
fn scan_content(
    domain: ScanDomain,
    config: &ScanConfig,
    source: &FileSource,
    set: &PatternSet,
    opts: &ExtractOptions,
) -> Vec<CategorizedMatch> {
    let mut matches = Vec::new();
    let mut visited = 0usize;
    for file in source.files() {
        visited += 1;
        let Some(content) = file.read_text(config.max_file_bytes) else {
            continue;
        };
        matches.extend(
            extract(&file.path, &content, set, opts)
                .iter()
                .map(CategorizedMatch::from),
        );
    }
    info!(%domain, files = visited, matches = matches.len(), "scan complete");
    matches
}
