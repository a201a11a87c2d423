//! Database and ORM schema scanner.

use serde::{Deserialize, Serialize};

use super::config::ScanConfig;
use super::source::FileSource;
use super::{scan_content, ScanDomain};
use crate::evidence::{CategorizedMatch, ContentOptions, ExtractOptions};
use crate::patterns::db_schema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbSchemaReport {
    pub db_schema_matches: Vec<CategorizedMatch>,
}

/// Find model, entity, table and relation definitions (Prisma, TypeORM,
/// Sequelize, SQLAlchemy, Django, raw SQL). Every match is reported.
pub fn scan(config: &ScanConfig) -> DbSchemaReport {
    let source = FileSource::new(config, db_schema::INCLUDE, db_schema::EXCLUDE);
    let opts = ExtractOptions {
        content: ContentOptions {
            context_chars: db_schema::CONTEXT_CHARS,
            first_match_only: false,
            max_snippet_chars: config.max_snippet_chars,
        },
        ..ExtractOptions::default()
    };
    DbSchemaReport {
        db_schema_matches: scan_content(
            ScanDomain::DbSchema,
            config,
            &source,
            &db_schema::SET,
            &opts,
        ),
    }
}
