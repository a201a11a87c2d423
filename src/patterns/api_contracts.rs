//! API contracts: OpenAPI/Swagger documents and GraphQL schemas/operations.

use std::sync::LazyLock;

use super::{PatternSet, PatternSpec};

pub const INCLUDE: &[&str] = &[
    "**/*.yaml",
    "**/*.yml",
    "**/*.json",
    "**/*.graphql",
    "**/*.gql",
    "**/*.ts",
    "**/*.js",
];

pub const EXCLUDE: &[&str] = &[
    "**/.git/**",
    "**/node_modules/**",
    "**/.venv/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
    "**/coverage/**",
    "**/*.spec.*",
    "**/*.test.*",
];

pub const CONTEXT_CHARS: usize = 200;

/// Output category for an OpenAPI/Swagger document
pub const OPENAPI_PATHS: &str = "openapi_paths";

/// Output category for a GraphQL schema, operation, or `gql` tag
pub const GRAPHQL: &str = "graphql_schema_or_operation";

/// Maximum number of path keys listed for one OpenAPI document
pub const MAX_OPENAPI_PATHS: usize = 50;

/// Upper bound on the line range reported for an OpenAPI document
pub const MAX_OPENAPI_LINES: usize = 200;

/// Characters of raw content used when no path keys were found
pub const OPENAPI_FALLBACK_CHARS: usize = 400;

pub const PATTERNS: &[PatternSpec] = &[
    PatternSpec::per_content(
        "openapi_key",
        r#"(?i)\bopenapi"?\s*:\s*"?\d|\bswagger"?\s*:\s*"?\d"#,
    ),
    PatternSpec::per_content("openapi_path_yaml", r"(?m)^\s*/[^\s:]+\s*:\s*$"),
    PatternSpec::per_content("openapi_path_json", r#"(?m)"/(?:[^"]+)"\s*:\s*\{"#),
    PatternSpec::per_content(
        "graphql_type",
        r"(?i)\b(type|input|enum|interface|union|scalar)\s+\w+\s*\{",
    ),
    PatternSpec::per_content(
        "graphql_operation",
        r"(?i)\b(query|mutation|subscription)\s+\w*\s*\(",
    ),
    PatternSpec::per_content("gql_tag", r"(?i)gql\s*`[\s\S]*?`"),
    PatternSpec::per_content("graphql_schema_block", r"(?m)^\s*(extend\s+)?schema\s*\{"),
];

/// GraphQL patterns in priority order
pub const GRAPHQL_CATEGORIES: &[&str] = &["graphql_type", "graphql_operation", "gql_tag"];

/// Tried after [`GRAPHQL_CATEGORIES`], in `.graphql`/`.gql` files only
pub const GRAPHQL_FILE_CATEGORIES: &[&str] = &["graphql_schema_block"];

pub static SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(PATTERNS));

/// Extensions whose files may hold an OpenAPI document
pub fn is_openapi_candidate(relative_path: &str) -> bool {
    let lower = relative_path.to_lowercase();
    [".yaml", ".yml", ".json"].iter().any(|ext| lower.ends_with(ext))
}

/// Extensions of dedicated GraphQL files
pub fn is_graphql_file(relative_path: &str) -> bool {
    let lower = relative_path.to_lowercase();
    [".graphql", ".gql"].iter().any(|ext| lower.ends_with(ext))
}
