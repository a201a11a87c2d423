//! Front-end router definitions (Vue Router, React Router, Angular Router,
//! Next.js).
//!
//! Content patterns report only the first match per file. Next.js routes are
//! also recognised from the file path alone.

use std::sync::LazyLock;

use super::{PatternSet, PatternSpec};

pub const INCLUDE: &[&str] = &["**/*.ts", "**/*.tsx", "**/*.js", "**/*.jsx", "**/*.vue"];

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
    "**/*.stories.*",
    "**/*.css",
    "**/*.scss",
    "**/*.sass",
];

pub const CONTEXT_CHARS: usize = 200;

/// Category emitted for files whose path marks them as a Next.js route
pub const NEXT_ROUTE_FILE: &str = "next_route_file";

pub const PATTERNS: &[PatternSpec] = &[
    PatternSpec::per_content("vue_router_create", r"(?s)createRouter\s*\(.*?routes\s*:\s*\["),
    PatternSpec::per_content(
        "vue_route_entry",
        r#"(?s)\bpath\s*:\s*['"][^'"]+['"],\s*name\s*:\s*['"][^'"]+['"]"#,
    ),
    PatternSpec::per_content(
        "react_router_create",
        r"(?s)create(Browser|Memory|Hash)Router\s*\(\s*\[",
    ),
    PatternSpec::per_content("react_route_entry", r#"(?s)\bpath\s*:\s*['"][^'"]+['"]"#),
    PatternSpec::per_content("react_router_legacy", r"(?i)<Route\s+path="),
    PatternSpec::per_content("angular_routes", r"(?s)const\s+routes\s*:\s*Routes\s*=\s*\["),
    PatternSpec::per_content(
        "next_link",
        r#"(?s)from\s+['"]next/link['"]|export\s+const\s+dynamic\s*="#,
    ),
];

/// Patterns tested against the relative path rather than the content
pub const PATH_PATTERNS: &[PatternSpec] = &[
    PatternSpec::per_path("next_app_router", r"/app/.*(page|layout)\.(tsx?|jsx?)$"),
    PatternSpec::per_path("next_pages_router", r"/pages/.*\.(tsx?|jsx?)$"),
];

pub static SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(PATTERNS));

pub static PATH_SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(PATH_PATTERNS));

/// True when the relative path looks like a Next.js app or pages route
pub fn is_next_route_file(relative_path: &str) -> bool {
    PATH_SET.matching_path(relative_path).next().is_some()
}
