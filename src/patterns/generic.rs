//! Defaults for the caller-driven pattern search.

pub const INCLUDE: &[&str] = &[
    "**/*.py",
    "**/*.ts",
    "**/*.tsx",
    "**/*.js",
    "**/*.jsx",
    "**/*.go",
    "**/*.java",
    "**/*.cs",
    "**/*.rb",
    "**/*.php",
    "**/*.kt",
    "**/*.scala",
];

pub const EXCLUDE: &[&str] = super::BASE_EXCLUDE;

/// Patterns used when a lenient request carries none of its own
pub const FALLBACK_PATTERNS: &[&str] = &[
    r"export default",
    r"export const",
    r"export function",
    r"class\s+\w+",
    r"def\s+\w+\(",
];

/// Default include list of the plain file lister
pub const LIST_INCLUDE: &[&str] = &["**/*"];

/// Default exclude list of the plain file lister
pub const LIST_EXCLUDE: &[&str] = &["**/.git/**", "**/node_modules/**", "**/.venv/**"];
