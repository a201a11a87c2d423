//! External endpoints and client usage: raw URLs, fetch, axios, got,
//! GraphQL, Socket.IO/WebSocket, and URL-like environment entries.
//!
//! Every pattern is per-line and records the extracted literal as the
//! evidence value.

use std::sync::LazyLock;

use super::{PatternSet, PatternSpec, ValueCapture};

pub const INCLUDE: &[&str] = &[
    "**/*.ts",
    "**/*.tsx",
    "**/*.js",
    "**/*.jsx",
    "**/*.py",
    "**/*.go",
    "**/*.java",
    "**/*.cs",
    "**/*.rb",
    "**/*.php",
    "**/*.yml",
    "**/*.yaml",
    "**/*.json",
    "**/.env*",
];

pub const EXCLUDE: &[&str] = super::BASE_EXCLUDE;

const URL: ValueCapture = ValueCapture::Group(1);

pub const PATTERNS: &[PatternSpec] = &[
    PatternSpec::per_line("http_url", r"(?i)https?://[\w./:?#%=&]+").capturing(ValueCapture::Whole),
    PatternSpec::per_line("fetch_literal", r#"(?i)\bfetch\s*\(\s*['"](https?://[^'"]+)['"]"#)
        .capturing(URL),
    PatternSpec::per_line("fetch_tmpl", r"(?i)\bfetch\s*\(\s*`(https?://[^`]+)`").capturing(URL),
    PatternSpec::per_line(
        "axios_create",
        r#"(?is)axios\.create\s*\(\s*\{[^}]*baseURL\s*:\s*['"](.*?)['"]"#,
    )
    .capturing(URL),
    PatternSpec::per_line(
        "axios_call_literal",
        r#"(?i)axios\.(get|post|put|delete|patch)\s*\(\s*['"](https?://[^'"]+)['"]"#,
    )
    .capturing(ValueCapture::Group(2)),
    PatternSpec::per_line(
        "axios_call_tmpl",
        r"(?i)axios\.(get|post|put|delete|patch)\s*\(\s*`(https?://[^`]+)`",
    )
    .capturing(ValueCapture::Group(2)),
    PatternSpec::per_line("got_literal", r#"(?i)\bgot\s*\(\s*['"](https?://[^'"]+)['"]"#)
        .capturing(URL),
    PatternSpec::per_line("graphql_http", r"(?i)/graphql(\?|$)").capturing(ValueCapture::Whole),
    PatternSpec::per_line(
        "socket_io",
        r#"(?i)io\s*\(\s*['"]((?:wss?:|https?://)[^'"]+)['"]"#,
    )
    .capturing(URL),
    PatternSpec::per_line(
        "websocket_new",
        r#"(?i)new\s+WebSocket\s*\(\s*['"](wss?://[^'"]+)['"]"#,
    )
    .capturing(URL),
    PatternSpec::per_line(
        "env_url",
        r#"(?i)(?:URL|ENDPOINT|BASE_URL|SOCKET_URL|WS_URL)\s*=\s*['"]((?:https?|ws)[^'"]+)['"]"#,
    )
    .capturing(URL),
];

pub static SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(PATTERNS));
