//! Visual identity hints: CSS frameworks, design tokens, and brand assets.

use std::sync::LazyLock;

use super::{PatternSet, PatternSpec};

pub const INCLUDE: &[&str] = &[
    "**/*.css",
    "**/*.scss",
    "**/*.sass",
    "**/*.less",
    "**/*.ts",
    "**/*.js",
    "**/*.tsx",
    "**/*.jsx",
    "**/tailwind.config.*",
    "**/theme.*",
    "**/*.svg",
    "**/*.png",
    "**/*.jpg",
    "**/*.jpeg",
    "**/*.ico",
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

pub const CONTEXT_CHARS: usize = 120;

/// Matched against the relative path; the category is the framework name
pub const FRAMEWORKS: &[PatternSpec] = &[
    PatternSpec::per_path("tailwind", r"(?i)tailwind\.config\.(js|ts)"),
    PatternSpec::per_path(
        "bootstrap",
        r#"(?i)bootstrap(\.min)?\.css|@import\s+['"]bootstrap"#,
    ),
    PatternSpec::per_path("material", r"(?i)@mui|material(-ui)?|@angular/material"),
    PatternSpec::per_path("chakra", r"(?i)@chakra-ui/|extendTheme\("),
    PatternSpec::per_path("ant-design", r"(?i)antd|ant-design"),
];

/// Matched against file content
pub const TOKENS: &[PatternSpec] = &[
    PatternSpec::per_content("css_var", r"(?i)--[a-z0-9\-_]+\s*:\s*[^;]+;"),
    PatternSpec::per_content("scss_var", r"(?i)\$[a-z0-9\-_]+\s*:\s*[^;]+;"),
    PatternSpec::per_content("font_face", r"(?i)@font-face|font-family\s*:\s*"),
    PatternSpec::per_content("color_hex", r"(?i)#[0-9a-fA-F]{3,8}"),
];

pub static FRAMEWORK_SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(FRAMEWORKS));

pub static TOKEN_SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(TOKENS));

/// Matched against the bare file name
pub const ASSET_NAMES: &[PatternSpec] = &[PatternSpec::per_path(
    "brand_asset",
    r"(?i)logo|brand|favicon|icon|logo-?\w*",
)];

static ASSET_SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(ASSET_NAMES));

/// True when a file name suggests a brand asset
pub fn is_brand_asset(file_name: &str) -> bool {
    ASSET_SET.matching_path(file_name).next().is_some()
}
