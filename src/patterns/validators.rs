//! Validation library rules (Zod, Yup, Joi, Pydantic).

use std::sync::LazyLock;

use super::{PatternSet, PatternSpec};

pub const INCLUDE: &[&str] = &["**/*.ts", "**/*.tsx", "**/*.js", "**/*.jsx", "**/*.py"];

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

pub const CONTEXT_CHARS: usize = 160;

pub const PATTERNS: &[PatternSpec] = &[
    PatternSpec::per_content(
        "zod_schema",
        r"(?i)\bz\.(object|string|number|boolean|array|enum|union|literal)\(",
    ),
    PatternSpec::per_content(
        "zod_rule",
        r"(?i)\.min\(|\.max\(|\.regex\(|\.length\(|\.email\(\)|\.url\(\)|\.nonempty\(\)",
    ),
    PatternSpec::per_content("zod_refine", r"(?i)\.refine\("),
    PatternSpec::per_content(
        "yup_schema",
        r"(?i)\byup\.(object|string|number|bool|array|mixed)\(\)",
    ),
    PatternSpec::per_content(
        "yup_rule",
        r"(?i)\.required\(\)|\.min\(|\.max\(|\.matches\(|\.email\(\)|\.url\(\)",
    ),
    PatternSpec::per_content(
        "joi_schema",
        r"(?i)\bJoi\.(object|string|number|boolean|array)\(\)",
    ),
    PatternSpec::per_content(
        "joi_rule",
        r"(?i)\.min\(|\.max\(|\.regex\(|\.pattern\(|\.required\(\)",
    ),
    PatternSpec::per_content("pydantic_model", r"class\s+\w+\(BaseModel\):"),
    PatternSpec::per_content(
        "pydantic_field",
        r"(?i)\bField\s*\(.*?(ge|gt|le|lt|min_length|max_length|regex)\s*=\s*",
    ),
    PatternSpec::per_content("pydantic_validator", r"(?i)@validator\(\w*\)"),
];

pub static SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(PATTERNS));
