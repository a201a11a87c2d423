//! Categorized heuristic pattern tables, one per scan domain.
//!
//! Category names are part of the output contract: downstream aggregation
//! groups evidence by them, so a rename is a breaking change.
//!
//! Tables are `const` slices of [`PatternSpec`]; each domain compiles its
//! table once per process into a [`PatternSet`].

pub mod api_contracts;
pub mod db_schema;
pub mod endpoints;
pub mod generic;
pub mod ui_routes;
pub mod validators;
pub mod visual_identity;

use regex::Regex;
use tracing::warn;

use crate::error::ExcavateError;

/// Directories every scan domain skips
pub const BASE_EXCLUDE: &[&str] = &[
    "**/.git/**",
    "**/node_modules/**",
    "**/.venv/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
    "**/coverage/**",
];

/// How a pattern is applied to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Scored against individual lines; context is measured in lines
    PerLine,
    /// Scored against the whole buffer; context is measured in characters
    PerContent,
    /// Scored against a path, never against content
    PerPath,
}

/// Which part of a match becomes the evidence `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCapture {
    None,
    Whole,
    Group(usize),
}

/// One row of a pattern table
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub category: &'static str,
    pub pattern: &'static str,
    pub mode: MatchMode,
    pub value: ValueCapture,
}

impl PatternSpec {
    pub const fn per_line(category: &'static str, pattern: &'static str) -> Self {
        Self {
            category,
            pattern,
            mode: MatchMode::PerLine,
            value: ValueCapture::None,
        }
    }

    pub const fn per_content(category: &'static str, pattern: &'static str) -> Self {
        Self {
            category,
            pattern,
            mode: MatchMode::PerContent,
            value: ValueCapture::None,
        }
    }

    pub const fn per_path(category: &'static str, pattern: &'static str) -> Self {
        Self {
            category,
            pattern,
            mode: MatchMode::PerPath,
            value: ValueCapture::None,
        }
    }

    pub const fn capturing(self, value: ValueCapture) -> Self {
        Self { value, ..self }
    }
}

/// A compiled pattern with its category
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub category: String,
    pub regex: Regex,
    pub mode: MatchMode,
    pub value: ValueCapture,
}

impl CompiledPattern {
    pub fn compile(spec: &PatternSpec) -> Result<Self, ExcavateError> {
        let regex = Regex::new(spec.pattern).map_err(|source| ExcavateError::InvalidPattern {
            category: spec.category.to_string(),
            source,
        })?;
        Ok(Self {
            category: spec.category.to_string(),
            regex,
            mode: spec.mode,
            value: spec.value,
        })
    }

    /// Extract the evidence value from a match, if this pattern captures one
    pub fn value_of(&self, caps: &regex::Captures<'_>) -> Option<String> {
        match self.value {
            ValueCapture::None => None,
            ValueCapture::Whole => caps.get(0).map(|m| m.as_str().to_string()),
            ValueCapture::Group(i) => caps
                .get(i)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().to_string()),
        }
    }
}

/// An ordered set of compiled patterns.
///
/// Order is the table order and determines evidence order within a file.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile a table, dropping (and logging) any pattern that fails
    pub fn compile(specs: &[PatternSpec]) -> Self {
        let patterns = specs
            .iter()
            .filter_map(|spec| match CompiledPattern::compile(spec) {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!(error = %e, "dropping pattern");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    /// Compile caller-supplied regexes as per-line patterns.
    ///
    /// The source text doubles as the category. Empty and invalid sources are
    /// skipped so one bad pattern never aborts the scan.
    pub fn from_sources<S: AsRef<str>>(sources: &[S]) -> Self {
        let patterns = sources
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
            .filter_map(|source| match Regex::new(source) {
                Ok(regex) => Some(CompiledPattern {
                    category: source.to_string(),
                    regex,
                    mode: MatchMode::PerLine,
                    value: ValueCapture::None,
                }),
                Err(e) => {
                    warn!(pattern = source, error = %e, "dropping invalid search pattern");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Look up a pattern by category
    pub fn get(&self, category: &str) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.category == category)
    }

    /// Patterns of one mode, in table order
    pub fn of_mode(&self, mode: MatchMode) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter().filter(move |p| p.mode == mode)
    }

    /// Per-path patterns matching `path`, in table order
    pub fn matching_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a CompiledPattern> + 'a {
        self.of_mode(MatchMode::PerPath)
            .filter(move |p| p.regex.is_match(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_drops_invalid_pattern() {
        let specs = [
            PatternSpec::per_line("ok", r"class\s+\w+"),
            PatternSpec::per_line("broken", r"(unclosed"),
            PatternSpec::per_line("also_ok", r"def\s+\w+"),
        ];
        let set = PatternSet::compile(&specs);
        let categories: Vec<&str> = set.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories, vec!["ok", "also_ok"]);
    }

    #[test]
    fn test_matching_path_only_considers_path_rows() {
        let set = PatternSet::compile(&[
            PatternSpec::per_path("route", r"/pages/"),
            PatternSpec::per_line("line", r"/pages/"),
        ]);
        let hits: Vec<&str> = set
            .matching_path("/web/pages/index.tsx")
            .map(|p| p.category.as_str())
            .collect();
        assert_eq!(hits, vec!["route"]);
        assert_eq!(set.of_mode(MatchMode::PerLine).count(), 1);
    }

    #[test]
    fn test_from_sources_skips_empty_and_invalid() {
        let set = PatternSet::from_sources(&["", "[bad", "export const"]);
        assert_eq!(set.len(), 1);
        assert!(set.get("export const").is_some());
    }

    #[test]
    fn test_value_capture_group_falls_back_to_whole_match() {
        let spec = PatternSpec::per_line("x", r"a(b)?c").capturing(ValueCapture::Group(1));
        let pattern = CompiledPattern::compile(&spec).unwrap();

        let caps = pattern.regex.captures("abc").unwrap();
        assert_eq!(pattern.value_of(&caps).as_deref(), Some("b"));

        let caps = pattern.regex.captures("ac").unwrap();
        assert_eq!(pattern.value_of(&caps).as_deref(), Some("ac"));
    }

    #[test]
    fn test_every_domain_table_compiles() {
        let tables: &[&[PatternSpec]] = &[
            db_schema::PATTERNS,
            validators::PATTERNS,
            endpoints::PATTERNS,
            ui_routes::PATTERNS,
            visual_identity::FRAMEWORKS,
            visual_identity::TOKENS,
            visual_identity::ASSET_NAMES,
            ui_routes::PATH_PATTERNS,
            api_contracts::PATTERNS,
        ];
        for table in tables {
            for spec in *table {
                assert!(
                    CompiledPattern::compile(spec).is_ok(),
                    "pattern for {} failed to compile",
                    spec.category
                );
            }
        }
    }
}
