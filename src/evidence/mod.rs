//! Located pattern hits and the JSON records they serialize into.
//!
//! An [`Evidence`] is created once by the extractor and never modified.
//! Each scanner family serializes it through its own record type because
//! line ranges are reported either as `line_start`/`line_end` integers or as
//! an `"L<start>-<end>"` string, depending on the family.

pub mod extract;
pub mod records;
pub mod snippet;

pub use extract::{extract, ContentOptions, ExtractOptions, LineOptions};
pub use records::{AssetHit, CategorizedMatch, FrameworkHit, RangedMatch, TokenHit};

/// A single located hit of a pattern in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    path: String,
    line_start: usize,
    line_end: usize,
    category: String,
    snippet: String,
    value: Option<String>,
}

impl Evidence {
    /// Create evidence for a line range.
    ///
    /// `line_start` is raised to 1 and `line_end` to `line_start` if needed.
    pub fn new(
        path: impl Into<String>,
        category: impl Into<String>,
        line_start: usize,
        line_end: usize,
        snippet: impl Into<String>,
    ) -> Self {
        let line_start = line_start.max(1);
        Self {
            path: path.into(),
            line_start,
            line_end: line_end.max(line_start),
            category: category.into(),
            snippet: snippet.into(),
            value: None,
        }
    }

    /// Attach the extracted literal (URL, key, ...)
    pub fn with_value(self, value: Option<String>) -> Self {
        Self { value, ..self }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn line_start(&self) -> usize {
        self.line_start
    }

    pub fn line_end(&self) -> usize {
        self.line_end
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Line range in the `L<start>-<end>` form
    pub fn line_numbers(&self) -> String {
        format!("L{}-{}", self.line_start, self.line_end)
    }
}
