//! Domain errors for scanning and story generation.
//!
//! None of these escape a scan: callers downgrade them to skipped files,
//! dropped patterns, or a structured `error` field in the JSON result.

use std::path::PathBuf;

/// Errors raised inside the excavate library
#[derive(Debug, thiserror::Error)]
pub enum ExcavateError {
    /// The analysis document does not exist
    #[error("analysis document not found: {}", path.display())]
    MissingAnalysis { path: PathBuf },

    /// The analysis document exists but is not valid JSON for the expected shape
    #[error("analysis document is invalid: {}: {reason}", path.display())]
    InvalidAnalysis { path: PathBuf, reason: String },

    /// A pattern failed to compile
    #[error("invalid pattern for category '{category}': {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    /// A glob failed to compile
    #[error("invalid glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated artifact could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is out of range
    #[error("config error: {field}: {reason}")]
    Config { field: String, reason: String },
}
