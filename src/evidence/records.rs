//! Serialized evidence shapes, one per scanner family.

use serde::{Deserialize, Serialize};

use super::Evidence;

/// Generic search hit with integer line bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangedMatch {
    pub path: String,
    pub line_start: usize,
    pub line_end: usize,
    pub code_snippet: String,
}

impl From<&Evidence> for RangedMatch {
    fn from(ev: &Evidence) -> Self {
        Self {
            path: ev.path().to_string(),
            line_start: ev.line_start(),
            line_end: ev.line_end(),
            code_snippet: ev.snippet().to_string(),
        }
    }
}

/// Domain scanner hit with an `L<start>-<end>` range and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedMatch {
    pub path: String,
    pub line_numbers: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub code_snippet: String,
}

impl From<&Evidence> for CategorizedMatch {
    fn from(ev: &Evidence) -> Self {
        Self {
            path: ev.path().to_string(),
            line_numbers: ev.line_numbers(),
            category: ev.category().to_string(),
            value: ev.value().map(str::to_string),
            code_snippet: ev.snippet().to_string(),
        }
    }
}

/// UI framework inferred from a file path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkHit {
    pub framework: String,
    pub path: String,
    pub line_numbers: String,
    pub code_snippet: String,
}

impl From<&Evidence> for FrameworkHit {
    fn from(ev: &Evidence) -> Self {
        Self {
            framework: ev.category().to_string(),
            path: ev.path().to_string(),
            line_numbers: ev.line_numbers(),
            code_snippet: ev.snippet().to_string(),
        }
    }
}

/// Design token found in stylesheet content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHit {
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
    pub line_numbers: String,
    pub code_snippet: String,
}

impl From<&Evidence> for TokenHit {
    fn from(ev: &Evidence) -> Self {
        Self {
            kind: ev.category().to_string(),
            path: ev.path().to_string(),
            line_numbers: ev.line_numbers(),
            code_snippet: ev.snippet().to_string(),
        }
    }
}

/// Brand asset recognized by file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetHit {
    pub path: String,
    pub line_numbers: String,
    pub code_snippet: String,
}

impl From<&Evidence> for AssetHit {
    fn from(ev: &Evidence) -> Self {
        Self {
            path: ev.path().to_string(),
            line_numbers: ev.line_numbers(),
            code_snippet: ev.snippet().to_string(),
        }
    }
}
