//! Project configuration file (`excavate.toml`).
//!
//! ```toml
//! [scan]
//! max_files = 5000
//! context_lines = 3
//! extra_exclude = ["**/vendor/**"]
//!
//! [stories]
//! output_dir = "docs/stories"
//! language = "portuguese"
//!
//! [log]
//! level = "info"
//! format = "json"
//! ```
//!
//! Every key is optional. Command-line flags take precedence over file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::LogFormat;
use crate::scan::ScanConfig;
use crate::stories::{StoryLanguage, StoryOptions};

pub const CONFIG_FILE_NAME: &str = "excavate.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "EXCAVATE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub scan: ScanSection,
    pub stories: StoriesSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSection {
    pub max_files: Option<usize>,
    pub max_matches_per_file: Option<usize>,
    pub context_lines: Option<usize>,
    pub max_file_bytes: Option<u64>,
    pub max_snippet_chars: Option<usize>,
    pub follow_symlinks: Option<bool>,
    pub extra_exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoriesSection {
    pub output_dir: Option<PathBuf>,
    pub group_by_persona: Option<bool>,
    pub strict_mode: Option<bool>,
    pub language: Option<StoryLanguage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl ProjectConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load the config file that applies, or defaults when there is none.
    ///
    /// Lookup order: `explicit`, then `$EXCAVATE_CONFIG`, then
    /// `excavate.toml` in the working directory. An explicitly named file
    /// must exist.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match resolve_path(explicit) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Scan defaults from the `[scan]` section
    pub fn scan_config(&self, root: impl Into<PathBuf>) -> ScanConfig {
        let s = &self.scan;
        let mut config = ScanConfig::new(root);
        if let Some(v) = s.max_files {
            config.max_files = v;
        }
        if let Some(v) = s.max_matches_per_file {
            config.max_matches_per_file = v;
        }
        if let Some(v) = s.context_lines {
            config.context_lines = v;
        }
        if let Some(v) = s.max_file_bytes {
            config.max_file_bytes = v;
        }
        if let Some(v) = s.max_snippet_chars {
            config.max_snippet_chars = v;
        }
        if let Some(v) = s.follow_symlinks {
            config.follow_symlinks = v;
        }
        config.with_extra_exclude(s.extra_exclude.iter().cloned())
    }

    /// Generator options from the `[stories]` section
    pub fn story_options(&self) -> StoryOptions {
        let defaults = StoryOptions::default();
        StoryOptions {
            group_by_persona: self.stories.group_by_persona.unwrap_or(defaults.group_by_persona),
            strict_mode: self.stories.strict_mode.unwrap_or(defaults.strict_mode),
            language: self.stories.language.unwrap_or(defaults.language),
        }
    }
}

fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let local = PathBuf::from(CONFIG_FILE_NAME);
    local.is_file().then_some(local)
}
