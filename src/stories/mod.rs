//! Deterministic Gherkin story generation from an analysis document.
//!
//! Rules are classified by persona, grouped per module in first-seen order,
//! and written as one feature file per (module, persona). Output depends
//! only on the document, so re-running over unchanged input rewrites
//! byte-identical files.

pub mod feature;
pub mod model;
pub mod persona;

pub use feature::{compose_feature, FeatureStyle};
pub use model::{AnalysisDocument, BusinessRule, FileReference, ModuleReport};
pub use persona::{Persona, StoryLanguage};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ExcavateError;

/// Module name used when the document omits one
pub const DEFAULT_MODULE_NAME: &str = "Module";

/// File stem used when sanitizing leaves nothing
pub const FALLBACK_FILE_STEM: &str = "module";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryOptions {
    pub group_by_persona: bool,
    pub strict_mode: bool,
    pub language: StoryLanguage,
}

impl Default for StoryOptions {
    fn default() -> Self {
        Self {
            group_by_persona: true,
            strict_mode: true,
            language: StoryLanguage::English,
        }
    }
}

/// A story file that could not be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedWrite {
    pub path: String,
    pub error: String,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryResult {
    pub written: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailedWrite>,
}

impl StoryResult {
    fn failure(error: &ExcavateError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}

/// Load and parse the analysis document
pub fn load_analysis(path: &Path) -> Result<AnalysisDocument, ExcavateError> {
    if !path.is_file() {
        return Err(ExcavateError::MissingAnalysis {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| ExcavateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| ExcavateError::InvalidAnalysis {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Generate story files from the analysis document at `analysis_path`.
///
/// A missing or unparsable document yields an empty result carrying the
/// error message; nothing is written in that case.
pub fn generate_stories(analysis_path: &Path, output_dir: &Path, opts: &StoryOptions) -> StoryResult {
    match load_analysis(analysis_path) {
        Ok(doc) => generate_from_document(&doc, output_dir, opts),
        Err(e) => {
            warn!(error = %e, "story generation skipped");
            StoryResult::failure(&e)
        }
    }
}

/// Generate story files from an already parsed document.
///
/// A write failure is recorded under `failed` and the remaining groups are
/// still written. Modules whose names sanitize to the same file stem write
/// to the same path; the later one wins and the path is listed once.
pub fn generate_from_document(doc: &AnalysisDocument, output_dir: &Path, opts: &StoryOptions) -> StoryResult {
    let style = FeatureStyle {
        strict: opts.strict_mode,
        language: opts.language,
    };
    let mut result = StoryResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for module in &doc.modules {
        let module_name = module.name.as_deref().unwrap_or(DEFAULT_MODULE_NAME);
        let domain = module.functional_domain.as_deref().unwrap_or_default();

        for (persona, rules) in group_by_persona(&module.business_rules) {
            let label = persona.label(opts.language);
            let content = compose_feature(module_name, domain, label, &rules, style);
            let path = story_path(output_dir, label, module_name, opts.group_by_persona);

            if !seen.insert(path.clone()) {
                warn!(path = %path.display(), module = module_name, "story file overwritten by a later module");
            }

            match write_story(&path, &content) {
                Ok(()) => {
                    let shown = display_path(&path);
                    if !result.written.contains(&shown) {
                        result.written.push(shown);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "story file not written");
                    result.failed.push(FailedWrite {
                        path: display_path(&path),
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    info!(
        written = result.written.len(),
        failed = result.failed.len(),
        "story generation complete"
    );
    result
}

/// Group rules by persona, keeping first-seen persona order and rule order
pub fn group_by_persona(rules: &[BusinessRule]) -> Vec<(Persona, Vec<&BusinessRule>)> {
    let mut groups: Vec<(Persona, Vec<&BusinessRule>)> = Vec::new();
    for rule in rules {
        let persona = Persona::classify(rule.rule.as_deref().unwrap_or_default());
        match groups.iter_mut().find(|(p, _)| *p == persona) {
            Some((_, members)) => members.push(rule),
            None => groups.push((persona, vec![rule])),
        }
    }
    groups
}

/// Keep alphanumerics, spaces, `-` and `_`; trim; spaces become `_`
pub fn sanitize_filename(name: &str) -> String {
    let safe: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(*c, ' ' | '-' | '_'))
        .collect();
    let safe = safe.trim().replace(' ', "_");
    if safe.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        safe
    }
}

/// Target path of a story file
pub fn story_path(output_dir: &Path, persona_label: &str, module_name: &str, group_by_persona: bool) -> PathBuf {
    let base = if group_by_persona {
        output_dir.join(persona_label)
    } else {
        output_dir.to_path_buf()
    };
    base.join(format!("{}.md", sanitize_filename(module_name)))
}

fn write_story(path: &Path, content: &str) -> Result<(), ExcavateError> {
    let to_error = |source| ExcavateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, content).map_err(to_error)
}

fn display_path(path: &Path) -> String {
    crate::scan::config::absolute_or_self(path)
        .to_string_lossy()
        .to_string()
}
