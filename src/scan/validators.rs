//! Validation rule scanner (Zod, Yup, Joi, Pydantic).

use serde::{Deserialize, Serialize};

use super::config::ScanConfig;
use super::source::FileSource;
use super::{scan_content, ScanDomain};
use crate::evidence::{CategorizedMatch, ContentOptions, ExtractOptions};
use crate::patterns::validators;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorReport {
    pub validator_matches: Vec<CategorizedMatch>,
}

/// Find schema declarations and field constraints. Every match is reported.
pub fn scan(config: &ScanConfig) -> ValidatorReport {
    let source = FileSource::new(config, validators::INCLUDE, validators::EXCLUDE);
    let opts = ExtractOptions {
        content: ContentOptions {
            context_chars: validators::CONTEXT_CHARS,
            first_match_only: false,
            max_snippet_chars: config.max_snippet_chars,
        },
        ..ExtractOptions::default()
    };
    ValidatorReport {
        validator_matches: scan_content(
            ScanDomain::Validators,
            config,
            &source,
            &validators::SET,
            &opts,
        ),
    }
}
