//! `excavate search` and `excavate search-lenient`

use anyhow::{bail, Context, Result};
use std::io::Read;

use super::output::print_json;
use crate::scan::{search_lenient, search_repo_patterns, ScanConfig};

/// Search with explicit patterns
pub fn execute(config: &ScanConfig, patterns: &[String], pretty: bool) -> Result<()> {
    if patterns.iter().all(|p| p.trim().is_empty()) {
        bail!("At least one non-empty --pattern is required");
    }
    config.validate().context("Invalid search configuration")?;

    let report = search_repo_patterns(config, patterns);
    print_json(&report, pretty)
}

/// Search from a loosely structured payload; `-` reads it from stdin
pub fn execute_lenient(payload: &str, pretty: bool) -> Result<()> {
    let payload = if payload == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read payload from stdin")?;
        buf
    } else {
        payload.to_string()
    };

    let report = search_lenient(&payload);
    print_json(&report, pretty)
}
