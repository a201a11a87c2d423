//! `excavate stories [analysis] [output_dir]`

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::output::print_json;
use crate::stories::{generate_stories, StoryOptions};

/// Generate story files and print the result.
///
/// A missing or invalid analysis document is reported in the JSON result,
/// not as a command failure.
pub fn execute(analysis_path: &Path, output_dir: &Path, opts: &StoryOptions, pretty: bool) -> Result<()> {
    let result = generate_stories(analysis_path, output_dir, opts);
    print_json(&result, pretty)?;

    if let Some(error) = &result.error {
        eprintln!("{} {}", "✗".red(), error);
        return Ok(());
    }
    eprintln!(
        "{} Wrote {} story file(s) to {}",
        "✓".green(),
        result.written.len(),
        output_dir.display().to_string().cyan()
    );
    for failed in &result.failed {
        eprintln!("  {} {}: {}", "✗".red(), failed.path, failed.error);
    }
    Ok(())
}
