//! Single-file commands: `file-info`, `read-chunk`, `read-file`, `show-analysis`

use anyhow::Result;
use std::path::Path;

use super::output::print_json;
use crate::repo::{file_info, read_analysis_json, read_file_chunk, read_repository_file};

/// Print size and line count
pub fn info(path: &Path, pretty: bool) -> Result<()> {
    print_json(&file_info(path), pretty)
}

/// Print a line chunk as JSON
pub fn chunk(path: &Path, start_line: usize, num_lines: usize, max_chars: usize, pretty: bool) -> Result<()> {
    print_json(&read_file_chunk(path, start_line, num_lines, max_chars), pretty)
}

/// Print file text, optionally a 1-based inclusive line range
pub fn read(path: &Path, start_line: Option<usize>, end_line: Option<usize>) -> Result<()> {
    print!("{}", read_repository_file(path, start_line, end_line));
    Ok(())
}

/// Print the analysis document as stored, or `{}`
pub fn show_analysis(path: &Path) -> Result<()> {
    println!("{}", read_analysis_json(path));
    Ok(())
}
