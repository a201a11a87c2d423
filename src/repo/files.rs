//! Single-file helpers: metadata, line-range reads, analysis document text.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::evidence::snippet::take_chars;

/// Default character cap of [`read_file_chunk`]
pub const DEFAULT_CHUNK_MAX_CHARS: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: String,
    pub size_bytes: u64,
    pub line_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChunk {
    pub path: String,
    pub line_start: usize,
    pub line_end: usize,
    pub code_snippet: String,
}

fn read_lossy(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "read failed");
            None
        }
    }
}

/// Size and line count of a file; unreadable parts are reported as zero
pub fn file_info(path: &Path) -> FileInfo {
    let size_bytes = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    let line_count = read_lossy(path)
        .map(|content| content.split_inclusive('\n').count())
        .unwrap_or(0);
    FileInfo {
        path: path.to_string_lossy().to_string(),
        size_bytes,
        line_count,
    }
}

/// Read `num_lines` lines starting at the 1-based `start_line`.
///
/// `line_end` is the last line actually read (`start - 1` when none were),
/// and the snippet is cut to `max_chars` characters before trimming.
pub fn read_file_chunk(path: &Path, start_line: usize, num_lines: usize, max_chars: usize) -> FileChunk {
    let start = start_line.max(1);
    let mut line_end = start - 1;
    let mut content = String::new();

    if let Some(text) = read_lossy(path) {
        for (idx, line) in text.split_inclusive('\n').enumerate().skip(start - 1).take(num_lines) {
            content.push_str(line);
            line_end = idx + 1;
        }
    }

    FileChunk {
        path: path.to_string_lossy().to_string(),
        line_start: start,
        line_end,
        code_snippet: take_chars(&content, max_chars).trim().to_string(),
    }
}

/// Read a whole file, or the 1-based inclusive line range when either bound is given.
///
/// A missing start reads from line 1, a missing end to the last line, and an
/// end before the start is raised to the start. Unreadable files yield "".
pub fn read_repository_file(path: &Path, start_line: Option<usize>, end_line: Option<usize>) -> String {
    let Some(content) = read_lossy(path) else {
        return String::new();
    };
    if start_line.is_none() && end_line.is_none() {
        return content;
    }

    let lines: Vec<&str> = content.lines().collect();
    let start = start_line.unwrap_or(1).max(1);
    let end = end_line.map_or(lines.len(), |e| e.max(start)).min(lines.len());
    if start > end {
        return String::new();
    }
    lines[start - 1..end].join("\n")
}

/// Raw text of the analysis document, or `{}` when it cannot be read
pub fn read_analysis_json(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        debug!(path = %path.display(), error = %e, "analysis document unavailable");
        "{}".to_string()
    })
}
