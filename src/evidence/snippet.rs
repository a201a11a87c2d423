//! Char-safe text slicing for snippets.

/// Suffix appended to snippets cut at the character limit
pub const TRUNCATION_MARKER: &str = "...";

/// Truncate to at most `max_chars` characters, appending `...` when cut.
///
/// Operates on characters, never splitting a multi-byte sequence.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((byte_idx, _)) => format!("{}{TRUNCATION_MARKER}", &s[..byte_idx]),
    }
}

/// The first `max_chars` characters of `s`, without a marker
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Slice `radius` characters either side of the byte range `start..end`,
/// clipped to the buffer.
pub fn char_window(content: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = if radius == 0 {
        start
    } else {
        content[..start]
            .char_indices()
            .rev()
            .take(radius)
            .last()
            .map_or(start, |(i, _)| i)
    };
    let to = content[end..]
        .char_indices()
        .nth(radius)
        .map_or(content.len(), |(i, _)| end + i);
    &content[from..to]
}

/// 1-based line number of a byte offset
pub fn line_of_offset(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}
