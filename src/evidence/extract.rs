//! Applies a [`PatternSet`] to file content and produces [`Evidence`].

use super::snippet::{char_window, line_of_offset, truncate_chars};
use super::Evidence;
use crate::patterns::{CompiledPattern, MatchMode, PatternSet};

/// Default snippet bound in characters
pub const DEFAULT_MAX_SNIPPET_CHARS: usize = 2000;

/// Options for line-oriented extraction
#[derive(Debug, Clone, Copy)]
pub struct LineOptions {
    /// Lines of context either side of the matching line
    pub context_lines: usize,
    /// Total evidence cap for the file across every pattern
    pub max_matches: Option<usize>,
    /// Emit one record per occurrence instead of one per matching line
    pub every_occurrence: bool,
    pub max_snippet_chars: usize,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            context_lines: 0,
            max_matches: None,
            every_occurrence: false,
            max_snippet_chars: DEFAULT_MAX_SNIPPET_CHARS,
        }
    }
}

/// Options for whole-buffer extraction
#[derive(Debug, Clone, Copy)]
pub struct ContentOptions {
    /// Characters of context either side of the match
    pub context_chars: usize,
    /// Keep only the first match of each pattern
    pub first_match_only: bool,
    pub max_snippet_chars: usize,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            context_chars: 160,
            first_match_only: false,
            max_snippet_chars: DEFAULT_MAX_SNIPPET_CHARS,
        }
    }
}

/// Settings for both text modes of a pattern set
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub line: LineOptions,
    pub content: ContentOptions,
}

/// Apply every text pattern of `patterns` in its own mode.
///
/// Per-line evidence comes first, ordered by line and then table order; the
/// `max_matches` cap counts per-line records only. Per-content evidence
/// follows, ordered by table order and then position. Per-path patterns
/// never look at content and are skipped.
///
/// # Arguments
/// * `path` - Path recorded on each evidence item
/// * `content` - Full file text
/// * `patterns` - Patterns to apply
/// * `opts` - Context, cap and snippet settings per mode
pub fn extract(path: &str, content: &str, patterns: &PatternSet, opts: &ExtractOptions) -> Vec<Evidence> {
    let mut out = extract_per_line(path, content, patterns, &opts.line);
    out.extend(extract_per_content(path, content, patterns, &opts.content));
    out
}

/// Per-line patterns, scored line by line.
///
/// Evidence is ordered by line, then by pattern order within the line. When
/// `max_matches` is set, extraction stops as soon as the file has produced
/// that many records in total.
fn extract_per_line(path: &str, content: &str, patterns: &PatternSet, opts: &LineOptions) -> Vec<Evidence> {
    let patterns: Vec<&CompiledPattern> = patterns.of_mode(MatchMode::PerLine).collect();
    let mut out = Vec::new();
    if patterns.is_empty() || opts.max_matches == Some(0) {
        return out;
    }

    let lines: Vec<&str> = content.lines().collect();
    let total = lines.len();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let start = line_no.saturating_sub(opts.context_lines).max(1);
        let end = (line_no + opts.context_lines).min(total);

        for pattern in &patterns {
            if opts.every_occurrence {
                for caps in pattern.regex.captures_iter(line) {
                    let snippet = join_lines(&lines, start, end, opts.max_snippet_chars);
                    out.push(
                        Evidence::new(path, &pattern.category, start, end, snippet)
                            .with_value(pattern.value_of(&caps)),
                    );
                }
            } else if pattern.regex.is_match(line) {
                let snippet = join_lines(&lines, start, end, opts.max_snippet_chars);
                out.push(Evidence::new(path, &pattern.category, start, end, snippet));
            }

            if let Some(cap) = opts.max_matches {
                if out.len() >= cap {
                    out.truncate(cap);
                    return out;
                }
            }
        }
    }
    out
}

/// Per-content patterns, scored against the whole buffer.
///
/// Evidence is ordered by pattern, then by match position. Line numbers
/// come from counting newlines up to the match offset; the snippet is a
/// character window around the match clipped to the buffer. The range never
/// reaches past the last line, even for a match after the final newline.
fn extract_per_content(path: &str, content: &str, patterns: &PatternSet, opts: &ContentOptions) -> Vec<Evidence> {
    let total_lines = content.lines().count();
    let last_line = total_lines.max(1);
    let mut out = Vec::new();
    for pattern in patterns.of_mode(MatchMode::PerContent) {
        for caps in pattern.regex.captures_iter(content) {
            let Some(m) = caps.get(0) else { continue };
            let window = char_window(content, m.start(), m.end(), opts.context_chars);
            let line_start = line_of_offset(content, m.start()).min(last_line);
            // a window running past the final newline does not open another line
            let line_end = (line_start + window.matches('\n').count()).min(total_lines);
            let snippet = truncate_chars(window.trim(), opts.max_snippet_chars);

            out.push(
                Evidence::new(path, &pattern.category, line_start, line_end, snippet)
                    .with_value(pattern.value_of(&caps)),
            );
            if opts.first_match_only {
                break;
            }
        }
    }
    out
}

fn join_lines(lines: &[&str], start: usize, end: usize, max_chars: usize) -> String {
    let joined = lines[start - 1..end].join("\n");
    truncate_chars(joined.trim(), max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{PatternSpec, ValueCapture};

    fn lines_opts(context_lines: usize, max_matches: Option<usize>) -> LineOptions {
        LineOptions {
            context_lines,
            max_matches,
            ..LineOptions::default()
        }
    }

    #[test]
    fn test_per_line_context_is_clipped() {
        let content = "one\ntwo\nclass Foo:\nfour\n";
        let set = PatternSet::from_sources(&[r"class\s+\w+"]);

        let ev = extract_per_line("/r/a.py", content, &set, &lines_opts(5, None));
        assert_eq!(ev.len(), 1);
        assert_eq!(ev[0].line_start(), 1);
        assert_eq!(ev[0].line_end(), 4);
        assert_eq!(ev[0].snippet(), "one\ntwo\nclass Foo:\nfour");
    }

    #[test]
    fn test_per_line_cap_counts_across_patterns() {
        let content = "export const a = 1;\nexport default b;\nexport const c = 2;\n";
        let set = PatternSet::from_sources(&["export const", "export default"]);

        let ev = extract_per_line("/r/a.ts", content, &set, &lines_opts(0, Some(2)));
        assert_eq!(ev.len(), 2);
        assert_eq!(ev[0].category(), "export const");
        assert_eq!(ev[1].category(), "export default");
    }

    #[test]
    fn test_per_line_zero_cap_yields_nothing() {
        let set = PatternSet::from_sources(&["a"]);
        assert!(extract_per_line("/r/a", "a\na\n", &set, &lines_opts(0, Some(0))).is_empty());
    }

    #[test]
    fn test_per_line_every_occurrence_captures_values() {
        let specs = [PatternSpec::per_line("fetch_literal", r#"fetch\(\s*['"]([^'"]+)['"]"#)
            .capturing(ValueCapture::Group(1))];
        let set = PatternSet::compile(&specs);
        let content = "  fetch('/a'); fetch(\"/b\")  \n";
        let opts = LineOptions {
            every_occurrence: true,
            ..LineOptions::default()
        };

        let ev = extract_per_line("/r/a.js", content, &set, &opts);
        let values: Vec<_> = ev.iter().map(|e| e.value()).collect();
        assert_eq!(values, vec![Some("/a"), Some("/b")]);
        assert_eq!(ev[0].line_numbers(), "L1-1");
        assert_eq!(ev[0].snippet(), "fetch('/a'); fetch(\"/b\")");
    }

    #[test]
    fn test_per_content_line_numbers() {
        let content = "header\n\nmodel User {\n  id Int\n}\n";
        let set = PatternSet::compile(&[PatternSpec::per_content(
            "prisma_model",
            r"model\s+\w+\s*\{",
        )]);
        let opts = ContentOptions {
            context_chars: 0,
            ..ContentOptions::default()
        };

        let ev = extract_per_content("/r/schema.prisma", content, &set, &opts);
        assert_eq!(ev.len(), 1);
        assert_eq!(ev[0].line_start(), 3);
        assert_eq!(ev[0].line_end(), 3);
        assert_eq!(ev[0].snippet(), "model User {");
    }

    #[test]
    fn test_per_content_line_end_stays_within_file() {
        let content = "a\nmodel User {\n}\n";
        let set = PatternSet::compile(&[PatternSpec::per_content("prisma_model", r"model\s+\w+\s*\{")]);

        let ev = extract_per_content("/r/schema.prisma", content, &set, &ContentOptions::default());
        assert_eq!(ev[0].line_start(), 2);
        assert_eq!(ev[0].line_end(), 3);
    }

    #[test]
    fn test_per_content_first_match_only() {
        let content = "createRouter()\ncreateRouter()\n";
        let set = PatternSet::compile(&[PatternSpec::per_content("vue_router_create", r"createRouter\(")]);
        let all = ContentOptions {
            context_chars: 10,
            ..ContentOptions::default()
        };
        let first = ContentOptions {
            first_match_only: true,
            ..all
        };

        assert_eq!(extract_per_content("/r/a.ts", content, &set, &all).len(), 2);
        assert_eq!(extract_per_content("/r/a.ts", content, &set, &first).len(), 1);
    }

    #[test]
    fn test_per_content_match_after_final_newline_stays_on_last_line() {
        let set = PatternSet::compile(&[PatternSpec::per_content("eof", r"\z")]);

        let ev = extract_per_content("/r/a.ts", "abc\ndef\n", &set, &ContentOptions::default());
        assert_eq!(ev.len(), 1);
        assert_eq!(ev[0].line_numbers(), "L2-2");

        let ev = extract_per_content("/r/empty.ts", "", &set, &ContentOptions::default());
        assert_eq!(ev[0].line_numbers(), "L1-1");
    }

    #[test]
    fn test_extract_routes_each_pattern_by_mode() {
        let set = PatternSet::compile(&[
            PatternSpec::per_content("model_block", r"(?s)model\s+\w+\s*\{.*?\}"),
            PatternSpec::per_line("field", r"^\s+\w+\s+Int$"),
            PatternSpec::per_path("schema_file", r"\.prisma$"),
        ]);
        let content = "model User {\n  id Int\n}\n";
        let opts = ExtractOptions {
            content: ContentOptions {
                context_chars: 0,
                ..ContentOptions::default()
            },
            ..ExtractOptions::default()
        };

        let ev = extract("/r/schema.prisma", content, &set, &opts);
        let got: Vec<(&str, String)> = ev.iter().map(|e| (e.category(), e.line_numbers())).collect();
        assert_eq!(
            got,
            vec![
                ("field", "L2-2".to_string()),
                ("model_block", "L1-3".to_string()),
            ]
        );
        assert_eq!(ev[1].snippet(), "model User {\n  id Int\n}");
    }

    #[test]
    fn test_per_line_pass_ignores_per_content_rows() {
        let set = PatternSet::compile(&[PatternSpec::per_content("block", r"a")]);
        assert!(extract_per_line("/r/a", "a\na\n", &set, &LineOptions::default()).is_empty());
    }

    #[test]
    fn test_snippets_are_bounded() {
        let content = format!("x{}", "a".repeat(5000));
        let set = PatternSet::from_sources(&["x"]);
        let opts = LineOptions {
            max_snippet_chars: 100,
            ..LineOptions::default()
        };

        let ev = extract_per_line("/r/min.js", &content, &set, &opts);
        assert_eq!(ev[0].snippet().chars().count(), 103);
        assert!(ev[0].snippet().ends_with("..."));
    }
}
