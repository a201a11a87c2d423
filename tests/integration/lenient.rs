//! Lenient search front-end over real directories

use excavate::scan::search_lenient;

use super::helpers::*;

#[test]
fn test_structured_payload_is_honored() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    write_file(temp_dir.path(), "src/a.ts", "const TOKEN = 1;\nexport const b = 2;\n");
    let payload = serde_json::json!({
        "repo_root": temp_dir.path(),
        "patterns": ["TOKEN"],
        "context_lines": 0,
    })
    .to_string();

    let report = search_lenient(&payload);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].line_start, 1);
    assert_eq!(report.matches[0].code_snippet, "const TOKEN = 1;");
}

#[test]
fn test_array_payload_uses_first_request() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    write_file(temp_dir.path(), "a.py", "def handler(event):\n    return event\n");
    let payload = serde_json::json!([
        {"note": "not a request"},
        {"repo_root": temp_dir.path(), "patterns": ["def handler"]},
    ])
    .to_string();

    let report = search_lenient(&payload);
    assert_eq!(report.matches.len(), 1);
    assert!(report.matches[0].path.ends_with("a.py"));
}

#[test]
fn test_free_text_payload_falls_back_to_default_patterns() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    write_file(temp_dir.path(), "scripts/seed.py", "class Seeder:\n    def run(self):\n        pass\n");
    let payload = format!("please look at {} and find the classes", temp_dir.path().display());

    let report = search_lenient(&payload);
    assert!(!report.matches.is_empty());
    assert!(report.matches.iter().all(|m| m.path.ends_with("seed.py")));
}
