//! Story generation end to end: files on disk, idempotence, personas

use std::fs;

use excavate::stories::{generate_stories, StoryLanguage, StoryOptions};

use super::helpers::*;

#[test]
fn test_regeneration_is_byte_identical() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let analysis = temp_dir.path().join("analysis.json");
    fs::write(
        &analysis,
        analysis_json("Billing", "Finance", &["Admin approves refunds", "Invoices are numbered"]),
    )
    .unwrap();
    let out = temp_dir.path().join("stories");

    let first = generate_stories(&analysis, &out, &StoryOptions::default());
    let snapshot: Vec<Vec<u8>> = first.written.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = generate_stories(&analysis, &out, &StoryOptions::default());
    assert_eq!(first, second);
    for (path, bytes) in second.written.iter().zip(&snapshot) {
        assert_eq!(&fs::read(path).unwrap(), bytes, "{path} changed on regeneration");
    }
}

#[test]
fn test_personas_split_into_directories() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let analysis = temp_dir.path().join("analysis.json");
    fs::write(
        &analysis,
        analysis_json("Billing", "Finance", &["Admin approves refunds", "Invoices are numbered"]),
    )
    .unwrap();
    let out = temp_dir.path().join("stories");

    let result = generate_stories(&analysis, &out, &StoryOptions::default());
    assert!(result.error.is_none());
    assert_eq!(result.written.len(), 2);
    assert!(out.join("Administrator/Billing.md").is_file());
    assert!(out.join("User/Billing.md").is_file());
}

#[test]
fn test_portuguese_persona_labels() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let analysis = temp_dir.path().join("analysis.json");
    fs::write(&analysis, analysis_json("Loja", "Vendas", &["O administrador cadastra produtos"])).unwrap();
    let out = temp_dir.path().join("historias");
    let opts = StoryOptions {
        language: StoryLanguage::Portuguese,
        ..StoryOptions::default()
    };

    let result = generate_stories(&analysis, &out, &opts);
    assert_eq!(result.written.len(), 1);
    let text = fs::read_to_string(out.join("Administrador/Loja.md")).unwrap();
    assert!(text.contains("# Persona: Administrador"));
    assert!(text.contains("Scenario: O administrador cadastra produtos"));
}

#[test]
fn test_feature_file_content() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let analysis = temp_dir.path().join("analysis.json");
    fs::write(&analysis, analysis_json("Auth", "Security", &["Password must be 8+ characters"])).unwrap();
    let out = temp_dir.path().join("stories");

    generate_stories(&analysis, &out, &StoryOptions::default());

    let text = fs::read_to_string(out.join("User/Auth.md")).unwrap();
    let expected = "Feature: Auth (Security)\n\
                    \n\
                    # Persona: User\n\
                    \n\
                    Scenario: Password must be 8+ characters\n  \
                    Given a relevant situation for the rule occurs\n  \
                    When the condition described by the rule occurs\n  \
                    Then Password must be 8+ characters\n  \
                    # evidence: /repo/src/rules.ts L1-L1\n";
    assert_eq!(text, expected);
}

#[test]
fn test_flat_layout_and_snippets() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let analysis = temp_dir.path().join("analysis.json");
    fs::write(&analysis, analysis_json("Auth", "Security", &["Tokens expire"])).unwrap();
    let out = temp_dir.path().join("stories");
    let opts = StoryOptions {
        group_by_persona: false,
        strict_mode: false,
        ..StoryOptions::default()
    };

    generate_stories(&analysis, &out, &opts);

    let text = fs::read_to_string(out.join("Auth.md")).unwrap();
    assert!(text.contains("  #   | check_0()"));
}

#[test]
fn test_missing_analysis_reports_error_and_writes_nothing() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let out = temp_dir.path().join("stories");

    let result = generate_stories(&temp_dir.path().join("absent.json"), &out, &StoryOptions::default());
    assert!(result.error.is_some());
    assert!(result.written.is_empty());
    assert!(!out.exists());
}

#[test]
fn test_unread_sections_do_not_block_generation() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let analysis = temp_dir.path().join("analysis.json");
    fs::write(
        &analysis,
        r#"{
            "summary": "shop",
            "modules": [{"name": "Auth", "functional_domain": "Security", "business_rules": [
                {"rule": "Password must be 8+ characters",
                 "files": [{"path": "/repo/auth.ts", "code_snippet": null, "line_numbers": "L10-L12"}]}
            ]}],
            "main_entities": [{"name": "User", "description": null}],
            "modernization_suggestion": {
                "architecture_recommendation": "Microservices",
                "implementation_roadmap": [{"phase": 1}]
            }
        }"#,
    )
    .unwrap();
    let out = temp_dir.path().join("stories");

    let result = generate_stories(&analysis, &out, &StoryOptions::default());
    assert!(result.error.is_none(), "{:?}", result.error);
    assert_eq!(result.written.len(), 1);
    let text = fs::read_to_string(out.join("User/Auth.md")).unwrap();
    assert!(text.contains("  # evidence: /repo/auth.ts L10-L12"));
}
