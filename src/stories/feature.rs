//! Gherkin feature text for one (module, persona) group.

use super::model::BusinessRule;
use super::persona::StoryLanguage;

/// How scenario text is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureStyle {
    pub strict: bool,
    pub language: StoryLanguage,
}

/// Compose a feature document.
///
/// Scenario steps are fixed placeholders around the literal rule text.
/// Each cited file becomes an `# evidence:` comment; outside strict mode the
/// cited snippet follows as `#   |` comment lines. Lines are joined with
/// `\n`; every scenario is followed by one blank line.
pub fn compose_feature(
    module_name: &str,
    functional_domain: &str,
    persona_label: &str,
    rules: &[&BusinessRule],
    style: FeatureStyle,
) -> String {
    let mut lines: Vec<String> = vec![
        format!("Feature: {module_name} ({functional_domain})"),
        String::new(),
        format!("# Persona: {persona_label}"),
        String::new(),
    ];

    for rule in rules {
        let title = rule
            .rule
            .as_deref()
            .unwrap_or_else(|| style.language.default_rule());
        lines.push(format!("Scenario: {title}"));
        lines.push(format!("  Given {}", style.language.given_step()));
        lines.push(format!("  When {}", style.language.when_step()));
        lines.push(format!("  Then {title}"));

        for file in &rule.files {
            lines.push(format!("  # evidence: {} {}", file.path, file.line_numbers));
            if !style.strict {
                lines.extend(file.code_snippet.lines().map(|l| format!("  #   | {l}")));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
