//! Analysis document consumed by the story generator.
//!
//! Only the fields the generator reads are modeled; anything else in the
//! document is ignored. Keys are snake_case with camelCase aliases, and a
//! `null` anywhere in the modeled fields reads as the empty value.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<ModuleReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleReport {
    pub name: Option<String>,
    #[serde(alias = "functionalDomain")]
    pub functional_domain: Option<String>,
    #[serde(alias = "businessRules", deserialize_with = "null_as_default")]
    pub business_rules: Vec<BusinessRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRule {
    pub rule: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub files: Vec<FileReference>,
}

/// Source location cited by a business rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReference {
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(alias = "codeSnippet", deserialize_with = "null_as_default")]
    pub code_snippet: String,
    /// `Lx-Ly`, reproduced verbatim in story files
    #[serde(alias = "lineNumbers", deserialize_with = "null_as_default")]
    pub line_numbers: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snake_case() {
        let doc: AnalysisDocument = serde_json::from_str(
            r#"{
                "summary": "shop",
                "modules": [{
                    "name": "Auth",
                    "functional_domain": "Security",
                    "business_rules": [{
                        "rule": "Password must be 8+ characters",
                        "files": [{"path": "/repo/auth.ts", "code_snippet": "z.min(8)", "line_numbers": "L10-L12"}]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let module = &doc.modules[0];
        assert_eq!(module.name.as_deref(), Some("Auth"));
        assert_eq!(module.business_rules[0].files[0].line_numbers, "L10-L12");
    }

    #[test]
    fn test_parse_camel_case_aliases() {
        let doc: AnalysisDocument = serde_json::from_str(
            r#"{"modules": [{"name": "Cart", "functionalDomain": "Sales",
                "businessRules": [{"rule": "r", "files": [{"path": "/a", "lineNumbers": "L1-L2"}]}]}]}"#,
        )
        .unwrap();
        let module = &doc.modules[0];
        assert_eq!(module.functional_domain.as_deref(), Some("Sales"));
        assert_eq!(module.business_rules[0].files[0].line_numbers, "L1-L2");
    }

    #[test]
    fn test_parse_empty_object() {
        let doc: AnalysisDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.modules.is_empty());
    }

    #[test]
    fn test_unread_sections_of_any_shape_are_ignored() {
        let doc: AnalysisDocument = serde_json::from_str(
            r#"{
                "summary": null,
                "main_entities": [{"name": "User", "description": null}],
                "modernization_suggestion": {
                    "architecture_recommendation": "Microservices",
                    "implementation_roadmap": [{"phase": 1, "steps": ["split"]}]
                },
                "modules": [{"name": "Auth", "main_concepts": null, "relationships": [{"a": "b"}],
                    "business_rules": [{"rule": "r", "files": []}]}]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.modules.len(), 1);
        assert_eq!(doc.modules[0].business_rules[0].rule.as_deref(), Some("r"));
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let doc: AnalysisDocument = serde_json::from_str(
            r#"{"modules": [
                {"name": null, "functional_domain": null, "business_rules": null},
                {"name": "Cart", "business_rules": [{"rule": null, "files": [
                    {"path": "/a.ts", "code_snippet": null, "line_numbers": null}
                ]}]}
            ]}"#,
        )
        .unwrap();
        assert!(doc.modules[0].name.is_none());
        assert!(doc.modules[0].business_rules.is_empty());
        let file = &doc.modules[1].business_rules[0].files[0];
        assert_eq!(file.path, "/a.ts");
        assert_eq!(file.code_snippet, "");
        assert_eq!(file.line_numbers, "");
    }
}
