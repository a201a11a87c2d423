//! Persona classification of business rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse actor behind a business rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    Administrator,
    Player,
    System,
    User,
}

/// Keyword groups in priority order; the first group with a hit wins
const KEYWORD_GROUPS: &[(Persona, &[&str])] = &[
    (
        Persona::Administrator,
        &[
            "admin",
            "administrator",
            "administrador",
            "moderator",
            "moderador",
            "operator",
            "operador",
        ],
    ),
    (Persona::Player, &["player", "jogador"]),
    (
        Persona::System,
        &["system", "sistema", "api", "service", "serviço", "servico"],
    ),
    (Persona::User, &["user", "usuário", "usuario"]),
];

impl Persona {
    /// Classify rule text by case-insensitive keyword containment, defaulting to `User`
    pub fn classify(rule_text: &str) -> Persona {
        let text = rule_text.to_lowercase();
        KEYWORD_GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map_or(Persona::User, |(persona, _)| *persona)
    }

    /// Display label, also used as the persona directory name
    pub fn label(&self, language: StoryLanguage) -> &'static str {
        match (language, self) {
            (StoryLanguage::English, Persona::Administrator) => "Administrator",
            (StoryLanguage::English, Persona::Player) => "Player",
            (StoryLanguage::English, Persona::System) => "System",
            (StoryLanguage::English, Persona::User) => "User",
            (StoryLanguage::Portuguese, Persona::Administrator) => "Administrador",
            (StoryLanguage::Portuguese, Persona::Player) => "Jogador",
            (StoryLanguage::Portuguese, Persona::System) => "Sistema",
            (StoryLanguage::Portuguese, Persona::User) => "Usuário",
        }
    }
}

/// Language of persona labels and generic scenario steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryLanguage {
    #[default]
    English,
    Portuguese,
}

impl StoryLanguage {
    pub fn given_step(&self) -> &'static str {
        match self {
            StoryLanguage::English => "a relevant situation for the rule occurs",
            StoryLanguage::Portuguese => "uma situação relevante para a regra",
        }
    }

    pub fn when_step(&self) -> &'static str {
        match self {
            StoryLanguage::English => "the condition described by the rule occurs",
            StoryLanguage::Portuguese => "a condição descrita na regra ocorre",
        }
    }

    /// Scenario title used when a rule has no text
    pub fn default_rule(&self) -> &'static str {
        match self {
            StoryLanguage::English => "Rule",
            StoryLanguage::Portuguese => "Regra",
        }
    }
}

impl fmt::Display for StoryLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryLanguage::English => write!(f, "english"),
            StoryLanguage::Portuguese => write!(f, "portuguese"),
        }
    }
}

impl FromStr for StoryLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(StoryLanguage::English),
            "pt" | "pt-br" | "portuguese" => Ok(StoryLanguage::Portuguese),
            other => Err(format!("unknown story language '{other}' (expected: en, pt)")),
        }
    }
}
