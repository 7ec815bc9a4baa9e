//! Configuration for tokenizing and ranking

use serde::{Deserialize, Serialize};

/// Stop words every tokenizer drops; configuration can only add to these
pub const BUILTIN_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "pdf", "pdfs", "find", "search", "about", "with", "related",
];

/// Highlight marker wrapped around each matched run
pub const DEFAULT_DELIMITER: &str = "**";

/// Additive score weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Per term found in the title
    pub title: u32,
    /// Per term found in the description
    pub description: u32,
    /// Per term found in any keyword
    pub keyword: u32,
    /// Per matching paragraph
    pub paragraph: u32,
    /// Add the matched-term count for paragraphs matching more than one term
    pub multi_term_bonus: bool,
}

impl ScoreWeights {
    pub fn new() -> Self {
        Self {
            title: 10,
            description: 5,
            keyword: 5,
            paragraph: 2,
            multi_term_bonus: true,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Stop words dropped in addition to the built-in list
    pub extra_stop_words: Vec<String>,

    /// Score weights
    pub weights: ScoreWeights,

    /// Highlight delimiter
    pub delimiter: String,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            extra_stop_words: Vec::new(),
            weights: ScoreWeights::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.weights.title, 10);
        assert_eq!(config.weights.description, 5);
        assert_eq!(config.weights.keyword, 5);
        assert_eq!(config.weights.paragraph, 2);
        assert!(config.weights.multi_term_bonus);
        assert_eq!(config.delimiter, "**");
        assert!(config.extra_stop_words.is_empty());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"weights":{"title":20}}"#).unwrap();
        assert_eq!(config.weights.title, 20);
        assert_eq!(config.weights.keyword, 5);
        assert_eq!(config.delimiter, "**");
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(EngineConfig::from_json(r#"{"extra_stop_words":"nope"}"#).is_err());
    }
}
