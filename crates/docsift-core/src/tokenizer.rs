//! Query keyword extraction

use crate::config::{EngineConfig, BUILTIN_STOP_WORDS};
use crate::types::TermSet;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static STRIP_RE: OnceLock<Regex> = OnceLock::new();

/// Tokens must be longer than this many characters
const MIN_TERM_CHARS: usize = 2;

/// Turns free text into a `TermSet`
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Tokenizer with the built-in stop words only
    pub fn new() -> Self {
        Self {
            stop_words: BUILTIN_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new().with_extra_stop_words(&config.extra_stop_words)
    }

    /// Add stop words on top of the built-in list
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn tokenize(&self, text: &str) -> TermSet {
        let re = STRIP_RE.get_or_init(|| Regex::new(r"[^\p{L}\p{M}\p{N}\s]").unwrap());
        let lowered = text.to_lowercase();
        let stripped = re.replace_all(&lowered, "");

        stripped
            .split_whitespace()
            .filter(|word| word.chars().count() > MIN_TERM_CHARS)
            .filter(|word| !self.is_stop_word(word))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize with the built-in stop words
pub fn tokenize(text: &str) -> TermSet {
    Tokenizer::new().tokenize(text)
}
