//! Tokenize-then-rank facade

use crate::config::EngineConfig;
use crate::ranker::Ranker;
use crate::tokenizer::Tokenizer;
use crate::types::{Document, SearchResult, TermSet};
use serde::Serialize;
use tracing::debug;

/// Terms extracted from a query together with the ranking they produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub terms: TermSet,
    pub results: Vec<SearchResult>,
}

impl SearchOutcome {
    /// True when the query had no usable terms and nothing was searched
    pub fn is_no_search(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    tokenizer: Tokenizer,
    ranker: Ranker,
}

impl SearchEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            tokenizer: Tokenizer::from_config(config),
            ranker: Ranker::from_config(config),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    pub fn search(&self, corpus: &[Document], query: &str) -> SearchOutcome {
        let terms = self.tokenizer.tokenize(query);
        let results = self.ranker.rank(corpus, &terms);
        debug!(
            terms = terms.len(),
            results = results.len(),
            corpus = corpus.len(),
            "search complete"
        );
        SearchOutcome { terms, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_tokenizes_and_ranks() {
        let engine = SearchEngine::default();
        let corpus = vec![
            Document::new("a", "Blockchain Technology Explained", "")
                .with_keywords(["blockchain"]),
            Document::new("b", "Cloud Computing", ""),
        ];
        let outcome = engine.search(&corpus, "find blockchain info");
        assert_eq!(outcome.terms.as_slice(), ["blockchain", "info"]);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].relevance_score, 15);
    }

    #[test]
    fn test_stop_word_only_query_is_no_search() {
        let engine = SearchEngine::default();
        let corpus = vec![Document::new("a", "The PDF", "")];
        let outcome = engine.search(&corpus, "find the pdf");
        assert!(outcome.is_no_search());
        assert!(outcome.results.is_empty());
    }

    #[test]
    fn test_config_flows_to_tokenizer() {
        let config = EngineConfig {
            extra_stop_words: vec!["cloud".to_string()],
            ..EngineConfig::new()
        };
        let engine = SearchEngine::new(&config);
        let corpus = vec![Document::new("b", "Cloud Computing", "")];
        assert!(engine.search(&corpus, "cloud").results.is_empty());
    }

    #[test]
    fn test_decomposed_accents_match_title() {
        let engine = SearchEngine::default();
        let corpus = vec![Document::new("a", "Re\u{301}sume\u{301} writing", "")];
        let outcome = engine.search(&corpus, "Re\u{301}sume\u{301}");
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].relevance_score, 10);
    }
}
