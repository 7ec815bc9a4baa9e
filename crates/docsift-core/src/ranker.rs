//! Field and paragraph relevance ranking

use crate::config::{EngineConfig, ScoreWeights, DEFAULT_DELIMITER};
use crate::highlight;
use crate::types::{Document, MatchingParagraph, SearchResult, TermSet};

/// Scores documents against a term set
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoreWeights,
    delimiter: String,
}

impl Ranker {
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            weights: config.weights,
            delimiter: config.delimiter.clone(),
        }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Rank matching documents, best first
    ///
    /// Documents with no field or paragraph match are left out. Equal
    /// scores keep corpus order.
    pub fn rank(&self, corpus: &[Document], terms: &TermSet) -> Vec<SearchResult> {
        // Dedupe after lowercasing so case variants count once
        let terms: TermSet = terms
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect();
        let terms: Vec<String> = terms.into();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult> = corpus
            .iter()
            .filter_map(|doc| self.score_document(doc, &terms))
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        results
    }

    fn score_document(&self, doc: &Document, terms: &[String]) -> Option<SearchResult> {
        let title = doc.title.to_lowercase();
        let description = doc.description.to_lowercase();
        let keywords: Vec<String> = doc.keywords.iter().map(|k| k.to_lowercase()).collect();

        let mut score = 0u32;
        let mut field_matched = false;

        for term in terms {
            if title.contains(term.as_str()) {
                score = score.saturating_add(self.weights.title);
                field_matched = true;
            }
            if description.contains(term.as_str()) {
                score = score.saturating_add(self.weights.description);
                field_matched = true;
            }
            if keywords.iter().any(|k| k.contains(term.as_str())) {
                score = score.saturating_add(self.weights.keyword);
                field_matched = true;
            }
        }

        let paragraphs = match &doc.content {
            Some(content) => self.matching_paragraphs(content, terms),
            None => Vec::new(),
        };

        if !field_matched && paragraphs.is_empty() {
            return None;
        }

        for paragraph in &paragraphs {
            score = score.saturating_add(self.weights.paragraph);
            let matched = paragraph.matched_keywords.len();
            if self.weights.multi_term_bonus && matched > 1 {
                score = score.saturating_add(u32::try_from(matched).unwrap_or(u32::MAX));
            }
        }

        Some(SearchResult {
            document: doc.clone(),
            matching_paragraphs: paragraphs,
            relevance_score: score,
        })
    }

    fn matching_paragraphs(&self, content: &[String], terms: &[String]) -> Vec<MatchingParagraph> {
        content
            .iter()
            .enumerate()
            .filter_map(|(paragraph_index, text)| {
                let lowered = text.to_lowercase();
                let matched: Vec<String> = terms
                    .iter()
                    .filter(|t| lowered.contains(t.as_str()))
                    .cloned()
                    .collect();
                if matched.is_empty() {
                    return None;
                }

                let spans = highlight::find_spans(text, matched.as_slice());
                Some(MatchingParagraph {
                    text: text.clone(),
                    paragraph_index,
                    highlighted_text: highlight::render(text, &spans, &self.delimiter),
                    spans: highlight::to_segments(text, &spans),
                    matched_keywords: matched,
                })
            })
            .collect()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank with the default weights and `**` highlights
pub fn rank(corpus: &[Document], terms: &TermSet) -> Vec<SearchResult> {
    Ranker::new().rank(corpus, terms)
}
