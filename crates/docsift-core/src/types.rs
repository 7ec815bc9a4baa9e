//! Core types for document search

use serde::{Deserialize, Serialize};

/// A searchable document (compatible with the app's JSON records)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    /// Plain-text paragraphs, when the document body is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
}

impl Document {
    /// Minimal document with only the required fields set
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            url: None,
            keywords: Vec::new(),
            last_modified: String::new(),
            file_size: None,
            content: None,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_content<I, S>(mut self, paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = Some(paragraphs.into_iter().map(Into::into).collect());
        self
    }
}

/// Normalized search terms; ordered for display, set semantics for membership
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TermSet {
    terms: Vec<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, returning false if it was already present
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// Terms joined for display ("a, b, c")
    pub fn joined(&self) -> String {
        self.terms.join(", ")
    }
}

impl From<Vec<String>> for TermSet {
    fn from(terms: Vec<String>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<TermSet> for Vec<String> {
    fn from(set: TermSet) -> Self {
        set.terms
    }
}

impl<S: Into<String>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TermSet::new();
        for term in iter {
            set.insert(term);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// A run of paragraph text, emphasized or plain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub text: String,
    pub highlighted: bool,
}

impl HighlightSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// A paragraph that contains at least one search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingParagraph {
    pub text: String,
    pub paragraph_index: usize,
    pub matched_keywords: Vec<String>,
    pub highlighted_text: String,
    #[serde(default)]
    pub spans: Vec<HighlightSpan>,
}

/// A ranked document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub document: Document,
    pub matching_paragraphs: Vec<MatchingParagraph>,
    pub relevance_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_set_collapses_duplicates() {
        let set: TermSet = ["rust", "search", "rust"].into_iter().collect();
        assert_eq!(set.as_slice(), ["rust", "search"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_term_set_deserialize_dedupes() {
        let set: TermSet = serde_json::from_str(r#"["b","a","b"]"#).unwrap();
        assert_eq!(set.as_slice(), ["b", "a"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["b","a"]"#);
    }

    #[test]
    fn test_document_camel_case() {
        let json = r#"{"id":"pdf-001","title":"PDF4","description":"Chatbots","keywords":["algorithms"],"lastModified":"July 10, 2025","fileSize":""}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.last_modified, "July 10, 2025");
        assert_eq!(doc.file_size.as_deref(), Some(""));
        assert!(doc.content.is_none());
        assert!(doc.url.is_none());
    }

    #[test]
    fn test_document_rejects_non_string_keywords() {
        let json = r#"{"id":"x","title":"t","description":"d","keywords":[1,2]}"#;
        assert!(serde_json::from_str::<Document>(json).is_err());
    }

    #[test]
    fn test_search_result_flattens_document() {
        let result = SearchResult {
            document: Document::new("doc-1", "Title", "Desc"),
            matching_paragraphs: Vec::new(),
            relevance_score: 15,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["id"], "doc-1");
        assert_eq!(value["relevanceScore"], 15);
        assert!(value["matchingParagraphs"].as_array().unwrap().is_empty());
    }
}
