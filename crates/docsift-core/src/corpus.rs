//! Validated, read-only document collection

use crate::error::EngineError;
use crate::types::Document;
use std::collections::HashMap;

/// Documents in corpus order with unique ids
///
/// Built once and never mutated; searches only borrow it.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Result<Self, EngineError> {
        let mut by_id = HashMap::with_capacity(documents.len());
        for (position, doc) in documents.iter().enumerate() {
            if doc.id.trim().is_empty() {
                return Err(EngineError::EmptyDocumentId { position });
            }
            if by_id.insert(doc.id.clone(), position).is_some() {
                return Err(EngineError::DuplicateDocumentId(doc.id.clone()));
            }
        }
        Ok(Self { documents, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&idx| &self.documents[idx])
    }

    /// Like `get`, but a missing id is an error
    pub fn require(&self, id: &str) -> Result<&Document, EngineError> {
        self.get(id)
            .ok_or_else(|| EngineError::DocumentNotFound(id.to_string()))
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl AsRef<[Document]> for Corpus {
    fn as_ref(&self) -> &[Document] {
        &self.documents
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
