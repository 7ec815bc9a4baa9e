//! Engine error types

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("document at position {position} has an empty id")]
    EmptyDocumentId { position: usize },

    #[error("duplicate document id: {0}")]
    DuplicateDocumentId(String),

    #[error("document not found: {0}")]
    DocumentNotFound(String),
}
