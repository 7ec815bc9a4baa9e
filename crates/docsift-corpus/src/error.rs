//! Corpus acquisition errors

use docsift_core::EngineError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a corpus; distinct from a search that found nothing
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed corpus in {origin} at line {line}: {source}")]
    Malformed {
        origin: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid corpus: {0}")]
    Invalid(#[from] EngineError),
}

impl CorpusError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CorpusError::Unavailable { .. })
    }
}
