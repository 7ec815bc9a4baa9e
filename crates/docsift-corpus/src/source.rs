//! Corpus providers

use crate::error::CorpusError;
use crate::io::{parse_json_array, read_documents};
use crate::paths::Paths;
use docsift_core::{Corpus, Document};
use std::path::{Path, PathBuf};
use tracing::info;

static SAMPLE_CORPUS: &str = include_str!("../data/sample_corpus.json");

/// Something that can produce the documents to search
pub trait CorpusSource {
    fn load(&self) -> Result<Vec<Document>, CorpusError>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}

/// Documents read from a JSON or JSONL file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for FileSource {
    fn load(&self) -> Result<Vec<Document>, CorpusError> {
        read_documents(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The sample documents shipped with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CorpusSource for BuiltinSource {
    fn load(&self) -> Result<Vec<Document>, CorpusError> {
        parse_json_array(SAMPLE_CORPUS, "built-in sample corpus")
    }

    fn describe(&self) -> String {
        "built-in sample corpus".to_string()
    }
}

/// Load and validate a corpus
pub fn load_corpus(source: &dyn CorpusSource) -> Result<Corpus, CorpusError> {
    let documents = source.load()?;
    let corpus = Corpus::new(documents)?;
    info!(
        source = %source.describe(),
        documents = corpus.len(),
        "corpus loaded"
    );
    Ok(corpus)
}

/// Pick a source: explicit path, then the default corpus file, then the sample
///
/// An explicit path is used even when missing so the caller sees
/// `CorpusError::Unavailable` instead of silently searching other data.
pub fn resolve_source(explicit: Option<&Path>, paths: &Paths) -> Box<dyn CorpusSource> {
    if let Some(path) = explicit {
        return Box::new(FileSource::new(path));
    }

    let default = paths.corpus_file();
    if default.exists() {
        return Box::new(FileSource::new(default));
    }

    info!(
        missing = %default.display(),
        "no corpus file found, using built-in sample corpus"
    );
    Box::new(BuiltinSource)
}
