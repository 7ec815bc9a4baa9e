//! JSON and JSONL document parsing

use crate::error::CorpusError;
use docsift_core::Document;
use std::path::Path;

/// Parse a JSON array of documents
pub fn parse_json_array(text: &str, origin: &str) -> Result<Vec<Document>, CorpusError> {
    serde_json::from_str(text).map_err(|source| CorpusError::Malformed {
        origin: origin.to_string(),
        line: source.line(),
        source,
    })
}

/// Parse one document per line; blank lines are skipped, bad lines are not
pub fn parse_jsonl(text: &str, origin: &str) -> Result<Vec<Document>, CorpusError> {
    let mut documents = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let doc = serde_json::from_str(line).map_err(|source| CorpusError::Malformed {
            origin: origin.to_string(),
            line: idx + 1,
            source,
        })?;
        documents.push(doc);
    }
    Ok(documents)
}

/// Read a corpus file; `.jsonl` is line-delimited, anything else a JSON array
pub fn read_documents(path: &Path) -> Result<Vec<Document>, CorpusError> {
    let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let origin = path.display().to_string();
    let is_jsonl = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

    if is_jsonl {
        parse_jsonl(&text, &origin)
    } else {
        parse_json_array(&text, &origin)
    }
}
