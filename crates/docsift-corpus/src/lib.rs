//! Corpus providers: JSON/JSONL files and the built-in sample corpus

mod error;
mod io;
mod paths;
mod source;

pub use error::CorpusError;
pub use io::{parse_json_array, parse_jsonl, read_documents};
pub use paths::{Paths, HOME_ENV};
pub use source::{load_corpus, resolve_source, BuiltinSource, CorpusSource, FileSource};
