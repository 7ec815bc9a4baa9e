//! Keyword extraction and relevance ranking over an in-memory corpus

mod chat;
mod config;
mod corpus;
mod engine;
mod error;
pub mod highlight;
mod ranker;
mod tokenizer;
mod types;

pub use chat::{compose_reply, ChatSession, Message, Role, NO_TERMS_MESSAGE, WELCOME_MESSAGE};
pub use config::{EngineConfig, ScoreWeights, BUILTIN_STOP_WORDS, DEFAULT_DELIMITER};
pub use corpus::Corpus;
pub use engine::{SearchEngine, SearchOutcome};
pub use error::EngineError;
pub use ranker::{rank, Ranker};
pub use tokenizer::{tokenize, Tokenizer};
pub use types::{Document, HighlightSpan, MatchingParagraph, SearchResult, TermSet};
