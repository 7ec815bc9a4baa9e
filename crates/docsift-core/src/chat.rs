//! Conversational wrapper around the search engine

use crate::engine::{SearchEngine, SearchOutcome};
use crate::types::{Document, SearchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Hello! I'm your document search assistant. \
I can help you find documents based on keywords. What would you like to search for?";

pub const NO_TERMS_MESSAGE: &str =
    "Please include at least one keyword longer than two letters so I can search for it.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,
}

/// Assistant reply text for a finished search
pub fn compose_reply(outcome: &SearchOutcome) -> String {
    if outcome.is_no_search() {
        return NO_TERMS_MESSAGE.to_string();
    }

    let count = outcome.results.len();
    let terms = outcome.terms.joined();
    if count > 0 {
        format!(
            "I found {} document{} related to \"{}\":",
            count,
            if count == 1 { "" } else { "s" },
            terms
        )
    } else {
        format!(
            "I couldn't find any documents matching \"{}\". Try different keywords.",
            terms
        )
    }
}

/// In-memory conversation
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    next_seq: u64,
}

impl ChatSession {
    /// New session opened by the welcome message
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_seq: 0,
        };
        session.push(Role::Assistant, WELCOME_MESSAGE.to_string(), None);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Record a user message and the assistant's reply
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send(
        &mut self,
        engine: &SearchEngine,
        corpus: &[Document],
        text: &str,
    ) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }

        self.push(Role::User, text.to_string(), None);

        let outcome = engine.search(corpus, text);
        let content = compose_reply(&outcome);
        let results = if outcome.results.is_empty() {
            None
        } else {
            Some(outcome.results)
        };
        self.push(Role::Assistant, content, results);
        self.messages.last()
    }

    fn push(&mut self, role: Role, content: String, results: Option<Vec<SearchResult>>) {
        let timestamp = Utc::now();
        let id = format!("{}-{}", timestamp.timestamp_millis(), self.next_seq);
        self.next_seq += 1;
        self.messages.push(Message {
            id,
            role,
            content,
            timestamp,
            results,
        });
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
