//! Plain-text formatting of documents and results

use docsift_core::{Document, SearchResult};
use std::fmt::Write as _;

/// "July 3, 2025 · 3.5 MB", skipping empty parts
pub fn meta_line(doc: &Document) -> String {
    let mut parts = Vec::new();
    if !doc.last_modified.is_empty() {
        parts.push(doc.last_modified.as_str());
    }
    if let Some(size) = doc.file_size.as_deref().filter(|s| !s.is_empty()) {
        parts.push(size);
    }
    parts.join(" · ")
}

/// One ranked result with its matching paragraphs
pub fn format_result(position: usize, result: &SearchResult) -> String {
    let doc = &result.document;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>2}. [{}] {} ({})",
        position, result.relevance_score, doc.title, doc.id
    );

    let meta = meta_line(doc);
    if !meta.is_empty() {
        let _ = writeln!(out, "    {}", meta);
    }
    if !doc.description.is_empty() {
        let _ = writeln!(out, "    {}", doc.description);
    }
    for paragraph in &result.matching_paragraphs {
        let _ = writeln!(
            out,
            "    ¶{} [{}] {}",
            paragraph.paragraph_index + 1,
            paragraph.matched_keywords.join(", "),
            paragraph.highlighted_text
        );
    }
    out
}

/// Full document listing for `show`
pub fn format_document(doc: &Document) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", doc.title, doc.id);
    let meta = meta_line(doc);
    if !meta.is_empty() {
        let _ = writeln!(out, "{}", meta);
    }
    if let Some(url) = &doc.url {
        let _ = writeln!(out, "{}", url);
    }
    let _ = writeln!(out, "\n{}", doc.description);
    if !doc.keywords.is_empty() {
        let _ = writeln!(out, "\nKeywords: {}", doc.keywords.join(", "));
    }
    if let Some(content) = &doc.content {
        out.push('\n');
        for (idx, paragraph) in content.iter().enumerate() {
            let _ = writeln!(out, "¶{} {}", idx + 1, paragraph);
        }
    }
    out
}
