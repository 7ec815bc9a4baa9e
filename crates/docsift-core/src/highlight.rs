//! Highlight spans and `**` markup
//!
//! Matches are located as byte ranges over the original text before any
//! markup is produced. Ranges from different terms that overlap are merged
//! into their union; ranges that merely touch stay separate, so the markup
//! matches a per-term substitution whenever no two terms overlap.

use crate::types::HighlightSpan;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

fn term_pattern(term: &str) -> Option<Regex> {
    if term.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Case-insensitive occurrences of every term, sorted and overlap-merged
pub fn find_spans<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = terms
        .iter()
        .filter_map(|term| term_pattern(term.as_ref()))
        .flat_map(|re| re.find_iter(text).map(|m| m.range()).collect::<Vec<_>>())
        .collect();

    spans.sort_unstable_by_key(|r| (r.start, r.end));
    merge_overlapping(spans)
}

fn merge_overlapping(sorted: Vec<Range<usize>>) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(last) if span.start < last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Wrap each span in `delimiter`
pub fn render(text: &str, spans: &[Range<usize>], delimiter: &str) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * delimiter.len() * 2);
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(delimiter);
        out.push_str(&text[span.clone()]);
        out.push_str(delimiter);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Split text into alternating plain and emphasized runs
pub fn to_segments(text: &str, spans: &[Range<usize>]) -> Vec<HighlightSpan> {
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            segments.push(HighlightSpan::plain(&text[cursor..span.start]));
        }
        segments.push(HighlightSpan::emphasized(&text[span.clone()]));
        cursor = span.end;
    }
    if cursor < text.len() {
        segments.push(HighlightSpan::plain(&text[cursor..]));
    }
    segments
}

/// Parse rendered markup back into runs, the way a renderer consumes it
///
/// Text between a pair of delimiters is emphasized. An unpaired trailing
/// delimiter is kept as literal text.
///
/// Markup is lossy when the source text itself contains delimiter
/// characters next to a match: `*rust` renders as `***rust**` and parses
/// back as an emphasized `*rust`. Use the structured spans from
/// [`to_segments`] when exact boundaries matter.
pub fn parse_markup(markup: &str, delimiter: &str) -> Vec<HighlightSpan> {
    if delimiter.is_empty() {
        return vec![HighlightSpan::plain(markup)];
    }

    let parts: Vec<&str> = markup.split(delimiter).collect();
    let unpaired = parts.len() % 2 == 0;
    let mut segments = Vec::with_capacity(parts.len());

    for (i, part) in parts.iter().enumerate() {
        if unpaired && i == parts.len() - 1 {
            segments.push(HighlightSpan::plain(format!("{}{}", delimiter, part)));
        } else if i % 2 == 1 {
            segments.push(HighlightSpan::emphasized(*part));
        } else if !part.is_empty() {
            segments.push(HighlightSpan::plain(*part));
        }
    }

    segments.retain(|s| !s.text.is_empty());
    segments
}
