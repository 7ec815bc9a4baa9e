mod common;

use common::{blockchain_doc, nlp_doc, sample_corpus};
use docsift_core::{rank, tokenize, Document, TermSet};

fn terms(words: &[&str]) -> TermSet {
    words.iter().copied().collect()
}

#[test]
fn test_tokenize_empty_inputs() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
}

#[test]
fn test_tokenize_drops_stop_words_and_short_tokens() {
    let terms = tokenize("The PDF about Chatbots and Algorithms");
    assert_eq!(terms.as_slice(), ["chatbots", "algorithms"]);
}

#[test]
fn test_blockchain_scenario() {
    let terms = tokenize("find blockchain info");
    assert_eq!(terms.as_slice(), ["blockchain", "info"]);

    let results = rank(&sample_corpus(), &terms);
    assert!(!results.is_empty());
    assert_eq!(results[0].document.id, "pdf-006");
    assert!(
        results[0].relevance_score >= 15,
        "score was {}",
        results[0].relevance_score
    );
}

#[test]
fn test_paragraph_scenario() {
    let doc = Document::new("doc", "Notes", "").with_content([
        "Deep learning architectures are usually implemented in Python.",
    ]);
    let results = rank(&[doc], &terms(&["deep", "python"]));

    assert_eq!(results.len(), 1);
    let paragraphs = &results[0].matching_paragraphs;
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].matched_keywords, ["deep", "python"]);
    assert_eq!(paragraphs[0].paragraph_index, 0);
    // +2 for the paragraph, +2 bonus for two matched terms
    assert_eq!(results[0].relevance_score, 4);
}

#[test]
fn test_empty_terms_regardless_of_corpus_size() {
    let mut corpus = sample_corpus();
    for i in 0..200 {
        corpus.push(Document::new(format!("gen-{}", i), "The and for", "pdf"));
    }
    assert!(rank(&corpus, &TermSet::new()).is_empty());
    assert!(rank(&corpus, &tokenize("the pdf about")).is_empty());
}

#[test]
fn test_empty_iff_no_match() {
    let doc = nlp_doc();
    let cases: Vec<(Vec<&str>, bool)> = vec![
        (vec!["natural"], true),      // title
        (vec!["human"], true),        // description
        (vec!["models"], true),       // keyword substring
        (vec!["tokenization"], true), // paragraph only
        (vec!["blockchain"], false),
        (vec!["kanban", "scrum"], false),
    ];
    for (words, should_match) in &cases {
        let results = rank(std::slice::from_ref(&doc), &terms(words));
        assert_eq!(
            !results.is_empty(),
            *should_match,
            "terms {:?} expected match = {}",
            words,
            should_match
        );
    }
}

#[test]
fn test_document_without_content_only_uses_fields() {
    let doc = blockchain_doc();
    assert!(doc.content.is_none());
    let results = rank(&[doc], &terms(&["consensus"]));
    assert_eq!(results.len(), 1);
    assert!(results[0].matching_paragraphs.is_empty());
    assert_eq!(results[0].relevance_score, 5);
}

#[test]
fn test_rank_is_idempotent() {
    let corpus = sample_corpus();
    let terms = tokenize("language models for cloud and agile projects");
    let first = rank(&corpus, &terms);
    let second = rank(&corpus, &terms);
    assert_eq!(first, second);
}

#[test]
fn test_title_term_raises_score_by_at_least_ten() {
    let corpus = vec![nlp_doc()];
    let base = rank(&corpus, &terms(&["python"]));
    let extended = rank(&corpus, &terms(&["python", "techniques"]));
    assert_eq!(base.len(), 1);
    assert!(extended[0].relevance_score >= base[0].relevance_score + 10);
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let corpus = vec![
        Document::new("b", "Kanban basics", ""),
        Document::new("a", "Kanban boards", ""),
        Document::new("c", "Unrelated", ""),
        Document::new("d", "Kanban at scale", ""),
    ];
    let results = rank(&corpus, &terms(&["kanban"]));
    let ids: Vec<_> = results.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "d"]);
    assert!(results.iter().all(|r| r.relevance_score == 10));
}

#[test]
fn test_results_sorted_descending() {
    let results = rank(&sample_corpus(), &tokenize("cloud computing language agile"));
    assert!(results.len() >= 3);
    assert!(results
        .windows(2)
        .all(|w| w[0].relevance_score >= w[1].relevance_score));
}

#[test]
fn test_corpus_is_not_mutated() {
    let corpus = sample_corpus();
    let snapshot = corpus.clone();
    let _ = rank(&corpus, &tokenize("deep python blockchain"));
    assert_eq!(corpus, snapshot);
}

#[test]
fn test_concurrent_searches_share_corpus() {
    use std::sync::Arc;

    let corpus = Arc::new(sample_corpus());
    let expected = rank(&corpus, &tokenize("agile blockchain"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let corpus = Arc::clone(&corpus);
            std::thread::spawn(move || rank(&corpus, &tokenize("agile blockchain")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
