#![allow(dead_code)]

use docsift_core::Document;

pub fn blockchain_doc() -> Document {
    Document::new(
        "pdf-006",
        "Blockchain Technology Explained",
        "Introduction to blockchain architecture, consensus mechanisms, and applications.",
    )
    .with_keywords(["blockchain", "cryptocurrency", "smart contracts", "bitcoin"])
}

pub fn nlp_doc() -> Document {
    Document::new(
        "pdf-009",
        "Natural Language Processing Techniques",
        "Advanced methods for processing and analyzing human language with AI.",
    )
    .with_keywords(["nlp", "text analysis", "language models"])
    .with_content([
        "Tokenization splits raw text into words before any model sees it.",
        "Deep learning architectures are usually implemented in Python.",
    ])
}

pub fn sample_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "pdf-003",
            "Cloud Computing Architecture",
            "Detailed overview of cloud computing models, services, and deployment strategies.",
        )
        .with_keywords(["cloud computing", "aws", "serverless"]),
        blockchain_doc(),
        nlp_doc(),
        Document::new(
            "pdf-010",
            "Agile Project Management",
            "Comprehensive guide to agile methodologies, scrum, and kanban for project teams.",
        )
        .with_keywords(["agile", "project management", "scrum"]),
    ]
}
