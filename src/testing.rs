//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::CatalogEntry;
use crate::thesaurus::{build_thesaurus, SynonymThesaurus};
use crate::tokenizer::{StopWords, Tokenizer};
use crate::types::Record;

/// Create a record with the default stopwords and a placeholder answer.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: &str, question: &str) -> Record {
    let stopwords = StopWords::default();
    Record::new(
        id,
        question,
        format!("Answer for {}", id),
        &Tokenizer::new(&stopwords),
    )
}

/// Build a catalog from `(id, question)` pairs, in order.
pub fn make_catalog(pairs: &[(&str, &str)]) -> Vec<Record> {
    pairs.iter().map(|(id, q)| make_record(id, q)).collect()
}

/// Build on-disk style entries from `(id, question)` pairs.
pub fn make_entries(pairs: &[(&str, &str)]) -> Vec<CatalogEntry> {
    pairs
        .iter()
        .map(|(id, q)| CatalogEntry {
            id: id.to_string(),
            question: q.to_string(),
            answer: format!("Answer for {}", id),
        })
        .collect()
}

/// The built-in DSA thesaurus.
pub fn test_thesaurus() -> SynonymThesaurus {
    build_thesaurus()
}

/// Two-record catalog: queue-from-stacks and linked-list reversal.
pub fn two_record_catalog() -> Vec<Record> {
    make_catalog(&[
        ("A", "Implement a queue using two stacks"),
        ("B", "Write a program to reverse a linked list"),
    ])
}

/// A small catalog covering the common DSA topics.
pub const SAMPLE_QUESTIONS: &[(&str, &str)] = &[
    ("Q1", "Implement a queue using two stacks"),
    ("Q2", "Write a program to reverse a linked list"),
    ("Q3", "Implement a circular queue using an array"),
    ("Q4", "Find the height of a binary search tree"),
    ("Q5", "Sort an array using quick sort"),
    ("Q6", "Perform breadth first search on a graph"),
    ("Q7", "Detect a cycle in a linked list"),
    ("Q8", "Implement a stack using a linked list"),
    ("Q9", "Find the shortest path using Dijkstra algorithm"),
    ("Q10", "Sort the elements of a queue"),
];

pub fn sample_catalog() -> Vec<Record> {
    make_catalog(SAMPLE_QUESTIONS)
}
