// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural co-occurrence heuristics on raw text.
//!
//! Lab questions follow a handful of shapes: "implement X", "write a program
//! to <verb> Y", "use <algorithm> on Z". When query and question share the
//! shape, they likely ask for the same thing even if the nouns differ.
//!
//! Matching is plain substring containment on lowercased text, not tokens, so
//! "binary search" can be detected as a phrase and "sort" fires on "sorting".

/// Both sides say "implement" or "write".
pub const INSTRUCTIONAL_BONUS: f64 = 40.0;

/// Per operation verb present on both sides.
pub const OPERATION_BONUS: f64 = 30.0;

/// Per structure + operation compound present on both sides.
pub const COMPOUND_BONUS: f64 = 60.0;

/// Per named algorithm present on both sides.
pub const ALGORITHM_BONUS: f64 = 80.0;

pub const DEFAULT_INSTRUCTIONAL: &[&str] = &["implement", "write"];

pub const DEFAULT_OPERATIONS: &[&str] =
    &["insert", "delete", "search", "sort", "traverse", "reverse", "merge"];

pub const DEFAULT_COMPOUNDS: &[(&str, &str)] = &[("queue", "sort")];

pub const DEFAULT_ALGORITHMS: &[&str] = &[
    "dijkstra",
    "bfs",
    "dfs",
    "kruskal",
    "prim",
    "quicksort",
    "mergesort",
    "binary search",
];

/// Closed vocabularies the detector looks for. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    pub instructional: Vec<String>,
    pub operations: Vec<String>,
    pub compounds: Vec<(String, String)>,
    pub algorithms: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for PatternTable {
    fn default() -> Self {
        Self {
            instructional: owned(DEFAULT_INSTRUCTIONAL),
            operations: owned(DEFAULT_OPERATIONS),
            compounds: DEFAULT_COMPOUNDS
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            algorithms: owned(DEFAULT_ALGORITHMS),
        }
    }
}

/// Additive bonus for shared structure between `query` and `question`.
///
/// Each rule fires independently; a pair may trigger several at once.
pub fn detect_pattern(query: &str, question: &str, table: &PatternTable) -> f64 {
    let query = query.to_lowercase();
    let question = question.to_lowercase();
    let both = |needle: &str| query.contains(needle) && question.contains(needle);

    let mut bonus = 0.0;

    let instructional = |text: &str| table.instructional.iter().any(|m| text.contains(m.as_str()));
    if instructional(query.as_str()) && instructional(question.as_str()) {
        bonus += INSTRUCTIONAL_BONUS;
    }

    for op in &table.operations {
        if both(op.as_str()) {
            bonus += OPERATION_BONUS;
        }
    }

    for (structure, operation) in &table.compounds {
        if both(structure.as_str()) && both(operation.as_str()) {
            bonus += COMPOUND_BONUS;
        }
    }

    for algo in &table.algorithms {
        if both(algo.as_str()) {
            bonus += ALGORITHM_BONUS;
        }
    }

    bonus
}
