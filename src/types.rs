// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the matcher.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Record**: `keywords` and `term_frequency` are derived from `question`
//!   with the same tokenizer that tokenizes queries. They are computed once in
//!   `Record::new` and never touched again, which is why the fields are private.
//!
//! - **ScoredCandidate**: `index` is the record's position in the catalog it
//!   was ranked against. Ties in score are broken by it, so the same catalog
//!   always ranks the same way.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::tokenizer::Tokenizer;
use crate::utils::char_len;

/// Tokens longer than this many characters become record keywords.
pub const KEYWORD_MIN_EXCLUSIVE_LEN: usize = 3;

/// One question/answer pair from the catalog. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    id: String,
    question: String,
    answer: String,
    #[serde(skip)]
    question_tokens: Vec<String>,
    #[serde(skip)]
    keywords: BTreeSet<String>,
    #[serde(skip)]
    term_frequency: HashMap<String, u32>,
}

impl Record {
    /// Build a record and derive its token tables from `question`.
    ///
    /// `keywords` holds the question tokens longer than 3 characters;
    /// `term_frequency` counts every question token, short ones included.
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        tokenizer: &Tokenizer<'_>,
    ) -> Self {
        let question = question.into();
        let question_tokens = tokenizer.tokenize(&question);

        let keywords = question_tokens
            .iter()
            .filter(|t| char_len(t) > KEYWORD_MIN_EXCLUSIVE_LEN)
            .cloned()
            .collect();

        let mut term_frequency: HashMap<String, u32> = HashMap::new();
        for token in &question_tokens {
            *term_frequency.entry(token.clone()).or_insert(0) += 1;
        }

        Self {
            id: id.into(),
            question,
            answer: answer.into(),
            question_tokens,
            keywords,
            term_frequency,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Tokenized question text, in order.
    pub fn question_tokens(&self) -> &[String] {
        &self.question_tokens
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    /// How often `token` occurs in this record's own question text.
    pub fn frequency(&self, token: &str) -> Option<u32> {
        self.term_frequency.get(token).copied()
    }

    pub fn term_frequency(&self) -> &HashMap<String, u32> {
        &self.term_frequency
    }
}

/// A record's score against one query. Created per query, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub record_id: String,
    /// Position of the record in the ranked catalog.
    pub index: usize,
    pub score: f64,
}
