// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning free text into tokens.
//!
//! A token is a lowercased, alphanumeric-only word that survived the stopword
//! filter. Order is preserved because the position-weighted signal and the
//! bigram signal both care which word came first.

use std::collections::HashSet;

use crate::utils::normalize_piece;

/// Articles, prepositions and copulas that carry no matching signal.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "to", "of", "in", "on", "at", "for", "with",
    "from", "by",
];

/// Fixed stopword set, built once and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize_piece(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// An empty set: every non-empty piece becomes a token.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS)
    }
}

/// Splits text on whitespace, normalizes each piece, drops empties and stopwords.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    stopwords: &'a StopWords,
}

impl<'a> Tokenizer<'a> {
    pub fn new(stopwords: &'a StopWords) -> Self {
        Self { stopwords }
    }

    /// Ordered token sequence for `text`. Never fails; empty input gives an empty vec.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(normalize_piece)
            .filter(|token| !token.is_empty() && !self.stopwords.contains(token))
            .collect()
    }
}
