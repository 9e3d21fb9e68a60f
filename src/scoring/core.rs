// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a match score.
//!
//! Every signal compares the query's tokens against one record's question
//! tokens. Most of them are pairwise loops over (query token, record token),
//! so a pair that matches several ways (exact, substring, fuzzy, phonetic)
//! collects from each.
//!
//! # Signals
//!
//! | #  | Signal     | Query side       | Contribution                                   |
//! |----|------------|------------------|------------------------------------------------|
//! | 1  | exact      | expanded set     | 100 per equal pair                             |
//! | 2  | substring  | raw tokens       | 50 per containment, each direction             |
//! | 3  | fuzzy      | raw tokens       | `(1 - d/maxLen) * 40` when `d <= 2`            |
//! | 4  | ngram      | raw tokens       | `dice * 30` when `dice > 0.5`                  |
//! | 5  | phonetic   | raw tokens       | 45 per Soundex-equal pair                      |
//! | 6  | keyword    | expanded set     | 80 per shared record keyword                   |
//! | 7  | frequency  | raw tokens       | `60 / (1 + ln f)`, f = count in this record    |
//! | 8  | coverage   | raw tokens       | `50 * matched / total`                         |
//! | 9  | pattern    | raw text         | see `pattern`                                  |
//! | 10 | bigram     | raw tokens       | `100 * dice` over adjacent word pairs          |
//! | 11 | position   | raw tokens       | `50 / (1 + 0.3 i)` per exact hit at index `i`  |
//! | 12 | penalty    | raw tokens       | `* 0.7` for a lone token shorter than 4 chars  |
//!
//! Signal 7 is record-local: `f` counts occurrences inside the record's own
//! question, not across the catalog. It damps words a question repeats; it is
//! not inverse document frequency.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::config::{EngineConfig, DEFAULT_CONFIG};
use crate::fuzzy::{dice_coefficient, levenshtein_bounded, ngram_dice, sounds_like};
use crate::pattern::detect_pattern;
use crate::thesaurus::SynonymThesaurus;
use crate::types::Record;
use crate::utils::char_len;

// =============================================================================
// WEIGHTS
// =============================================================================

/// Per (expanded query token, question token) equality.
pub const EXACT_MATCH_WEIGHT: f64 = 100.0;

/// Per containment, checked in both directions independently.
pub const SUBSTRING_WEIGHT: f64 = 50.0;

/// The contained token must be longer than this.
pub const SUBSTRING_MIN_EXCLUSIVE_LEN: usize = 2;

/// Scale of the fuzzy edit-distance signal.
pub const FUZZY_WEIGHT: f64 = 40.0;
pub const FUZZY_MIN_LEN: usize = 3;
pub const FUZZY_MAX_DISTANCE: usize = 2;
/// The longer token of the pair must be longer than this.
pub const FUZZY_MIN_EXCLUSIVE_MAX_LEN: usize = 3;

/// Scale of the trigram signal.
pub const NGRAM_WEIGHT: f64 = 30.0;
pub const NGRAM_MIN_LEN: usize = 4;
pub const NGRAM_THRESHOLD: f64 = 0.5;

/// Per Soundex-equal pair.
pub const PHONETIC_WEIGHT: f64 = 45.0;

/// Per expanded query token that is a record keyword.
pub const KEYWORD_WEIGHT: f64 = 80.0;

/// Numerator of the record-local frequency damping.
pub const FREQUENCY_WEIGHT: f64 = 60.0;

/// Scale of the coverage fraction.
pub const COVERAGE_WEIGHT: f64 = 50.0;

/// Scale of the word-bigram Dice coefficient (as a percentage).
pub const BIGRAM_WEIGHT: f64 = 100.0;

/// Base of the position-weighted exact match.
pub const POSITION_WEIGHT: f64 = 50.0;
pub const POSITION_DECAY: f64 = 0.3;

/// Multiplier for a query of one short token.
pub const SHORT_QUERY_PENALTY: f64 = 0.7;
/// A lone token shorter than this is penalized.
pub const SHORT_QUERY_MAX_EXCLUSIVE_LEN: usize = 4;

// =============================================================================
// BREAKDOWN
// =============================================================================

/// Every signal of one (query, record) score, kept apart for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub exact: f64,
    pub substring: f64,
    pub fuzzy: f64,
    pub ngram: f64,
    pub phonetic: f64,
    pub keyword: f64,
    pub frequency: f64,
    pub coverage: f64,
    pub pattern: f64,
    pub bigram: f64,
    pub position: f64,
    /// Final multiplier: `1.0`, or `SHORT_QUERY_PENALTY`.
    pub penalty: f64,
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self {
            exact: 0.0,
            substring: 0.0,
            fuzzy: 0.0,
            ngram: 0.0,
            phonetic: 0.0,
            keyword: 0.0,
            frequency: 0.0,
            coverage: 0.0,
            pattern: 0.0,
            bigram: 0.0,
            position: 0.0,
            penalty: 1.0,
        }
    }
}

impl ScoreBreakdown {
    /// Signals 1–11 in table order, then the penalty multiplier.
    pub fn total(&self) -> f64 {
        let sum = self.exact
            + self.substring
            + self.fuzzy
            + self.ngram
            + self.phonetic
            + self.keyword
            + self.frequency
            + self.coverage
            + self.pattern
            + self.bigram
            + self.position;
        sum * self.penalty
    }

    /// `(name, value)` pairs in table order, for display.
    pub fn signals(&self) -> [(&'static str, f64); 12] {
        [
            ("exact", self.exact),
            ("substring", self.substring),
            ("fuzzy", self.fuzzy),
            ("ngram", self.ngram),
            ("phonetic", self.phonetic),
            ("keyword", self.keyword),
            ("frequency", self.frequency),
            ("coverage", self.coverage),
            ("pattern", self.pattern),
            ("bigram", self.bigram),
            ("position", self.position),
            ("penalty", self.penalty),
        ]
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Score `query` against `record` with the default tables.
///
/// Zero whenever the query tokenizes to nothing.
pub fn score(query: &str, record: &Record, thesaurus: &SynonymThesaurus) -> f64 {
    score_with(query, record, thesaurus, &DEFAULT_CONFIG)
}

/// Score with explicit tables.
pub fn score_with(
    query: &str,
    record: &Record,
    thesaurus: &SynonymThesaurus,
    config: &EngineConfig,
) -> f64 {
    score_breakdown(query, record, thesaurus, config).total()
}

/// All twelve signals for one (query, record) pair.
pub fn score_breakdown(
    query: &str,
    record: &Record,
    thesaurus: &SynonymThesaurus,
    config: &EngineConfig,
) -> ScoreBreakdown {
    let query_tokens = config.tokenizer().tokenize(query);
    if query_tokens.is_empty() {
        return ScoreBreakdown::default();
    }

    let expanded = thesaurus.expand(&query_tokens);
    let record_tokens = record.question_tokens();

    // Lengths are compared in every pairwise loop; count chars once.
    let query_terms: Vec<(&str, usize)> = query_tokens
        .iter()
        .map(|t| (t.as_str(), char_len(t)))
        .collect();
    let record_terms: Vec<(&str, usize)> = record_tokens
        .iter()
        .map(|t| (t.as_str(), char_len(t)))
        .collect();

    ScoreBreakdown {
        exact: exact_signal(&expanded, &record_terms),
        substring: substring_signal(&query_terms, &record_terms),
        fuzzy: fuzzy_signal(&query_terms, &record_terms),
        ngram: ngram_signal(&query_terms, &record_terms),
        phonetic: phonetic_signal(&query_terms, &record_terms),
        keyword: keyword_signal(&expanded, record.keywords()),
        frequency: frequency_signal(&query_tokens, record),
        coverage: coverage_signal(&query_terms, &record_terms),
        pattern: detect_pattern(query, record.question(), &config.patterns),
        bigram: bigram_signal(&query_tokens, record_tokens),
        position: position_signal(&query_terms, &record_terms),
        penalty: short_query_penalty(&query_terms),
    }
}

fn exact_signal(expanded: &BTreeSet<String>, record_terms: &[(&str, usize)]) -> f64 {
    let hits = expanded
        .iter()
        .map(|q| record_terms.iter().filter(|(r, _)| *r == q.as_str()).count())
        .sum::<usize>();
    hits as f64 * EXACT_MATCH_WEIGHT
}

fn substring_signal(query_terms: &[(&str, usize)], record_terms: &[(&str, usize)]) -> f64 {
    let mut score = 0.0;
    for &(q, q_len) in query_terms {
        for &(r, r_len) in record_terms {
            if q_len > SUBSTRING_MIN_EXCLUSIVE_LEN && r.contains(q) {
                score += SUBSTRING_WEIGHT;
            }
            if r_len > SUBSTRING_MIN_EXCLUSIVE_LEN && q.contains(r) {
                score += SUBSTRING_WEIGHT;
            }
        }
    }
    score
}

fn fuzzy_signal(query_terms: &[(&str, usize)], record_terms: &[(&str, usize)]) -> f64 {
    let mut score = 0.0;
    for &(q, q_len) in query_terms {
        if q_len < FUZZY_MIN_LEN {
            continue;
        }
        for &(r, r_len) in record_terms {
            if r_len < FUZZY_MIN_LEN {
                continue;
            }
            let max_len = q_len.max(r_len);
            if max_len <= FUZZY_MIN_EXCLUSIVE_MAX_LEN {
                continue;
            }
            if let Some(distance) = levenshtein_bounded(q, r, FUZZY_MAX_DISTANCE) {
                score += (1.0 - distance as f64 / max_len as f64) * FUZZY_WEIGHT;
            }
        }
    }
    score
}

fn ngram_signal(query_terms: &[(&str, usize)], record_terms: &[(&str, usize)]) -> f64 {
    let mut score = 0.0;
    for &(q, q_len) in query_terms {
        if q_len < NGRAM_MIN_LEN {
            continue;
        }
        for &(r, r_len) in record_terms {
            if r_len < NGRAM_MIN_LEN {
                continue;
            }
            let similarity = ngram_dice(q, r);
            if similarity > NGRAM_THRESHOLD {
                score += similarity * NGRAM_WEIGHT;
            }
        }
    }
    score
}

fn phonetic_signal(query_terms: &[(&str, usize)], record_terms: &[(&str, usize)]) -> f64 {
    let hits = query_terms
        .iter()
        .map(|(q, _)| record_terms.iter().filter(|(r, _)| sounds_like(q, r)).count())
        .sum::<usize>();
    hits as f64 * PHONETIC_WEIGHT
}

fn keyword_signal(expanded: &BTreeSet<String>, keywords: &BTreeSet<String>) -> f64 {
    expanded.intersection(keywords).count() as f64 * KEYWORD_WEIGHT
}

fn frequency_signal(query_tokens: &[String], record: &Record) -> f64 {
    query_tokens
        .iter()
        .filter_map(|t| record.frequency(t))
        .map(|f| FREQUENCY_WEIGHT / (1.0 + f64::from(f).ln()))
        .sum()
}

fn coverage_signal(query_terms: &[(&str, usize)], record_terms: &[(&str, usize)]) -> f64 {
    let matched = query_terms
        .iter()
        .filter(|(q, _)| record_terms.iter().any(|(r, _)| r.contains(*q)))
        .count();
    (matched as f64 / query_terms.len() as f64) * COVERAGE_WEIGHT
}

/// Dice over adjacent word pairs; zero when either side has fewer than two tokens.
fn bigram_signal(query_tokens: &[String], record_tokens: &[String]) -> f64 {
    if query_tokens.len() < 2 || record_tokens.len() < 2 {
        return 0.0;
    }
    let pairs = |tokens: &[String]| -> HashSet<(String, String)> {
        tokens
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect()
    };
    dice_coefficient(&pairs(query_tokens), &pairs(record_tokens)) * BIGRAM_WEIGHT
}

fn position_signal(query_terms: &[(&str, usize)], record_terms: &[(&str, usize)]) -> f64 {
    let mut score = 0.0;
    for (i, &(q, _)) in query_terms.iter().enumerate() {
        let weight = 1.0 / (1.0 + i as f64 * POSITION_DECAY);
        let hits = record_terms.iter().filter(|(r, _)| *r == q).count();
        score += hits as f64 * POSITION_WEIGHT * weight;
    }
    score
}

fn short_query_penalty(query_terms: &[(&str, usize)]) -> f64 {
    match query_terms {
        [(_, len)] if *len < SHORT_QUERY_MAX_EXCLUSIVE_LEN => SHORT_QUERY_PENALTY,
        _ => 1.0,
    }
}
