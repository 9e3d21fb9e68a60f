// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get ordered and thresholded.
//!
//! Sort order is score descending, then catalog position ascending. The second
//! key makes ties deterministic across runs and across the parallel and
//! sequential scoring paths.
//!
//! On top of the ordered list sit two thresholds: the best candidate is only
//! reported above `match_threshold`, and alternates only above
//! `alternate_threshold`.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{EngineConfig, DEFAULT_CONFIG};
use crate::scoring::score_with;
use crate::thesaurus::SynonymThesaurus;
use crate::types::{Record, ScoredCandidate};

/// Thresholds that turn an ordered list into a reported match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankPolicy {
    /// Best score must exceed this to count as a confident match.
    pub match_threshold: f64,
    /// Alternates must exceed this.
    pub alternate_threshold: f64,
    /// How many runners-up to consider after the best.
    pub max_alternates: usize,
    /// `confidence = min(100, floor(score / divisor))`.
    pub confidence_divisor: f64,
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self {
            match_threshold: 10.0,
            alternate_threshold: 30.0,
            max_alternates: 2,
            confidence_divisor: 5.0,
        }
    }
}

impl RankPolicy {
    /// Display percentage for a score. Not used for ordering.
    pub fn confidence(&self, score: f64) -> u8 {
        (score / self.confidence_divisor).floor().clamp(0.0, 100.0) as u8
    }
}

/// Outcome of ranking one query against a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    /// Top candidate, only when it cleared `match_threshold`.
    pub best: Option<ScoredCandidate>,
    /// Display-only percentage for `best`; 0 without a match.
    pub confidence: u8,
    /// Runners-up in rank order that cleared `alternate_threshold`.
    pub alternates: Vec<ScoredCandidate>,
    /// Every candidate in rank order.
    pub candidates: Vec<ScoredCandidate>,
}

impl RankedMatch {
    /// Apply `policy` to an already ordered candidate list.
    pub fn from_ranked(candidates: Vec<ScoredCandidate>, policy: &RankPolicy) -> Self {
        let best = candidates
            .first()
            .filter(|c| c.score > policy.match_threshold)
            .cloned();

        let (confidence, alternates) = match &best {
            Some(top) => (
                policy.confidence(top.score),
                candidates
                    .iter()
                    .skip(1)
                    .take(policy.max_alternates)
                    .filter(|c| c.score > policy.alternate_threshold)
                    .cloned()
                    .collect(),
            ),
            None => (0, Vec::new()),
        };

        Self {
            best,
            confidence,
            alternates,
            candidates,
        }
    }

    pub fn is_match(&self) -> bool {
        self.best.is_some()
    }
}

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Index** - catalog order for determinism
pub fn compare_candidates(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.index.cmp(&b.index),
        ord => ord,
    }
}

/// Score every record, in catalog order.
///
/// With the `parallel` feature the per-record loop fans out over rayon; the
/// collected order is still catalog order.
pub fn score_all(
    query: &str,
    records: &[Record],
    thesaurus: &SynonymThesaurus,
    config: &EngineConfig,
) -> Vec<ScoredCandidate> {
    let candidate = |(index, record): (usize, &Record)| ScoredCandidate {
        record_id: record.id().to_string(),
        index,
        score: score_with(query, record, thesaurus, config),
    };

    #[cfg(feature = "parallel")]
    let candidates: Vec<ScoredCandidate> = records.par_iter().enumerate().map(candidate).collect();

    #[cfg(not(feature = "parallel"))]
    let candidates: Vec<ScoredCandidate> = records.iter().enumerate().map(candidate).collect();

    candidates
}

/// Rank `records` for `query` with the default tables.
pub fn rank(query: &str, records: &[Record], thesaurus: &SynonymThesaurus) -> Vec<ScoredCandidate> {
    rank_with(query, records, thesaurus, &DEFAULT_CONFIG)
}

/// Ordered candidates, best first; equal scores keep catalog order.
pub fn rank_with(
    query: &str,
    records: &[Record],
    thesaurus: &SynonymThesaurus,
    config: &EngineConfig,
) -> Vec<ScoredCandidate> {
    let mut candidates = score_all(query, records, thesaurus, config);
    candidates.sort_by(compare_candidates);

    tracing::debug!(
        query,
        candidates = candidates.len(),
        top_score = ?candidates.first().map(|c| c.score),
        "ranked catalog"
    );
    candidates
}

/// Rank and apply the configured thresholds.
pub fn best_match(
    query: &str,
    records: &[Record],
    thesaurus: &SynonymThesaurus,
    config: &EngineConfig,
) -> RankedMatch {
    RankedMatch::from_ranked(rank_with(query, records, thesaurus, config), &config.policy)
}
