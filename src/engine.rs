// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matcher as one value: catalog, thesaurus and tables built once,
//! queried many times through `&self`.
//!
//! Nothing in here mutates after construction, so an `Engine` can be shared
//! across threads and queried concurrently.

use std::path::Path;

use crate::catalog::{build_records, load_catalog, CatalogEntry, CatalogError};
use crate::config::EngineConfig;
use crate::scoring::ranking::{rank_with, RankedMatch};
use crate::scoring::{score_breakdown, ScoreBreakdown};
use crate::thesaurus::{build_thesaurus, SynonymThesaurus};
use crate::types::{Record, ScoredCandidate};

#[derive(Debug, Clone)]
pub struct Engine {
    records: Vec<Record>,
    thesaurus: SynonymThesaurus,
    config: EngineConfig,
}

impl Engine {
    /// Wrap records that were built with `config`'s tokenizer.
    pub fn from_records(
        records: Vec<Record>,
        thesaurus: SynonymThesaurus,
        config: EngineConfig,
    ) -> Self {
        tracing::debug!(
            records = records.len(),
            synonym_groups = thesaurus.len(),
            "engine ready"
        );
        Self {
            records,
            thesaurus,
            config,
        }
    }

    /// Validate entries and build records with `config`'s tokenizer.
    pub fn from_entries(
        entries: Vec<CatalogEntry>,
        config: EngineConfig,
    ) -> Result<Self, CatalogError> {
        let records = build_records(entries, &config.tokenizer())?;
        Ok(Self::from_records(records, build_thesaurus(), config))
    }

    /// Load a catalog file with the built-in thesaurus.
    pub fn load(path: &Path, config: EngineConfig) -> Result<Self, CatalogError> {
        let records = load_catalog(path, &config.tokenizer())?;
        Ok(Self::from_records(records, build_thesaurus(), config))
    }

    /// Every record, best first.
    pub fn rank(&self, query: &str) -> Vec<ScoredCandidate> {
        rank_with(query, &self.records, &self.thesaurus, &self.config)
    }

    /// Rank and apply the configured thresholds.
    pub fn query(&self, query: &str) -> RankedMatch {
        RankedMatch::from_ranked(self.rank(query), &self.config.policy)
    }

    /// Per-signal scores for one candidate, `None` for an unknown index.
    pub fn explain(&self, query: &str, index: usize) -> Option<ScoreBreakdown> {
        self.records
            .get(index)
            .map(|record| score_breakdown(query, record, &self.thesaurus, &self.config))
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// The record a candidate points at.
    pub fn resolve(&self, candidate: &ScoredCandidate) -> Option<&Record> {
        self.record(candidate.index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn thesaurus(&self) -> &SynonymThesaurus {
        &self.thesaurus
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
