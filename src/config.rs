// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed tables the matcher runs on, bundled so they can be built once and
//! passed by reference instead of living in mutable globals.

use std::sync::LazyLock;

use crate::pattern::PatternTable;
use crate::scoring::ranking::RankPolicy;
use crate::tokenizer::{StopWords, Tokenizer};

/// Stopwords, pattern vocabularies and ranking thresholds.
///
/// Records must be built with a tokenizer over the same `stopwords` that
/// queries are tokenized with, otherwise exact-match signals drift.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub stopwords: StopWords,
    pub patterns: PatternTable,
    pub policy: RankPolicy,
}

impl EngineConfig {
    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.stopwords)
    }

    pub fn with_policy(mut self, policy: RankPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Shared default configuration for the three-argument entry points.
pub(crate) static DEFAULT_CONFIG: LazyLock<EngineConfig> = LazyLock::new(EngineConfig::default);
