// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how a catalog record gets its number for a query.
//!
//! Twelve independent lexical signals are summed per (query, record) pair with
//! fixed weights; no signal is learned and nothing is shared across records.
//! Ranking is then a stable descending sort plus two thresholds.

mod core;
pub mod ranking;

pub use core::*;
