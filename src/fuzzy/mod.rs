// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy string metrics: typo tolerance without a trained model.
//!
//! Three independent, stateless measures:
//! - edit distance (Levenshtein), full and bounded
//! - character trigram overlap (Dice coefficient)
//! - phonetic equality (Soundex)

mod levenshtein;
mod ngram;
mod soundex;

pub use levenshtein::*;
pub use ngram::*;
pub use soundex::*;
