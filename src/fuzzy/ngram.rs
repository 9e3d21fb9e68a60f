// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character n-gram overlap.
//!
//! Catches typos that edit distance misses because they sit too far apart,
//! e.g. "travesral" vs "traversal" still share most trigrams.

use std::collections::HashSet;
use std::hash::Hash;

/// Gram length used by the scorer.
pub const NGRAM_SIZE: usize = 3;

/// Distinct length-`n` substrings of `word`, by character.
///
/// A word shorter than `n` is its own single gram; the empty word has none.
pub fn char_ngrams(word: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return HashSet::new();
    }
    if n == 0 || chars.len() < n {
        return HashSet::from([word.to_string()]);
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Dice coefficient `2|A∩B| / (|A|+|B|)`, 0 when either set is empty.
pub fn dice_coefficient<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let common = a.intersection(b).count();
    (2.0 * common as f64) / (a.len() + b.len()) as f64
}

/// Trigram Dice similarity in `[0, 1]`.
pub fn ngram_dice(a: &str, b: &str) -> f64 {
    dice_coefficient(&char_ngrams(a, NGRAM_SIZE), &char_ngrams(b, NGRAM_SIZE))
}
