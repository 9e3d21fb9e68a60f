//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that serve as ground truth for
//! the optimized ones: a full-matrix edit distance, the `strsim` crate, and a
//! textbook Soundex written straight from the letter table.

use dsamatch::{levenshtein, levenshtein_bounded, levenshtein_within, ngram_dice, soundex};
use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Classic Levenshtein edit distance via the full DP matrix.
///
/// O(nm) time and space, trivially correct.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        dp[i][0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

/// Soundex over ASCII words, one letter group at a time.
pub fn oracle_soundex(word: &str) -> String {
    fn class(c: char) -> char {
        match c.to_ascii_lowercase() {
            'b' | 'f' | 'p' | 'v' => '1',
            'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => '2',
            'd' | 't' => '3',
            'l' => '4',
            'm' | 'n' => '5',
            'r' => '6',
            _ => '0',
        }
    }

    let letters: Vec<char> = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    let Some(&first) = letters.first() else {
        return String::new();
    };

    let mut code = vec![first.to_ascii_uppercase()];
    let mut prev = class(first);
    for &c in &letters[1..] {
        let k = class(c);
        if k != '0' && k != prev {
            code.push(k);
        }
        prev = k;
    }
    code.resize(4, '0');
    code.truncate(4);
    code.into_iter().collect()
}

/// Trigram set Dice, recomputed with Vec + dedup instead of hashing.
pub fn oracle_trigram_dice(a: &str, b: &str) -> f64 {
    fn grams(word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        if chars.len() < 3 {
            return vec![word.to_string()];
        }
        let mut out: Vec<String> = chars.windows(3).map(|w| w.iter().collect()).collect();
        out.sort();
        out.dedup();
        out
    }
    let (ga, gb) = (grams(a), grams(b));
    if ga.is_empty() || gb.is_empty() {
        return 0.0;
    }
    let common = ga.iter().filter(|g| gb.contains(g)).count();
    2.0 * common as f64 / (ga.len() + gb.len()) as f64
}

// =============================================================================
// DIFFERENTIAL PROPERTIES
// =============================================================================

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,10}").unwrap()
}

fn unicode_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zé日ö]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_levenshtein_matches_oracle(a in word(), b in word()) {
        prop_assert_eq!(levenshtein(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn prop_levenshtein_matches_strsim(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_bounded_agrees_with_full(a in word(), b in word(), max in 0usize..5) {
        let d = oracle_levenshtein(&a, &b);
        let expected = if d <= max { Some(d) } else { None };
        prop_assert_eq!(levenshtein_bounded(&a, &b, max), expected);
        prop_assert_eq!(levenshtein_within(&a, &b, max), d <= max);
    }

    #[test]
    fn prop_soundex_matches_oracle_on_letters(w in "[a-zA-Z][a-zA-Z]{0,10}") {
        prop_assert_eq!(soundex(&w), oracle_soundex(&w));
    }

    #[test]
    fn prop_ngram_dice_matches_oracle(a in word(), b in word()) {
        let (fast, slow) = (ngram_dice(&a, &b), oracle_trigram_dice(&a, &b));
        prop_assert!((fast - slow).abs() < 1e-12, "{} vs {}", fast, slow);
    }
}

#[test]
fn oracle_soundex_known_codes() {
    assert_eq!(oracle_soundex("robert"), "R163");
    assert_eq!(oracle_soundex("tymczak"), "T522");
}
