//! Metric laws for the string similarity functions.
//!
//! - Edit distance is a metric: identity, symmetry, triangle inequality
//! - Edit distance is bounded by the longer length and at least the length gap
//! - Trigram Dice is symmetric and lives in [0, 1]
//! - Soundex ignores case and always yields 4 characters for non-empty input

use dsamatch::{levenshtein, ngram_dice, soundex, sounds_like};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_levenshtein_identity(a in word()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn prop_levenshtein_symmetric(a in word(), b in word()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_levenshtein_triangle(a in word(), b in word(), c in word()) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn prop_levenshtein_length_bounds(a in word(), b in word()) {
        let d = levenshtein(&a, &b);
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
    }

    #[test]
    fn prop_levenshtein_empty_is_length(a in word()) {
        prop_assert_eq!(levenshtein(&a, ""), a.chars().count());
    }

    #[test]
    fn prop_ngram_dice_symmetric_and_bounded(a in word(), b in word()) {
        let ab = ngram_dice(&a, &b);
        prop_assert_eq!(ab, ngram_dice(&b, &a));
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn prop_ngram_dice_self_is_one(a in "[a-z]{1,12}") {
        prop_assert_eq!(ngram_dice(&a, &a), 1.0);
    }

    #[test]
    fn prop_soundex_case_insensitive(w in "[a-z]{1,12}") {
        prop_assert_eq!(soundex(&w), soundex(&w.to_uppercase()));
    }

    #[test]
    fn prop_soundex_shape(w in "[a-z0-9]{1,12}") {
        let code = soundex(&w);
        prop_assert_eq!(code.chars().count(), 4);
        prop_assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn prop_sounds_like_symmetric(a in word(), b in word()) {
        prop_assert_eq!(sounds_like(&a, &b), sounds_like(&b, &a));
    }

    #[test]
    fn prop_sounds_like_needs_four_chars(a in "[a-z]{0,3}", b in word()) {
        prop_assert!(!sounds_like(&a, &b));
    }
}
