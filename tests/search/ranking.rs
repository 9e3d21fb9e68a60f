//! Thresholds, alternates and confidence on real scores.

use dsamatch::{best_match, rank, EngineConfig, RankPolicy};

use crate::common::{make_catalog, sample_catalog, THESAURUS};

#[test]
fn confidence_follows_best_score() {
    let records = sample_catalog();
    let ranked = best_match("implement circular queue", &records, &THESAURUS, &EngineConfig::default());

    let best = ranked.best.as_ref().expect("expected a match");
    let expected = (best.score / 5.0).floor().min(100.0) as u8;
    assert_eq!(ranked.confidence, expected);
}

#[test]
fn alternates_come_from_the_next_two_ranks() {
    let records = sample_catalog();
    let ranked = best_match("implement queue", &records, &THESAURUS, &EngineConfig::default());

    assert!(ranked.is_match());
    assert!(!ranked.alternates.is_empty());
    assert!(ranked.alternates.len() <= 2);
    for (alternate, candidate) in ranked.alternates.iter().zip(&ranked.candidates[1..]) {
        assert_eq!(alternate, candidate);
        assert!(alternate.score > 30.0);
    }
}

#[test]
fn wider_alternate_window() {
    let records = sample_catalog();
    let config = EngineConfig::default().with_policy(RankPolicy {
        max_alternates: 5,
        ..RankPolicy::default()
    });
    let ranked = best_match("linked list", &records, &THESAURUS, &config);

    // Q2, Q7 and Q8 all mention a linked list
    assert!(ranked.alternates.len() >= 2);
    assert!(ranked.alternates.len() <= 5);
}

#[test]
fn identical_questions_keep_catalog_order() {
    let records = make_catalog(&[
        ("first", "Implement a stack using an array"),
        ("second", "Implement a stack using an array"),
        ("third", "Implement a stack using an array"),
    ]);
    let ranked = rank("stack array", &records, &THESAURUS);

    let order: Vec<usize> = ranked.iter().map(|c| c.index).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert_eq!(ranked[0].score, ranked[2].score);
}

#[test]
fn unrelated_records_rank_last() {
    let records = make_catalog(&[
        ("matrix", "Multiply two matrices"),
        ("bst", "Insert a node into a binary search tree"),
    ]);
    let ranked = rank("bst insert node", &records, &THESAURUS);

    assert_eq!(ranked[0].record_id, "bst");
    assert!(ranked[0].score > ranked[1].score);
}
