//! Query-to-answer scenarios over small hand-built catalogs.

use dsamatch::scoring::SHORT_QUERY_PENALTY;
use dsamatch::{best_match, rank, score_breakdown, EngineConfig};

use crate::common::{best_id, sample_catalog, sample_engine, two_record_catalog, THESAURUS};

#[test]
fn stack_queue_query_prefers_queue_from_stacks() {
    let records = two_record_catalog();
    let ranked = rank("implement stack queue", &records, &THESAURUS);

    assert_eq!(records[ranked[0].index].id(), "A");
    assert!(ranked[0].score > ranked[1].score);
    assert!(ranked[0].score > 10.0);
}

#[test]
fn misspelled_linked_list_finds_reversal() {
    let records = two_record_catalog();
    let ranked = best_match("linkd list reverse", &records, &THESAURUS, &EngineConfig::default());

    assert_eq!(best_id(&ranked, &records), Some("B"));
}

#[test]
fn unknown_short_word_is_not_a_match() {
    let records = two_record_catalog();
    let config = EngineConfig::default();
    let ranked = best_match("xyz", &records, &THESAURUS, &config);

    assert!(!ranked.is_match());
    assert_eq!(ranked.confidence, 0);
    for record in &records {
        let breakdown = score_breakdown("xyz", record, &THESAURUS, &config);
        assert_eq!(breakdown.penalty, SHORT_QUERY_PENALTY);
        assert_eq!(breakdown.total(), 0.0);
    }
}

#[test]
fn empty_query_is_not_a_match() {
    let records = two_record_catalog();
    let ranked = best_match("", &records, &THESAURUS, &EngineConfig::default());

    assert!(ranked.best.is_none());
    assert!(ranked.alternates.is_empty());
    assert!(ranked.candidates.iter().all(|c| c.score == 0.0));
}

#[test]
fn typo_query_finds_circular_queue() {
    let engine = sample_engine();
    let ranked = engine.query("curcular que");

    assert_eq!(best_id(&ranked, engine.records()), Some("Q3"));
}

#[test]
fn synonym_query_reaches_canonical_term() {
    // "fifo" is a queue variant; "lifo" a stack variant
    let records = sample_catalog();
    let ranked = best_match("fifo using lifo", &records, &THESAURUS, &EngineConfig::default());

    assert_eq!(best_id(&ranked, &records), Some("Q1"));
}

#[test]
fn algorithm_name_finds_graph_question() {
    let engine = sample_engine();
    let ranked = engine.query("dijkstra shortest path");

    assert_eq!(best_id(&ranked, engine.records()), Some("Q9"));
}

#[test]
fn queue_sort_compound_pattern() {
    let engine = sample_engine();
    let ranked = engine.query("sort queue");

    assert_eq!(best_id(&ranked, engine.records()), Some("Q10"));
}

#[test]
fn empty_catalog_never_matches() {
    let ranked = best_match("queue", &[], &THESAURUS, &EngineConfig::default());

    assert!(ranked.best.is_none());
    assert!(ranked.candidates.is_empty());
}
