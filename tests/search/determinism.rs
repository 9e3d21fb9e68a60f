//! Same catalog, same query, same answer: across calls, threads and entry points.

use std::thread;

use dsamatch::{build_thesaurus, rank, rank_with, EngineConfig};

use crate::common::{sample_catalog, sample_engine};

const QUERIES: &[&str] = &[
    "implement stack queue",
    "linkd list reverse",
    "curcular que",
    "bfs graph",
    "sort",
    "",
];

#[test]
fn repeated_queries_are_identical() {
    let engine = sample_engine();
    for query in QUERIES {
        assert_eq!(engine.query(query), engine.query(query), "query {:?}", query);
    }
}

#[test]
fn rebuilt_thesaurus_gives_same_ranking() {
    let records = sample_catalog();
    let (a, b) = (build_thesaurus(), build_thesaurus());
    for query in QUERIES {
        assert_eq!(rank(query, &records, &a), rank(query, &records, &b));
    }
}

#[test]
fn engine_matches_free_functions() {
    let engine = sample_engine();
    let records = sample_catalog();
    let thesaurus = build_thesaurus();
    for query in QUERIES {
        assert_eq!(
            engine.rank(query),
            rank_with(query, &records, &thesaurus, &EngineConfig::default())
        );
    }
}

#[test]
fn concurrent_queries_agree() {
    let engine = sample_engine();
    let expected: Vec<_> = QUERIES.iter().map(|q| engine.query(q)).collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| QUERIES.iter().map(|q| engine.query(q)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
