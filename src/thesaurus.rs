// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Domain synonyms: abbreviations, typos and related forms of DSA vocabulary.
//!
//! Each group is a canonical term plus its variants. Expansion is one hop: a
//! token that belongs to a group pulls in the whole group, nothing more.
//!
//! # Invariant: groups partition the vocabulary
//!
//! Every term belongs to at most one group (canonical keys included). That is
//! what makes one-hop expansion idempotent: re-expanding a member of group G
//! can only add G again. `from_groups` enforces it first-come-first-served.

use std::collections::{BTreeSet, HashMap};

use crate::utils::normalize_piece;

/// Built-in table, canonical term → variants.
pub const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    ("queue", &["q", "que", "queues", "enqueue", "dequeue", "fifo", "enq", "deq"]),
    ("stack", &["stk", "stacks", "push", "pop", "lifo", "stac"]),
    ("tree", &["trees", "bst", "binarytree", "node", "tre", "btree"]),
    ("sort", &["sorting", "arrange", "order", "sorted", "srt", "organize"]),
    ("search", &["searching", "find", "lookup", "locate", "srch", "seek"]),
    ("linked", &["list", "linkedlist", "link", "ll", "llist"]),
    ("graph", &["graphs", "bfs", "dfs", "dijkstra", "prim", "kruskal", "grph", "network"]),
    ("hash", &["hashing", "hashtable", "hashmap", "map", "hsh", "hashset"]),
    ("circular", &["circle", "cyclic", "round", "circ", "cicular", "circulr"]),
    ("array", &["arr", "arrays", "arry"]),
    ("string", &["str", "strings", "text", "char", "strng"]),
    ("merge", &["mergesort", "merging", "combine", "mrg", "join"]),
    ("quick", &["quicksort", "qsort", "qck"]),
    ("bubble", &["bubblesort", "bbl"]),
    ("selection", &["selectionsort", "slct"]),
    ("insertion", &["insertionsort", "insrt"]),
    ("duplicate", &["duplicates", "repeat", "repeated", "dup", "same"]),
    ("interleave", &["interleaving", "alternate", "mix", "shuffle"]),
    ("reverse", &["reversing", "backward", "invert", "rev"]),
    ("traverse", &["traversal", "walk", "visit", "iteration"]),
    ("minimum", &["min", "smallest", "least"]),
    ("maximum", &["max", "largest", "greatest"]),
    ("spanning", &["mst", "span"]),
    ("shortest", &["short", "minimal", "path"]),
    ("binary", &["bin", "two", "binry"]),
    ("nonrepeating", &["unique", "first", "distinct"]),
];

/// A canonical term and the variants that map to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    pub canonical: String,
    pub variants: Vec<String>,
}

impl SynonymGroup {
    /// Canonical first, then variants in table order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.variants.iter().map(String::as_str))
    }
}

/// Immutable synonym dictionary with a reverse index from any member to its group.
#[derive(Debug, Clone, Default)]
pub struct SynonymThesaurus {
    groups: Vec<SynonymGroup>,
    lookup: HashMap<String, usize>,
}

impl SynonymThesaurus {
    /// Build from a canonical → variants table.
    ///
    /// Terms go through the same normalization as query tokens. A term already
    /// claimed by an earlier group is skipped; a group whose canonical key is
    /// already claimed is skipped whole.
    pub fn from_groups<C, V>(table: &[(C, &[V])]) -> Self
    where
        C: AsRef<str>,
        V: AsRef<str>,
    {
        let mut groups: Vec<SynonymGroup> = Vec::with_capacity(table.len());
        let mut lookup: HashMap<String, usize> = HashMap::new();

        for (canonical, variants) in table {
            let canonical = normalize_piece(canonical.as_ref());
            if canonical.is_empty() || lookup.contains_key(&canonical) {
                tracing::debug!(canonical = %canonical, "synonym group skipped: key already claimed");
                continue;
            }

            let group_idx = groups.len();
            lookup.insert(canonical.clone(), group_idx);

            let mut kept = Vec::with_capacity(variants.len());
            for variant in variants.iter() {
                let variant = normalize_piece(variant.as_ref());
                if variant.is_empty() || lookup.contains_key(&variant) {
                    continue;
                }
                lookup.insert(variant.clone(), group_idx);
                kept.push(variant);
            }

            groups.push(SynonymGroup {
                canonical,
                variants: kept,
            });
        }

        Self { groups, lookup }
    }

    /// One-hop expansion. Always a superset of `tokens`, deduplicated and sorted.
    pub fn expand<S: AsRef<str>>(&self, tokens: &[S]) -> BTreeSet<String> {
        let mut expanded: BTreeSet<String> =
            tokens.iter().map(|t| t.as_ref().to_string()).collect();

        for token in tokens {
            if let Some(group) = self.group_of(token.as_ref()) {
                expanded.extend(group.members().map(str::to_string));
            }
        }

        expanded
    }

    /// The group `term` belongs to, as canonical key or as variant.
    pub fn group_of(&self, term: &str) -> Option<&SynonymGroup> {
        self.lookup.get(term).map(|&idx| &self.groups[idx])
    }

    /// Canonical key for `term`; a canonical key maps to itself.
    pub fn canonical_of(&self, term: &str) -> Option<&str> {
        self.group_of(term).map(|g| g.canonical.as_str())
    }

    /// Variants listed under `canonical`, or `None` if it is not a canonical key.
    pub fn variants_of(&self, canonical: &str) -> Option<&[String]> {
        self.group_of(canonical)
            .filter(|g| g.canonical == canonical)
            .map(|g| g.variants.as_slice())
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The fixed DSA thesaurus. Pure: every call yields an identical table.
pub fn build_thesaurus() -> SynonymThesaurus {
    SynonymThesaurus::from_groups(DEFAULT_SYNONYMS)
}
