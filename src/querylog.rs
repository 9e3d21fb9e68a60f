// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Append-only log of confidently answered queries.
//!
//! One line per query: `<query> | <record id> | <score>`. The file is opened
//! in append mode for every write, so concurrent runs interleave whole lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::ScoredCandidate;

#[derive(Debug, Error)]
#[error("failed to append to query log {}: {source}", .path.display())]
pub struct QueryLogError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

#[derive(Debug, Clone)]
pub struct QueryLog {
    path: PathBuf,
}

impl QueryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the file if needed.
    pub fn append(&self, query: &str, best: &ScoredCandidate) -> Result<(), QueryLogError> {
        let line = format_entry(query, best);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|source| QueryLogError {
                path: self.path.clone(),
                source,
            })
    }
}

/// Newline-terminated log line. Line breaks inside the query are flattened.
pub fn format_entry(query: &str, best: &ScoredCandidate) -> String {
    let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{} | {} | {:.2}\n", query, best.record_id, best.score)
}
