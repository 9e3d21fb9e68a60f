// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog ingestion: JSON question/answer files into `Record`s.
//!
//! Two shapes are accepted:
//!
//! ```text
//! [ { "id": "Q1", "question": "...", "answer": "..." }, ... ]
//! { "questions": [ { "id": 1, "question": "...", "answer": "..." }, ... ] }
//! ```
//!
//! Ids may be strings or integers and are stored as strings. Id and question
//! are trimmed; the answer is kept verbatim (it is usually code). Catalog
//! order is preserved because ranking breaks ties by it.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokenizer::Tokenizer;
use crate::types::Record;

/// Everything that can go wrong turning a file into records.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("record #{position} has an empty id")]
    EmptyId { position: usize },
    #[error("duplicate record id '{id}' at #{position}")]
    DuplicateId { id: String, position: usize },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// One catalog entry as it appears on disk.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<CatalogEntry>),
    Wrapped { questions: Vec<CatalogEntry> },
}

/// Parse catalog JSON into entries without building records.
pub fn parse_entries(json: &str, origin: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    Ok(match file {
        CatalogFile::List(entries) => entries,
        CatalogFile::Wrapped { questions } => questions,
    })
}

/// Validate entries and derive their token tables.
///
/// Fails on an empty id or a repeated id; empty question or answer is fine.
pub fn build_records(
    entries: Vec<CatalogEntry>,
    tokenizer: &Tokenizer<'_>,
) -> Result<Vec<Record>, CatalogError> {
    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());

    for (position, entry) in entries.into_iter().enumerate() {
        let id = entry.id.trim().to_string();
        if id.is_empty() {
            return Err(CatalogError::EmptyId { position });
        }
        if !seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateId { id, position });
        }
        records.push(Record::new(id, entry.question.trim(), entry.answer, tokenizer));
    }

    Ok(records)
}

/// Parse and build in one step.
pub fn parse_catalog(json: &str, tokenizer: &Tokenizer<'_>) -> Result<Vec<Record>, CatalogError> {
    build_records(parse_entries(json, "<input>")?, tokenizer)
}

/// Read a catalog file from disk.
pub fn load_catalog(path: &Path, tokenizer: &Tokenizer<'_>) -> Result<Vec<Record>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_entries(&content, &path.display().to_string())?;
    let records = build_records(entries, tokenizer)?;

    tracing::debug!(path = %path.display(), records = records.len(), "loaded catalog");
    Ok(records)
}
