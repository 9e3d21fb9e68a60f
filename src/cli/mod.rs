// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the dsamatch command-line interface.
//!
//! One command, no subcommands: the query comes from the positional words, or
//! from a single stdin line when none are given. The catalog and query-log
//! paths fall back to environment variables so a lab machine can be set up
//! once.

pub mod display;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dsamatch",
    about = "Find the closest DSA lab question and print its answer",
    version
)]
pub struct Cli {
    /// Question or keywords; read from stdin when omitted
    pub query: Vec<String>,

    /// JSON catalog of questions and answers
    #[arg(short, long, env = "DSAMATCH_CATALOG", default_value = "data.json")]
    pub catalog: PathBuf,

    /// Append confident matches to this file
    #[arg(short, long, env = "DSAMATCH_QUERY_LOG")]
    pub log: Option<PathBuf>,

    /// Maximum number of alternates to list after the best match
    #[arg(short, long, default_value = "2")]
    pub alternates: usize,

    /// Print the ranked result as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the per-signal score breakdown of the best match
    #[arg(long)]
    pub explain: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Positional words joined back into one query, if any were given.
    pub fn inline_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
