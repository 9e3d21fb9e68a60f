//! Offline lexical matching of free-text questions against a Q&A catalog.
//!
//! A query is tokenized, expanded through a fixed DSA thesaurus and scored
//! against every catalog record with twelve weighted lexical signals. There is
//! no index and no learned model: one query is one linear pass over the
//! catalog, so ranking is fully deterministic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenizer.rs │────▶│  types.rs    │────▶│ scoring/     │
//! │ (StopWords,  │     │  (Record,    │     │ (score,      │
//! │  Tokenizer)  │     │   keywords)  │     │  rank)       │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         ▲
//!        ▼                                         │
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ thesaurus.rs │     │  fuzzy/      │     │  pattern.rs  │
//! │ (synonym     │────▶│ (levenshtein,│────▶│ (phrase      │
//! │  expansion)  │     │ ngram, sndx) │     │  bonuses)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! `catalog` loads records from JSON, `engine` bundles catalog, thesaurus and
//! tables behind one `&self` query API, and `querylog` appends confident
//! matches to a text file.
//!
//! # Scoring signals
//!
//! | Signal     | Weight | Fires when                                    |
//! |------------|--------|-----------------------------------------------|
//! | exact      | 100    | query token equals a question token           |
//! | substring  | 50     | one token contains the other                  |
//! | fuzzy      | 40     | edit distance ≤ 2 on longer tokens            |
//! | ngram      | 30     | trigram Dice > 0.5                            |
//! | phonetic   | 45     | Soundex codes agree                           |
//! | keyword    | 80     | expanded query hits a record keyword          |
//! | frequency  | 60     | damped by repetition inside the question      |
//! | coverage   | 50     | share of query tokens found at all            |
//! | pattern    | 40–80  | instructional / operation / algorithm phrases |
//! | bigram     | 100    | Dice over adjacent token pairs                |
//! | position   | 50     | early matches in the question                 |
//! | penalty    | ×0.7   | one- or two-token queries                     |
//!
//! # Usage
//!
//! ```ignore
//! use dsamatch::{Engine, EngineConfig};
//!
//! let engine = Engine::load(Path::new("data.json"), EngineConfig::default())?;
//! let ranked = engine.query("curcular que");
//! if let Some(best) = &ranked.best {
//!     println!("{} ({}%)", best.record_id, ranked.confidence);
//! }
//! ```

// Module declarations
pub mod catalog;
mod config;
mod engine;
pub mod fuzzy;
pub mod pattern;
pub mod querylog;
pub mod scoring;
pub mod testing;
pub mod thesaurus;
pub mod tokenizer;
mod types;
mod utils;

// Re-exports for public API
pub use catalog::{build_records, load_catalog, parse_catalog, CatalogEntry, CatalogError};
pub use config::EngineConfig;
pub use engine::Engine;
pub use fuzzy::{
    char_ngrams, dice_coefficient, levenshtein, levenshtein_bounded, levenshtein_within,
    ngram_dice, soundex, sounds_like,
};
pub use pattern::{detect_pattern, PatternTable};
pub use querylog::{QueryLog, QueryLogError};
pub use scoring::ranking::{best_match, compare_candidates, rank, rank_with, RankPolicy, RankedMatch};
pub use scoring::{score, score_breakdown, score_with, ScoreBreakdown};
pub use thesaurus::{build_thesaurus, SynonymGroup, SynonymThesaurus};
pub use tokenizer::{StopWords, Tokenizer};
pub use types::{Record, ScoredCandidate};
pub use utils::{normalize_piece, truncate_chars};
