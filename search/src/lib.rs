//! Fuzzy icon search.
//!
//! Answers free-text queries with a ranked list of icon names, drawn from a
//! corpus of `name -> tags` metadata.
//!
//! # Design
//!
//! - [`IconSearch`] owns the corpus provider and a lazily built [`IconIndex`].
//!   The index is built on first use, shared by concurrent callers, and never
//!   rebuilt. A corpus that cannot be loaded yields an empty index.
//! - [`SearchEngine`] is the synchronous part: it scores every record's name
//!   and tags against the query, applies exact/prefix boosts and sorts.
//! - Scores are distances: lower is better, 0 is a perfect match.
//!
//! # Matching
//!
//! A field's distance is the better of two measures:
//! - subsequence matching via nucleo, relative to the query's score against itself
//! - normalized Damerau-Levenshtein against field prefixes, for misspellings

mod engine;
mod index;
mod query;
mod results;
mod service;

pub use engine::SearchEngine;
pub use iconset_core::{BoostConfig, IconRecord, SearchConfig};
pub use index::IconIndex;
pub use query::SearchQuery;
pub use results::ScoredCandidate;
pub use service::{IconSearch, LoadErrorHook};
