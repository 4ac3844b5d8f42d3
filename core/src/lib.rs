//! Icon metadata primitives shared by the search crate.
//!
//! Holds the validated icon name type, the record model, corpus providers
//! (file, HTTP, inline) and the TOML configuration.

pub mod corpus;
pub mod error;
pub mod types;

pub use corpus::{
    CorpusProvider, CorpusSource, DynCorpusProvider, FileCorpusProvider, HttpCorpusProvider,
    InlineCorpusProvider, parse_corpus,
};
pub use error::{CorpusError, Error, Result};
pub use types::{
    BoostConfig, ConfigError, IconName, IconNameError, IconRecord, IconsConfig, MAX_NAME_LENGTH,
    SearchConfig,
};
