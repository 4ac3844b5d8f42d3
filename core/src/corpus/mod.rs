//! Corpus retrieval and parsing.
//!
//! A corpus is a JSON object mapping each icon name to an array of tags:
//!
//! ```json
//! { "car": ["automobile", "vehicle"], "cart": ["shopping", "trolley"] }
//! ```
//!
//! Where the document comes from depends on the host, so retrieval sits
//! behind [`CorpusProvider`] and is picked at composition time through
//! [`CorpusSource`].

mod file;
mod http;
mod inline;

pub use file::FileCorpusProvider;
pub use http::HttpCorpusProvider;
pub use inline::InlineCorpusProvider;

use crate::error::CorpusError;
use crate::types::{IconName, IconRecord};
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Supplies the raw corpus document.
#[async_trait]
pub trait CorpusProvider: Send + Sync {
    /// Returns the raw JSON document.
    async fn fetch(&self) -> Result<String, CorpusError>;

    /// Human-readable origin, used in log messages.
    fn describe(&self) -> String;

    /// Fetches and parses the document into records, in document order.
    async fn load(&self) -> Result<Vec<IconRecord>, CorpusError> {
        let document = self.fetch().await?;
        parse_corpus(&document)
    }
}

pub type DynCorpusProvider = Arc<dyn CorpusProvider>;

/// Parses a `name -> [tags]` document, preserving entry order.
///
/// Entries whose name fails validation are skipped. Anything that is not an
/// object of string arrays is rejected as a whole.
pub fn parse_corpus(document: &str) -> Result<Vec<IconRecord>, CorpusError> {
    let raw: IndexMap<String, Vec<String>> = serde_json::from_str(document)?;

    let mut records = Vec::with_capacity(raw.len());
    for (name, tags) in raw {
        match IconName::try_new(name.clone()) {
            Ok(name) => records.push(IconRecord::new(name, tags)),
            Err(err) => warn!(name = %name, error = %err, "skipping icon with invalid name"),
        }
    }

    Ok(records)
}

/// Where the corpus lives. Chosen by the host when composing the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CorpusSource {
    /// Local file, for server-side or headless hosts.
    File { path: PathBuf },
    /// HTTP GET of the same document, for browser-like hosts.
    Http { url: String },
    /// Document embedded in the configuration itself.
    Inline { document: String },
}

impl Default for CorpusSource {
    fn default() -> Self {
        CorpusSource::File {
            path: PathBuf::from("icon-tags.json"),
        }
    }
}

impl CorpusSource {
    pub fn into_provider(self) -> DynCorpusProvider {
        match self {
            CorpusSource::File { path } => Arc::new(FileCorpusProvider::new(path)),
            CorpusSource::Http { url } => Arc::new(HttpCorpusProvider::new(url)),
            CorpusSource::Inline { document } => Arc::new(InlineCorpusProvider::new(document)),
        }
    }
}

#[cfg(test)]
mod tests;
