//! Lazily loaded icon search service.

use crate::engine::SearchEngine;
use crate::index::IconIndex;
use crate::query::SearchQuery;
use crate::results::ScoredCandidate;
use iconset_core::{CorpusError, DynCorpusProvider, IconRecord, IconsConfig, SearchConfig};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Called once with the error when the corpus cannot be loaded.
pub type LoadErrorHook = Arc<dyn Fn(&CorpusError) + Send + Sync>;

/// Icon search over a corpus that is loaded on first use.
///
/// The first call that needs the corpus loads it. Concurrent callers wait
/// on that same load, and the result is kept for the life of the service.
/// A failed load leaves an empty index, so every query degrades to "no
/// results" instead of an error.
///
/// Queries that are blank after trimming return immediately and never
/// trigger a load.
pub struct IconSearch {
    provider: DynCorpusProvider,
    engine: SearchEngine,
    index: OnceCell<IconIndex>,
    on_load_error: Option<LoadErrorHook>,
}

/// Create operations.
impl IconSearch {
    pub fn new(provider: DynCorpusProvider) -> Self {
        Self {
            provider,
            engine: SearchEngine::default(),
            index: OnceCell::new(),
            on_load_error: None,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.engine = SearchEngine::new(config);
        self
    }

    /// Registers a hook invoked when the corpus fails to load.
    pub fn on_load_error(mut self, hook: LoadErrorHook) -> Self {
        self.on_load_error = Some(hook);
        self
    }

    pub fn from_config(config: IconsConfig) -> Self {
        Self::new(config.source.into_provider()).with_config(config.search)
    }

    /// Loads `icons.toml`-style config from `path`, replacing invalid values
    /// with defaults.
    pub fn from_config_path(path: &Path) -> iconset_core::Result<Self> {
        let config = IconsConfig::load(path)?;
        for problem in config.validate() {
            warn!(
                path = %path.display(),
                problem = %problem,
                "invalid icon search config, using default"
            );
        }
        Ok(Self::from_config(config.with_defaults_for_invalid()))
    }

    pub fn config(&self) -> &SearchConfig {
        self.engine.config()
    }
}

/// Query operations.
impl IconSearch {
    /// Names of the best matching icons, most relevant first.
    ///
    /// `limit` defaults to the configured `default_limit`.
    pub async fn search_icons(&self, query: &str, limit: Option<usize>) -> Vec<String> {
        self.search_scored(query, limit)
            .await
            .into_iter()
            .map(|candidate| candidate.name)
            .collect()
    }

    /// Like [`search_icons`](Self::search_icons), keeping the scores.
    pub async fn search_scored(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Vec<ScoredCandidate> {
        let Some(query) = SearchQuery::parse(query) else {
            return Vec::new();
        };
        let limit = limit.unwrap_or(self.config().default_limit);

        let index = self.index().await;
        self.engine.search(index, &query, limit)
    }

    /// Tags containing `partial_query`, for autocompletion.
    ///
    /// `limit` defaults to the configured `suggestion_limit`.
    pub async fn get_search_suggestions(
        &self,
        partial_query: &str,
        limit: Option<usize>,
    ) -> Vec<String> {
        let Some(query) = SearchQuery::parse(partial_query) else {
            return Vec::new();
        };
        let limit = limit.unwrap_or(self.config().suggestion_limit);

        let index = self.index().await;
        self.engine.suggestions(index, &query, limit)
    }

    /// Every icon name, in corpus order.
    pub async fn get_all_icon_names(&self) -> Vec<String> {
        self.index().await.names().map(str::to_string).collect()
    }

    pub async fn get_icon_metadata(&self, name: &str) -> Option<IconRecord> {
        self.index().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.index().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.index().await.is_empty()
    }

    /// Returns true once the corpus has been loaded (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.index.initialized()
    }
}

/// Loading.
impl IconSearch {
    async fn index(&self) -> &IconIndex {
        self.index.get_or_init(|| self.load()).await
    }

    async fn load(&self) -> IconIndex {
        let source = self.provider.describe();
        debug!(source = %source, "loading icon corpus");

        match self.provider.load().await {
            Ok(records) => {
                let index = IconIndex::new(records);
                debug!(source = %source, icons = index.len(), "icon corpus loaded");
                index
            }
            Err(err) => {
                warn!(
                    source = %source,
                    error = %err,
                    "icon corpus unavailable, searches will be empty"
                );
                if let Some(hook) = &self.on_load_error {
                    hook(&err);
                }
                IconIndex::default()
            }
        }
    }
}
