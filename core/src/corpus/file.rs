use super::CorpusProvider;
use crate::error::CorpusError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads the corpus from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileCorpusProvider {
    path: PathBuf,
}

impl FileCorpusProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CorpusProvider for FileCorpusProvider {
    async fn fetch(&self) -> Result<String, CorpusError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
