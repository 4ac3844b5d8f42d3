use super::CorpusProvider;
use crate::error::CorpusError;
use async_trait::async_trait;

/// Serves a document held in memory.
#[derive(Debug, Clone)]
pub struct InlineCorpusProvider {
    document: String,
}

impl InlineCorpusProvider {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

#[async_trait]
impl CorpusProvider for InlineCorpusProvider {
    async fn fetch(&self) -> Result<String, CorpusError> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        format!("inline document ({} bytes)", self.document.len())
    }
}
