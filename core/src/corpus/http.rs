use super::CorpusProvider;
use crate::error::CorpusError;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the corpus with an HTTP GET. Non-success statuses are errors.
#[derive(Debug, Clone)]
pub struct HttpCorpusProvider {
    client: Client,
    url: String,
}

impl HttpCorpusProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CorpusProvider for HttpCorpusProvider {
    async fn fetch(&self) -> Result<String, CorpusError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(CorpusError::Status {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
