use crate::types::{ConfigError, IconNameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid icon name: {0}")]
    InvalidName(#[from] IconNameError),
}

/// Failure to obtain a usable corpus document.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("malformed corpus: {0}")]
    Parse(#[from] serde_json::Error),
}
