mod app;
mod matching;

pub use app::{ConfigError, IconsConfig};
pub use matching::{BoostConfig, SearchConfig};
