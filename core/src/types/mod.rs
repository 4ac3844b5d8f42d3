pub(crate) mod config;
pub use config::{BoostConfig, ConfigError, IconsConfig, SearchConfig};

pub(crate) mod name;
pub use name::{IconName, IconNameError, MAX_NAME_LENGTH};

pub(crate) mod record;
pub use record::IconRecord;
