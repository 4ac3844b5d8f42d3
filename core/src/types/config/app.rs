use super::{BoostConfig, SearchConfig};
use crate::corpus::CorpusSource;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Icon search configuration, persisted as icons.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    #[serde(default)]
    pub source: CorpusSource,
    #[serde(default)]
    pub search: SearchConfig,
}

impl IconsConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("icons.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let search = &self.search;

        if !(0.0..=1.0).contains(&search.threshold) {
            errors.push("threshold must be between 0 and 1".to_string());
        }

        if search.min_match_len == 0 {
            errors.push("min_match_len must be at least 1".to_string());
        }

        if !valid_weight(search.name_weight) {
            errors.push("name_weight must be a non-negative number".to_string());
        }

        if !valid_weight(search.tags_weight) {
            errors.push("tags_weight must be a non-negative number".to_string());
        }

        if search.name_weight == 0.0 && search.tags_weight == 0.0 {
            errors.push("name_weight and tags_weight cannot both be zero".to_string());
        }

        for (field, value) in search.boosts.fields() {
            if !valid_boost(value) {
                errors.push(format!("boosts.{field} must not be positive"));
            }
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = SearchConfig::default();
        let search = &self.search;

        let (name_weight, tags_weight) = if valid_weight(search.name_weight)
            && valid_weight(search.tags_weight)
            && search.name_weight + search.tags_weight > 0.0
        {
            (search.name_weight, search.tags_weight)
        } else {
            (defaults.name_weight, defaults.tags_weight)
        };

        let boost = |value: f64, default: f64| if valid_boost(value) { value } else { default };

        Self {
            source: self.source.clone(),
            search: SearchConfig {
                threshold: if (0.0..=1.0).contains(&search.threshold) {
                    search.threshold
                } else {
                    defaults.threshold
                },
                min_match_len: if search.min_match_len == 0 {
                    defaults.min_match_len
                } else {
                    search.min_match_len
                },
                name_weight,
                tags_weight,
                default_limit: search.default_limit,
                suggestion_limit: search.suggestion_limit,
                unicode_normalization: search.unicode_normalization,
                boosts: BoostConfig {
                    exact_name: boost(search.boosts.exact_name, defaults.boosts.exact_name),
                    name_prefix: boost(search.boosts.name_prefix, defaults.boosts.name_prefix),
                    query_prefix: boost(search.boosts.query_prefix, defaults.boosts.query_prefix),
                    exact_tag: boost(search.boosts.exact_tag, defaults.boosts.exact_tag),
                    tag_prefix: boost(search.boosts.tag_prefix, defaults.boosts.tag_prefix),
                },
            },
        }
    }
}

fn valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

fn valid_boost(boost: f64) -> bool {
    boost.is_finite() && boost <= 0.0
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
