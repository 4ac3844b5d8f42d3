use crate::error::Result;
use crate::types::IconName;
use serde::{Deserialize, Serialize};

/// One icon in the corpus: its name plus free-form synonym/category tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub name: IconName,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl IconRecord {
    pub fn new(name: IconName, tags: Vec<String>) -> Self {
        Self { name, tags }
    }

    /// Validates `name` before building the record.
    pub fn try_new(name: impl Into<String>, tags: Vec<String>) -> Result<Self> {
        let name = IconName::try_new(name.into())?;
        Ok(Self::new(name, tags))
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_validates_name() {
        let record = IconRecord::try_new("home", vec!["house".to_string()]).unwrap();
        assert_eq!(record.name(), "home");
        assert_eq!(record.tags, vec!["house"]);

        let err = IconRecord::try_new("  ", vec![]).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidName(_)));
    }

    #[test]
    fn serializes_name_and_tags() {
        let record = IconRecord::try_new("car", vec!["vehicle".to_string()]).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "car", "tags": ["vehicle"] })
        );
    }

    #[test]
    fn deserializes_missing_tags_as_empty() {
        let record: IconRecord = serde_json::from_str(r#"{"name":"dot"}"#).unwrap();
        assert!(record.tags.is_empty());
    }
}
