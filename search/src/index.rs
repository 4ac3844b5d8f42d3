//! In-memory icon metadata index.

use iconset_core::IconRecord;
use indexmap::IndexMap;

/// Record plus the lowercased forms the matcher works on.
#[derive(Debug)]
pub(crate) struct IndexEntry {
    pub(crate) record: IconRecord,
    pub(crate) name_lower: String,
    pub(crate) tags_lower: Vec<String>,
}

impl IndexEntry {
    fn new(record: IconRecord) -> Self {
        let name_lower = record.name().to_lowercase();
        let tags_lower = record.tags.iter().map(|tag| tag.to_lowercase()).collect();
        Self {
            record,
            name_lower,
            tags_lower,
        }
    }
}

/// Name-keyed icon metadata, in corpus order.
///
/// Immutable once built. A later record with an already seen name replaces
/// the earlier one but keeps its position.
#[derive(Debug, Default)]
pub struct IconIndex {
    entries: IndexMap<String, IndexEntry>,
}

impl IconIndex {
    pub fn new(records: impl IntoIterator<Item = IconRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| (record.name().to_string(), IndexEntry::new(record)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&IconRecord> {
        self.entries.get(name).map(|entry| &entry.record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = &IconRecord> {
        self.entries.values().map(|entry| &entry.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }
}
