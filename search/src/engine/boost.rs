use crate::index::IndexEntry;
use iconset_core::BoostConfig;

/// Sum of the name and tag boosts for `entry`. `query` must be lowercased.
///
/// At most one name rule and one tag rule apply, and the two stack.
pub(super) fn adjustment(entry: &IndexEntry, query: &str, boosts: &BoostConfig) -> f64 {
    name_boost(&entry.name_lower, query, boosts) + tag_boost(&entry.tags_lower, query, boosts)
}

fn name_boost(name: &str, query: &str, boosts: &BoostConfig) -> f64 {
    if name == query {
        boosts.exact_name
    } else if name.starts_with(query) {
        boosts.name_prefix
    } else if query.starts_with(name) {
        boosts.query_prefix
    } else {
        0.0
    }
}

fn tag_boost(tags: &[String], query: &str, boosts: &BoostConfig) -> f64 {
    if tags.iter().any(|tag| tag == query) {
        boosts.exact_tag
    } else if tags.iter().any(|tag| tag.starts_with(query)) {
        boosts.tag_prefix
    } else {
        0.0
    }
}
