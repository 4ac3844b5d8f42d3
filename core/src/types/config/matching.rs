use serde::{Deserialize, Serialize};

/// Tuning for fuzzy matching and ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Largest accepted field distance, from 0.0 (exact) to 1.0 (anything).
    pub threshold: f64,
    /// Shortest run of consecutive matched characters that counts as a match.
    pub min_match_len: usize,
    pub name_weight: f64,
    pub tags_weight: f64,
    pub default_limit: usize,
    pub suggestion_limit: usize,
    /// Lets subsequence matching treat accented characters as their base
    /// letters. Substring, edit distance, boosts and suggestions always
    /// compare the plain lowercased text.
    pub unicode_normalization: bool,
    pub boosts: BoostConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            min_match_len: 2,
            name_weight: 0.5,
            tags_weight: 0.5,
            default_limit: 50,
            suggestion_limit: 5,
            unicode_normalization: true,
            boosts: BoostConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Returns `(name, tags)` weights scaled to sum to 1.
    ///
    /// Falls back to an even split when both weights are zero or negative.
    pub fn normalized_weights(&self) -> (f64, f64) {
        let name = self.name_weight.max(0.0);
        let tags = self.tags_weight.max(0.0);
        let total = name + tags;
        if total <= 0.0 || !total.is_finite() {
            return (0.5, 0.5);
        }
        (name / total, tags / total)
    }
}

/// Score adjustments applied after fuzzy matching. Negative values promote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    /// Name equals the query.
    pub exact_name: f64,
    /// Name starts with the query.
    pub name_prefix: f64,
    /// Query starts with the name.
    pub query_prefix: f64,
    /// Some tag equals the query.
    pub exact_tag: f64,
    /// Some tag starts with the query.
    pub tag_prefix: f64,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            exact_name: -1.0,
            name_prefix: -0.5,
            query_prefix: -0.3,
            exact_tag: -0.4,
            tag_prefix: -0.2,
        }
    }
}

impl BoostConfig {
    pub(crate) fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("exact_name", self.exact_name),
            ("name_prefix", self.name_prefix),
            ("query_prefix", self.query_prefix),
            ("exact_tag", self.exact_tag),
            ("tag_prefix", self.tag_prefix),
        ]
    }
}
