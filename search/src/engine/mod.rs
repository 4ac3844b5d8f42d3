mod boost;
mod matcher;

use crate::index::IconIndex;
use crate::query::SearchQuery;
use crate::results::ScoredCandidate;
use iconset_core::SearchConfig;
use matcher::FieldMatcher;
use std::collections::HashSet;
use tracing::trace;

/// Scores, boosts and ranks icons of an [`IconIndex`] against a query.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Search operations.
impl SearchEngine {
    /// Returns at most `limit` candidates, most relevant first.
    ///
    /// Ties on both scores keep corpus order.
    pub fn search(
        &self,
        index: &IconIndex,
        query: &SearchQuery,
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        if limit == 0 || index.is_empty() {
            return Vec::new();
        }

        let (name_weight, tags_weight) = self.config.normalized_weights();
        let mut matcher = FieldMatcher::new(query, &self.config);

        let mut candidates: Vec<ScoredCandidate> = index
            .entries()
            .filter_map(|entry| {
                let name_distance = matcher.distance(&entry.name_lower);
                let tags_distance = entry
                    .tags_lower
                    .iter()
                    .filter_map(|tag| matcher.distance(tag))
                    .min_by(f64::total_cmp);

                let raw_score =
                    combine([(name_distance, name_weight), (tags_distance, tags_weight)])?;
                let adjusted_score =
                    raw_score + boost::adjustment(entry, query.as_str(), &self.config.boosts);

                Some(ScoredCandidate {
                    name: entry.record.name().to_string(),
                    raw_score,
                    adjusted_score,
                })
            })
            .collect();

        trace!(
            query = query.as_str(),
            matched = candidates.len(),
            "scored icon candidates"
        );

        candidates.sort_by(|a, b| {
            a.adjusted_score
                .total_cmp(&b.adjusted_score)
                .then(a.raw_score.total_cmp(&b.raw_score))
        });
        candidates.truncate(limit);
        candidates
    }

    /// Collects distinct tags containing the query, in corpus order.
    ///
    /// Tags equal to the query are left out.
    pub fn suggestions(
        &self,
        index: &IconIndex,
        query: &SearchQuery,
        limit: usize,
    ) -> Vec<String> {
        let needle = query.as_str();
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        if limit == 0 {
            return suggestions;
        }

        for entry in index.entries() {
            for (tag, lower) in entry.record.tags.iter().zip(&entry.tags_lower) {
                if lower == needle || !lower.contains(needle) {
                    continue;
                }
                if seen.insert(tag.as_str()) {
                    suggestions.push(tag.clone());
                    if suggestions.len() == limit {
                        return suggestions;
                    }
                }
            }
        }

        suggestions
    }
}

/// Multiplies `distance^weight` over the matched fields.
///
/// Returns `None` when no field matched. Zero distances are clamped to
/// `f64::EPSILON` so a perfect field still scales with its weight.
fn combine<const N: usize>(fields: [(Option<f64>, f64); N]) -> Option<f64> {
    fields
        .into_iter()
        .filter_map(|(distance, weight)| distance.map(|d| d.max(f64::EPSILON).powf(weight)))
        .reduce(|acc, factor| acc * factor)
}
