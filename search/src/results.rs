//! Search results types.

/// One ranked match. Both scores are distances, lower is better.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub name: String,
    /// Weighted fuzzy distance before boosts.
    pub raw_score: f64,
    /// `raw_score` plus every applicable boost.
    pub adjusted_score: f64,
}
