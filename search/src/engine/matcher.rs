use crate::query::SearchQuery;
use iconset_core::SearchConfig;
use nucleo::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};

/// Character offset at which a substring hit reaches a distance of 0.5.
const SUBSTRING_OFFSET_SCALE: f64 = 100.0;

/// Scores single fields (a name or one tag) against a query.
///
/// Reuses its buffers across calls, so build one per query and feed it every
/// field of the corpus.
pub(crate) struct FieldMatcher {
    pattern: Pattern,
    matcher: Matcher,
    query: String,
    query_len: usize,
    perfect_score: u32,
    threshold: f64,
    min_match_len: usize,
    buf: Vec<char>,
    indices: Vec<u32>,
}

impl FieldMatcher {
    pub(crate) fn new(query: &SearchQuery, config: &SearchConfig) -> Self {
        let normalization = if config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        let pattern = Pattern::new(
            query.as_str(),
            CaseMatching::Ignore,
            normalization,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);
        let mut buf = Vec::new();

        // The query matched against itself is the best score any field can get.
        let perfect_score = pattern
            .score(Utf32Str::new(query.as_str(), &mut buf), &mut matcher)
            .unwrap_or(0);

        Self {
            pattern,
            matcher,
            query: query.as_str().to_string(),
            query_len: query.char_len(),
            perfect_score,
            threshold: config.threshold,
            min_match_len: config.min_match_len,
            buf,
            indices: Vec::new(),
        }
    }

    /// Distance of a lowercased field from the query, in `0.0..=1.0`.
    ///
    /// Returns `None` when the field is further than the threshold.
    pub(crate) fn distance(&mut self, field: &str) -> Option<f64> {
        if self.query_len < self.min_match_len {
            return None;
        }

        let best = [
            self.substring_distance(field),
            self.subsequence_distance(field),
            self.edit_distance(field),
        ]
        .into_iter()
        .flatten()
        .min_by(f64::total_cmp)?;

        (best <= self.threshold).then_some(best)
    }

    /// Contiguous occurrence of the query, penalized by how far into the
    /// field it starts.
    fn substring_distance(&self, field: &str) -> Option<f64> {
        let byte_offset = field.find(&self.query)?;
        let offset = field[..byte_offset].chars().count() as f64;
        Some(offset / (offset + SUBSTRING_OFFSET_SCALE))
    }

    /// Subsequence match relative to the perfect score.
    ///
    /// The match must contain a run of at least `min_match_len` consecutive
    /// characters.
    fn subsequence_distance(&mut self, field: &str) -> Option<f64> {
        if self.perfect_score == 0 {
            return None;
        }

        self.indices.clear();
        let haystack = Utf32Str::new(field, &mut self.buf);
        let score = self
            .pattern
            .indices(haystack, &mut self.matcher, &mut self.indices)?;

        self.indices.sort_unstable();
        self.indices.dedup();
        if longest_run(&self.indices) < self.min_match_len {
            return None;
        }

        let ratio = f64::from(score) / f64::from(self.perfect_score);
        Some(1.0 - ratio.min(1.0))
    }

    /// Edit distance against the field and each of its tokens.
    ///
    /// Candidates are cut to the query's length so a misspelled prefix still
    /// lands close to a longer word.
    fn edit_distance(&self, field: &str) -> Option<f64> {
        let similarity = std::iter::once(field)
            .chain(field.split(is_separator).filter(|token| !token.is_empty()))
            .map(|candidate| {
                let prefix: String = candidate.chars().take(self.query_len).collect();
                strsim::normalized_damerau_levenshtein(&self.query, &prefix)
            })
            .fold(0.0_f64, f64::max);

        (similarity > 0.0).then(|| 1.0 - similarity)
    }
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Length of the longest run of consecutive values in sorted `indices`.
fn longest_run(indices: &[u32]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<u32> = None;

    for &index in indices {
        current = match previous {
            Some(prev) if index == prev + 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(index);
    }

    longest
}
