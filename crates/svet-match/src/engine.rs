//! Equipment matching engine.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use svet_model::{EquipmentCandidate, MatchError, MatchRequest, MatchResult, ScoredMatch};
use tracing::{debug, trace};

use crate::similarity::SimilarityMetric;

/// Minimum similarity (exclusive) for a non-exact candidate to be reported.
pub const DEFAULT_INCLUSION_THRESHOLD: f64 = 0.4;

/// Which candidates a query reports when it has no exact hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Every candidate above the threshold, best first.
    #[default]
    Ranked,
    /// Only the single best candidate, threshold ignored.
    ///
    /// An exact hit still wins; among exact hits the first catalog entry is
    /// returned.
    BestOnly,
}

/// Tunables for [`EquipmentMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Inclusion threshold in `[0, 1]` (default: 0.4).
    pub threshold: f64,
    /// Scorer for non-exact candidates (default: Dice).
    pub metric: SimilarityMetric,
    /// Reporting mode (default: ranked).
    pub mode: MatchMode,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_INCLUSION_THRESHOLD,
            metric: SimilarityMetric::default(),
            mode: MatchMode::default(),
        }
    }
}

impl MatchOptions {
    /// Options with a higher bar for fuzzy suggestions.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            threshold: 0.6,
            ..Self::default()
        }
    }

    /// Single best candidate per query, no threshold.
    #[must_use]
    pub fn best_only() -> Self {
        Self {
            mode: MatchMode::BestOnly,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    fn validate(&self) -> Result<(), MatchError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(MatchError::InvalidThreshold(self.threshold))
        }
    }
}

/// Reconciles free-text equipment names against a catalog snapshot.
///
/// The matcher holds only its options. Each call works on the slices it is
/// given and returns fresh results, so one matcher can be shared freely
/// between request handlers.
///
/// # Example
///
/// ```
/// use svet_match::EquipmentMatcher;
/// use svet_model::EquipmentCandidate;
///
/// let catalog = vec![EquipmentCandidate::new("X-Ray Machine", 7)];
/// let matcher = EquipmentMatcher::default();
/// let results = matcher.match_all(&["x-ray machine"], &catalog);
/// assert!(results[0].matches[0].is_exact_match);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EquipmentMatcher {
    options: MatchOptions,
}

impl EquipmentMatcher {
    /// Create a matcher, rejecting a threshold outside `[0, 1]`.
    pub fn new(options: MatchOptions) -> Result<Self, MatchError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Match every query name, preserving input order and duplicates.
    pub fn match_all<S: AsRef<str>>(
        &self,
        query_names: &[S],
        catalog: &[EquipmentCandidate],
    ) -> Vec<MatchResult> {
        debug!(
            queries = query_names.len(),
            catalog = catalog.len(),
            metric = self.options.metric.as_str(),
            "matching equipment names"
        );
        let lowered = lowercase_names(catalog);
        query_names
            .iter()
            .map(|query| self.match_lowered(query.as_ref(), catalog, &lowered))
            .collect()
    }

    /// Match a single query name.
    pub fn match_one(&self, query: &str, catalog: &[EquipmentCandidate]) -> MatchResult {
        self.match_lowered(query, catalog, &lowercase_names(catalog))
    }

    /// Validate a request body and match it.
    ///
    /// Fails before any matching when a required field is missing or a
    /// catalog entry is invalid.
    pub fn match_request(&self, request: MatchRequest) -> Result<Vec<MatchResult>, MatchError> {
        let validated = request.validate()?;
        Ok(self.match_all(&validated.query_names, &validated.catalog))
    }

    fn match_lowered(
        &self,
        query: &str,
        catalog: &[EquipmentCandidate],
        lowered: &[String],
    ) -> MatchResult {
        let query_lower = query.to_lowercase();

        let exact: Vec<&EquipmentCandidate> = catalog
            .iter()
            .zip(lowered)
            .filter(|(_, name)| **name == query_lower)
            .map(|(candidate, _)| candidate)
            .collect();

        let matches = if exact.is_empty() {
            let scored = lowered
                .iter()
                .map(|name| self.options.metric.score(&query_lower, name))
                .enumerate();
            match self.options.mode {
                MatchMode::Ranked => rank_above(scored, self.options.threshold)
                    .into_iter()
                    .map(|(idx, score)| ScoredMatch::fuzzy(&catalog[idx], score))
                    .collect(),
                MatchMode::BestOnly => best_of(scored)
                    .map(|(idx, score)| ScoredMatch::fuzzy(&catalog[idx], score))
                    .into_iter()
                    .collect(),
            }
        } else {
            match self.options.mode {
                MatchMode::Ranked => exact.into_iter().map(ScoredMatch::exact).collect(),
                MatchMode::BestOnly => vec![ScoredMatch::exact(exact[0])],
            }
        };

        let result = MatchResult::new(query, matches);
        trace!(
            outcome = ?result.outcome(),
            matches = result.matches.len(),
            "matched query"
        );
        result
    }
}

/// Match with default options: exact hits first, otherwise Dice scores above 0.4.
pub fn match_equipment<S: AsRef<str>>(
    query_names: &[S],
    catalog: &[EquipmentCandidate],
) -> Vec<MatchResult> {
    EquipmentMatcher::default().match_all(query_names, catalog)
}

fn lowercase_names(catalog: &[EquipmentCandidate]) -> Vec<String> {
    catalog.iter().map(|c| c.name.to_lowercase()).collect()
}

/// Keep scores strictly above `threshold`, best first.
///
/// `sort_by` is stable, so equal scores stay in catalog order.
fn rank_above(
    scored: impl Iterator<Item = (usize, f64)>,
    threshold: f64,
) -> Vec<(usize, f64)> {
    let mut kept: Vec<(usize, f64)> = scored.filter(|(_, score)| *score > threshold).collect();
    kept.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    kept
}

/// Highest score; the earliest entry wins a tie.
fn best_of(scored: impl Iterator<Item = (usize, f64)>) -> Option<(usize, f64)> {
    scored.fold(None, |best, (idx, score)| match best {
        Some((_, best_score)) if score <= best_score => best,
        _ => Some((idx, score)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_above_is_strict_and_stable() {
        let scored = vec![(0, 0.4), (1, 0.7), (2, 0.5), (3, 0.7)];
        let kept = rank_above(scored.into_iter(), 0.4);
        assert_eq!(kept, vec![(1, 0.7), (3, 0.7), (2, 0.5)]);
    }

    #[test]
    fn best_of_prefers_first_on_tie() {
        let scored = vec![(0, 0.2), (1, 0.9), (2, 0.9)];
        assert_eq!(best_of(scored.into_iter()), Some((1, 0.9)));
        assert_eq!(best_of(std::iter::empty()), None);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = EquipmentMatcher::new(MatchOptions::default().with_threshold(1.5)).unwrap_err();
        assert_eq!(err, MatchError::InvalidThreshold(1.5));
        assert!(EquipmentMatcher::new(MatchOptions::default().with_threshold(f64::NAN)).is_err());
        assert!(EquipmentMatcher::new(MatchOptions::default().with_threshold(0.0)).is_ok());
        assert!(EquipmentMatcher::new(MatchOptions::default().with_threshold(1.0)).is_ok());
    }

    #[test]
    fn preset_options() {
        assert_eq!(MatchOptions::default().threshold, DEFAULT_INCLUSION_THRESHOLD);
        assert_eq!(MatchOptions::strict().threshold, 0.6);
        assert_eq!(MatchOptions::best_only().mode, MatchMode::BestOnly);
    }
}
