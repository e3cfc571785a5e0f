//! Catalog entries and match results exchanged with the matcher.

use serde::{Deserialize, Serialize};

use crate::ids::OpaqueId;

/// A known equipment record from the catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentCandidate {
    /// Display label, expected to be non-empty.
    pub name: String,
    /// Clinic offering this equipment; `None` for global catalog rows.
    #[serde(default)]
    pub clinic_id: Option<OpaqueId>,
    /// Canonical equipment row.
    pub equipment_id: OpaqueId,
    /// True when the entry was user-defined rather than shared.
    #[serde(default)]
    pub is_custom: bool,
}

impl EquipmentCandidate {
    pub fn new(name: impl Into<String>, equipment_id: impl Into<OpaqueId>) -> Self {
        Self {
            name: name.into(),
            clinic_id: None,
            equipment_id: equipment_id.into(),
            is_custom: false,
        }
    }

    #[must_use]
    pub fn with_clinic(mut self, clinic_id: impl Into<OpaqueId>) -> Self {
        self.clinic_id = Some(clinic_id.into());
        self
    }

    #[must_use]
    pub fn custom(mut self) -> Self {
        self.is_custom = true;
        self
    }
}

/// A catalog entry paired with its score against one query name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub name: String,
    pub clinic_id: Option<OpaqueId>,
    pub equipment_id: OpaqueId,
    /// Case-insensitive full-string equality with the query.
    pub is_exact_match: bool,
    /// Similarity in `[0, 1]`; exactly `1.0` for exact matches.
    pub similarity: f64,
    pub is_custom: bool,
}

impl ScoredMatch {
    pub fn exact(candidate: &EquipmentCandidate) -> Self {
        Self::from_candidate(candidate, true, 1.0)
    }

    pub fn fuzzy(candidate: &EquipmentCandidate, similarity: f64) -> Self {
        Self::from_candidate(candidate, false, similarity)
    }

    fn from_candidate(
        candidate: &EquipmentCandidate,
        is_exact_match: bool,
        similarity: f64,
    ) -> Self {
        Self {
            name: candidate.name.clone(),
            clinic_id: candidate.clinic_id.clone(),
            equipment_id: candidate.equipment_id.clone(),
            is_exact_match,
            similarity,
            is_custom: candidate.is_custom,
        }
    }
}

/// How a single query name was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// No candidate survived.
    Unmatched,
    /// Only similarity-based candidates.
    Fuzzy,
    /// At least one case-insensitive exact hit.
    Exact,
}

/// Ranked candidates for one query name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The query exactly as supplied.
    pub ai_name: String,
    /// Best first; empty when nothing qualified.
    pub matches: Vec<ScoredMatch>,
}

impl MatchResult {
    pub fn new(ai_name: impl Into<String>, matches: Vec<ScoredMatch>) -> Self {
        Self {
            ai_name: ai_name.into(),
            matches,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.matches.first() {
            None => MatchOutcome::Unmatched,
            Some(first) if first.is_exact_match => MatchOutcome::Exact,
            Some(_) => MatchOutcome::Fuzzy,
        }
    }

    pub fn best(&self) -> Option<&ScoredMatch> {
        self.matches.first()
    }

    /// Returns the top match when a caller may accept it without review.
    ///
    /// An exact match is always accepted. A fuzzy match is accepted only when
    /// it reaches `min_similarity` and no other candidate shares its score.
    pub fn auto_accept(&self, min_similarity: f64) -> Option<&ScoredMatch> {
        let best = self.matches.first()?;
        if best.is_exact_match {
            return Some(best);
        }
        if best.similarity < min_similarity {
            return None;
        }
        let tied = self
            .matches
            .get(1)
            .is_some_and(|next| next.similarity == best.similarity);
        if tied { None } else { Some(best) }
    }
}

/// Counts of results per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub total: usize,
    pub exact: usize,
    pub fuzzy: usize,
    pub unmatched: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            match result.outcome() {
                MatchOutcome::Exact => summary.exact += 1,
                MatchOutcome::Fuzzy => summary.fuzzy += 1,
                MatchOutcome::Unmatched => summary.unmatched += 1,
            }
        }
        summary
    }

    /// True when every query resolved to an exact match.
    pub fn all_exact(&self) -> bool {
        self.total > 0 && self.exact == self.total
    }
}
