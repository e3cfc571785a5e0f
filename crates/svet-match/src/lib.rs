//! Equipment name reconciliation.
//!
//! Matches free-text equipment names produced by the diagnosis service against
//! a caller-supplied catalog:
//!
//! - A case-insensitive exact hit suppresses every fuzzy suggestion.
//! - Otherwise candidates are scored with a bigram Dice coefficient and only
//!   those strictly above the inclusion threshold (0.4) are kept, best first,
//!   ties in catalog order.
//!
//! The matcher is a pure function of its inputs; the catalog is never fetched
//! here.

#![deny(unsafe_code)]

mod engine;
mod similarity;

pub use engine::{
    DEFAULT_INCLUSION_THRESHOLD, EquipmentMatcher, MatchMode, MatchOptions, match_equipment,
};
pub use similarity::{SimilarityMetric, dice_coefficient};
