//! Data model for SymptoVet equipment reconciliation.
//!
//! Catalog entries come in from the caller, scored matches and per-query
//! results go out. Nothing here performs I/O.

#![deny(unsafe_code)]

pub mod equipment;
pub mod error;
pub mod ids;
pub mod request;

pub use equipment::{EquipmentCandidate, MatchOutcome, MatchResult, MatchSummary, ScoredMatch};
pub use error::{ErrorPayload, MatchError, Result};
pub use ids::OpaqueId;
pub use request::{
    AI_EQUIPMENT_NAMES_FIELD, DB_EQUIPMENTS_FIELD, MatchRequest, ValidatedRequest,
};
