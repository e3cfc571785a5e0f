//! Request body accepted at the matching boundary.

use serde::{Deserialize, Serialize};

use crate::equipment::EquipmentCandidate;
use crate::error::{MatchError, Result};

pub const AI_EQUIPMENT_NAMES_FIELD: &str = "aiEquipmentNames";
pub const DB_EQUIPMENTS_FIELD: &str = "dbEquipments";

/// Raw request body. Both fields are required; `null` counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub ai_equipment_names: Option<Vec<String>>,
    pub db_equipments: Option<Vec<EquipmentCandidate>>,
}

/// A request whose preconditions have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub query_names: Vec<String>,
    pub catalog: Vec<EquipmentCandidate>,
}

impl MatchRequest {
    pub fn new(query_names: Vec<String>, catalog: Vec<EquipmentCandidate>) -> Self {
        Self {
            ai_equipment_names: Some(query_names),
            db_equipments: Some(catalog),
        }
    }

    /// Decode a JSON body.
    ///
    /// A catalog entry without `name` or `equipmentId` fails here as
    /// [`MatchError::MalformedRequest`].
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check required fields and catalog preconditions.
    ///
    /// All missing fields are reported together.
    pub fn validate(self) -> Result<ValidatedRequest> {
        let mut missing = Vec::new();
        if self.ai_equipment_names.is_none() {
            missing.push(AI_EQUIPMENT_NAMES_FIELD);
        }
        if self.db_equipments.is_none() {
            missing.push(DB_EQUIPMENTS_FIELD);
        }
        let (Some(query_names), Some(catalog)) = (self.ai_equipment_names, self.db_equipments)
        else {
            return Err(MatchError::MissingFields { fields: missing });
        };

        if let Some(index) = catalog.iter().position(|entry| entry.name.is_empty()) {
            return Err(MatchError::InvalidCatalogEntry {
                index,
                reason: "name must not be empty".to_string(),
            });
        }

        Ok(ValidatedRequest {
            query_names,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_counts_as_missing() {
        let request =
            MatchRequest::from_json(r#"{"aiEquipmentNames": null, "dbEquipments": []}"#).unwrap();
        let err = request.validate().unwrap_err();
        assert_eq!(
            err,
            MatchError::MissingFields {
                fields: vec![AI_EQUIPMENT_NAMES_FIELD]
            }
        );
    }

    #[test]
    fn reports_every_missing_field() {
        let err = MatchRequest::from_json("{}")
            .unwrap()
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::MissingFields {
                fields: vec![AI_EQUIPMENT_NAMES_FIELD, DB_EQUIPMENTS_FIELD]
            }
        );
        assert_eq!(
            err.to_string(),
            "missing required field(s): aiEquipmentNames, dbEquipments"
        );
    }

    #[test]
    fn empty_sequences_are_valid() {
        let validated = MatchRequest::from_json(r#"{"aiEquipmentNames": [], "dbEquipments": []}"#)
            .unwrap()
            .validate()
            .unwrap();
        assert!(validated.query_names.is_empty());
        assert!(validated.catalog.is_empty());
    }
}
