//! Error types for equipment matching.

use serde::Serialize;
use thiserror::Error;

/// Errors raised before or while matching.
///
/// Every variant is detected up front; the matcher never returns partial
/// results alongside an error.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatchError {
    /// One or both required request fields were absent or null.
    #[error("missing required field(s): {}", .fields.join(", "))]
    MissingFields {
        /// Wire names of the missing fields, in request order.
        fields: Vec<&'static str>,
    },

    /// A catalog entry violates the catalog preconditions.
    #[error("invalid catalog entry at index {index}: {reason}")]
    InvalidCatalogEntry {
        /// Position in `dbEquipments`.
        index: usize,
        /// What is wrong with the entry.
        reason: String,
    },

    /// The request body could not be decoded.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Inclusion threshold outside `[0, 1]`.
    #[error("similarity threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

impl MatchError {
    /// Stable machine-readable kind for the error payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields { .. }
            | Self::InvalidCatalogEntry { .. }
            | Self::MalformedRequest(_) => "invalid_input",
            Self::InvalidThreshold(_) => "invalid_config",
        }
    }

    /// True for errors caused by the caller's request body.
    pub fn is_client_error(&self) -> bool {
        self.kind() == "invalid_input"
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedRequest(err.to_string())
    }
}

/// Structured error body returned across the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub error: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<&'static str>>,
}

impl From<&MatchError> for ErrorPayload {
    fn from(err: &MatchError) -> Self {
        let missing_fields = match err {
            MatchError::MissingFields { fields } => Some(fields.clone()),
            _ => None,
        };
        Self {
            error: err.to_string(),
            kind: err.kind(),
            missing_fields,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
