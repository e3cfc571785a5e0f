//! Opaque identifiers carried from catalog entries into matches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier owned by the backing store (clinic or equipment row).
///
/// The matcher never interprets these; it only carries them from the catalog
/// entry to the scored match. A number stays a number and a string stays a
/// string when the value is written back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpaqueId {
    Int(i64),
    /// Any other JSON number (`u64` beyond `i64::MAX`, fractional values),
    /// kept as written.
    Number(serde_json::Number),
    Text(String),
}

impl OpaqueId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Number(value) => value.as_i64(),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) | Self::Number(_) => None,
            Self::Text(value) => Some(value),
        }
    }
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for OpaqueId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OpaqueId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for OpaqueId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OpaqueId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_json_shape() {
        let number: OpaqueId = serde_json::from_str("42").unwrap();
        assert_eq!(number, OpaqueId::Int(42));
        assert_eq!(serde_json::to_string(&number).unwrap(), "42");

        let text: OpaqueId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(text.as_text(), Some("a1b2"));
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"a1b2\"");
    }

    #[test]
    fn wide_and_fractional_numbers_keep_their_text() {
        let wide: OpaqueId = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(wide, OpaqueId::Number(_)));
        assert_eq!(wide.as_int(), None);
        assert_eq!(serde_json::to_string(&wide).unwrap(), "18446744073709551615");

        let fractional: OpaqueId = serde_json::from_str("1.0").unwrap();
        assert!(matches!(fractional, OpaqueId::Number(_)));
        assert_eq!(serde_json::to_string(&fractional).unwrap(), "1.0");
        assert_eq!(fractional.to_string(), "1.0");
    }

    #[test]
    fn numeric_string_stays_text() {
        let id: OpaqueId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(id, OpaqueId::Text("7".to_string()));
        assert_eq!(id.as_int(), None);
        assert_eq!(id.to_string(), "7");
    }
}
