//! Request/response adapter around the matcher.
//!
//! Parses a request body, rejects it with a structured payload when required
//! fields are missing or malformed, and otherwise hands the validated inputs to
//! [`EquipmentMatcher`]. The matcher itself never sees an invalid request.

use svet_match::EquipmentMatcher;
use svet_model::{ErrorPayload, MatchRequest, MatchResult, MatchSummary};
use tracing::{info, info_span, trace, warn};

use crate::logging::redact_value;

/// Result of one exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// One result per query name, in request order.
    Matched(Vec<MatchResult>),
    /// Client error; no results were produced.
    Rejected(ErrorPayload),
}

impl Reply {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Serialize the response body.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        match (self, pretty) {
            (Self::Matched(results), true) => serde_json::to_string_pretty(results),
            (Self::Matched(results), false) => serde_json::to_string(results),
            (Self::Rejected(payload), true) => serde_json::to_string_pretty(payload),
            (Self::Rejected(payload), false) => serde_json::to_string(payload),
        }
    }
}

/// Handle one request body.
pub fn handle_request(body: &str, matcher: &EquipmentMatcher) -> Reply {
    let span = info_span!("match_request", bytes = body.len());
    let _guard = span.enter();

    let results = MatchRequest::from_json(body).and_then(|request| matcher.match_request(request));
    match results {
        Ok(results) => {
            for result in &results {
                trace!(
                    query = redact_value(&result.ai_name),
                    outcome = ?result.outcome(),
                    "resolved query"
                );
            }
            let summary = MatchSummary::from_results(&results);
            info!(
                queries = summary.total,
                exact = summary.exact,
                fuzzy = summary.fuzzy,
                unmatched = summary.unmatched,
                "request matched"
            );
            Reply::Matched(results)
        }
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "request rejected");
            Reply::Rejected(ErrorPayload::from(&err))
        }
    }
}
