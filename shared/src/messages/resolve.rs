//! Triggering context ↔ host resolution messages

use serde::{Deserialize, Serialize};

use crate::types::ResolutionOutcome;

/// Resolution request carrying the trigger-stripped query
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResolveRequest {
    pub query: String,
}

/// Reply shaped as `{ ok: true, url }` or `{ ok: false, error, reason }`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResolveResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ResolveResponse {
    pub fn resolved(url: impl Into<String>) -> Self {
        Self {
            ok: true,
            url: Some(url.into()),
            error: None,
            reason: None,
        }
    }

    pub fn failed(error: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            url: None,
            error: Some(error.into()),
            reason: Some(reason.into()),
        }
    }
}

impl From<ResolutionOutcome> for ResolveResponse {
    fn from(outcome: ResolutionOutcome) -> Self {
        match outcome {
            ResolutionOutcome::Success { url } => ResolveResponse::resolved(url),
            ResolutionOutcome::Failure { reason, message } => {
                ResolveResponse::failed(message, reason.code())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FailureReason;

    #[test]
    fn test_success_wire_shape() {
        let response = ResolveResponse::from(ResolutionOutcome::success("https://example.com"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true, "url": "https://example.com" }));
    }

    #[test]
    fn test_failure_wire_shape() {
        let outcome = ResolutionOutcome::failure(FailureReason::NoCandidates, "No search results found");
        let json = serde_json::to_value(ResolveResponse::from(outcome)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ok": false,
                "error": "No search results found",
                "reason": "no_candidates"
            })
        );
    }
}
