//! Tests for the capability sources against a local HTTP double
//!
//! Each test starts its own `wiremock::MockServer` and points the source at
//! it, so provider status codes, slow responses, and malformed bodies can be
//! exercised without network access.


use std::time::Duration;

use shared::{CandidateCredentials, JudgmentCredentials};

pub(crate) fn candidate_credentials() -> CandidateCredentials {
    CandidateCredentials {
        api_key: "cse-test-key".to_string(),
        engine_id: "engine-123".to_string(),
    }
}

pub(crate) fn judgment_credentials() -> JudgmentCredentials {
    JudgmentCredentials {
        api_key: "gemini-test-key".to_string(),
    }
}

pub(crate) const TEST_TIMEOUT: Duration = Duration::from_secs(2);
