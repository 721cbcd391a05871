//! Secrets for the external capability sources
//!
//! None of these types implement `Serialize`, and their `Debug` output is
//! redacted, so a credential cannot end up in a log line or a response body.

use std::fmt;

/// Full credential set read once per resolution attempt
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub judgment_api_key: Option<String>,
    pub search_api_key: Option<String>,
    pub search_engine_id: Option<String>,
}

/// Credential handed to the judgment source
#[derive(Clone, PartialEq, Eq)]
pub struct JudgmentCredentials {
    pub api_key: String,
}

/// Credential pair handed to the candidate source
#[derive(Clone, PartialEq, Eq)]
pub struct CandidateCredentials {
    pub api_key: String,
    pub engine_id: String,
}

impl Credentials {
    pub fn new(
        judgment_api_key: Option<String>,
        search_api_key: Option<String>,
        search_engine_id: Option<String>,
    ) -> Self {
        Self {
            judgment_api_key,
            search_api_key,
            search_engine_id,
        }
    }

    /// Judgment credential, if a non-blank key is configured
    pub fn judgment(&self) -> Option<JudgmentCredentials> {
        present(&self.judgment_api_key).map(|api_key| JudgmentCredentials {
            api_key: api_key.to_string(),
        })
    }

    /// Candidate credentials, only when both key and collection id are present
    pub fn candidate(&self) -> Option<CandidateCredentials> {
        let api_key = present(&self.search_api_key)?;
        let engine_id = present(&self.search_engine_id)?;
        Some(CandidateCredentials {
            api_key: api_key.to_string(),
            engine_id: engine_id.to_string(),
        })
    }

    pub fn has_judgment(&self) -> bool {
        present(&self.judgment_api_key).is_some()
    }

    pub fn has_candidate(&self) -> bool {
        self.candidate().is_some()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn redact(value: &Option<String>) -> &'static str {
    if present(value).is_some() {
        "<redacted>"
    } else {
        "<unset>"
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("judgment_api_key", &redact(&self.judgment_api_key))
            .field("search_api_key", &redact(&self.search_api_key))
            .field("search_engine_id", &redact(&self.search_engine_id))
            .finish()
    }
}

impl fmt::Debug for JudgmentCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JudgmentCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for CandidateCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateCredentials")
            .field("api_key", &"<redacted>")
            .field("engine_id", &"<redacted>")
            .finish()
    }
}
