//! Values produced during one resolution attempt

use serde::{Deserialize, Serialize};
use std::fmt;

/// A destination URL proposed by the candidate source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Candidate {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            snippet: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

/// A URL chosen by the judgment source with its self-reported confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    pub url: String,
    pub confidence: f64,
}

impl Judgment {
    pub fn new(url: impl Into<String>, confidence: f64) -> Self {
        Self {
            url: url.into(),
            confidence,
        }
    }
}

/// Failure domain of a capability client call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceErrorKind {
    Network,
    Auth,
    Timeout,
    Parse,
}

impl fmt::Display for SourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceErrorKind::Network => write!(f, "network error"),
            SourceErrorKind::Auth => write!(f, "authentication error"),
            SourceErrorKind::Timeout => write!(f, "timeout"),
            SourceErrorKind::Parse => write!(f, "malformed response"),
        }
    }
}

/// Why a resolution attempt did not produce a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FailureReason {
    InvalidQuery,
    InvalidSettings,
    MissingJudgmentCredential,
    MissingCandidateCredential,
    CandidateSourceError { kind: SourceErrorKind },
    NoCandidates,
    LowConfidence { confidence: f64, threshold: f64 },
    JudgmentSourceError { kind: SourceErrorKind },
}

/// What the presentation layer should offer after a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryAction {
    /// Configuration is incomplete or invalid; the user has to fix settings
    OpenSettings,
    /// Nothing to fix; continue with the normal search results page
    FallbackToSearch,
}

impl FailureReason {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::InvalidQuery => "invalid_query",
            FailureReason::InvalidSettings => "invalid_settings",
            FailureReason::MissingJudgmentCredential => "missing_judgment_credential",
            FailureReason::MissingCandidateCredential => "missing_candidate_credential",
            FailureReason::CandidateSourceError { .. } => "candidate_source_error",
            FailureReason::NoCandidates => "no_candidates",
            FailureReason::LowConfidence { .. } => "low_confidence",
            FailureReason::JudgmentSourceError { .. } => "judgment_source_error",
        }
    }

    pub fn recovery(&self) -> RecoveryAction {
        match self {
            FailureReason::InvalidSettings
            | FailureReason::MissingJudgmentCredential
            | FailureReason::MissingCandidateCredential => RecoveryAction::OpenSettings,
            FailureReason::CandidateSourceError { kind: SourceErrorKind::Auth }
            | FailureReason::JudgmentSourceError { kind: SourceErrorKind::Auth } => {
                RecoveryAction::OpenSettings
            }
            _ => RecoveryAction::FallbackToSearch,
        }
    }
}

/// Terminal value of one resolution attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    Success { url: String },
    Failure { reason: FailureReason, message: String },
}

impl ResolutionOutcome {
    pub fn success(url: impl Into<String>) -> Self {
        ResolutionOutcome::Success { url: url.into() }
    }

    pub fn failure(reason: FailureReason, message: impl Into<String>) -> Self {
        ResolutionOutcome::Failure {
            reason,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResolutionOutcome::Success { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ResolutionOutcome::Success { url } => Some(url),
            ResolutionOutcome::Failure { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&FailureReason> {
        match self {
            ResolutionOutcome::Success { .. } => None,
            ResolutionOutcome::Failure { reason, .. } => Some(reason),
        }
    }
}
