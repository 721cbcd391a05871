//! Resolution error types

use clients::ClientError;
use shared::{FailureReason, ResolutionOutcome, SharedError};
use thiserror::Error;

/// Why a resolution attempt stopped short of a URL
///
/// Messages are shown to the user, so each one says whether settings need
/// attention or whether normal search is the way forward.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error("Settings are invalid ({0}). Open settings to fix them.")]
    InvalidSettings(#[from] SharedError),

    #[error("Gemini API key is not configured. Open settings to add it.")]
    MissingJudgmentCredential,

    #[error("Search API key or search engine ID is not configured and the quick prediction was not confident enough. Open settings to add them.")]
    MissingCandidateCredential,

    #[error("Search request failed: {error}")]
    CandidateSource { error: ClientError },

    #[error("No search results found. Falling back to normal search.")]
    NoCandidates,

    #[error("Not confident enough to redirect (confidence {confidence}, threshold {threshold}). Falling back to normal search.")]
    LowConfidence { confidence: f64, threshold: f64 },

    #[error("AI selection failed: {error}")]
    JudgmentSource { error: ClientError },
}

pub type ResolveResult<T> = Result<T, ResolveError>;

impl ResolveError {
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        ResolveError::InvalidQuery { reason: reason.into() }
    }

    pub fn candidate_source(error: ClientError) -> Self {
        ResolveError::CandidateSource { error }
    }

    pub fn judgment_source(error: ClientError) -> Self {
        ResolveError::JudgmentSource { error }
    }

    pub fn reason(&self) -> FailureReason {
        match self {
            ResolveError::InvalidQuery { .. } => FailureReason::InvalidQuery,
            ResolveError::InvalidSettings(_) => FailureReason::InvalidSettings,
            ResolveError::MissingJudgmentCredential => FailureReason::MissingJudgmentCredential,
            ResolveError::MissingCandidateCredential => FailureReason::MissingCandidateCredential,
            ResolveError::CandidateSource { error } => FailureReason::CandidateSourceError { kind: error.kind() },
            ResolveError::NoCandidates => FailureReason::NoCandidates,
            ResolveError::LowConfidence { confidence, threshold } => FailureReason::LowConfidence {
                confidence: *confidence,
                threshold: *threshold,
            },
            ResolveError::JudgmentSource { error } => FailureReason::JudgmentSourceError { kind: error.kind() },
        }
    }

    /// The only way a workflow error leaves the orchestrator
    pub fn into_outcome(self) -> ResolutionOutcome {
        ResolutionOutcome::failure(self.reason(), self.to_string())
    }
}
