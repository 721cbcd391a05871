//! Capability trait definitions for dependency injection

use async_trait::async_trait;

use shared::{Candidate, Judgment};
use crate::error::ClientResult;
use crate::types::{CandidateQuery, PredictionRequest, SelectionRequest};

/// Ranked candidate URLs for a query
#[mockall::automock]
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Fetch up to `request.count` candidates in provider rank order.
    ///
    /// An empty list means "no candidates found" and is not an error.
    /// `request.timeout` bounds the whole call; expiry is `ClientError::Timeout`.
    async fn fetch_candidates(&self, request: CandidateQuery) -> ClientResult<Vec<Candidate>>;
}

/// URL judgment with a confidence score
#[mockall::automock]
#[async_trait]
pub trait JudgmentSource: Send + Sync {
    /// Speculative judgment from the query alone
    async fn predict(&self, request: PredictionRequest) -> ClientResult<Judgment>;

    /// Conclusive judgment choosing among non-empty candidates
    async fn select_best(&self, request: SelectionRequest) -> ClientResult<Judgment>;
}
