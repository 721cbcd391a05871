//! Request types for capability client calls
//!
//! Every request owns its data, credentials included, so a call can be moved
//! into a spawned task and outlive the caller's borrow.

use std::time::Duration;

use shared::{Candidate, CandidateCredentials, GeminiModel, JudgmentCredentials};

/// Candidate retrieval request
#[derive(Debug, Clone)]
pub struct CandidateQuery {
    pub query: String,
    /// Requested result count; clamped to the provider's range by the source
    pub count: u32,
    pub credentials: CandidateCredentials,
    pub timeout: Duration,
}

/// Speculative judgment from the query alone
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub query: String,
    pub model: GeminiModel,
    /// How many alternatives the model may weigh internally before answering
    pub comparison_budget: u32,
    pub credentials: JudgmentCredentials,
    pub timeout: Duration,
}

/// Conclusive judgment over retrieved candidates
#[derive(Debug, Clone)]
pub struct SelectionRequest {
    pub query: String,
    pub candidates: Vec<Candidate>,
    pub model: GeminiModel,
    pub credentials: JudgmentCredentials,
    pub timeout: Duration,
}
