//! Resolution orchestrator
//!
//! One `resolve` call runs a short-lived workflow:
//!
//! 1. validate the query and settings, check credentials (no network)
//! 2. spawn candidate retrieval, then await a speculative prediction inline
//! 3. accept a confident prediction immediately, detaching the candidate task
//! 4. otherwise await the candidates and ask the judgment source to pick one
//! 5. gate the selection on the confidence threshold
//!
//! Each external call happens at most once and nothing is retried.

use std::sync::Arc;

use async_trait::async_trait;

use clients::{CandidateQuery, CandidateSource, ClientError, JudgmentSource, PredictionRequest, SelectionRequest};
use shared::{attempt_debug, attempt_error, attempt_info, attempt_warn, AttemptId, Credentials, ResolutionOutcome, Settings};

use crate::{
    error::{ResolveError, ResolveResult},
    policy::{ResolutionPolicy, MAX_QUERY_CHARS},
    traits::Resolver,
};

/// Races a speculative prediction against candidate retrieval and selection
pub struct Orchestrator<C, J>
where
    C: CandidateSource + 'static,
    J: JudgmentSource + 'static,
{
    /// Shared so the candidate call can move into a spawned task
    candidates: Arc<C>,
    judgment: Arc<J>,
}

impl<C, J> Orchestrator<C, J>
where
    C: CandidateSource + 'static,
    J: JudgmentSource + 'static,
{
    /// Create new orchestrator with injected sources
    pub fn new(candidates: C, judgment: J) -> Self {
        Self::from_shared(Arc::new(candidates), Arc::new(judgment))
    }

    pub fn from_shared(candidates: Arc<C>, judgment: Arc<J>) -> Self {
        Self { candidates, judgment }
    }

    async fn run(
        &self,
        attempt: &AttemptId,
        query: &str,
        settings: &Settings,
        credentials: &Credentials,
    ) -> ResolveResult<String> {
        let query = validate_query(query)?;
        settings.validate()?;

        let judgment_credentials = credentials
            .judgment()
            .ok_or(ResolveError::MissingJudgmentCredential)?;
        let policy = ResolutionPolicy::from_settings(settings);

        // Racing: candidates first so both calls start in the same turn
        let candidate_task = match credentials.candidate() {
            Some(candidate_credentials) => {
                let source = Arc::clone(&self.candidates);
                let request = CandidateQuery {
                    query: query.to_string(),
                    count: policy.candidate_count,
                    credentials: candidate_credentials,
                    timeout: policy.timeout,
                };
                let attempt = *attempt;
                Some(tokio::spawn(async move {
                    let result = source.fetch_candidates(request).await;
                    if let Err(error) = &result {
                        attempt_debug!(attempt, kind = %error.kind(), "Candidate retrieval failed");
                    }
                    result
                }))
            }
            None => {
                attempt_debug!(attempt, "🔎 Search credentials not configured, prediction only");
                None
            }
        };

        let prediction = self
            .judgment
            .predict(PredictionRequest {
                query: query.to_string(),
                model: settings.model,
                comparison_budget: policy.candidate_count,
                credentials: judgment_credentials.clone(),
                timeout: policy.prediction_timeout,
            })
            .await;

        match prediction {
            Ok(judgment) if policy.accepts_prediction(&judgment) => {
                attempt_info!(
                    attempt,
                    confidence = judgment.confidence,
                    threshold = policy.prediction_confidence_threshold,
                    "⚡ Prediction accepted early"
                );
                // Dropping the handle detaches the candidate task; its result is discarded
                return Ok(judgment.url);
            }
            Ok(judgment) => {
                attempt_debug!(
                    attempt,
                    confidence = judgment.confidence,
                    threshold = policy.prediction_confidence_threshold,
                    "Prediction below threshold"
                );
            }
            Err(error) => {
                attempt_debug!(attempt, kind = %error.kind(), "Prediction failed: {}", error);
            }
        }

        let candidate_task = candidate_task.ok_or(ResolveError::MissingCandidateCredential)?;
        let candidates = match candidate_task.await {
            Ok(result) => result.map_err(ResolveError::candidate_source)?,
            Err(join_error) => {
                attempt_error!(attempt, error = %join_error, "❌ Candidate retrieval task did not complete");
                return Err(ResolveError::candidate_source(ClientError::network(format!(
                    "candidate retrieval task failed: {join_error}"
                ))));
            }
        };

        if candidates.is_empty() {
            return Err(ResolveError::NoCandidates);
        }
        attempt_debug!(attempt, count = candidates.len(), "📋 Selecting among candidates");

        let selection = self
            .judgment
            .select_best(SelectionRequest {
                query: query.to_string(),
                candidates,
                model: settings.model,
                credentials: judgment_credentials,
                timeout: policy.timeout,
            })
            .await
            .map_err(ResolveError::judgment_source)?;

        if !policy.accepts_selection(&selection) {
            return Err(ResolveError::LowConfidence {
                confidence: selection.confidence,
                threshold: policy.confidence_threshold,
            });
        }

        Ok(selection.url)
    }
}

/// Trimmed query, rejected when empty or longer than `MAX_QUERY_CHARS`
fn validate_query(query: &str) -> ResolveResult<&str> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ResolveError::invalid_query("query is empty"));
    }

    let length = query.chars().count();
    if length > MAX_QUERY_CHARS {
        return Err(ResolveError::invalid_query(format!(
            "query is {length} characters, the limit is {MAX_QUERY_CHARS}"
        )));
    }

    Ok(query)
}

#[async_trait]
impl<C, J> Resolver for Orchestrator<C, J>
where
    C: CandidateSource + 'static,
    J: JudgmentSource + 'static,
{
    async fn resolve(&self, query: &str, settings: &Settings, credentials: &Credentials) -> ResolutionOutcome {
        let attempt = AttemptId::new();
        attempt_debug!(attempt, model = %settings.model, "🎯 Resolving query");

        match self.run(&attempt, query, settings, credentials).await {
            Ok(url) => {
                attempt_info!(attempt, url = %url, "✅ Resolved");
                ResolutionOutcome::success(url)
            }
            Err(error) => {
                attempt_warn!(attempt, reason = error.reason().code(), "⚠️ Resolution failed: {}", error);
                error.into_outcome()
            }
        }
    }
}
