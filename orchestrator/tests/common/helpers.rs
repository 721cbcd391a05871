//! Scripted capability sources and builder helpers
//!
//! The scripted sources sleep for a configured delay before answering and
//! count calls with atomics, so tests can observe ordering, budgets, and
//! work that keeps running after the orchestrator has already answered.
//! Mocks from `mockall` are used where a test only needs call counts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use clients::{
    CandidateQuery, CandidateSource, ClientError, ClientResult, JudgmentSource, PredictionRequest,
    SelectionRequest,
};
use orchestrator::{Orchestrator, Resolver};
use shared::{Candidate, Credentials, Judgment, ResolutionOutcome, Settings};

use super::fixtures::TestFixtures;

/// Candidate source answering with a fixed result after a delay
#[derive(Clone)]
pub struct ScriptedCandidateSource {
    delay: Duration,
    result: ClientResult<Vec<Candidate>>,
    panics: bool,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<CandidateQuery>>>,
}

impl ScriptedCandidateSource {
    pub fn returning(candidates: Vec<Candidate>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(candidates),
            panics: false,
            calls: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(error: ClientError) -> Self {
        Self {
            result: Err(error),
            ..Self::returning(Vec::new())
        }
    }

    pub fn panicking() -> Self {
        Self {
            panics: true,
            ..Self::returning(Vec::new())
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Calls that ran to the end of their delay
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CandidateQuery> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CandidateSource for ScriptedCandidateSource {
    async fn fetch_candidates(&self, request: CandidateQuery) -> ClientResult<Vec<Candidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);

        tokio::time::sleep(self.delay).await;
        if self.panics {
            panic!("scripted candidate source panic");
        }

        self.completed.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Judgment source with separately scripted predict and select answers
#[derive(Clone)]
pub struct ScriptedJudgmentSource {
    prediction_delay: Duration,
    prediction: ClientResult<Judgment>,
    selection_delay: Duration,
    selection: ClientResult<Judgment>,
    predict_calls: Arc<AtomicUsize>,
    select_calls: Arc<AtomicUsize>,
    last_prediction: Arc<Mutex<Option<PredictionRequest>>>,
    last_selection: Arc<Mutex<Option<SelectionRequest>>>,
}

impl ScriptedJudgmentSource {
    pub fn new() -> Self {
        Self {
            prediction_delay: Duration::ZERO,
            prediction: Err(ClientError::timeout(Duration::from_millis(6_000))),
            selection_delay: Duration::ZERO,
            selection: Err(ClientError::parse("selection not scripted")),
            predict_calls: Arc::new(AtomicUsize::new(0)),
            select_calls: Arc::new(AtomicUsize::new(0)),
            last_prediction: Arc::new(Mutex::new(None)),
            last_selection: Arc::new(Mutex::new(None)),
        }
    }

    pub fn predicting(mut self, url: &str, confidence: f64) -> Self {
        self.prediction = Ok(Judgment::new(url, confidence));
        self
    }

    pub fn prediction_failing(mut self, error: ClientError) -> Self {
        self.prediction = Err(error);
        self
    }

    pub fn prediction_after(mut self, delay: Duration) -> Self {
        self.prediction_delay = delay;
        self
    }

    pub fn selecting(mut self, url: &str, confidence: f64) -> Self {
        self.selection = Ok(Judgment::new(url, confidence));
        self
    }

    pub fn selection_failing(mut self, error: ClientError) -> Self {
        self.selection = Err(error);
        self
    }

    pub fn selection_after(mut self, delay: Duration) -> Self {
        self.selection_delay = delay;
        self
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn select_calls(&self) -> usize {
        self.select_calls.load(Ordering::SeqCst)
    }

    pub fn last_prediction(&self) -> Option<PredictionRequest> {
        self.last_prediction.lock().unwrap().clone()
    }

    pub fn last_selection(&self) -> Option<SelectionRequest> {
        self.last_selection.lock().unwrap().clone()
    }
}

impl Default for ScriptedJudgmentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JudgmentSource for ScriptedJudgmentSource {
    async fn predict(&self, request: PredictionRequest) -> ClientResult<Judgment> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prediction.lock().unwrap() = Some(request);
        tokio::time::sleep(self.prediction_delay).await;
        self.prediction.clone()
    }

    async fn select_best(&self, request: SelectionRequest) -> ClientResult<Judgment> {
        self.select_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_selection.lock().unwrap() = Some(request);
        tokio::time::sleep(self.selection_delay).await;
        self.selection.clone()
    }
}

pub type TestOrchestrator = Orchestrator<ScriptedCandidateSource, ScriptedJudgmentSource>;

/// Builder for orchestrators over scripted sources
///
/// The sources are cloned into the orchestrator; the clones share counters
/// with the copies kept by the test.
pub struct OrchestratorBuilder {
    candidates: ScriptedCandidateSource,
    judgment: ScriptedJudgmentSource,
}

impl OrchestratorBuilder {
    pub fn new() -> Self {
        Self {
            candidates: ScriptedCandidateSource::returning(TestFixtures::three_candidates()),
            judgment: ScriptedJudgmentSource::new(),
        }
    }

    pub fn with_candidates(mut self, candidates: ScriptedCandidateSource) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn with_judgment(mut self, judgment: ScriptedJudgmentSource) -> Self {
        self.judgment = judgment;
        self
    }

    /// Build and hand back the observable sources alongside the orchestrator
    pub fn build(self) -> (TestOrchestrator, ScriptedCandidateSource, ScriptedJudgmentSource) {
        let orchestrator = Orchestrator::new(self.candidates.clone(), self.judgment.clone());
        (orchestrator, self.candidates, self.judgment)
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Resolve with default thresholds (0.5 / 0.85) and full credentials
    pub async fn resolve<R: Resolver>(resolver: &R, query: &str) -> ResolutionOutcome {
        resolver
            .resolve(query, &TestFixtures::settings(0.5, 0.85), &TestFixtures::full_credentials())
            .await
    }

    pub async fn resolve_with<R: Resolver>(
        resolver: &R,
        query: &str,
        settings: &Settings,
        credentials: &Credentials,
    ) -> ResolutionOutcome {
        resolver.resolve(query, settings, credentials).await
    }

    pub fn assert_success(outcome: &ResolutionOutcome, expected_url: &str) {
        assert_eq!(outcome, &ResolutionOutcome::success(expected_url), "unexpected outcome");
    }

    pub fn assert_failure_code(outcome: &ResolutionOutcome, expected_code: &str) {
        let reason = outcome
            .reason()
            .unwrap_or_else(|| panic!("expected failure {expected_code}, got {outcome:?}"));
        assert_eq!(reason.code(), expected_code, "unexpected outcome {outcome:?}");
    }
}
