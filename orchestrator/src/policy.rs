//! Timing and confidence policy for one resolution attempt

use std::time::Duration;

use shared::{Judgment, Settings};

pub use shared::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_PREDICTION_CONFIDENCE_THRESHOLD};

/// Share of the timeout given to the speculative prediction
pub const PREDICTION_TIMEOUT_RATIO: f64 = 0.6;

/// Longest query, in characters, accepted for resolution
pub const MAX_QUERY_CHARS: usize = 1_000;

/// Budgets and gates derived from validated settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionPolicy {
    pub candidate_count: u32,
    /// Budget for candidate retrieval and for selection, each
    pub timeout: Duration,
    pub prediction_timeout: Duration,
    pub confidence_threshold: f64,
    pub prediction_confidence_threshold: f64,
}

impl ResolutionPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            candidate_count: settings.candidate_count,
            timeout: Duration::from_millis(settings.timeout_ms),
            prediction_timeout: prediction_timeout(settings.timeout_ms),
            confidence_threshold: settings.effective_confidence_threshold(),
            prediction_confidence_threshold: settings.effective_prediction_confidence_threshold(),
        }
    }

    /// Speculative gate, inclusive
    pub fn accepts_prediction(&self, judgment: &Judgment) -> bool {
        judgment.confidence >= self.prediction_confidence_threshold
    }

    /// Conclusive gate, inclusive
    pub fn accepts_selection(&self, judgment: &Judgment) -> bool {
        judgment.confidence >= self.confidence_threshold
    }
}

pub fn prediction_timeout(timeout_ms: u64) -> Duration {
    Duration::from_millis((timeout_ms as f64 * PREDICTION_TIMEOUT_RATIO).round() as u64)
}
