//! User-editable configuration read once per resolution attempt

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Conclusive-path gate used when no valid threshold is configured
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Speculative-path gate used when no valid threshold is configured
pub const DEFAULT_PREDICTION_CONFIDENCE_THRESHOLD: f64 = 0.85;

pub const MIN_CANDIDATE_COUNT: u32 = 1;
pub const MAX_CANDIDATE_COUNT: u32 = 10;
pub const MIN_TIMEOUT_MS: u64 = 1_000;
pub const MAX_TIMEOUT_MS: u64 = 120_000;
pub const MAX_TRIGGER_LEN: usize = 10;

/// Generative models accepted by the judgment source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GeminiModel {
    #[default]
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,
    #[serde(rename = "gemini-2.0-flash")]
    Gemini20Flash,
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
}

impl GeminiModel {
    pub const ALL: [GeminiModel; 4] = [
        GeminiModel::Gemini15Flash,
        GeminiModel::Gemini15Pro,
        GeminiModel::Gemini20Flash,
        GeminiModel::Gemini25Flash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeminiModel::Gemini15Flash => "gemini-1.5-flash",
            GeminiModel::Gemini15Pro => "gemini-1.5-pro",
            GeminiModel::Gemini20Flash => "gemini-2.0-flash",
            GeminiModel::Gemini25Flash => "gemini-2.5-flash",
        }
    }
}

impl fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GeminiModel {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeminiModel::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| SharedError::invalid_config("model", s, "model is not in the allow-list"))
    }
}

/// Display preference, only consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// Search engine whose plain results page is the fallback destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
}

impl SearchEngine {
    pub fn results_endpoint(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search",
            SearchEngine::Bing => "https://www.bing.com/search",
        }
    }
}

/// Resolution settings
///
/// Thresholds are optional: an absent, non-numeric or non-finite threshold
/// falls back to the policy default instead of disabling its gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub trigger: String,
    pub candidate_count: u32,
    pub model: GeminiModel,
    pub timeout_ms: u64,
    #[serde(deserialize_with = "lenient_threshold", skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<f64>,
    #[serde(deserialize_with = "lenient_threshold", skip_serializing_if = "Option::is_none")]
    pub prediction_confidence_threshold: Option<f64>,
    pub theme: Theme,
    pub search_engine: SearchEngine,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trigger: "/d".to_string(),
            candidate_count: 5,
            model: GeminiModel::default(),
            timeout_ms: 10_000,
            confidence_threshold: None,
            prediction_confidence_threshold: None,
            theme: Theme::default(),
            search_engine: SearchEngine::default(),
        }
    }
}

impl Settings {
    /// Reject out-of-range values; nothing is clamped here
    pub fn validate(&self) -> SharedResult<()> {
        validate_trigger(&self.trigger)?;

        if !(MIN_CANDIDATE_COUNT..=MAX_CANDIDATE_COUNT).contains(&self.candidate_count) {
            return Err(SharedError::invalid_config(
                "candidateCount",
                self.candidate_count,
                format!("must be between {MIN_CANDIDATE_COUNT} and {MAX_CANDIDATE_COUNT}"),
            ));
        }

        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&self.timeout_ms) {
            return Err(SharedError::invalid_config(
                "timeoutMs",
                self.timeout_ms,
                format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS}"),
            ));
        }

        validate_threshold("confidenceThreshold", self.confidence_threshold)?;
        validate_threshold("predictionConfidenceThreshold", self.prediction_confidence_threshold)?;

        Ok(())
    }

    /// Gate for the conclusive (candidate selection) path
    pub fn effective_confidence_threshold(&self) -> f64 {
        effective_threshold(self.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD)
    }

    /// Gate for the speculative (prediction) path
    pub fn effective_prediction_confidence_threshold(&self) -> f64 {
        effective_threshold(
            self.prediction_confidence_threshold,
            DEFAULT_PREDICTION_CONFIDENCE_THRESHOLD,
        )
    }
}

fn validate_trigger(trigger: &str) -> SharedResult<()> {
    if trigger.is_empty() {
        return Err(SharedError::invalid_config("trigger", trigger, "must not be empty"));
    }
    if trigger.chars().count() > MAX_TRIGGER_LEN {
        return Err(SharedError::invalid_config(
            "trigger",
            trigger,
            format!("must be at most {MAX_TRIGGER_LEN} characters"),
        ));
    }
    if trigger.chars().any(char::is_whitespace) {
        return Err(SharedError::invalid_config("trigger", trigger, "must not contain whitespace"));
    }
    Ok(())
}

fn validate_threshold(field: &str, threshold: Option<f64>) -> SharedResult<()> {
    match threshold {
        Some(value) if value.is_finite() && !(0.0..=1.0).contains(&value) => Err(
            SharedError::invalid_config(field, value, "must be between 0.0 and 1.0"),
        ),
        _ => Ok(()),
    }
}

fn effective_threshold(configured: Option<f64>, default: f64) -> f64 {
    match configured {
        Some(value) if value.is_finite() => value,
        _ => default,
    }
}

/// Accept any JSON value; only numbers survive, everything else reads as unset
fn lenient_threshold<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}
