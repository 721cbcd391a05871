//! Test fixtures and data for orchestrator tests

use shared::{Candidate, Credentials, Settings};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const TRIGGER: &'static str = "/d";

    /// Test credentials
    pub const GEMINI_KEY: &'static str = "test-gemini-key";
    pub const CSE_KEY: &'static str = "test-cse-key";
    pub const CSE_ID: &'static str = "test-cse-id";

    pub const PREDICTED_URL: &'static str = "https://weather.com/weather/today/l/Tokyo";
    pub const SELECTED_URL: &'static str = "https://en.wikipedia.org/wiki/Rare_term";

    /// Both credential sets present
    pub fn full_credentials() -> Credentials {
        Credentials::new(
            Some(Self::GEMINI_KEY.to_string()),
            Some(Self::CSE_KEY.to_string()),
            Some(Self::CSE_ID.to_string()),
        )
    }

    /// Judgment key only; candidate retrieval cannot run
    pub fn judgment_only_credentials() -> Credentials {
        Credentials::new(Some(Self::GEMINI_KEY.to_string()), None, None)
    }

    /// Search key without the engine id
    pub fn partial_candidate_credentials() -> Credentials {
        Credentials::new(
            Some(Self::GEMINI_KEY.to_string()),
            Some(Self::CSE_KEY.to_string()),
            None,
        )
    }

    pub fn no_judgment_credentials() -> Credentials {
        Credentials::new(None, Some(Self::CSE_KEY.to_string()), Some(Self::CSE_ID.to_string()))
    }

    /// Default settings with explicit thresholds
    pub fn settings(confidence_threshold: f64, prediction_confidence_threshold: f64) -> Settings {
        Settings {
            trigger: Self::TRIGGER.to_string(),
            confidence_threshold: Some(confidence_threshold),
            prediction_confidence_threshold: Some(prediction_confidence_threshold),
            ..Settings::default()
        }
    }

    pub fn three_candidates() -> Vec<Candidate> {
        vec![
            Candidate::new(Self::SELECTED_URL)
                .with_title("Rare term - Wikipedia")
                .with_snippet("A rare obscure term"),
            Candidate::new("https://www.merriam-webster.com/dictionary/rare").with_title("Rare Definition"),
            Candidate::new("https://www.reddit.com/r/words/comments/rare_term"),
        ]
    }
}
