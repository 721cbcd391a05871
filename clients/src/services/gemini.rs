//! Judgment source backed by the Gemini generateContent API

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use shared::{GeminiModel, Judgment, JudgmentCredentials};
use crate::core::parser::{check_selection, extract_generated_text, judgment_from_text};
use crate::core::prompt::{build_prediction_prompt, build_selection_prompt};
use crate::error::{ClientError, ClientResult};
use crate::services::http::{check_status, transport_error, with_deadline};
use crate::traits::JudgmentSource;
use crate::types::{PredictionRequest, SelectionRequest};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini client producing URL judgments
#[derive(Debug, Clone)]
pub struct GeminiJudgmentSource {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiJudgmentSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_GEMINI_BASE_URL)
    }

    /// Point the client at another API root (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, model: GeminiModel) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "temperature": 0.2,
                "responseMimeType": "application/json"
            }
        })
    }

    /// Send one prompt and return the generated text
    async fn generate(
        &self,
        model: GeminiModel,
        credentials: &JudgmentCredentials,
        prompt: &str,
        timeout: Duration,
    ) -> ClientResult<String> {
        with_deadline(timeout, async {
            let response = self
                .client
                .post(self.endpoint(model))
                .header("x-goog-api-key", credentials.api_key.as_str())
                .json(&Self::request_body(prompt))
                .send()
                .await
                .map_err(|e| transport_error(e, timeout))?;

            let response = check_status(response).await?;

            let body: Value = response.json().await.map_err(|e| {
                if e.is_timeout() {
                    ClientError::timeout(timeout)
                } else {
                    ClientError::parse(format!("model response is not JSON: {}", e.without_url()))
                }
            })?;

            extract_generated_text(&body)
        })
        .await
    }
}

impl Default for GeminiJudgmentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JudgmentSource for GeminiJudgmentSource {
    async fn predict(&self, request: PredictionRequest) -> ClientResult<Judgment> {
        let prompt = build_prediction_prompt(&request.query, request.comparison_budget);
        let text = self
            .generate(request.model, &request.credentials, &prompt, request.timeout)
            .await?;

        let judgment = judgment_from_text(&text)?;
        tracing::debug!(confidence = judgment.confidence, model = %request.model, "Prediction parsed");
        Ok(judgment)
    }

    async fn select_best(&self, request: SelectionRequest) -> ClientResult<Judgment> {
        if request.candidates.is_empty() {
            return Err(ClientError::parse("selection requires at least one candidate"));
        }

        let prompt = build_selection_prompt(&request.query, &request.candidates);
        let text = self
            .generate(request.model, &request.credentials, &prompt, request.timeout)
            .await?;

        let judgment = check_selection(judgment_from_text(&text)?, &request.candidates)?;
        tracing::debug!(
            confidence = judgment.confidence,
            candidates = request.candidates.len(),
            model = %request.model,
            "Selection parsed"
        );
        Ok(judgment)
    }
}
