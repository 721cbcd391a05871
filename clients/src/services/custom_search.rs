//! Candidate source backed by the Google Custom Search JSON API

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;

use shared::{is_http_url, Candidate, MAX_CANDIDATE_COUNT, MIN_CANDIDATE_COUNT};
use crate::error::{ClientError, ClientResult};
use crate::services::http::{check_status, transport_error, with_deadline};
use crate::traits::CandidateSource;
use crate::types::CandidateQuery;

pub const DEFAULT_CUSTOM_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Custom Search client returning ranked result links
#[derive(Debug, Clone)]
pub struct CustomSearchSource {
    client: reqwest::Client,
    endpoint: String,
}

impl CustomSearchSource {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_CUSTOM_SEARCH_ENDPOINT)
    }

    /// Point the client at another endpoint (tests, proxies)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Provider accepts 1..=10 results per request
    pub fn clamp_count(count: u32) -> u32 {
        count.clamp(MIN_CANDIDATE_COUNT, MAX_CANDIDATE_COUNT)
    }

    /// Keep items with an absolute http(s) link, in provider order
    fn parse_items(body: &Value) -> ClientResult<Vec<Candidate>> {
        let items = match body.get("items") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(ClientError::parse("search response `items` is not a list")),
        };

        let candidates = items
            .iter()
            .filter_map(|item| {
                let link = item.get("link").and_then(Value::as_str)?;
                if !is_http_url(link) {
                    return None;
                }
                Some(Candidate {
                    url: link.to_string(),
                    title: item.get("title").and_then(Value::as_str).map(str::to_string),
                    snippet: item.get("snippet").and_then(Value::as_str).map(str::to_string),
                })
            })
            .collect();

        Ok(candidates)
    }
}

impl Default for CustomSearchSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CandidateSource for CustomSearchSource {
    async fn fetch_candidates(&self, request: CandidateQuery) -> ClientResult<Vec<Candidate>> {
        let timeout = request.timeout;
        let num = Self::clamp_count(request.count).to_string();

        with_deadline(timeout, async {
            let response = self
                .client
                .get(&self.endpoint)
                .header(ACCEPT, "application/json")
                .query(&[
                    ("key", request.credentials.api_key.as_str()),
                    ("cx", request.credentials.engine_id.as_str()),
                    ("q", request.query.as_str()),
                    ("num", num.as_str()),
                ])
                .send()
                .await
                .map_err(|e| transport_error(e, timeout))?;

            let response = check_status(response).await?;

            let body: Value = response.json().await.map_err(|e| {
                if e.is_timeout() {
                    ClientError::timeout(timeout)
                } else {
                    ClientError::parse(format!("search response is not JSON: {}", e.without_url()))
                }
            })?;

            let candidates = Self::parse_items(&body)?;
            tracing::debug!(count = candidates.len(), requested = %num, "Custom search returned candidates");
            Ok(candidates)
        })
        .await
    }
}
