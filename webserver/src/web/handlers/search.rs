//! Presentation driver: `/search?q=<raw query>`
//!
//! Without the trigger the request goes straight to the search engine. With
//! it, the stripped query is resolved: success redirects to the URL, failure
//! renders an interstitial that falls back to the engine's results page.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;
use url::Url;

use orchestrator::Resolver;
use shared::ResolutionOutcome;

use crate::core::presentation::{decide, render_interstitial, search_url, SearchDecision};
use crate::error::WebServerResult;
use crate::traits::{CredentialSource, SettingsStore};
use crate::webserver_impl::WebServer;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn search<R, S, K>(
    State(webserver): State<WebServer<R, S, K>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    match drive(&webserver, &params.q).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "❌ Search presentation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Search presentation failed").into_response()
        }
    }
}

async fn drive<R, S, K>(webserver: &WebServer<R, S, K>, raw_query: &str) -> WebServerResult<Response>
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    let settings = webserver.settings_store().load().await;

    let query = match decide(raw_query, &settings.trigger, settings.search_engine)? {
        SearchDecision::Passthrough { location } => return Ok(found(&location)),
        SearchDecision::Resolve { query } => query,
    };

    match webserver.resolve_with(&query, &settings).await {
        ResolutionOutcome::Success { url } => Ok(found(&url)),
        ResolutionOutcome::Failure { reason, message } => {
            let fallback = search_url(settings.search_engine, &query)?;
            let page = render_interstitial(&message, reason.recovery(), &fallback, settings.theme);
            Ok(Html(page).into_response())
        }
    }
}

/// 302 redirect; the location is re-serialized so it is always header-safe
fn found(location: &str) -> Response {
    let location = Url::parse(location)
        .map(String::from)
        .unwrap_or_else(|_| location.to_string());
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
