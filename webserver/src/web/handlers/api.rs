//! REST API handlers
//!
//! Resolution endpoint for the triggering context plus settings and status.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use orchestrator::Resolver;
use shared::messages::{CredentialStatus, StatusResponse};
use shared::{FailureReason, ResolveRequest, ResolveResponse, Settings};

use crate::error::WebServerError;
use crate::traits::{CredentialSource, SettingsStore};
use crate::webserver_impl::WebServer;

/// Resolve a stripped query; always answers 200 with `{ok, ...}`
pub async fn resolve<R, S, K>(
    State(webserver): State<WebServer<R, S, K>>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Json<ResolveResponse>
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Malformed resolve request");
            return Json(ResolveResponse::failed(
                r#"Request body must be {"query": string}"#,
                FailureReason::InvalidQuery.code(),
            ));
        }
    };

    let settings = webserver.settings_store().load().await;
    let outcome = webserver.resolve_with(&request.query, &settings).await;
    Json(ResolveResponse::from(outcome))
}

pub async fn get_settings<R, S, K>(State(webserver): State<WebServer<R, S, K>>) -> Json<Settings>
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    Json(webserver.settings_store().load().await)
}

/// Validate and store settings; 400 with the validation message when rejected
pub async fn put_settings<R, S, K>(
    State(webserver): State<WebServer<R, S, K>>,
    payload: Result<Json<Settings>, JsonRejection>,
) -> Response
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    let settings = match payload {
        Ok(Json(settings)) => settings,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match webserver.settings_store().save(settings.clone()).await {
        Ok(()) => {
            info!(model = %settings.model, timeout_ms = settings.timeout_ms, "⚙️ Settings saved");
            Json(settings).into_response()
        }
        Err(WebServerError::InvalidSettings(e)) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e) => {
            error!(error = %e, "❌ Failed to save settings");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Forget stored settings and answer with the defaults now in effect
pub async fn reset_settings<R, S, K>(State(webserver): State<WebServer<R, S, K>>) -> Response
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    match webserver.settings_store().reset().await {
        Ok(settings) => {
            info!("⚙️ Settings reset to defaults");
            Json(settings).into_response()
        }
        Err(e) => {
            error!(error = %e, "❌ Failed to reset settings");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Version and which credentials are configured, never their values
pub async fn status<R, S, K>(State(webserver): State<WebServer<R, S, K>>) -> Json<StatusResponse>
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    let credentials = webserver.credential_source().credentials().await;

    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        credentials: CredentialStatus::from(&credentials),
    })
}

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
