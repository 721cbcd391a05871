//! Main webserver implementation
//!
//! The WebServer owns the resolver and the injected services and hands a
//! clone of itself to axum as router state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use orchestrator::Resolver;
use shared::{logging, ResolutionOutcome, Settings};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::{CredentialSource, SettingsStore};
use crate::web::handlers::{api, search};

/// Main webserver struct with dependency injection
pub struct WebServer<R, S, K>
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    resolver: Arc<R>,
    settings: Arc<S>,
    credentials: Arc<K>,
}

// Manual impl: only the Arcs are cloned, the services need not be Clone
impl<R, S, K> Clone for WebServer<R, S, K>
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            settings: Arc::clone(&self.settings),
            credentials: Arc::clone(&self.credentials),
        }
    }
}

impl<R, S, K> WebServer<R, S, K>
where
    R: Resolver + 'static,
    S: SettingsStore + 'static,
    K: CredentialSource + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(resolver: R, settings: S, credentials: K) -> Self {
        Self {
            resolver: Arc::new(resolver),
            settings: Arc::new(settings),
            credentials: Arc::new(credentials),
        }
    }

    pub fn settings_store(&self) -> &S {
        &self.settings
    }

    pub fn credential_source(&self) -> &K {
        &self.credentials
    }

    /// One resolution attempt; credentials are read fresh and never leave this call
    pub async fn resolve_with(&self, query: &str, settings: &Settings) -> ResolutionOutcome {
        let credentials = self.credentials.credentials().await;
        self.resolver.resolve(query, settings, &credentials).await
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Triggering context
            .route("/api/resolve", post(api::resolve::<R, S, K>))
            // Configuration surface
            .route(
                "/api/settings",
                get(api::get_settings::<R, S, K>)
                    .put(api::put_settings::<R, S, K>)
                    .delete(api::reset_settings::<R, S, K>),
            )
            .route("/api/status", get(api::status::<R, S, K>))
            // Presentation driver
            .route("/search", get(search::search::<R, S, K>))
            // Health check
            .route("/health", get(api::health))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self, address: SocketAddr) -> WebServerResult<()> {
        let router = self.build_router();
        let settings_watch = tokio::spawn(log_settings_changes(self.settings.subscribe()));

        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|e| WebServerError::ServerStartup {
                address: address.to_string(),
                message: e.to_string(),
            })?;

        info!("🌐 Web server listening on http://{}", address);
        info!("🔎 Search driver available at http://{}/search?q=", address);

        let served = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        settings_watch.abort();
        served.map_err(WebServerError::from)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error("Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}

async fn log_settings_changes(mut receiver: watch::Receiver<Settings>) {
    while receiver.changed().await.is_ok() {
        let settings = receiver.borrow_and_update().clone();
        info!(
            trigger = %settings.trigger,
            model = %settings.model,
            candidate_count = settings.candidate_count,
            timeout_ms = settings.timeout_ms,
            "⚙️ Settings changed"
        );
    }
}
