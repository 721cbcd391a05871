//! Test helper utilities for webserver integration tests
//!
//! Routers are exercised in-process with `tower::ServiceExt::oneshot`; no
//! socket is bound.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use orchestrator::MockResolver;
use shared::{Credentials, ResolutionOutcome, Settings};
use webserver::traits::{MockCredentialSource, MockSettingsStore};
use webserver::WebServer;

pub type TestServer = WebServer<MockResolver, MockSettingsStore, MockCredentialSource>;

/// Settings store that always loads `settings`
pub fn settings_store_with(settings: Settings) -> MockSettingsStore {
    let mut store = MockSettingsStore::new();
    store.expect_load().returning(move || settings.clone());
    store
}

pub fn credential_source_with(credentials: Credentials) -> MockCredentialSource {
    let mut source = MockCredentialSource::new();
    source.expect_credentials().returning(move || credentials.clone());
    source
}

/// Resolver answering every query with `outcome`
pub fn resolver_returning(outcome: ResolutionOutcome) -> MockResolver {
    let mut resolver = MockResolver::new();
    resolver
        .expect_resolve()
        .returning(move |_, _, _| outcome.clone());
    resolver
}

/// Resolver that fails the test if it is ever called
pub fn resolver_never_called() -> MockResolver {
    let mut resolver = MockResolver::new();
    resolver.expect_resolve().times(0);
    resolver
}

pub fn test_server(resolver: MockResolver, settings: Settings, credentials: Credentials) -> TestServer {
    WebServer::new(resolver, settings_store_with(settings), credential_source_with(credentials))
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send one request and collect status, headers and body text
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send_json(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(router, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub fn location(headers: &HeaderMap) -> &str {
    headers
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
}
