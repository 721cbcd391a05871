//! Service trait definitions for dependency injection
//!
//! Settings persistence and credential lookup are abstracted so the HTTP
//! layer can be tested with mocks.

use async_trait::async_trait;
use tokio::sync::watch;

use shared::{Credentials, Settings};
use crate::error::WebServerResult;

/// Persistent settings with change notification
#[mockall::automock]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current settings; never fails, defaults stand in for a missing file
    async fn load(&self) -> Settings;

    /// Validate, persist and publish new settings
    ///
    /// Invalid settings are rejected with `WebServerError::InvalidSettings`
    /// and leave the stored value untouched.
    async fn save(&self, settings: Settings) -> WebServerResult<()>;

    /// Drop stored settings and return to defaults
    ///
    /// Succeeds when nothing was stored. Subscribers see the defaults.
    async fn reset(&self) -> WebServerResult<Settings>;

    /// Receiver that observes every successful `save` and `reset`
    fn subscribe(&self) -> watch::Receiver<Settings>;
}

/// Secret lookup for the capability sources
#[mockall::automock]
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Read credentials fresh for one resolution attempt
    async fn credentials(&self) -> Credentials;
}
