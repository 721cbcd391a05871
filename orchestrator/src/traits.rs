//! Trait definitions with mockall annotations for testing

use async_trait::async_trait;

use shared::{Credentials, ResolutionOutcome, Settings};

/// Query resolution seen from the host
///
/// Implementations never fail: every problem is reported as
/// `ResolutionOutcome::Failure`.
#[mockall::automock]
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve an already-stripped query to one destination URL
    async fn resolve(&self, query: &str, settings: &Settings, credentials: &Credentials) -> ResolutionOutcome;
}
