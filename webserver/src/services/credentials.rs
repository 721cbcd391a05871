//! Environment backed credential source
//!
//! Keys are read from the process environment on every request. A `.env`
//! file from the current directory or its parents is loaded once when the
//! source is created; variables already set in the environment take
//! precedence over the file, and later edits to the file need a restart.
//!
//! - `GEMINI_API_KEY` (fallback `GOOGLE_AI_API_KEY`): judgment source key
//! - `GOOGLE_CSE_API_KEY`: Custom Search key
//! - `GOOGLE_CSE_ID`: Custom Search engine id

use async_trait::async_trait;

use shared::Credentials;
use crate::traits::CredentialSource;

/// Real credential source using environment variables
#[derive(Debug, Clone, Copy)]
pub struct RealCredentialSource;

impl RealCredentialSource {
    /// Judgment key names in lookup order
    pub const JUDGMENT_KEYS: &'static [&'static str] = &["GEMINI_API_KEY", "GOOGLE_AI_API_KEY"];
    pub const SEARCH_KEY: &'static str = "GOOGLE_CSE_API_KEY";
    pub const SEARCH_ENGINE_ID: &'static str = "GOOGLE_CSE_ID";

    pub fn new() -> Self {
        Self::init_env();
        Self
    }

    /// Load `.env` if present; already-set variables are left alone
    fn init_env() {
        let _ = dotenv::dotenv();
    }

    /// Build credentials from any variable lookup; blank values count as unset
    pub fn credentials_from<F>(lookup: F) -> Credentials
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let judgment = Self::JUDGMENT_KEYS.iter().find_map(|name| present(name));
        Credentials::new(judgment, present(Self::SEARCH_KEY), present(Self::SEARCH_ENGINE_ID))
    }
}

impl Default for RealCredentialSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialSource for RealCredentialSource {
    async fn credentials(&self) -> Credentials {
        Self::credentials_from(|name| std::env::var(name).ok())
    }
}
