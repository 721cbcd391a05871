//! DirectWarp host process
//!
//! Serves the resolution endpoint used by the triggering context, the
//! settings API, and the `/search` presentation driver that either redirects
//! straight to a resolved URL or shows a short interstitial before falling
//! back to the normal search results page.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{CredentialSource, SettingsStore};

// Re-export service implementations
pub use services::{RealCredentialSource, RealSettingsStore};
