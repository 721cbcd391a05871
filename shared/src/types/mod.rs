//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod credentials;
pub mod resolution;
pub mod settings;

pub use credentials::*;
pub use resolution::*;
pub use settings::*;

/// Identifier for a single resolution attempt, used to correlate log lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(Uuid);

impl AttemptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First block of the UUID is enough to tell attempts apart in logs
        let simple = self.0.simple().to_string();
        write!(f, "attempt_{}", &simple[..8])
    }
}

/// True when `candidate` parses as an absolute URL with an http or https scheme and a host
pub fn is_http_url(candidate: &str) -> bool {
    match url::Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_id_display() {
        let id = AttemptId::new();
        let shown = id.to_string();
        assert!(shown.starts_with("attempt_"));
        assert_eq!(shown.len(), "attempt_".len() + 8);
        assert_ne!(AttemptId::new(), id);
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://www.example.com/path?q=1"));
        assert!(is_http_url("http://example.org"));
        assert!(!is_http_url("ftp://example.org/file"));
        assert!(!is_http_url("javascript:alert(1)"));
        assert!(!is_http_url("/relative/path"));
        assert!(!is_http_url("www.example.com"));
        assert!(!is_http_url(""));
    }
}
