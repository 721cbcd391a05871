//! Host status report

use serde::{Deserialize, Serialize};

use crate::types::Credentials;

/// Which credentials are configured; booleans only
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CredentialStatus {
    pub judgment: bool,
    pub candidate: bool,
}

impl From<&Credentials> for CredentialStatus {
    fn from(credentials: &Credentials) -> Self {
        Self {
            judgment: credentials.has_judgment(),
            candidate: credentials.has_candidate(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusResponse {
    pub version: String,
    pub credentials: CredentialStatus,
}
