//! Message types exchanged with the triggering context
//!
//! - `resolve`: the inbound resolution request and its `{ ok, ... }` reply
//! - `status`: host capability report (never carries secrets)

pub mod resolve;
pub mod status;

pub use resolve::{ResolveRequest, ResolveResponse};
pub use status::{CredentialStatus, StatusResponse};
