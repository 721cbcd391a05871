//! Shared types for the DirectWarp query resolution system
//!
//! Contains the data model that crosses crate boundaries: settings,
//! credentials, candidates, judgments, resolution outcomes and the
//! request/response messages exchanged with the triggering context.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{ResolveRequest, ResolveResponse};
