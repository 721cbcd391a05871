//! Capability clients for query resolution
//!
//! Two external sources back the resolver: a candidate source that returns
//! ranked result URLs for a query, and a judgment source (a generative model)
//! that picks one URL with a confidence score, either speculatively from the
//! query alone or from a retrieved candidate list.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{ClientError, ClientResult};
pub use services::{CustomSearchSource, GeminiJudgmentSource};
pub use traits::*;
pub use types::*;
