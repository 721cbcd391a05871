//! Query resolution orchestrator
//!
//! Turns a stripped search query into a single destination URL. A speculative
//! prediction races a candidate retrieval; a confident prediction wins early,
//! otherwise the retrieved candidates go through a conclusive selection gated
//! by a confidence threshold. Every failure comes back as a
//! [`ResolutionOutcome::Failure`](shared::ResolutionOutcome) value.

pub mod error;
pub mod orchestrator;
pub mod policy;
pub mod traits;
pub mod trigger;

// Re-export commonly used types
pub use error::{ResolveError, ResolveResult};
pub use orchestrator::Orchestrator;
pub use policy::ResolutionPolicy;
pub use traits::{MockResolver, Resolver};
pub use trigger::detect;
