//! Common test utilities and infrastructure
//!
//! Scripted capability sources with delays and call counters, plus fixtures
//! shared across the orchestrator test suites.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::{OrchestratorBuilder, ScriptedCandidateSource, ScriptedJudgmentSource, TestHelpers};
