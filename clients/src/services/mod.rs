//! Capability source implementations

mod http;

pub mod custom_search;
pub mod gemini;

#[cfg(test)]
pub mod tests;

pub use custom_search::*;
pub use gemini::*;
