//! Service implementations

pub mod credentials;
pub mod settings_store;

#[cfg(test)]
pub mod tests;

pub use credentials::*;
pub use settings_store::*;
