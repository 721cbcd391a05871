//! Request handlers
//!
//! Handlers are generic over the injected services and receive the whole
//! `WebServer` as axum state.

pub mod api;
pub mod search;
