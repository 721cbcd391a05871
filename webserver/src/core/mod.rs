//! Presentation logic for the search driver

pub mod presentation;

pub use presentation::{decide, render_interstitial, search_url, SearchDecision, FALLBACK_DELAY_MS};
