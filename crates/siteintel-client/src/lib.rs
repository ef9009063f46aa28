//! # siteintel-client - Analysis Service Client
//!
//! Outbound plumbing to the remote analysis service. Every operation is a single
//! request/response exchange with no retry or backoff.
//!
//! Depends on [`siteintel_core`] for the data model and error handling.
//!
//! ## Public API
//!
//! ### Service Trait
//! - [`AnalysisService`] - `analyze_website` + `converse`, Send futures for spawning
//! - [`LocalAnalysisService`] - the non-Send variant generated alongside it
//!
//! ### Backends
//! - [`HttpApiClient`] - reqwest client with bearer authentication
//! - [`DemoApiClient`] - fabricated in-memory responses for offline demos
//! - [`ApiBackend`] - explicit live/demo switch selected from configuration
//! - [`ApiMode`] - the configuration value behind that switch

pub mod backend;
pub mod demo;
pub mod http;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{ApiBackend, ApiMode};
pub use demo::DemoApiClient;
pub use http::HttpApiClient;
pub use service::{AnalysisService, LocalAnalysisService};
