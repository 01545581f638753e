// src/client/mod.rs

use crate::errors::Result;
use crate::models::{GenerationResult, HealthStatus, ModelNameResult};

pub mod http;

pub use http::HttpEndpoint;

/// The calls the page makes against the summarization API.
///
/// Both UI calls fold every outcome (success, HTTP error status, transport
/// failure) into their result type, so callers never see a panic or an
/// `Err` from them.
pub trait PlsEndpoint: Send + Sync {
    /// Fetches the name of the model the API is serving.
    fn fetch_model_name(&self) -> impl std::future::Future<Output = ModelNameResult> + Send;

    /// Submits `text` for simplification and returns the summary with scores.
    fn submit_for_simplification(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = GenerationResult> + Send;

    /// Probes the API's health endpoint.
    fn check_health(&self) -> impl std::future::Future<Output = Result<HealthStatus>> + Send;
}
