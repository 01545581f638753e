// src/client/http.rs

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Instant;

use crate::client::PlsEndpoint;
use crate::config::AppConfig;
use crate::errors::{PlsError, Result};
use crate::models::{
    Failure, Generation, GenerationRequest, GenerationResult, HealthStatus, ModelNameResult,
};

const MODEL_NAME_PATH: &str = "/get_model_name";
const GENERATE_PATH: &str = "/generate_pls";
const HEALTH_PATH: &str = "/health";

/// [`PlsEndpoint`] over HTTP.
pub struct HttpEndpoint {
    client: Client,
    api_base: String,
}

impl HttpEndpoint {
    /// Creates a new `HttpEndpoint` sharing an existing client.
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { client, api_base }
    }

    /// Builds the client from the application config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        Ok(Self::new(builder.build()?, config.api_base.clone()))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl PlsEndpoint for HttpEndpoint {
    async fn fetch_model_name(&self) -> ModelNameResult {
        let url = self.url(MODEL_NAME_PATH);
        log::debug!("📡 Fetching model name from {}", url);

        let start = Instant::now();
        let sent = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await;

        match read_outcome::<String>(sent).await {
            Ok(name) => {
                log::info!("📥 Model name '{}' ({}ms)", name, start.elapsed().as_millis());
                ModelNameResult::Loaded(name)
            }
            Err(failure) => {
                log::warn!("Model name request failed: {} {}", failure.status_label, failure.message);
                ModelNameResult::Failed(failure)
            }
        }
    }

    async fn submit_for_simplification(&self, text: &str) -> GenerationResult {
        let url = self.url(GENERATE_PATH);
        log::info!("📡 Submitting {} characters to {}", text.chars().count(), url);

        let body = GenerationRequest { text: text.to_string() };
        let start = Instant::now();
        let sent = self.client.post(&url).json(&body).send().await;

        let outcome = read_outcome::<Generation>(sent).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(generation) => {
                log::info!("📥 Summary received ({}ms)", latency_ms);
                GenerationResult::Success(generation)
            }
            Err(failure) => {
                log::warn!(
                    "Generation failed after {}ms: {} {}",
                    latency_ms, failure.status_label, failure.message
                );
                GenerationResult::Failure(failure)
            }
        }
    }

    async fn check_health(&self) -> Result<HealthStatus> {
        let resp = self.client.get(self.url(HEALTH_PATH)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(PlsError::ApiError { status: status.as_u16(), body });
        }
        Ok(resp.json().await?)
    }
}

/// Folds a sent request into either the decoded success body or a failure.
async fn read_outcome<T: DeserializeOwned>(
    sent: std::result::Result<Response, reqwest::Error>,
) -> std::result::Result<T, Failure> {
    let resp = sent.map_err(|e| transport_failure(&e))?;
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Failure::http(status.as_u16(), error_detail(status, &body)));
    }

    resp.json::<T>().await.map_err(|e| transport_failure(&e))
}

/// Pulls the human-readable message out of an error response body.
///
/// The API answers with `{"detail": ...}` where `detail` is a string, an
/// object carrying `message`, or a list of validation errors with `msg`.
pub fn error_detail(status: StatusCode, body: &str) -> String {
    let fallback = || {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            trimmed.to_string()
        }
    };

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    match value.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Object(obj)) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| Value::Object(obj.clone()).to_string()),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                Value::Array(items.clone()).to_string()
            } else {
                messages.join("; ")
            }
        }
        Some(other) => other.to_string(),
        None => fallback(),
    }
}

/// Short name for a transport-level error, shown where a status code would be.
pub fn transport_error_name(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "TimeoutError"
    } else if err.is_connect() {
        "ConnectError"
    } else if err.is_decode() {
        "DecodeError"
    } else if err.is_body() {
        "BodyError"
    } else if err.is_request() {
        "RequestError"
    } else {
        "TransportError"
    }
}

fn transport_failure(err: &reqwest::Error) -> Failure {
    // reqwest's top-level message rarely names the cause, so walk the chain.
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    Failure::transport(transport_error_name(err), message)
}
