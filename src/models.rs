// src/models.rs
use crate::grading::Metric;
use serde::{Deserialize, Serialize};

/// Minimum number of characters accepted for simplification.
pub const MIN_INPUT_CHARS: usize = 100;

/// Body of `POST /generate_pls`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub text: String,
}

/// Readability scores for one text. Any score may be absent (blank state).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricSet {
    #[serde(rename = "CLI", default)]
    pub cli: Option<f64>,
    #[serde(rename = "FRE", default)]
    pub fre: Option<f64>,
    #[serde(rename = "GFI", default)]
    pub gfi: Option<f64>,
    #[serde(rename = "SMOG", default)]
    pub smog: Option<f64>,
    #[serde(rename = "FKGL", default)]
    pub fkgl: Option<f64>,
    #[serde(rename = "DCRS", default)]
    pub dcrs: Option<f64>,
}

impl MetricSet {
    /// All six metrics absent.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Cli => self.cli,
            Metric::Fre => self.fre,
            Metric::Gfi => self.gfi,
            Metric::Smog => self.smog,
            Metric::Fkgl => self.fkgl,
            Metric::Dcrs => self.dcrs,
        }
    }

    pub fn is_blank(&self) -> bool {
        Metric::ROWS.iter().all(|m| self.get(*m).is_none())
    }
}

/// Scores for the submitted text and for the generated summary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScorePair {
    pub original: MetricSet,
    pub generated: MetricSet,
}

/// Successful body of `POST /generate_pls`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Generation {
    #[serde(rename = "pls")]
    pub simplified_text: String,
    pub scores: ScorePair,
}

/// Where a failure came from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Rejected locally before any network call.
    Validation,
    /// The API answered with a non-success status.
    Http,
    /// No usable response reached us.
    Transport,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: FailureKind,
    pub status_label: String,
    pub message: String,
}

impl Failure {
    pub fn validation(status_label: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: FailureKind::Validation, status_label: status_label.into(), message: message.into() }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self { kind: FailureKind::Http, status_label: status.to_string(), message: message.into() }
    }

    pub fn transport(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: FailureKind::Transport, status_label: name.into(), message: message.into() }
    }

    /// The synthetic failure for input shorter than [`MIN_INPUT_CHARS`].
    pub fn input_too_short() -> Self {
        Self::validation(
            "Invalid Input",
            format!("Input must be at least {} characters.", MIN_INPUT_CHARS),
        )
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.status_label, self.message)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationResult {
    Success(Generation),
    Failure(Failure),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ModelNameResult {
    Loaded(String),
    Failed(Failure),
}

/// Decoded body of the API's `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}
