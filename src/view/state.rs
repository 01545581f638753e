// src/view/state.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{
    Failure, GenerationResult, MIN_INPUT_CHARS, ModelNameResult, ScorePair,
};

pub const GENERATE_LABEL: &str = "Generate Summary";
pub const GENERATING_LABEL: &str = "Generating...";

/// What the intro banner shows about the served model.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Banner {
    Loading,
    Loaded(String),
    Failed(Failure),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the document's `data-theme` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph on the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Outcome of asking the view to start a generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateStep {
    /// Input failed validation; the failure is already shown in the output area.
    Rejected(Failure),
    /// A generation is in flight; controls are disabled so nothing happens.
    AlreadyBusy,
    /// The view is now busy and `text` must be submitted.
    Submit(String),
}

/// Everything the page shows. One instance lives for the whole process.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ViewState {
    pub banner: Banner,
    /// Blocking alert shown by the next page render, then dropped.
    #[serde(skip)]
    pub pending_alert: Option<String>,
    pub input_text: String,
    pub output_text: String,
    /// Mirrors `aria-invalid` on the output area.
    pub output_invalid: bool,
    pub busy: bool,
    pub scores: ScorePair,
    pub theme: Theme,
    pub last_generated_at: Option<DateTime<Utc>>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            banner: Banner::Loading,
            pending_alert: None,
            input_text: String::new(),
            output_text: String::new(),
            output_invalid: false,
            busy: false,
            scores: ScorePair::default(),
            theme: Theme::default(),
            last_generated_at: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_model_name(&mut self, result: ModelNameResult) {
        match result {
            ModelNameResult::Loaded(name) => {
                self.banner = Banner::Loaded(name);
            }
            ModelNameResult::Failed(failure) => {
                self.pending_alert = Some(format!(
                    "Error loading model name: {}\n{}",
                    failure.status_label, failure.message
                ));
                self.banner = Banner::Failed(failure);
            }
        }
    }

    /// Validates `text` and, if it passes, marks the view busy.
    pub fn begin_generation(&mut self, text: String) -> GenerateStep {
        if self.busy {
            return GenerateStep::AlreadyBusy;
        }

        self.input_text = text;
        if self.input_text.chars().count() < MIN_INPUT_CHARS {
            let failure = Failure::input_too_short();
            self.show_failure(&failure);
            return GenerateStep::Rejected(failure);
        }

        self.busy = true;
        self.output_invalid = false;
        GenerateStep::Submit(self.input_text.clone())
    }

    /// Applies a generation result and returns the view to idle.
    pub fn finish_generation(&mut self, result: GenerationResult) {
        match result {
            GenerationResult::Success(generation) => {
                self.output_text = generation.simplified_text;
                self.scores = generation.scores;
                self.output_invalid = false;
                self.last_generated_at = Some(Utc::now());
            }
            GenerationResult::Failure(failure) => self.show_failure(&failure),
        }
        self.busy = false;
    }

    pub fn show_failure(&mut self, failure: &Failure) {
        self.output_text = format!("Error: {}\n{}", failure.status_label, failure.message);
        self.output_invalid = true;
    }

    /// Clears both text areas, the error marker and every score cell.
    /// Returns `false` (and changes nothing) while a generation is in flight.
    pub fn reset(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.input_text.clear();
        self.output_text.clear();
        self.output_invalid = false;
        self.scores = ScorePair::default();
        true
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.pending_alert.take()
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy { GENERATING_LABEL } else { GENERATE_LABEL }
    }

    /// Persistent notice for a failed model-name load. The alert fires once;
    /// this stays on every render.
    pub fn banner_error(&self) -> Option<String> {
        match &self.banner {
            Banner::Failed(failure) => Some(format!(
                "Error loading model name: {} {}",
                failure.status_label, failure.message
            )),
            _ => None,
        }
    }

    /// Text placed in front of the intro sentence.
    pub fn intro_prefix(&self) -> String {
        match &self.banner {
            Banner::Loaded(name) => format!("{}, ", name),
            _ => String::new(),
        }
    }
}
