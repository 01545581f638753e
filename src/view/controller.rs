// src/view/controller.rs
use serde::Serialize;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::client::PlsEndpoint;
use crate::errors::Result;
use crate::models::{Failure, GenerationResult, HealthStatus, ModelNameResult};
use crate::view::render;
use crate::view::state::{GenerateStep, Theme, ViewState};

/// Busy/idle transitions pushed to anyone watching the page.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewEvent {
    Busy,
    #[default]
    Idle,
}

/// What came of a generate action.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// Validation failed; no request was sent.
    Rejected(Failure),
    /// Another generation was already running.
    Ignored,
    Completed(GenerationResult),
}

/// Owns the single [`ViewState`] and drives it through the endpoint.
pub struct ViewController<E> {
    endpoint: E,
    state: RwLock<ViewState>,
    events: broadcast::Sender<ViewEvent>,
}

impl<E: PlsEndpoint> ViewController<E> {
    pub fn new(endpoint: E) -> Self {
        let (events, _) = broadcast::channel(16);
        Self { endpoint, state: RwLock::new(ViewState::new()), events }
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: ViewEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Page-load step: asks the API for its model name and updates the banner.
    pub async fn load_model_name(&self) -> ModelNameResult {
        let result = self.endpoint.fetch_model_name().await;
        match &result {
            ModelNameResult::Loaded(name) => println!("🤖 Serving model: {}", name),
            ModelNameResult::Failed(failure) => eprintln!(
                "❌ Error loading model name: {} {}",
                failure.status_label, failure.message
            ),
        }
        self.state.write().await.apply_model_name(result.clone());
        result
    }

    /// Validates `text`, submits it and applies the result.
    ///
    /// The state lock is released while the request is in flight; the busy
    /// flag alone keeps a second generation from starting.
    pub async fn generate(&self, text: String) -> GenerateOutcome {
        let step = self.state.write().await.begin_generation(text);
        let text = match step {
            GenerateStep::Submit(text) => text,
            GenerateStep::Rejected(failure) => {
                log::info!("Input rejected: {}", failure.message);
                return GenerateOutcome::Rejected(failure);
            }
            GenerateStep::AlreadyBusy => {
                log::warn!("Generate ignored, a request is already in flight");
                return GenerateOutcome::Ignored;
            }
        };

        let request_id = Uuid::new_v4();
        log::info!("[{}] Generation started", request_id);
        self.emit(ViewEvent::Busy);

        let result = self.endpoint.submit_for_simplification(&text).await;

        match &result {
            GenerationResult::Success(_) => log::info!("[{}] ✅ Generation succeeded", request_id),
            GenerationResult::Failure(failure) => log::error!(
                "[{}] ❌ Generation failed: {} {}",
                request_id, failure.status_label, failure.message
            ),
        }

        self.state.write().await.finish_generation(result.clone());
        self.emit(ViewEvent::Idle);
        GenerateOutcome::Completed(result)
    }

    /// Returns `false` if a generation is in flight.
    pub async fn reset(&self) -> bool {
        let done = self.state.write().await.reset();
        if done {
            log::debug!("View reset");
        }
        done
    }

    pub async fn toggle_theme(&self) -> Theme {
        self.state.write().await.toggle_theme()
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Renders the page, consuming any pending alert.
    pub async fn render_page(&self) -> String {
        let mut state = self.state.write().await;
        let alert = state.take_alert();
        render::render_page(&state, alert.as_deref())
    }

    pub async fn check_upstream(&self) -> Result<HealthStatus> {
        self.endpoint.check_health().await
    }
}
