// src/api/handlers/page.rs
use actix_web::{http::header, web, HttpResponse, Result};
use serde::Deserialize;

use crate::api::AppState;
use crate::client::PlsEndpoint;
use crate::view::GenerateOutcome;

#[derive(Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub text: String,
}

fn back_to_page() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

pub async fn index<E: PlsEndpoint + 'static>(state: web::Data<AppState<E>>) -> Result<HttpResponse> {
    let html = state.controller.render_page().await;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Runs a generation and sends the browser back to the page.
/// Returns once the result (or the validation error) is in the view.
pub async fn generate<E: PlsEndpoint + 'static>(
    state: web::Data<AppState<E>>,
    form: web::Form<GenerateForm>,
) -> Result<HttpResponse> {
    // While busy the action is dropped and the page shows the in-flight state.
    if let GenerateOutcome::Ignored = state.controller.generate(form.into_inner().text).await {
        log::debug!("Generate posted while busy, showing the page instead");
    }
    Ok(back_to_page())
}

pub async fn reset<E: PlsEndpoint + 'static>(state: web::Data<AppState<E>>) -> Result<HttpResponse> {
    if !state.controller.reset().await {
        log::debug!("Reset posted while busy, showing the page instead");
    }
    Ok(back_to_page())
}

pub async fn toggle_theme<E: PlsEndpoint + 'static>(
    state: web::Data<AppState<E>>,
) -> Result<HttpResponse> {
    let theme = state.controller.toggle_theme().await;
    log::debug!("Theme switched to {}", theme.attr());
    Ok(back_to_page())
}

/// JSON snapshot of the view state.
pub async fn get_view<E: PlsEndpoint + 'static>(
    state: web::Data<AppState<E>>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.controller.snapshot().await))
}
