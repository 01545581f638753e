// src/api/handlers/health.rs
use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::api::AppState;
use crate::client::PlsEndpoint;

/// Reports this service and whether the summarization API answers.
pub async fn health_check<E: PlsEndpoint + 'static>(
    state: web::Data<AppState<E>>,
) -> Result<HttpResponse> {
    let upstream = match state.controller.check_upstream().await {
        Ok(health) => health.status,
        Err(e) => {
            log::warn!("Upstream health check failed: {}", e);
            format!("unreachable: {}", e)
        }
    };

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "pls-studio",
        "version": env!("CARGO_PKG_VERSION"),
        "upstream": upstream
    })))
}
