// src/api/routes.rs
use actix_web::web;
use super::handlers;
use crate::client::PlsEndpoint;

pub fn configure_routes<E: PlsEndpoint + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index::<E>))
        .route("/generate", web::post().to(handlers::generate::<E>))
        .route("/reset", web::post().to(handlers::reset::<E>))
        .route("/theme", web::post().to(handlers::toggle_theme::<E>))
        .route("/ws", web::get().to(handlers::ws_handler))
        .route("/static/{file:.*}", web::get().to(handlers::static_file))
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_check::<E>))
                .route("/view", web::get().to(handlers::get_view::<E>))
        );
}
