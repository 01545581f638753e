// tests/common/mod.rs
#![allow(dead_code)]

use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};

pub fn long_abstract(len: usize) -> String {
    "Lorem ipsum dolor sit amet. ".chars().cycle().take(len).collect()
}

pub fn scenario_body() -> Value {
    json!({
        "status": "ok",
        "pls": "Simple text.",
        "scores": {
            "original": {"CLI": 9.1, "FRE": 45.0, "GFI": 13.4, "SMOG": 12.0, "FKGL": 11.8, "DCRS": 10.2},
            "generated": {"CLI": 3.2, "FRE": 80.0, "GFI": 6.1, "SMOG": 7.0, "FKGL": 4.9, "DCRS": 6.6}
        }
    })
}

/// Summarization API that behaves.
pub fn healthy_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(|| async { HttpResponse::Ok().json(json!({"status": "ok"})) }))
        .route(
            "/get_model_name",
            web::get().to(|| async { HttpResponse::Ok().json("Llama-3.2-3B-Instruct") }),
        )
        .route(
            "/generate_pls",
            web::post().to(|body: web::Json<Value>| async move {
                match body.get("text").and_then(Value::as_str) {
                    Some(text) if !text.trim().is_empty() => HttpResponse::Ok().json(scenario_body()),
                    _ => HttpResponse::BadRequest().json(json!({"detail": "Input text cannot be empty."})),
                }
            }),
        );
}

/// Summarization API whose model failed to load.
pub fn broken_api(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/get_model_name",
        web::get().to(|| async {
            HttpResponse::InternalServerError().json(json!({"detail": "model unavailable"}))
        }),
    )
    .route(
        "/generate_pls",
        web::post().to(|| async {
            HttpResponse::UnprocessableEntity().json(json!({"detail": "Input text is PLS already."}))
        }),
    )
    .route(
        "/health",
        web::get().to(|| async { HttpResponse::ServiceUnavailable().body("starting") }),
    );
}

/// Summarization API that takes a moment to answer a generation.
pub fn slow_api(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/get_model_name",
        web::get().to(|| async { HttpResponse::Ok().json("Llama-3.2-3B-Instruct") }),
    )
    .route(
        "/generate_pls",
        web::post().to(|| async {
            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
            HttpResponse::Ok().json(scenario_body())
        }),
    );
}

/// Summarization API that answers 200 with bodies we cannot decode.
pub fn garbled_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/get_model_name", web::get().to(|| async { HttpResponse::Ok().body("<html>") }))
        .route(
            "/generate_pls",
            web::post().to(|| async { HttpResponse::Ok().json(json!({"summary": "wrong shape"})) }),
        );
}

/// Starts a throwaway upstream on an ephemeral port and returns its base URL.
pub async fn spawn_upstream(configure: fn(&mut web::ServiceConfig)) -> String {
    let server = HttpServer::new(move || App::new().configure(configure))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind upstream");
    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub fn dead_upstream() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}", addr)
}
