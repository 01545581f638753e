use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;

use pls_studio::api::{configure_routes, AppState, WsBroker};
use pls_studio::banner;
use pls_studio::client::HttpEndpoint;
use pls_studio::config::AppConfig;
use pls_studio::view::ViewController;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Falling back to process environment and defaults");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    let endpoint = HttpEndpoint::from_config(&app_config)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    println!("✅ Summarization API: {}", endpoint.api_base());
    let controller = Arc::new(ViewController::new(endpoint));

    // Page load: the model name is fetched once, before the first render.
    controller.load_model_name().await;

    let broker = WsBroker::new();
    actix_rt::spawn(broker.clone().forward(controller.subscribe()));

    let state = AppState::new(controller);
    let (host, port) = app_config.bind_addr();

    println!("🚀 Starting server...");
    println!("📊 Page available at http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(broker.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes::<HttpEndpoint>)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
