use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber;
use tower_http::cors::{Any, CorsLayer};

mod api;
mod llm;
mod orchestrator;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: "0.1.0",
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .init();

    let generator: Arc<dyn llm::PlanGenerator> = Arc::new(llm::GeminiGenerator::new());

    // Build the router with CORS support for the browser UI
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false);

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", api::router(generator))
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], 7878));
    info!("Starting daemon server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
