use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod rest;

use config::Config;

pub struct AppState {
    pub canned_responses: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sentimeter_api=info".parse()?))
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        canned_responses: config.canned_responses,
    });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Scoring API
        .route("/analyze", post(rest::api_analyze))
        .route("/analyze/batch", post(rest::api_analyze_batch))
        .with_state(state)
        // CORS: the scorer is consumed from browser dashboards on other origins
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only, never request bodies
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.host, config.port);
    info!("Sentimeter API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
