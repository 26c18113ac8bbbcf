use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{ClimateConfig, api};

/// Full application router, `/api` nested under the CORS and trace layers
pub fn app(config: &ClimateConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(api::AppState::from_config(config)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: &ClimateConfig) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.server.port);
    axum::serve(listener, app(config))
        .await
        .context("Web server terminated")?;
    Ok(())
}
