use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::SystemConfig;
use crate::routes;
use crate::state::AppState;

/// Full application router with tracing and CORS layers
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address. `host` may be a name such as `localhost`.
pub async fn bind(system_config: &SystemConfig) -> Result<TcpListener> {
    TcpListener::bind((system_config.host.as_str(), system_config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", system_config.host, system_config.port))
}
