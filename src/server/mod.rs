pub mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::http_probe::prelude::*;

/// Application state shared across handlers.
pub struct AppState {
    pub prober: Prober,
}

/// Build the router with all routes attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::status_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until the process is stopped.
pub async fn run(listen_addr: &str, state: AppState) -> Result<()> {
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
