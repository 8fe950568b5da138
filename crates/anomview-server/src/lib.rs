//! anomview-server: one origin for the browser. The client bundle is served
//! from the binary and `/api/*` is relayed to the analysis service.

pub mod api;
pub mod assets;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use state::ServerConfig;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::router())
        .fallback(assets::serve_client)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = build_router(AppState::new(&config.service_url));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, service = %config.service_url, "anomview listening");
    axum::serve(listener, app).await?;
    Ok(())
}
