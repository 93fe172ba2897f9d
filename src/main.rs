//! camview viewer entry point.
//!
//! Connects to the camera's frame socket, renders frames into the image
//! element, and serves the status API until interrupted.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use camview::api;
use camview::app_state::AppState;
use camview::config::ViewerConfig;
use camview::renderer::{FrameRenderer, SharedRenderer};
use camview::ws::run_connection;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ViewerConfig::from_env()?;
    tracing::info!(
        page = %config.page,
        stream = %config.stream_url,
        element = %config.element_id,
        "starting camview"
    );

    let renderer = SharedRenderer::new(FrameRenderer::new(&config.page, &config.element_id));

    let app_state = AppState {
        renderer: renderer.clone(),
        stream_url: Arc::from(config.stream_url.as_str()),
    };

    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(10)))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "status api listening");
    let server = tokio::spawn(async move { axum::serve(listener, app).await });

    // One connection, no reconnection. The status API stays up after it
    // ends so the last frame and close details remain visible.
    let mut events = renderer.clone();
    tokio::select! {
        close = run_connection(&config.stream_url, &mut events) => {
            tracing::info!(code = close.code, "stream ended; press ctrl-c to exit");
            tokio::signal::ctrl_c().await?;
        }
        result = tokio::signal::ctrl_c() => result?,
    }

    renderer.write().teardown();
    server.abort();
    tracing::info!("camview stopped");

    Ok(())
}
