//! Replay server entry point.
//!
//! Streams a directory of JPEG files over `/ws`, one binary message per
//! frame, the way a camera module serves its live feed.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use camview::app_state::ReplayState;
use camview::config::ReplayConfig;
use camview::ws::{FrameSource, StreamPlan, replay_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ReplayConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        dir = %config.frames_dir.display(),
        fps = config.frame_rate,
        "starting replay-server"
    );

    let source = FrameSource::load_dir(&config.frames_dir).await?;
    let state = ReplayState {
        source: Arc::new(source),
        plan: StreamPlan::new(config.frame_rate, config.frame_limit),
    };

    let app = replay_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
