//! Axum WebSocket upgrade handler for the replay server.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_stream;
use crate::app_state::ReplayState;

/// `GET /ws` — Upgrade to WebSocket and stream frames.
pub async fn stream_handler(
    ws: WebSocketUpgrade,
    State(state): State<ReplayState>,
) -> impl IntoResponse {
    let source = Arc::clone(&state.source);
    let plan = state.plan;
    tracing::debug!(frames = source.len(), "viewer connected");

    ws.on_upgrade(move |socket| run_stream(socket, source, plan))
}
