//! WebSocket layer: the viewer's transport driver and the replay server's
//! frame stream.
//!
//! Both sides speak the same wire format on `/ws`: one binary message per
//! JPEG frame, no extra framing.

pub mod client;
pub mod connection;
pub mod handler;
pub mod source;

use axum::Router;
use axum::routing::get;

use crate::api::handlers::system;
use crate::app_state::ReplayState;
use crate::domain::STREAM_PATH;

pub use client::{connect, run_connection};
pub use connection::StreamPlan;
pub use source::FrameSource;

/// Builds the replay server router: the frame socket plus `/health`.
pub fn replay_router(state: ReplayState) -> Router {
    Router::new()
        .route(STREAM_PATH, get(handler::stream_handler))
        .route("/health", get(system::health_handler))
        .with_state(state)
}
