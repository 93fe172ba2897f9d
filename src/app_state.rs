//! Shared application state injected into Axum handlers.

use std::sync::Arc;

use crate::renderer::SharedRenderer;
use crate::ws::{FrameSource, StreamPlan};

/// Viewer state available to status handlers via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Renderer driven by the stream connection.
    pub renderer: SharedRenderer,
    /// Socket target the viewer connects to.
    pub stream_url: Arc<str>,
}

/// Replay server state shared by every viewer connection.
#[derive(Debug, Clone)]
pub struct ReplayState {
    /// Frames to stream.
    pub source: Arc<FrameSource>,
    /// Pacing and length of each stream.
    pub plan: StreamPlan,
}
