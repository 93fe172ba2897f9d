//! Response DTOs for the status API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::renderer::{CloseEvent, ConnectionState, ErrorEvent, FrameRenderer};

/// Snapshot of the viewer returned by `GET /status`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Image element identifier.
    pub element_id: String,
    /// Connection state.
    pub state: ConnectionState,
    /// Configured socket target.
    pub stream_url: String,
    /// URL reported when the connection opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_url: Option<String>,
    /// The element's current `src`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_src: Option<String>,
    /// Size of the displayed frame in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_frame_bytes: Option<usize>,
    /// Object URLs currently live (0 or 1).
    pub live_handles: usize,
    /// Frames rendered so far.
    pub frames_rendered: u64,
    /// Superseded handles released so far.
    pub handles_released: u64,
    /// Payload bytes received so far.
    pub bytes_received: u64,
    /// When the last frame was installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_frame_at: Option<DateTime<Utc>>,
    /// When the connection opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<DateTime<Utc>>,
    /// When the connection closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// The close event, once the connection has ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<CloseEvent>,
    /// The last transport error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEvent>,
}

impl StatusResponse {
    /// Builds a snapshot from the renderer.
    #[must_use]
    pub fn from_renderer(renderer: &FrameRenderer, stream_url: &str) -> Self {
        let stats = renderer.stats();
        Self {
            element_id: renderer.element().id().to_string(),
            state: renderer.state(),
            stream_url: stream_url.to_string(),
            connected_url: renderer.url().map(str::to_string),
            current_src: renderer.element().src().map(ToString::to_string),
            current_frame_bytes: renderer.current_frame().map(|blob| blob.size()),
            live_handles: renderer.store().live_count(),
            frames_rendered: stats.frames_rendered,
            handles_released: stats.handles_released,
            bytes_received: stats.bytes_received,
            last_frame_at: stats.last_frame_at,
            opened_at: stats.opened_at,
            closed_at: stats.closed_at,
            close: stats.last_close.clone(),
            error: stats.last_error.clone(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
}
