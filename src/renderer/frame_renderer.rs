//! Frame renderer: the per-connection rendering context.
//!
//! [`FrameRenderer`] owns the blob store and the image element. Every
//! binary message becomes a JPEG blob, gets a fresh object URL, is
//! installed as the element's `src`, and only then is the previous URL
//! revoked. After any message returns, at most one URL is live.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::events::{CloseEvent, ErrorEvent, SocketEvents};
use crate::domain::{Blob, BlobStore, ImageElement, ObjectUrl, PageLocation};

/// Connection lifecycle. There is no edge from a closed connection back
/// to `Connected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// Not yet opened, or closed.
    #[default]
    Disconnected,
    /// Handshake done, frames may arrive.
    Connected,
}

/// Running counters for one connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Binary messages rendered.
    pub frames_rendered: u64,
    /// Total payload bytes received.
    pub bytes_received: u64,
    /// Superseded handles released.
    pub handles_released: u64,
    /// Time the last frame was installed.
    pub last_frame_at: Option<DateTime<Utc>>,
    /// Time the connection opened.
    pub opened_at: Option<DateTime<Utc>>,
    /// Time the connection closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// The close event, once seen.
    pub last_close: Option<CloseEvent>,
    /// The last transport error, if any.
    pub last_error: Option<ErrorEvent>,
}

/// Rendering context for a single connection.
#[derive(Debug)]
pub struct FrameRenderer {
    store: BlobStore,
    element: ImageElement,
    state: ConnectionState,
    url: Option<String>,
    stats: RenderStats,
}

impl FrameRenderer {
    /// Creates a renderer for a page at `location`, drawing into the
    /// element `element_id`.
    #[must_use]
    pub fn new(location: &PageLocation, element_id: impl Into<String>) -> Self {
        Self::with_origin(location.origin(), element_id)
    }

    /// Creates a renderer whose object URLs are minted under `origin`.
    #[must_use]
    pub fn with_origin(origin: impl Into<String>, element_id: impl Into<String>) -> Self {
        Self {
            store: BlobStore::new(origin),
            element: ImageElement::new(element_id),
            state: ConnectionState::Disconnected,
            url: None,
            stats: RenderStats::default(),
        }
    }

    /// Current connection state.
    #[must_use]
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    /// Target URL reported at open time.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The image element.
    #[must_use]
    pub const fn element(&self) -> &ImageElement {
        &self.element
    }

    /// The blob store backing the element's source.
    #[must_use]
    pub const fn store(&self) -> &BlobStore {
        &self.store
    }

    /// Counters for this connection.
    #[must_use]
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// The blob currently displayed, if any.
    #[must_use]
    pub fn current_frame(&self) -> Option<&Blob> {
        self.element.src().and_then(|src| self.store.resolve(src))
    }

    /// Clears the element and releases its handle.
    ///
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(src) = self.element.clear_src() {
            self.release(&src);
        }
        self.state = ConnectionState::Disconnected;
        tracing::debug!(element = self.element.id(), "renderer torn down");
    }

    fn release(&mut self, url: &ObjectUrl) {
        if self.store.revoke_object_url(url) {
            self.stats.handles_released += 1;
        } else {
            tracing::warn!(%url, "object url already released");
        }
    }
}

impl SocketEvents for FrameRenderer {
    fn on_open(&mut self, url: &str) {
        tracing::info!(url, "stream connected");
        self.url = Some(url.to_string());
        self.state = ConnectionState::Connected;
        self.stats.opened_at = Some(Utc::now());
    }

    fn on_message(&mut self, frame: Bytes) {
        let size = frame.len();
        let blob = Blob::jpeg(frame);
        let src = self.store.create_object_url(blob);
        let prev = self.element.set_src(src);
        if let Some(prev) = prev {
            self.release(&prev);
        }

        self.stats.frames_rendered += 1;
        self.stats.bytes_received += size as u64;
        self.stats.last_frame_at = Some(Utc::now());
        tracing::trace!(
            size,
            frame = self.stats.frames_rendered,
            element = self.element.id(),
            "frame rendered"
        );
    }

    fn on_close(&mut self, event: &CloseEvent) {
        tracing::info!(
            code = event.code,
            reason = %event.reason,
            was_clean = event.was_clean,
            "stream closed"
        );
        self.state = ConnectionState::Disconnected;
        self.stats.closed_at = Some(Utc::now());
        self.stats.last_close = Some(event.clone());
    }

    fn on_error(&mut self, event: &ErrorEvent) {
        tracing::error!(error = %event.message, url = ?self.url, "stream error");
        self.state = ConnectionState::Disconnected;
        self.stats.last_error = Some(event.clone());
    }
}
