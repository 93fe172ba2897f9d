//! Shared handle to a [`FrameRenderer`].
//!
//! The transport task is the only writer; HTTP handlers take read locks
//! to inspect the element. Poisoned locks are recovered.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bytes::Bytes;

use super::events::{CloseEvent, ErrorEvent, SocketEvents};
use super::frame_renderer::FrameRenderer;

/// Cloneable, thread-safe renderer handle.
#[derive(Debug, Clone)]
pub struct SharedRenderer {
    inner: Arc<RwLock<FrameRenderer>>,
}

impl SharedRenderer {
    /// Wraps `renderer` for sharing.
    #[must_use]
    pub fn new(renderer: FrameRenderer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(renderer)),
        }
    }

    /// Acquires a read guard.
    pub fn read(&self) -> RwLockReadGuard<'_, FrameRenderer> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires a write guard.
    pub fn write(&self) -> RwLockWriteGuard<'_, FrameRenderer> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SocketEvents for SharedRenderer {
    fn on_open(&mut self, url: &str) {
        self.write().on_open(url);
    }

    fn on_message(&mut self, frame: Bytes) {
        self.write().on_message(frame);
    }

    fn on_close(&mut self, event: &CloseEvent) {
        self.write().on_close(event);
    }

    fn on_error(&mut self, event: &ErrorEvent) {
        self.write().on_error(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ConnectionState;

    #[test]
    fn clones_observe_the_same_renderer() {
        let shared = SharedRenderer::new(FrameRenderer::with_origin("http://h", "video"));
        let mut writer = shared.clone();
        writer.on_open("ws://h/ws");
        writer.on_message(Bytes::from_static(b"\xff\xd8\xff\xd9"));

        let guard = shared.read();
        assert_eq!(guard.state(), ConnectionState::Connected);
        assert_eq!(guard.stats().frames_rendered, 1);
    }
}
