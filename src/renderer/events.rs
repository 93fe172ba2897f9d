//! Socket event interface.
//!
//! The transport driver turns WebSocket traffic into four callbacks, the
//! same four a browser socket exposes: open, message, close and error.
//! Callbacks are invoked sequentially from a single task and never overlap.

use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;

/// Close code for a normal shutdown.
pub const NORMAL_CLOSURE: u16 = 1000;

/// Close code reported for a close frame that carried no status.
pub const NO_STATUS_RECEIVED: u16 = 1005;

/// Close code reported when the connection dropped without a close frame.
pub const ABNORMAL_CLOSURE: u16 = 1006;

/// Details of a connection close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CloseEvent {
    /// WebSocket close code.
    pub code: u16,
    /// Close reason sent by the peer (may be empty).
    pub reason: String,
    /// Whether the closing handshake completed.
    pub was_clean: bool,
}

impl CloseEvent {
    /// A close that completed the closing handshake.
    #[must_use]
    pub fn clean(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
            was_clean: true,
        }
    }

    /// A connection lost without a close frame.
    #[must_use]
    pub fn abnormal() -> Self {
        Self {
            code: ABNORMAL_CLOSURE,
            reason: String::new(),
            was_clean: false,
        }
    }
}

/// Details of a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorEvent {
    /// Human-readable description of what failed.
    pub message: String,
}

impl ErrorEvent {
    /// Builds an error event from any displayable error.
    #[must_use]
    pub fn from_error(err: &impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Subscriber for socket events.
pub trait SocketEvents {
    /// The handshake completed; `url` is the connection's target.
    fn on_open(&mut self, url: &str);

    /// One binary message arrived.
    fn on_message(&mut self, frame: Bytes);

    /// The connection closed. Terminal.
    fn on_close(&mut self, event: &CloseEvent);

    /// The transport failed. A close event follows.
    fn on_error(&mut self, event: &ErrorEvent);
}
