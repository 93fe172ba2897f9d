//! Replay connection loop.
//!
//! Streams frames from a [`FrameSource`] to one viewer, one binary message
//! per frame, while watching the inbound half for the viewer's close.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{CloseFrame, Message, Utf8Bytes, WebSocket, close_code};
use futures_util::{SinkExt, StreamExt};
use tokio::time::{Interval, MissedTickBehavior};

use super::source::FrameSource;

/// Pacing and length of a replay stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamPlan {
    /// Delay between frames; `None` sends as fast as the socket accepts.
    pub frame_interval: Option<Duration>,
    /// Frames to send before closing; `None` loops forever.
    pub frame_limit: Option<u64>,
}

impl StreamPlan {
    /// Builds a plan from a frame rate (`0` = unpaced) and a frame limit
    /// (`0` = unlimited).
    #[must_use]
    pub fn new(frame_rate: u32, frame_limit: u64) -> Self {
        Self {
            frame_interval: (frame_rate > 0)
                .then(|| Duration::from_secs(1) / frame_rate),
            frame_limit: (frame_limit > 0).then_some(frame_limit),
        }
    }
}

/// Runs the send loop for a single viewer connection.
///
/// Frames are sent in source order, wrapping around at the end. When the
/// plan's frame limit is reached a normal close frame is sent.
pub async fn run_stream(socket: WebSocket, source: Arc<FrameSource>, plan: StreamPlan) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut ticker = plan.frame_interval.map(|period| {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval
    });
    let mut frames = source.frames().iter().cycle();
    let mut sent: u64 = 0;

    loop {
        if plan.frame_limit.is_some_and(|limit| sent >= limit) {
            let close = CloseFrame {
                code: close_code::NORMAL,
                reason: Utf8Bytes::from_static("end of stream"),
            };
            if let Err(e) = ws_tx.send(Message::Close(Some(close))).await {
                tracing::debug!(error = %e, "close frame not sent");
            }
            break;
        }

        tokio::select! {
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
            () = next_tick(ticker.as_mut()) => {
                let Some(frame) = frames.next() else {
                    break;
                };
                if ws_tx.send(Message::Binary(frame.clone())).await.is_err() {
                    break;
                }
                sent += 1;
            }
        }
    }

    tracing::debug!(sent, "replay stream closed");
}

async fn next_tick(ticker: Option<&mut Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => tokio::task::yield_now().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_from_rate_and_limit() {
        let plan = StreamPlan::new(10, 0);
        assert_eq!(plan.frame_interval, Some(Duration::from_millis(100)));
        assert_eq!(plan.frame_limit, None);

        let plan = StreamPlan::new(0, 5);
        assert_eq!(plan.frame_interval, None);
        assert_eq!(plan.frame_limit, Some(5));
    }
}
