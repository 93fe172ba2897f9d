//! End-to-end tests of the viewer's socket connection against live servers.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;
use axum::routing::get;
use bytes::Bytes;
use futures_util::SinkExt;
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

use camview::app_state::ReplayState;
use camview::domain::PageLocation;
use camview::renderer::{
    ABNORMAL_CLOSURE, CloseEvent, ConnectionState, ErrorEvent, FrameRenderer, NORMAL_CLOSURE,
    SocketEvents,
};
use camview::ws::{FrameSource, StreamPlan, replay_router, run_connection};

fn frame(tag: u8) -> Bytes {
    Bytes::from(vec![0xff, 0xd8, 0xff, 0xe0, tag, tag, 0xff, 0xd9])
}

async fn bind() -> (TcpListener, SocketAddr) {
    let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    (listener, addr)
}

async fn spawn_replay(frames: Vec<Bytes>, plan: StreamPlan) -> SocketAddr {
    let source = match FrameSource::from_frames(frames) {
        Ok(source) => source,
        Err(e) => panic!("source: {e}"),
    };
    let state = ReplayState {
        source: Arc::new(source),
        plan,
    };
    let (listener, addr) = bind().await;
    tokio::spawn(async move { axum::serve(listener, replay_router(state)).await });
    addr
}

fn renderer_for(addr: SocketAddr) -> (FrameRenderer, String) {
    let page = PageLocation::new(addr.ip().to_string(), Some(addr.port()));
    let url = page.stream_url();
    (FrameRenderer::new(&page, "video"), url)
}

/// Records callback order and counts.
#[derive(Debug, Default)]
struct Recorder {
    events: Vec<String>,
    closes: usize,
}

impl SocketEvents for Recorder {
    fn on_open(&mut self, _url: &str) {
        self.events.push("open".to_string());
    }
    fn on_message(&mut self, frame: Bytes) {
        self.events.push(format!("message:{}", frame.len()));
    }
    fn on_close(&mut self, event: &CloseEvent) {
        self.closes += 1;
        self.events.push(format!("close:{}", event.code));
    }
    fn on_error(&mut self, _event: &ErrorEvent) {
        self.events.push("error".to_string());
    }
}

#[tokio::test]
async fn renders_every_frame_and_keeps_one_handle() {
    let frames: Vec<Bytes> = (0..5).map(frame).collect();
    let addr = spawn_replay(frames.clone(), StreamPlan::new(0, 5)).await;
    let (mut renderer, url) = renderer_for(addr);
    assert_eq!(url, format!("ws://127.0.0.1:{}/ws", addr.port()));

    let close = run_connection(&url, &mut renderer).await;

    assert_eq!(close.code, NORMAL_CLOSURE);
    assert_eq!(close.reason, "end of stream");
    assert!(close.was_clean);
    assert_eq!(renderer.state(), ConnectionState::Disconnected);
    assert_eq!(renderer.url(), Some(url.as_str()));

    let stats = renderer.stats();
    assert_eq!(stats.frames_rendered, 5);
    assert_eq!(stats.handles_released, 4);
    assert_eq!(renderer.store().live_count(), 1);

    let Some(current) = renderer.current_frame() else {
        panic!("last frame should stay displayed");
    };
    let Some(last) = frames.last() else {
        panic!("no frames");
    };
    assert_eq!(current.data(), last);
}

#[tokio::test]
async fn replay_wraps_around_the_source() {
    let frames = vec![frame(1), frame(2)];
    let addr = spawn_replay(frames, StreamPlan::new(0, 5)).await;
    let (_, url) = renderer_for(addr);

    let mut rec = Recorder::default();
    run_connection(&url, &mut rec).await;

    assert_eq!(rec.events.first().map(String::as_str), Some("open"));
    assert_eq!(
        rec.events.iter().filter(|e| e.starts_with("message")).count(),
        5
    );
    assert_eq!(rec.events.last().map(String::as_str), Some("close:1000"));
}

#[tokio::test]
async fn paced_replay_delivers_in_order() {
    let frames: Vec<Bytes> = (10..13).map(frame).collect();
    let addr = spawn_replay(frames, StreamPlan::new(50, 3)).await;
    let (mut renderer, url) = renderer_for(addr);

    let close = tokio::time::timeout(Duration::from_secs(5), run_connection(&url, &mut renderer))
        .await;
    let Ok(close) = close else {
        panic!("paced stream did not finish");
    };
    assert_eq!(close.code, NORMAL_CLOSURE);
    assert_eq!(renderer.stats().frames_rendered, 3);
    let Some(current) = renderer.current_frame() else {
        panic!("missing frame");
    };
    assert_eq!(current.data(), &frame(12));
}

async fn close_immediately(
    ws: WebSocketUpgrade,
    State(count): State<Arc<AtomicUsize>>,
) -> impl IntoResponse {
    count.fetch_add(1, Ordering::SeqCst);
    ws.on_upgrade(|mut socket| async move {
        let _ = socket.send(axum::extract::ws::Message::Close(None)).await;
    })
}

#[tokio::test]
async fn close_fires_once_without_reconnecting() {
    let upgrades = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/ws", get(close_immediately))
        .with_state(Arc::clone(&upgrades));
    let (listener, addr) = bind().await;
    tokio::spawn(async move { axum::serve(listener, app).await });

    let (_, url) = renderer_for(addr);
    let mut rec = Recorder::default();
    let close = run_connection(&url, &mut rec).await;

    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(close.code, 1005);
    assert!(close.was_clean);
    assert_eq!(rec.closes, 1);
    assert_eq!(rec.events, vec!["open".to_string(), "close:1005".to_string()]);
    assert_eq!(upgrades.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn text_messages_are_ignored() {
    let (listener, addr) = bind().await;
    tokio::spawn(async move {
        let Ok((tcp, _)) = listener.accept().await else {
            return;
        };
        let Ok(mut ws) = tokio_tungstenite::accept_async(tcp).await else {
            return;
        };
        let _ = ws.send(Message::text("hello")).await;
        let _ = ws.send(Message::Binary(frame(9))).await;
        let _ = ws.close(None).await;
    });

    let (mut renderer, url) = renderer_for(addr);
    run_connection(&url, &mut renderer).await;

    assert_eq!(renderer.stats().frames_rendered, 1);
    assert_eq!(renderer.stats().handles_released, 0);
}

#[tokio::test]
async fn dropped_connection_is_abnormal_close() {
    let (listener, addr) = bind().await;
    tokio::spawn(async move {
        let Ok((tcp, _)) = listener.accept().await else {
            return;
        };
        let Ok(mut ws) = tokio_tungstenite::accept_async(tcp).await else {
            return;
        };
        let _ = ws.send(Message::Binary(frame(1))).await;
        drop(ws);
    });

    let (mut renderer, url) = renderer_for(addr);
    let close = run_connection(&url, &mut renderer).await;

    assert_eq!(close.code, ABNORMAL_CLOSURE);
    assert!(!close.was_clean);
    assert_eq!(renderer.state(), ConnectionState::Disconnected);
    assert_eq!(renderer.stats().last_close, Some(close));
    assert!(renderer.current_frame().is_some());
}

#[tokio::test]
async fn refused_connection_reports_error_and_never_opens() {
    let (listener, addr) = bind().await;
    drop(listener);

    let (mut renderer, url) = renderer_for(addr);
    let close = run_connection(&url, &mut renderer).await;

    assert_eq!(close.code, ABNORMAL_CLOSURE);
    assert!(renderer.stats().opened_at.is_none());
    assert!(renderer.stats().last_error.is_some());
    assert_eq!(renderer.state(), ConnectionState::Disconnected);
}
