//! # camview
//!
//! WebSocket JPEG frame viewer for live camera feeds.
//!
//! The viewer opens one socket to `ws://<page-host>:<page-port>/ws`,
//! receives one JPEG per binary message, and installs each as the `src` of
//! an image element, releasing the previous frame's handle once the new
//! one is in place. A small HTTP surface exposes the element's state and
//! current frame. The crate also ships a replay server that plays a
//! directory of JPEG files over the same wire format.
//!
//! ## Architecture
//!
//! ```text
//! replay-server                          camview
//!     │                                      │
//!     ├── FrameSource (ws/source)            ├── run_connection (ws/client)
//!     ├── run_stream  (ws/connection)        │      │ SocketEvents
//!     │                                      ├── FrameRenderer (renderer/)
//!     └── GET /ws ── binary JPEG frames ──▶  │      ├── BlobStore (domain/)
//!                                            │      └── ImageElement (domain/)
//!                                            └── Status API (api/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod renderer;
pub mod ws;
