//! Configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Unset or unparseable numeric values
//! fall back to their defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::{DEFAULT_ELEMENT_ID, PageLocation};
use crate::error::ViewerError;

/// Viewer configuration.
///
/// Loaded once at startup via [`ViewerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Location of the page the viewer stands in for (`PAGE_URL`).
    pub page: PageLocation,

    /// Socket target; derived from `page` unless `STREAM_URL` is set.
    pub stream_url: String,

    /// Identifier of the image element (`ELEMENT_ID`).
    pub element_id: String,

    /// Bind address of the status API (`LISTEN_ADDR`).
    pub listen_addr: SocketAddr,
}

impl ViewerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidPageUrl`] if `PAGE_URL` cannot be
    /// parsed, and [`ViewerError::Config`] if `LISTEN_ADDR` is not a socket
    /// address.
    pub fn from_env() -> Result<Self, ViewerError> {
        dotenvy::dotenv().ok();

        let page_url = env_or("PAGE_URL", "http://127.0.0.1:8080/");
        let page = PageLocation::parse(&page_url)?;

        let stream_url = std::env::var("STREAM_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| page.stream_url());

        let element_id = env_or("ELEMENT_ID", DEFAULT_ELEMENT_ID);
        let listen_addr = parse_addr("LISTEN_ADDR", "127.0.0.1:3000")?;

        Ok(Self {
            page,
            stream_url,
            element_id,
            listen_addr,
        })
    }
}

/// Replay server configuration.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Bind address (`REPLAY_LISTEN_ADDR`).
    pub listen_addr: SocketAddr,

    /// Directory of JPEG frames (`FRAMES_DIR`).
    pub frames_dir: PathBuf,

    /// Frames per second, `0` for unpaced (`FRAME_RATE`).
    pub frame_rate: u32,

    /// Frames per connection before closing, `0` to loop forever
    /// (`FRAME_LIMIT`).
    pub frame_limit: u64,
}

impl ReplayConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Config`] if `REPLAY_LISTEN_ADDR` is not a
    /// socket address.
    pub fn from_env() -> Result<Self, ViewerError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            listen_addr: parse_addr("REPLAY_LISTEN_ADDR", "0.0.0.0:8080")?,
            frames_dir: PathBuf::from(env_or("FRAMES_DIR", "frames")),
            frame_rate: parse_env("FRAME_RATE", 10),
            frame_limit: parse_env("FRAME_LIMIT", 0),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_addr(key: &str, default: &str) -> Result<SocketAddr, ViewerError> {
    let raw = env_or(key, default);
    raw.parse()
        .map_err(|e| ViewerError::Config(format!("{key}={raw}: {e}")))
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
