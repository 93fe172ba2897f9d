//! Hosting page location and the stream URL derived from it.
//!
//! The camera server serves the viewer page and the frame socket from the
//! same host and port, so the socket target is always computed from the
//! page's own location: `ws://{host}:{port}/ws`.

use std::fmt;
use std::str::FromStr;

use axum::http::Uri;

use crate::error::ViewerError;

/// Path of the frame socket on the camera server.
pub const STREAM_PATH: &str = "/ws";

/// Host and port of the page the viewer is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    host: String,
    port: Option<u16>,
}

impl PageLocation {
    /// Creates a location from an explicit host and optional port.
    #[must_use]
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parses a page URL such as `http://192.168.1.5:8080/index.html`.
    ///
    /// A bare `host[:port]` is accepted too. Path and query are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidPageUrl`] if the URL does not parse,
    /// has no host, or uses a scheme other than `http`/`https`.
    pub fn parse(page_url: &str) -> Result<Self, ViewerError> {
        let uri: Uri = page_url
            .trim()
            .parse()
            .map_err(|e| ViewerError::InvalidPageUrl(format!("{page_url}: {e}")))?;

        if let Some(scheme) = uri.scheme_str()
            && scheme != "http"
            && scheme != "https"
        {
            return Err(ViewerError::InvalidPageUrl(format!(
                "{page_url}: unsupported scheme {scheme}"
            )));
        }

        let host = uri
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ViewerError::InvalidPageUrl(format!("{page_url}: missing host")))?;

        Ok(Self::new(host, uri.port_u16()))
    }

    /// Page hostname (IPv6 literals keep their brackets).
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit page port, if the page URL carried one.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the frame socket URL for this page.
    ///
    /// Without an explicit port the default one is implied and the
    /// `:port` segment is left out.
    #[must_use]
    pub fn stream_url(&self) -> String {
        match self.port {
            Some(port) => format!("ws://{}:{port}{STREAM_PATH}", self.host),
            None => format!("ws://{}{STREAM_PATH}", self.host),
        }
    }

    /// Returns the `blob:` origin used for object URLs minted on this page.
    #[must_use]
    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("http://{}:{port}", self.host),
            None => format!("http://{}", self.host),
        }
    }
}

impl FromStr for PageLocation {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{port}", self.host),
            None => write!(f, "{}", self.host),
        }
    }
}
