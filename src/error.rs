//! Viewer error types with HTTP status code mapping.
//!
//! [`ViewerError`] is the central error type for the crate. Each variant
//! maps to a numeric code and an HTTP status used by the status API's
//! structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "no frame has been rendered yet",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Crate-wide error enum.
///
/// # Error Code Ranges
///
/// | Range     | Category      | HTTP Status               |
/// |-----------|---------------|---------------------------|
/// | 1000–1999 | Configuration | 400 Bad Request           |
/// | 2000–2999 | Display state | 404 Not Found             |
/// | 3000–3999 | Server / IO   | 500 Internal Server Error |
/// | 5000–5999 | Transport     | 502 Bad Gateway           |
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The hosting page URL could not be turned into a stream location.
    #[error("invalid page url: {0}")]
    InvalidPageUrl(String),

    /// A configuration value is present but unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The image element has no source yet, or its handle was revoked.
    #[error("no frame has been rendered yet")]
    NoFrame,

    /// The replay frame source could not be built.
    #[error("frame source error: {0}")]
    FrameSource(String),

    /// WebSocket transport failure.
    #[error("transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ViewerError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidPageUrl(_) => 1001,
            Self::Config(_) => 1002,
            Self::NoFrame => 2001,
            Self::Internal(_) => 3000,
            Self::FrameSource(_) => 3001,
            Self::Io(_) => 3002,
            Self::Transport(_) => 5001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPageUrl(_) | Self::Config(_) => StatusCode::BAD_REQUEST,
            Self::NoFrame => StatusCode::NOT_FOUND,
            Self::FrameSource(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ViewerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
