//! Viewer endpoints: renderer status and the displayed frame.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::StatusResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ViewerError};

/// `GET /status` — Connection and rendering snapshot.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Viewer",
    summary = "Viewer status",
    description = "Returns the connection state, the image element's current source and rendering counters.",
    responses(
        (status = 200, description = "Viewer snapshot", body = StatusResponse),
    )
)]
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let status = {
        let renderer = state.renderer.read();
        StatusResponse::from_renderer(&renderer, &state.stream_url)
    };
    (StatusCode::OK, Json(status))
}

/// `GET /frame` — Bytes behind the image element's current source.
///
/// # Errors
///
/// Returns [`ViewerError::NoFrame`] until the first frame is rendered.
#[utoipa::path(
    get,
    path = "/frame",
    tag = "Viewer",
    summary = "Current frame",
    description = "Serves the JPEG currently installed as the image element's source.",
    responses(
        (status = 200, description = "Current frame", content_type = "image/jpeg", body = Vec<u8>),
        (status = 404, description = "No frame rendered yet", body = ErrorResponse),
    )
)]
pub async fn frame_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ViewerError> {
    let (mime, data) = {
        let renderer = state.renderer.read();
        let blob = renderer.current_frame().ok_or(ViewerError::NoFrame)?;
        (blob.mime(), blob.data().clone())
    };
    let headers = [(header::CONTENT_TYPE, mime), (header::CACHE_CONTROL, "no-store")];
    Ok((StatusCode::OK, headers, data))
}

/// Viewer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(status_handler))
        .route("/frame", get(frame_handler))
}
