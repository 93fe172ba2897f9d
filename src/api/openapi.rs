//! OpenAPI document for the status API.

use utoipa::OpenApi;

use super::dto::{HealthResponse, StatusResponse};
use super::handlers::{system, viewer};
use crate::error::{ErrorBody, ErrorResponse};
use crate::renderer::{CloseEvent, ConnectionState, ErrorEvent};

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "camview", description = "Status API of the camview frame viewer"),
    paths(
        system::health_handler,
        viewer::status_handler,
        viewer::frame_handler,
    ),
    components(schemas(
        HealthResponse,
        StatusResponse,
        ConnectionState,
        CloseEvent,
        ErrorEvent,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "System", description = "Service health"),
        (name = "Viewer", description = "Renderer status and current frame"),
    )
)]
pub struct ApiDoc;
