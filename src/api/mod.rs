//! Status API: route handlers, DTOs, OpenAPI document and router
//! composition.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// Builds the viewer's status router.
///
/// With the `swagger-ui` feature the OpenAPI document is served at
/// `/api-docs/openapi.json` and browsable under `/swagger-ui`.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .route("/health", get(handlers::system::health_handler))
        .merge(handlers::viewer::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}
