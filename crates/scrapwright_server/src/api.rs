//! HTTP routes.

use crate::{ApiError, GenerationService};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use scrapwright_error::{GenerationError, GenerationErrorKind};
use serde_json::{json, value::RawValue};
use tracing::instrument;

/// Creates the API router with the generation endpoint mounted at `route`.
///
/// The generation route has no body size limit; inventories are passed
/// through whole.
pub fn create_router(service: GenerationService, route: &str) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            route,
            post(generate)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(service)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generation endpoint.
async fn generate(
    State(service): State<GenerationService>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Box<RawValue>>, ApiError> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            service.api_key()?;
            return Err(ApiError(GenerationError::new(
                GenerationErrorKind::Unexpected(format!(
                    "Failed to read request body: {}",
                    rejection.body_text()
                )),
            )));
        }
    };

    let design = service.generate(&body).await?;
    Ok(Json(design))
}

#[instrument(skip_all, fields(method = %method))]
async fn method_not_allowed(method: Method) -> ApiError {
    ApiError(GenerationError::new(GenerationErrorKind::MethodNotAllowed))
}
