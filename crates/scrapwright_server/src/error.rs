//! Mapping of generation failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scrapwright_error::{GenerationError, GenerationErrorKind};
use serde_json::json;
use tracing::{error, warn};

/// Generic message for provider and unexpected failures.
const SERVER_ERROR_MESSAGE: &str = "An error occurred on the server.";

/// A [`GenerationError`] rendered as a JSON error response.
#[derive(Debug, Clone)]
pub struct ApiError(pub GenerationError);

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            GenerationErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GenerationErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            GenerationErrorKind::Misconfigured
            | GenerationErrorKind::Provider { .. }
            | GenerationErrorKind::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for this error.
    pub fn body(&self) -> serde_json::Value {
        match &self.0.kind {
            kind @ (GenerationErrorKind::MethodNotAllowed
            | GenerationErrorKind::BadRequest
            | GenerationErrorKind::Misconfigured) => json!({ "message": kind.to_string() }),
            kind @ (GenerationErrorKind::Provider { .. } | GenerationErrorKind::Unexpected(_)) => {
                json!({ "message": SERVER_ERROR_MESSAGE, "error": kind.to_string() })
            }
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.kind.is_client_error() {
            warn!(status = status.as_u16(), error = %self.0, "Rejected request");
        } else {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
