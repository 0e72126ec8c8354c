//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_domain::error::RosterError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps [`RosterError`] to an HTTP response with appropriate status code.
pub struct ApiError(RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RosterError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            RosterError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail: message })).into_response()
    }
}

/// Request data that could not be coerced to the expected type.
///
/// Rendered as `422 Unprocessable Entity` with the extractor's message.
pub struct InvalidInput(pub String);

impl IntoResponse for InvalidInput {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody { detail: self.0 }),
        )
            .into_response()
    }
}
