//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use barberhub_domain::error::BarberHubError;

/// JSON error body returned by API endpoints.
///
/// Carries the underlying failure message so clients see what went wrong,
/// for storage failures as much as for rejected input.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps [`BarberHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(BarberHubError);

impl From<BarberHubError> for ApiError {
    fn from(err: BarberHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BarberHubError::Validation(_) => StatusCode::BAD_REQUEST,
            BarberHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
