use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use mediq_analysis::AnalysisError;

/// HTTP-facing wrapper around analysis errors.
///
/// Client-side failures map to 400, everything else to 500. Every request
/// either fully succeeds or produces exactly one terminal error response.
#[derive(Debug)]
pub struct ApiError(pub AnalysisError);

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self.0, "analysis request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = json!({
            "error": self.0.code(),
            "message": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
