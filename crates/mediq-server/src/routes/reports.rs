use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

// Report generation is a placeholder surface: both endpoints answer with a
// message only until the reporting pipeline exists.

pub async fn list_reports() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Report listing not yet implemented" })),
    )
}

pub async fn generate_report(payload: Option<Json<Value>>) -> impl IntoResponse {
    let fields = payload
        .as_ref()
        .and_then(|Json(v)| v.as_object().map(|m| m.len()))
        .unwrap_or(0);
    tracing::debug!(fields, "report generation requested");
    (
        StatusCode::OK,
        Json(json!({ "message": "Report generation not yet implemented" })),
    )
}
