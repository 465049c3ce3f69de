use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::server::state::AppState;

/// GET /test-router - run one login exchange against the router and report.
pub async fn handler(State(state): State<AppState>) -> Response {
    match state.client.authenticate().await {
        Ok(()) => Json(serde_json::json!({
            "success": true,
            "message": "Router connection OK"
        }))
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}
