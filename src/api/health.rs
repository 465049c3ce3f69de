use axum::extract::State;
use axum::Json;

use crate::api::types::HealthResponse;
use crate::server::state::AppState;

/// GET /health - relay liveness plus router session freshness.
pub async fn handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        router_connected: state.client.is_connected(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}
