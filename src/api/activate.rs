use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::types::{ActivateRequest, ActivateResponse};
use crate::error::RelayError;
use crate::server::state::AppState;

/// POST /activate - apply guest WiFi activation for a client-supplied code.
pub async fn handler(
    State(state): State<AppState>,
    payload: Result<Json<ActivateRequest>, JsonRejection>,
) -> Response {
    // A body that is not valid JSON is reported as an activation failure,
    // not as a framework-level rejection.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return RelayError::Activation {
                reason: "WiFi activation failed".to_string(),
                details: rejection.body_text(),
            }
            .into();
        }
    };

    let code = match request.code.filter(|c| !c.is_empty()) {
        Some(code) => code,
        None => return RelayError::MissingCode.into(),
    };

    match state.client.activate(&code).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ActivateResponse {
                success: true,
                message: "WiFi activated".to_string(),
                code,
            }),
        )
            .into_response(),
        Err(e) => e.into(),
    }
}
