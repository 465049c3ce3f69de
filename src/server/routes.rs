use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use crate::api;

/// Build the complete axum Router. CORS is wide open: the expected client
/// is a local web page served from an arbitrary origin.
pub fn build(state: AppState) -> Router {
    api::routes()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
