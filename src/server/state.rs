use std::sync::Arc;

use crate::config::RelayConfig;
use crate::router::RouterClient;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<RouterClient>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    pub fn new(client: Arc<RouterClient>, config: Arc<RelayConfig>) -> Self {
        Self { client, config }
    }
}
