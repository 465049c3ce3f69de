use serde::{Deserialize, Serialize};

/// Body of POST /activate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateRequest {
    /// Client-supplied activation code; validated for presence only.
    #[serde(default)]
    pub code: Option<String>,
}

/// Success body of POST /activate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateResponse {
    pub success: bool,
    pub message: String,
    pub code: String,
}

/// Body of GET /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Mirrors the session store's freshness check; reading it never
    /// triggers authentication.
    pub router_connected: bool,
    /// Epoch milliseconds.
    pub timestamp: i64,
}
