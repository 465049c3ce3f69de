use std::sync::Arc;

use crate::config::RouterConfig;
use crate::error::{RelayError, Result};
use crate::router::digest;
use crate::router::session::SessionStore;
use crate::router::transport::{HttpTransport, RouterTransport};

/// Authenticated client for the router's management interface.
///
/// Owns the single session slot and re-authenticates transparently before
/// privileged calls once the cached session goes stale. When two requests
/// observe staleness concurrently, both may log in; the last session written
/// wins and either token is valid for the privileged call that follows.
pub struct RouterClient {
    config: RouterConfig,
    transport: Arc<dyn RouterTransport>,
    sessions: SessionStore,
}

impl RouterClient {
    /// Build a client over an explicit transport (tests inject doubles here).
    pub fn new(config: RouterConfig, transport: Arc<dyn RouterTransport>) -> Self {
        Self {
            config,
            transport,
            sessions: SessionStore::new(),
        }
    }

    /// Build a client that talks to a real router over HTTP.
    pub fn with_http(config: RouterConfig) -> Self {
        let transport = Arc::new(HttpTransport::new(&config));
        Self::new(config, transport)
    }

    /// Log in to the router and cache the resulting session.
    ///
    /// One login POST, no retries. On failure the session slot is left
    /// untouched; a partial session is never written. A login response
    /// that carries a cookie but a non-2xx status still counts as failed.
    pub async fn authenticate(&self) -> Result<()> {
        let password_digest = digest::password_digest(&self.config.password);
        let reply = self
            .transport
            .login(&self.config.username, &password_digest)
            .await
            .map_err(|e| RelayError::Auth(e.to_string()))?;

        if !(200..300).contains(&reply.status) {
            return Err(RelayError::Auth(format!(
                "login returned status {}",
                reply.status
            )));
        }

        match reply.session_token {
            Some(token) => {
                self.sessions.replace(token);
                tracing::info!(router = %self.config.host, "Router authentication succeeded");
                Ok(())
            }
            None => Err(RelayError::Auth(
                "login response carried no session cookie".to_string(),
            )),
        }
    }

    /// Apply guest WiFi activation for the given code.
    ///
    /// Re-authenticates first if the cached session is missing or stale,
    /// then issues exactly one privileged POST. Only HTTP 200 from the
    /// router counts as success; no further verification is performed.
    pub async fn activate(&self, code: &str) -> Result<()> {
        if !self.sessions.is_fresh() {
            self.authenticate()
                .await
                .map_err(|e| RelayError::Activation {
                    reason: "WiFi activation failed".to_string(),
                    details: e.to_string(),
                })?;
        }

        let token = self
            .sessions
            .current()
            .ok_or_else(|| RelayError::Auth("no router session".to_string()))?;

        tracing::info!(code, "Applying WiFi activation");

        let status = self
            .transport
            .apply(&token, &self.config.activation_params)
            .await
            .map_err(|e| RelayError::Activation {
                reason: "WiFi activation failed".to_string(),
                details: e.to_string(),
            })?;

        if status == 200 {
            tracing::info!(code, "WiFi activation applied");
            Ok(())
        } else {
            Err(RelayError::Activation {
                reason: "WiFi activation failed".to_string(),
                details: format!("router returned status {status}"),
            })
        }
    }

    /// Whether a fresh router session is currently cached. Read-only; never
    /// triggers authentication.
    pub fn is_connected(&self) -> bool {
        self.sessions.is_fresh()
    }
}
