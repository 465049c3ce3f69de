use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::header;

use crate::config::RouterConfig;
use crate::error::Result;

/// Outcome of one login POST against the router.
#[derive(Debug, Clone)]
pub struct LoginReply {
    /// HTTP status of the login response.
    pub status: u16,
    /// Session cookie from the `Set-Cookie` header, if the router sent one.
    pub session_token: Option<String>,
}

/// HTTP seam to the router's management interface. The concrete endpoints
/// and form fields come from `RouterConfig`; tests substitute this trait
/// with doubles instead of a live router.
#[async_trait]
pub trait RouterTransport: Send + Sync {
    /// POST the login form (username + password digest, URL-encoded).
    async fn login(&self, username: &str, password_digest: &str) -> Result<LoginReply>;

    /// POST the activation form to the privileged configuration endpoint,
    /// presenting the session token as a cookie. Returns the HTTP status.
    async fn apply(&self, session_token: &str, params: &BTreeMap<String, String>) -> Result<u16>;
}

/// reqwest-backed transport talking to a real router.
///
/// The client is built without a timeout: a hung router connection hangs
/// the corresponding inbound request, matching the deployed behavior.
pub struct HttpTransport {
    client: reqwest::Client,
    login_url: String,
    config_url: String,
}

impl HttpTransport {
    pub fn new(config: &RouterConfig) -> Self {
        let base = config.base_url();
        Self {
            client: reqwest::Client::new(),
            login_url: format!("{}{}", base, config.login_path),
            config_url: format!("{}{}", base, config.config_path),
        }
    }
}

#[async_trait]
impl RouterTransport for HttpTransport {
    async fn login(&self, username: &str, password_digest: &str) -> Result<LoginReply> {
        let response = self
            .client
            .post(&self.login_url)
            .form(&[("UserName", username), ("Password", password_digest)])
            .send()
            .await?;

        let session_token = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(LoginReply {
            status: response.status().as_u16(),
            session_token,
        })
    }

    async fn apply(&self, session_token: &str, params: &BTreeMap<String, String>) -> Result<u16> {
        let response = self
            .client
            .post(&self.config_url)
            .header(header::COOKIE, session_token)
            .form(params)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}
