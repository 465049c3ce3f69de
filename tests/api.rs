//! Route-level tests: every handler exercised through the full axum Router
//! with a scripted router transport behind the client.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use wifi_relay::config::{RelayConfig, RouterConfig};
use wifi_relay::error::Result;
use wifi_relay::router::{LoginReply, RouterClient, RouterTransport};
use wifi_relay::server::routes;
use wifi_relay::server::state::AppState;

/// Scripted transport: configurable login outcome and privileged-call
/// status, with call counters.
struct ScriptedTransport {
    login_ok: bool,
    apply_status: u16,
    logins: AtomicUsize,
    applies: AtomicUsize,
}

impl ScriptedTransport {
    fn new(login_ok: bool, apply_status: u16) -> Self {
        Self {
            login_ok,
            apply_status,
            logins: AtomicUsize::new(0),
            applies: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RouterTransport for ScriptedTransport {
    async fn login(&self, _username: &str, _digest: &str) -> Result<LoginReply> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        if self.login_ok {
            Ok(LoginReply {
                status: 200,
                session_token: Some("sid=scripted".to_string()),
            })
        } else {
            Ok(LoginReply {
                status: 403,
                session_token: None,
            })
        }
    }

    async fn apply(&self, _token: &str, _params: &BTreeMap<String, String>) -> Result<u16> {
        self.applies.fetch_add(1, Ordering::SeqCst);
        Ok(self.apply_status)
    }
}

fn app_with(transport: Arc<ScriptedTransport>) -> (Router, Arc<RouterClient>) {
    let config = RelayConfig::default();
    let client = Arc::new(RouterClient::new(config.router.clone(), transport));
    let state = AppState::new(client.clone(), Arc::new(config));
    (routes::build(state), client)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_without_session() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport.clone());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["router_connected"], false);
    assert!(body["timestamp"].is_i64());

    // Health must never authenticate as a side effect
    assert_eq!(transport.logins.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_health_reflects_fresh_session() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, client) = app_with(transport);

    client.authenticate().await.unwrap();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["router_connected"], true);
}

#[tokio::test]
async fn test_activate_missing_code_is_400() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport.clone());

    let response = app.oneshot(post_json("/activate", "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());

    // Validation fails before any router traffic
    assert_eq!(transport.logins.load(Ordering::SeqCst), 0);
    assert_eq!(transport.applies.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_activate_empty_code_is_400() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport.clone());

    let response = app
        .oneshot(post_json("/activate", r#"{"code":""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(transport.logins.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_activate_success_echoes_code() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport.clone());

    let response = app
        .oneshot(post_json("/activate", r#"{"code":"ABC123"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["code"], "ABC123");
    assert!(body["message"].is_string());

    assert_eq!(transport.logins.load(Ordering::SeqCst), 1);
    assert_eq!(transport.applies.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_activate_auth_failure_is_500_with_details() {
    let transport = Arc::new(ScriptedTransport::new(false, 200));
    let (app, _client) = app_with(transport.clone());

    let response = app
        .oneshot(post_json("/activate", r#"{"code":"ABC123"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
    assert!(body["details"].is_string());

    assert_eq!(transport.applies.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_activate_router_error_status_is_500() {
    let transport = Arc::new(ScriptedTransport::new(true, 503));
    let (app, _client) = app_with(transport);

    let response = app
        .oneshot(post_json("/activate", r#"{"code":"ABC123"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["details"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_activate_malformed_json_is_500() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport.clone());

    let response = app
        .oneshot(post_json("/activate", "not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
    assert!(body["details"].is_string());

    assert_eq!(transport.logins.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_test_router_success() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, client) = app_with(transport);

    let response = app
        .oneshot(Request::get("/test-router").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    // A successful probe leaves a fresh session behind
    assert!(client.is_connected());
}

#[tokio::test]
async fn test_test_router_failure() {
    let transport = Arc::new(ScriptedTransport::new(false, 200));
    let (app, _client) = app_with(transport);

    let response = app
        .oneshot(Request::get("/test-router").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport);

    let response = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_cors_preflight() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/activate")
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_cors_headers_on_simple_request() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport);

    let request = Request::get("/health")
        .header(header::ORIGIN, "http://localhost:8080")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_fresh_session_survives_across_requests() {
    let transport = Arc::new(ScriptedTransport::new(true, 200));
    let (app, _client) = app_with(transport.clone());

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(post_json("/activate", r#"{"code":"ABC123"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // One login serves all three activations while the session stays fresh
    assert_eq!(transport.logins.load(Ordering::SeqCst), 1);
    assert_eq!(transport.applies.load(Ordering::SeqCst), 3);
}

#[test]
fn test_default_router_config_is_private() {
    let config = RouterConfig::default();
    assert!(config.host.starts_with("192.168."));
}
