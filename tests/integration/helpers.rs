//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use rifa_core::config::AppConfig;
use rifa_database::repositories::ReservationRepositoryDispatch;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        let config = AppConfig::load("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let repo = Arc::new(ReservationRepositoryDispatch::memory());
        let state =
            rifa_api::app::build_state(config.clone(), repo).expect("Failed to build state");
        let router = rifa_api::router::build_router(state);

        Self { router, config }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a reservation and return the response
    pub async fn create_reservation(&self, code: &str, email: &str, combo_size: i32) -> TestResponse {
        self.request(
            "POST",
            "/api/raffle/reservations",
            Some(serde_json::json!({
                "code": code,
                "buyer_name": "Ana",
                "phone": "999111222",
                "city": "Lima",
                "email": email,
                "combo_size": combo_size,
            })),
        )
        .await
    }

    /// Confirm a reservation and return the response
    pub async fn confirm_reservation(&self, code: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/raffle/reservations/confirm",
            Some(serde_json::json!({ "code": code })),
        )
        .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` object of a success envelope
    pub fn data(&self) -> &Value {
        self.body.get("data").expect("Response has no data field")
    }

    /// The machine-readable error reason, if any
    pub fn reason(&self) -> Option<&str> {
        self.body.get("reason").and_then(|v| v.as_str())
    }
}
