//! HTTP API handler test infrastructure
//!
//! Drives the PRODUCTION `build_router` with `TestAppState`, so these
//! tests cover the real handler code in `src/api/*.rs`, including the
//! bearer-token extractor, without any external services.

pub mod review_http_test;

use crate::api::{
    create_test_jwt_manager, test_jwt_config, TestBookingRepository, TestReviewRepository,
    TestRoomRepository, TestStore,
};
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use stayhub_core::config::{Config, DatabaseConfig};
use stayhub_core::jwt::JwtManager;
use stayhub_core::server::build_router;
use stayhub_core::service::{BookingService, ReviewService, RoomService};
use stayhub_core::state::HasServices;

// ============================================================================
// Test Configuration
// ============================================================================

pub fn create_test_config() -> Config {
    Config {
        http_host: "127.0.0.1".to_string(),
        http_port: 5000,
        database: DatabaseConfig {
            url: "mongodb://localhost:27017".to_string(),
            name: "stayhub_test".to_string(),
        },
        jwt: test_jwt_config(),
    }
}

// ============================================================================
// Test AppState (uses in-memory repositories)
// ============================================================================

/// Test-friendly version of AppState using the in-memory store
#[derive(Clone)]
pub struct TestAppState {
    pub config: Arc<Config>,
    pub room_service: Arc<RoomService<TestRoomRepository>>,
    pub booking_service: Arc<BookingService<TestBookingRepository>>,
    pub review_service: Arc<ReviewService<TestReviewRepository, TestBookingRepository>>,
    pub jwt_manager: JwtManager,
    // Raw store handle for test seeding and assertions
    pub store: Arc<TestStore>,
}

impl TestAppState {
    pub fn new() -> Self {
        let store = TestStore::new();

        let room_repo = Arc::new(TestRoomRepository::new(store.clone()));
        let booking_repo = Arc::new(TestBookingRepository::new(store.clone()));
        let review_repo = Arc::new(TestReviewRepository::new(store.clone()));

        Self {
            config: Arc::new(create_test_config()),
            room_service: Arc::new(RoomService::new(room_repo)),
            booking_service: Arc::new(BookingService::new(booking_repo.clone())),
            review_service: Arc::new(ReviewService::new(review_repo, booking_repo)),
            jwt_manager: create_test_jwt_manager(),
            store,
        }
    }
}

impl HasServices for TestAppState {
    type RoomRepo = TestRoomRepository;
    type BookingRepo = TestBookingRepository;
    type ReviewRepo = TestReviewRepository;

    fn config(&self) -> &Config {
        &self.config
    }

    fn room_service(&self) -> &RoomService<Self::RoomRepo> {
        &self.room_service
    }

    fn booking_service(&self) -> &BookingService<Self::BookingRepo> {
        &self.booking_service
    }

    fn review_service(&self) -> &ReviewService<Self::ReviewRepo, Self::BookingRepo> {
        &self.review_service
    }

    fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    async fn check_ready(&self) -> bool {
        true
    }
}

/// Build a router for HTTP handler tests using the PRODUCTION router.
pub fn build_test_router(state: TestAppState) -> Router {
    build_router(state)
}

// ============================================================================
// HTTP Test Helpers
// ============================================================================

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();

    let value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

pub async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, Method::GET, path, None, None).await
}

pub async fn get_json_auth(app: &Router, path: &str, token: &str) -> (StatusCode, Value) {
    send(app, Method::GET, path, Some(token), None).await
}

pub async fn post_json<T: Serialize>(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: &T,
) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        path,
        token,
        Some(serde_json::to_value(body).unwrap()),
    )
    .await
}

pub async fn put_json<T: Serialize>(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: &T,
) -> (StatusCode, Value) {
    send(
        app,
        Method::PUT,
        path,
        token,
        Some(serde_json::to_value(body).unwrap()),
    )
    .await
}

pub async fn delete_json<T: Serialize>(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: &T,
) -> (StatusCode, Value) {
    send(
        app,
        Method::DELETE,
        path,
        token,
        Some(serde_json::to_value(body).unwrap()),
    )
    .await
}
