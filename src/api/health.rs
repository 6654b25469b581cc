//! Service metadata and health endpoints

use crate::state::HasServices;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize, Deserialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiIndex {
    pub message: String,
    pub version: String,
    pub api: Vec<EndpointInfo>,
}

/// API index document served at `/`
pub async fn index() -> impl IntoResponse {
    Json(ApiIndex {
        message: "Welcome to the Hotel Booking API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        api: vec![
            EndpointInfo {
                method: "GET".to_string(),
                path: "/api/rooms".to_string(),
                description: "Get all rooms".to_string(),
            },
            EndpointInfo {
                method: "GET".to_string(),
                path: "/api/rooms/top-rated".to_string(),
                description: "Get top rated rooms".to_string(),
            },
            EndpointInfo {
                method: "GET".to_string(),
                path: "/api/reviews".to_string(),
                description: "Get all reviews".to_string(),
            },
        ],
    })
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint
pub async fn ready<S: HasServices>(State(state): State<S>) -> impl IntoResponse {
    if state.check_ready().await {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    }
}
