//! Observability HTTP Routes
//!
//! Health check reporting the backend connection and catalog size.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::album_routes::AlbumState;
use crate::backend::BackendStatus;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend: BackendStatus,
    pub albums: usize,
}

/// Health check route
pub fn health_routes(state: Arc<AlbumState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AlbumState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.backend.clone(),
        albums: state.store.len(),
    };

    (StatusCode::OK, Json(response))
}
