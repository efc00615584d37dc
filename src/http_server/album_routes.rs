//! Album HTTP Routes
//!
//! List, create and look up albums by id.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::response::IndentedJson;
use crate::album::{Album, AlbumError, AlbumStore};
use crate::backend::BackendStatus;
use crate::observability::Event;

// ==================
// Shared State
// ==================

/// State shared across album and health handlers
#[derive(Debug)]
pub struct AlbumState {
    pub store: Arc<AlbumStore>,
    pub backend: BackendStatus,
}

impl AlbumState {
    pub fn new(store: Arc<AlbumStore>, backend: BackendStatus) -> Self {
        Self { store, backend }
    }

    /// Seeded store with no backend attached
    pub fn detached() -> Self {
        Self::new(Arc::new(AlbumStore::seeded()), BackendStatus::detached())
    }
}

// ==================
// Album Routes
// ==================

/// Create album routes
pub fn album_routes(state: Arc<AlbumState>) -> Router {
    Router::new()
        .route("/albums", get(list_albums_handler).post(create_album_handler))
        .route("/albums/:id", get(get_album_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_albums_handler(State(state): State<Arc<AlbumState>>) -> IndentedJson<Vec<Album>> {
    IndentedJson(state.store.list())
}

async fn create_album_handler(
    State(state): State<Arc<AlbumState>>,
    payload: Result<Json<Album>, JsonRejection>,
) -> Result<(StatusCode, IndentedJson<Album>), AlbumError> {
    let Json(album) = payload.map_err(|rejection| {
        let err = AlbumError::MalformedPayload(rejection.body_text());
        tracing::warn!(event = %Event::AlbumRejected, error = %err, "rejected album payload");
        err
    })?;

    let created = state.store.append(album).map_err(|err| {
        tracing::warn!(event = %Event::AlbumRejected, error = %err, "rejected album");
        err
    })?;

    tracing::info!(event = %Event::AlbumCreated, id = %created.id, "album created");
    Ok((StatusCode::CREATED, IndentedJson(created)))
}

async fn get_album_handler(
    State(state): State<Arc<AlbumState>>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Album>, AlbumError> {
    match state.store.find_by_id(&id) {
        Some(album) => Ok(IndentedJson(album)),
        None => {
            tracing::debug!(event = %Event::AlbumNotFound, id = %id, "album not found");
            Err(AlbumError::NotFound)
        }
    }
}
