//! # Album Errors
//!
//! Request-level errors for the album catalog. None of these are fatal;
//! each maps to an HTTP status and a `{"message": ...}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::http_server::response::IndentedJson;

/// Result type for album operations
pub type AlbumResult<T> = Result<T, AlbumError>;

/// Album catalog errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlbumError {
    /// No album carries the requested id
    #[error("album not found")]
    NotFound,

    /// An album with this id is already stored
    #[error("album already exists")]
    DuplicateId(String),

    /// Request body could not be read as an album
    #[error("invalid album payload: {0}")]
    MalformedPayload(String),
}

impl AlbumError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AlbumError::NotFound => StatusCode::NOT_FOUND,
            AlbumError::DuplicateId(_) => StatusCode::CONFLICT,
            AlbumError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Body of every album error response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for AlbumError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = IndentedJson(MessageResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
