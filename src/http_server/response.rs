//! Indented JSON responses
//!
//! Album payloads are written pretty-printed, which keeps `curl` output
//! readable without a formatter.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Like `axum::Json`, but pretty-printed
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentedJson<T>(pub T);

impl<T> IntoResponse for IndentedJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                body,
            )
                .into_response(),
            Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}
