//! # HTTP Server Module
//!
//! Axum server exposing the album catalog.
//!
//! # Endpoints
//!
//! - `GET /albums` - List every album in insertion order
//! - `POST /albums` - Create an album
//! - `GET /albums/:id` - Look up one album
//! - `GET /health` - Health check

pub mod album_routes;
pub mod config;
pub mod observability_routes;
pub mod response;
pub mod server;

pub use album_routes::AlbumState;
pub use config::HttpServerConfig;
pub use server::HttpServer;
