//! album-api - album catalog HTTP service backed by a document store

pub mod album;
pub mod backend;
pub mod cli;
pub mod http_server;
pub mod observability;
