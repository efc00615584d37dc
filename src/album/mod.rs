//! # Album Catalog
//!
//! The record model and the in-memory store that owns it.
//!
//! The store is an owned object shared with the HTTP layer through `Arc`.
//! Every read and write goes through a single lock, so concurrent creates
//! never interleave with listings or lookups.

pub mod errors;
pub mod model;
pub mod store;

pub use errors::{AlbumError, AlbumResult};
pub use model::{seed_albums, Album};
pub use store::AlbumStore;
