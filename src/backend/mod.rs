//! # Backend Module
//!
//! Connectivity to the external document store.
//!
//! The connection is established and verified once, before the HTTP
//! server binds. Failure at either stage is fatal to startup: callers log
//! the error and exit without serving a single request.
//!
//! # Components
//!
//! - `BackendConfig` - connection settings resolved from the environment
//! - `BackendConnector` - connect + liveness probe seam
//! - `MongoConnector` - connector over the `mongodb` driver
//! - `establish` - deadline-bounded connect and verify

pub mod config;
pub mod connector;
pub mod errors;
pub mod mongo;

pub use config::BackendConfig;
pub use connector::{establish, BackendConnection, BackendConnector, BackendStatus};
pub use errors::{BackendError, BackendResult};
pub use mongo::MongoConnector;
