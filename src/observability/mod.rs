//! Observability for the album service
//!
//! Structured logging on top of `tracing`:
//! - Typed lifecycle events (`Event`) carried in an `event` field
//! - One global subscriber, pretty or JSON
//! - Fatal events logged at ERROR
//!
//! # Usage
//!
//! ```ignore
//! use album_api::observability::{init_logging, log_event, Event, LogFormat};
//!
//! init_logging(LogFormat::Json);
//! log_event(Event::StartupBegin, "starting album service");
//! tracing::info!(event = %Event::Serving, addr = "127.0.0.1:8080", "serving");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, log_event, LogFormat, DEFAULT_FILTER};
