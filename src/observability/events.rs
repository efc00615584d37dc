//! Observability events
//!
//! Every lifecycle log line carries one of these as its `event` field.
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the album service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    StartupBegin,
    /// Backend configuration resolved
    ConfigLoaded,
    /// Backend configuration rejected (FATAL)
    ConfigInvalid,
    /// HTTP listener bound, ready for requests
    Serving,
    /// HTTP server stopped with an error (FATAL)
    ServeFailed,

    // Backend
    /// Connection attempt begins
    BackendConnectBegin,
    /// Connection established and verified
    BackendConnected,
    /// Connection or liveness probe failed (FATAL)
    BackendUnavailable,

    // Albums
    /// Album appended to the store
    AlbumCreated,
    /// Create request refused (bad payload or duplicate id)
    AlbumRejected,
    /// Lookup found no album
    AlbumNotFound,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StartupBegin => "STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigInvalid => "CONFIG_INVALID",
            Event::Serving => "SERVING",
            Event::ServeFailed => "SERVE_FAILED",

            Event::BackendConnectBegin => "BACKEND_CONNECT_BEGIN",
            Event::BackendConnected => "BACKEND_CONNECTED",
            Event::BackendUnavailable => "BACKEND_UNAVAILABLE",

            Event::AlbumCreated => "ALBUM_CREATED",
            Event::AlbumRejected => "ALBUM_REJECTED",
            Event::AlbumNotFound => "ALBUM_NOT_FOUND",
        }
    }

    /// Returns true if this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Event::ConfigInvalid | Event::BackendUnavailable | Event::ServeFailed
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::StartupBegin,
            Event::ConfigLoaded,
            Event::ConfigInvalid,
            Event::Serving,
            Event::ServeFailed,
            Event::BackendConnectBegin,
            Event::BackendConnected,
            Event::BackendUnavailable,
            Event::AlbumCreated,
            Event::AlbumRejected,
            Event::AlbumNotFound,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::BackendUnavailable.is_fatal());
        assert!(Event::ConfigInvalid.is_fatal());
        assert!(Event::ServeFailed.is_fatal());
        assert!(!Event::BackendConnected.is_fatal());
        assert!(!Event::AlbumNotFound.is_fatal());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::StartupBegin), "STARTUP_BEGIN");
        assert_eq!(format!("{}", Event::BackendUnavailable), "BACKEND_UNAVAILABLE");
    }
}
