//! Log subscriber setup
//!
//! One subscriber per process, installed by the CLI before anything else
//! runs. The filter comes from `RUST_LOG` and defaults to `info`.

use std::fmt;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use super::events::Event;

/// Default filter when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, one event per line
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Calling this twice is harmless; the first subscriber stays.
pub fn init_logging(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Log a lifecycle event with no extra fields.
///
/// Fatal events go out at ERROR, everything else at INFO.
pub fn log_event(event: Event, message: &str) {
    if event.is_fatal() {
        tracing::error!(event = %event, "{}", message);
    } else {
        tracing::info!(event = %event, "{}", message);
    }
}
