//! CLI command implementations
//!
//! Startup sequence for `serve`:
//! 1. Resolve backend configuration from the environment
//! 2. Connect to the backend and probe the primary (deadline-bounded)
//! 3. Seed the album store
//! 4. Bind the HTTP listener and serve
//!
//! A failure in steps 1-2 is fatal: it is logged and returned before the
//! listener exists, so no request is ever served.

use std::sync::Arc;

use serde_json::json;

use crate::album::AlbumStore;
use crate::backend::{establish, BackendConfig, BackendConnector, MongoConnector};
use crate::http_server::{AlbumState, HttpServer, HttpServerConfig};
use crate::observability::{init_logging, log_event, Event};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_format);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve => serve(),
        Command::Ping => ping(),
    }
}

/// Resolve the backend configuration, logging fatal problems
pub fn load_config() -> CliResult<BackendConfig> {
    let config = BackendConfig::from_env().map_err(|e| {
        tracing::error!(event = %Event::ConfigInvalid, error = %e, "invalid backend configuration");
        CliError::from(e)
    })?;

    tracing::info!(
        event = %Event::ConfigLoaded,
        endpoint = %config.redacted_connection_string(),
        username = %config.username,
        database = %config.database,
        "backend configuration loaded"
    );

    Ok(config)
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Start the album service against MongoDB
pub fn serve() -> CliResult<()> {
    log_event(Event::StartupBegin, "starting album service");
    let config = load_config()?;

    runtime()?.block_on(boot(
        &MongoConnector::new(),
        &config,
        HttpServerConfig::default(),
    ))
}

/// Check backend connectivity and exit
pub fn ping() -> CliResult<()> {
    let config = load_config()?;

    let status = runtime()?.block_on(async {
        let connection = establish(&MongoConnector::new(), &config).await?;
        Ok::<_, CliError>(connection.status().clone())
    })?;

    write_json(json!({
        "connected": status.verified,
        "endpoint": status.endpoint,
        "username": status.username,
        "database": status.database,
    }))
}

/// Gate startup on the backend, then serve.
///
/// The connection is held until the server stops. The listener is only
/// bound after the backend has been verified.
pub async fn boot<C>(
    connector: &C,
    backend_config: &BackendConfig,
    http_config: HttpServerConfig,
) -> CliResult<()>
where
    C: BackendConnector,
{
    let connection = establish(connector, backend_config).await?;

    let store = Arc::new(AlbumStore::seeded());
    let state = AlbumState::new(store, connection.status().clone());
    let server = HttpServer::with_config(http_config, state);

    server.start().await.map_err(|e| {
        tracing::error!(event = %Event::ServeFailed, error = %e, "HTTP server failed");
        CliError::boot_failed(format!("HTTP server failed: {}", e))
    })?;

    drop(connection);
    Ok(())
}
