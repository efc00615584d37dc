//! # Backend Connector
//!
//! Startup gate for the document store. `establish` builds a client,
//! probes the primary, and hands back a verified connection. Both stages
//! run under the configured deadline; any failure is returned to the
//! caller, which must abort startup.

use std::future::Future;

use serde::Serialize;
use tokio::time::timeout;

use super::config::BackendConfig;
use super::errors::{BackendError, BackendResult};
use crate::observability::Event;

/// A way of reaching a document store
pub trait BackendConnector: Send + Sync {
    /// Live client handle, held for the life of the process
    type Handle: Send + Sync;

    /// Build a client handle for the configured target
    fn connect(
        &self,
        config: &BackendConfig,
    ) -> impl Future<Output = BackendResult<Self::Handle>> + Send;

    /// Liveness probe against the primary node
    fn verify(
        &self,
        handle: &Self::Handle,
        config: &BackendConfig,
    ) -> impl Future<Output = BackendResult<()>> + Send;
}

/// Read-only summary of the backend connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendStatus {
    pub endpoint: String,
    pub username: String,
    pub database: String,
    pub verified: bool,
}

impl BackendStatus {
    /// Status for a process running without a backend (tests, tooling)
    pub fn detached() -> Self {
        Self {
            endpoint: String::new(),
            username: String::new(),
            database: String::new(),
            verified: false,
        }
    }
}

/// A connected and verified backend
pub struct BackendConnection<H> {
    handle: H,
    status: BackendStatus,
}

impl<H> BackendConnection<H> {
    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn status(&self) -> &BackendStatus {
        &self.status
    }

    pub fn is_verified(&self) -> bool {
        self.status.verified
    }
}

/// Connect to the backend and verify it is alive.
///
/// Logs the target and identity before the attempt and again on
/// success or failure. The password is never logged.
pub async fn establish<C>(
    connector: &C,
    config: &BackendConfig,
) -> BackendResult<BackendConnection<C::Handle>>
where
    C: BackendConnector,
{
    let endpoint = config.redacted_connection_string();
    let secs = config.timeout_secs;

    tracing::info!(
        event = %Event::BackendConnectBegin,
        endpoint = %endpoint,
        username = %config.username,
        database = %config.database,
        password_set = config.password.is_some(),
        timeout_secs = secs,
        "attempting backend connection"
    );

    let attempt = async {
        let handle = timeout(config.timeout(), connector.connect(config))
            .await
            .map_err(|_| BackendError::Timeout {
                stage: "connect",
                secs,
            })??;

        timeout(config.timeout(), connector.verify(&handle, config))
            .await
            .map_err(|_| BackendError::Timeout {
                stage: "verify",
                secs,
            })??;

        Ok::<_, BackendError>(handle)
    };

    let handle = match attempt.await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!(
                event = %Event::BackendUnavailable,
                endpoint = %endpoint,
                username = %config.username,
                error = %e,
                "couldn't connect to the database"
            );
            return Err(e);
        }
    };

    tracing::info!(
        event = %Event::BackendConnected,
        endpoint = %endpoint,
        username = %config.username,
        "connected to backend"
    );

    Ok(BackendConnection {
        handle,
        status: BackendStatus {
            endpoint,
            username: config.username.clone(),
            database: config.database.clone(),
            verified: true,
        },
    })
}
