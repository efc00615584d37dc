//! Startup Gate Tests
//!
//! The HTTP listener must only exist after the backend is verified:
//! - Verify failure aborts startup with BOOT_FAILED and nothing listens
//! - Connect failure aborts startup the same way
//! - A healthy backend leads to a serving process

use std::net::{SocketAddr, TcpListener as StdListener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use album_api::backend::{BackendConfig, BackendConnector, BackendError, BackendResult};
use album_api::cli::{boot, CliErrorCode};
use album_api::http_server::HttpServerConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

// =============================================================================
// Helper Functions
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Healthy,
    ConnectFails,
    VerifyFails,
}

struct FakeConnector {
    outcome: Outcome,
    verified: Arc<AtomicBool>,
}

impl FakeConnector {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            verified: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl BackendConnector for FakeConnector {
    type Handle = ();

    async fn connect(&self, _config: &BackendConfig) -> BackendResult<()> {
        match self.outcome {
            Outcome::ConnectFails => Err(BackendError::Connection("connection refused".into())),
            _ => Ok(()),
        }
    }

    async fn verify(&self, _handle: &(), _config: &BackendConfig) -> BackendResult<()> {
        match self.outcome {
            Outcome::VerifyFails => Err(BackendError::Liveness("server selection timeout".into())),
            _ => {
                self.verified.store(true, Ordering::SeqCst);
                Ok(())
            }
        }
    }
}

fn backend_config() -> BackendConfig {
    BackendConfig {
        connection_string: "mongodb://localhost:27017".to_string(),
        timeout_secs: 1,
        ..Default::default()
    }
}

/// Reserve a free local port, then release it for the server under test
fn free_port() -> u16 {
    let listener = StdListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn addr(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

// =============================================================================
// Fatal Startup
// =============================================================================

/// Liveness failure stops startup before the port is bound.
#[tokio::test]
async fn test_verify_failure_never_binds() {
    let port = free_port();
    let connector = FakeConnector::new(Outcome::VerifyFails);

    let err = boot(&connector, &backend_config(), HttpServerConfig::with_port(port))
        .await
        .unwrap_err();

    assert_eq!(err.code(), &CliErrorCode::BootFailed);
    assert!(err.message().contains("liveness"));
    assert!(TcpStream::connect(addr(port)).await.is_err());
}

/// Connect failure stops startup the same way.
#[tokio::test]
async fn test_connect_failure_never_binds() {
    let port = free_port();
    let connector = FakeConnector::new(Outcome::ConnectFails);

    let err = boot(&connector, &backend_config(), HttpServerConfig::with_port(port))
        .await
        .unwrap_err();

    assert_eq!(err.code(), &CliErrorCode::BootFailed);
    assert!(!connector.verified.load(Ordering::SeqCst));
    assert!(TcpStream::connect(addr(port)).await.is_err());
}

// =============================================================================
// Healthy Startup
// =============================================================================

/// A verified backend leads to a listener serving the seeded catalog.
#[tokio::test]
async fn test_healthy_backend_serves() {
    let port = free_port();
    let connector = FakeConnector::new(Outcome::Healthy);
    let verified = connector.verified.clone();

    let server = tokio::spawn(async move {
        boot(&connector, &backend_config(), HttpServerConfig::with_port(port)).await
    });

    let mut stream = None;
    for _ in 0..100 {
        if let Ok(s) = TcpStream::connect(addr(port)).await {
            stream = Some(s);
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    let mut stream = stream.expect("server never started listening");

    assert!(verified.load(Ordering::SeqCst));

    stream
        .write_all(b"GET /albums/1 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Blue Train"));

    server.abort();
}
