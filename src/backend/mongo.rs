//! # MongoDB Connector
//!
//! `BackendConnector` over the official `mongodb` driver.
//!
//! The client is always built from the resolved connection string.
//! Credentials are only applied when that string asks for authentication
//! (user info, `authSource` or `authMechanism`); otherwise the client
//! connects without them.

use mongodb::bson::doc;
use mongodb::options::{
    ClientOptions, ReadPreference, SelectionCriteria, ServerApi, ServerApiVersion,
};
use mongodb::Client;

use super::config::BackendConfig;
use super::connector::BackendConnector;
use super::errors::{BackendError, BackendResult};

const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Connector for a MongoDB deployment
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

impl MongoConnector {
    pub fn new() -> Self {
        Self
    }

    /// Parse the connection string and layer the configured settings on top
    pub async fn client_options(config: &BackendConfig) -> BackendResult<ClientOptions> {
        let mut options = ClientOptions::parse(config.connection_string.as_str())
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        options.app_name = Some(APP_NAME.to_string());
        options.connect_timeout = Some(config.timeout());
        options.server_selection_timeout = Some(config.timeout());
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        apply_credentials(&mut options, config);

        Ok(options)
    }
}

/// Fill in identity and secret for targets that require authentication
fn apply_credentials(options: &mut ClientOptions, config: &BackendConfig) {
    let Some(credential) = options.credential.as_mut() else {
        return;
    };
    if credential.username.is_none() {
        credential.username = Some(config.username.clone());
    }
    if credential.password.is_none() {
        credential.password = config.password.clone();
    }
}

impl BackendConnector for MongoConnector {
    type Handle = Client;

    async fn connect(&self, config: &BackendConfig) -> BackendResult<Client> {
        let options = Self::client_options(config).await?;
        Client::with_options(options).map_err(|e| BackendError::Connection(e.to_string()))
    }

    async fn verify(&self, handle: &Client, config: &BackendConfig) -> BackendResult<()> {
        handle
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
            .await
            .map(|_| ())
            .map_err(|e| BackendError::Liveness(e.to_string()))
    }
}
