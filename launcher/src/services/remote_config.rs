//! Realtime-database backed remote config source
//!
//! Reads the whole database root through the REST endpoint (`{db}/.json`)
//! and decodes it as `{ "host": ..., "path": ... }`.

use async_trait::async_trait;
use url::Url;

use shared::{launch_debug, Component, RemoteLinkParts};

use crate::error::RemoteConfigError;
use crate::traits::RemoteConfigSource;

/// Database the app reads its link parts from by default
pub const DEFAULT_DATABASE_URL: &str = "https://zm-team-21088-default-rtdb.firebaseio.com/";

pub struct HttpRemoteConfigSource {
    database_url: Url,
    client: reqwest::Client,
}

impl HttpRemoteConfigSource {
    pub fn new(database_url: Url) -> Self {
        Self::with_client(database_url, reqwest::Client::new())
    }

    pub fn with_client(database_url: Url, client: reqwest::Client) -> Self {
        Self { database_url, client }
    }

    /// REST endpoint for the database root
    pub fn endpoint(&self) -> Result<Url, RemoteConfigError> {
        let mut base = self.database_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(".json").map_err(|e| RemoteConfigError::DecodingFailed {
            message: format!("invalid database URL: {e}"),
        })
    }
}

#[async_trait]
impl RemoteConfigSource for HttpRemoteConfigSource {
    async fn fetch(&self) -> Result<RemoteLinkParts, RemoteConfigError> {
        let endpoint = self.endpoint()?;
        launch_debug!(Component::RemoteConfig, "📥 Fetching link parts from {}", endpoint);

        let response = self.client.get(endpoint).send().await.map_err(|e| {
            launch_debug!(Component::RemoteConfig, "Remote config transport error: {}", e);
            RemoteConfigError::InvalidPayload
        })?;

        if !response.status().is_success() {
            launch_debug!(Component::RemoteConfig, "Remote config status {}", response.status());
            return Err(RemoteConfigError::InvalidPayload);
        }

        let bytes = response.bytes().await.map_err(|_| RemoteConfigError::InvalidPayload)?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| RemoteConfigError::DecodingFailed {
                message: e.to_string(),
            })?;

        if value.is_null() {
            return Err(RemoteConfigError::InvalidPayload);
        }

        serde_json::from_value(value).map_err(|e| RemoteConfigError::DecodingFailed {
            message: e.to_string(),
        })
    }
}
