//! HTTP backend resolver
//!
//! POSTs to the assembled URL with an empty body; everything the backend
//! needs travels in the `data` query parameter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use shared::{launch_debug, BackendLinkResponse, Component};

use crate::error::BackendError;
use crate::traits::BackendResolver;

pub struct HttpBackendResolver {
    client: reqwest::Client,
}

impl HttpBackendResolver {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Resolver whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Transport { message: e.to_string() })?;
        Ok(Self { client })
    }
}

impl Default for HttpBackendResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendResolver for HttpBackendResolver {
    async fn resolve(&self, url: &Url) -> Result<BackendLinkResponse, BackendError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| BackendError::Transport { message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport { message: e.to_string() })?;
        launch_debug!(Component::Backend, "📥 Backend replied {} ({} bytes)", status, body.len());

        serde_json::from_slice(&body).map_err(|e| BackendError::DecodingFailed { message: e.to_string() })
    }
}
