//! Trait definitions with mockall annotations for testing
//!
//! Every collaborator the launch pipeline talks to is reached through one of
//! these traits. Production implementations live in `services`; tests inject
//! the generated mocks.

use shared::{BackendLinkResponse, DecisionState, DeviceContext, RemoteLinkParts};
use url::Url;

use crate::error::{BackendError, CollectorResult, RemoteConfigError, StoreResult};

/// Durable persistence for the launch decision
///
/// Only the orchestrator's writer task calls `save`.
#[mockall::automock]
#[async_trait::async_trait]
pub trait DecisionStore: Send + Sync {
    /// Load the persisted decision, or the empty state if nothing was stored
    async fn load(&self) -> StoreResult<DecisionState>;

    /// Persist the full decision state
    async fn save(&self, state: &DecisionState) -> StoreResult<()>;
}

/// Device identity and attribution sources
///
/// Each method is one sub-collection of the tracking payload. Failures of
/// anything but `device_context` are degraded to empty strings by the caller.
#[mockall::automock]
#[async_trait::async_trait]
pub trait DeviceCollector: Send + Sync {
    /// Attribution SDK identifier (synchronous, best-effort)
    fn attribution_uid(&self) -> String;

    /// App installation identifier
    async fn install_id(&self) -> CollectorResult<String>;

    /// Platform attribution token
    async fn attribution_token(&self) -> CollectorResult<String>;

    /// Push token previously delivered by the registration callback
    fn cached_push_token(&self) -> Option<String>;

    /// Freshly fetched push token
    async fn fetch_push_token(&self) -> CollectorResult<String>;

    /// Push token the platform SDK has on hand right now
    fn instant_push_token(&self) -> Option<String>;

    /// Mandatory device identity; failure aborts payload collection
    async fn device_context(&self) -> CollectorResult<DeviceContext>;
}

/// Remote configuration lookup for the backend host/path pair
#[mockall::automock]
#[async_trait::async_trait]
pub trait RemoteConfigSource: Send + Sync {
    /// Fetch the current link parts
    async fn fetch(&self) -> Result<RemoteLinkParts, RemoteConfigError>;
}

/// Backend handshake that turns the assembled URL into a final destination
#[mockall::automock]
#[async_trait::async_trait]
pub trait BackendResolver: Send + Sync {
    /// POST to `url` (no body) and decode the response
    async fn resolve(&self, url: &Url) -> Result<BackendLinkResponse, BackendError>;
}

/// Cookie persistence side effect triggered after a successful resolution
///
/// Fire-and-forget: implementations swallow their own failures.
#[mockall::automock]
pub trait CookiePersistence: Send + Sync {
    fn persist_cookies(&self);
}
