//! Launch decision library
//!
//! Decides on every launch whether the client shows a cached destination, a
//! freshly resolved one, or the stub experience. The orchestrator sequences
//! payload collection, remote config lookup, URL assembly and the backend
//! handshake, persists the decision, and degrades to the stub on any failure.

pub mod core;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use core::{build_request_url, DecisionUpdate, DecisionWriter, Presentation, TrackingPayloadBuilder};
pub use error::{BackendError, CollectorError, LaunchError, LaunchResult, RemoteConfigError, StoreError};
pub use orchestrator::{LaunchOrchestrator, ResolutionReport, ResolveOptions};
pub use traits::{
    BackendResolver, CookiePersistence, DecisionStore, DeviceCollector, MockBackendResolver, MockCookiePersistence,
    MockDecisionStore, MockDeviceCollector, MockRemoteConfigSource, RemoteConfigSource,
};
