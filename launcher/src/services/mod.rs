//! Service implementations
//!
//! Production implementations of the collaborator traits. These handle the
//! actual I/O; the orchestrator only ever sees the traits.

pub mod backend;
pub mod cookies;
pub mod decision_store;
pub mod device;
pub mod push_token;
pub mod remote_config;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use backend::HttpBackendResolver;
pub use cookies::LoggingCookiePersistence;
pub use decision_store::{FileDecisionStore, MemoryDecisionStore};
pub use device::{DeviceSettings, EnvDeviceCollector};
pub use push_token::PushTokenStore;
pub use remote_config::{HttpRemoteConfigSource, DEFAULT_DATABASE_URL};
