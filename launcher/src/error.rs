//! Launcher error types
//!
//! Collaborator boundaries each get their own error enum. `LaunchError` is the
//! orchestrator's internal taxonomy: every variant collapses to a stub outcome
//! inside `resolve()` and is only ever logged or inspected by tests.

use thiserror::Error;

/// Failure of an individual device/attribution sub-collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectorError {
    #[error("Source unavailable: {source_name}")]
    Unavailable { source_name: String },

    #[error("Platform identifiers unavailable: {field}")]
    MissingIdentity { field: String },
}

/// Remote configuration lookup failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteConfigError {
    #[error("Remote config has no retrievable value")]
    InvalidPayload,

    #[error("Remote config value is not conformant: {message}")]
    DecodingFailed { message: String },
}

/// Backend resolution failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Backend returned non-success status {status}")]
    InvalidResponse { status: u16 },

    #[error("Backend body could not be decoded: {message}")]
    DecodingFailed { message: String },

    #[error("Backend transport error: {message}")]
    Transport { message: String },
}

/// Decision store persistence failure
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Decision store I/O failed on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Decision store content malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Decision writer is no longer running")]
    WriterClosed,
}

/// Why a resolution attempt ended in the stub outcome
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Tracking payload could not be collected: {reason}")]
    PayloadUncollectible { reason: String },

    #[error("Remote config unavailable: {0}")]
    RemoteConfigUnavailable(#[from] RemoteConfigError),

    #[error("Request URL assembly failed: {reason}")]
    AssemblyFailed { reason: String },

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),

    #[error("Backend returned no final URL")]
    BackendEmptyResult,

    #[error("Decision store error: {0}")]
    Store(#[from] StoreError),
}

impl LaunchError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchError::PayloadUncollectible { .. } => "payload_uncollectible",
            LaunchError::RemoteConfigUnavailable(_) => "remote_config_unavailable",
            LaunchError::AssemblyFailed { .. } => "assembly_failed",
            LaunchError::BackendUnavailable(_) => "backend_unavailable",
            LaunchError::BackendEmptyResult => "backend_empty_result",
            LaunchError::Store(_) => "store",
        }
    }
}

pub type LaunchResult<T> = Result<T, LaunchError>;
pub type StoreResult<T> = Result<T, StoreError>;
pub type CollectorResult<T> = Result<T, CollectorError>;
