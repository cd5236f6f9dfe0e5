//! Core shared types for the launch decision pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;
use uuid::Uuid;

/// Aggregated device/attribution record sent to the backend.
///
/// Built once per resolution attempt and never mutated afterwards. Best-effort
/// fields hold the empty string when their source failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingPayload {
    pub attribution_uid: String,
    pub install_id: String,
    pub device_uuid: String,
    pub os_version: String,
    pub device_model: String,
    pub bundle_id: String,
    pub push_token: String,
    pub attribution_token: String,
}

impl TrackingPayload {
    /// Field values paired with their query keys, in canonical wire order
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("attributionUID", self.attribution_uid.as_str()),
            ("installID", self.install_id.as_str()),
            ("deviceUUID", self.device_uuid.as_str()),
            ("osVersion", self.os_version.as_str()),
            ("deviceModel", self.device_model.as_str()),
            ("bundleID", self.bundle_id.as_str()),
            ("pushToken", self.push_token.as_str()),
            ("attributionToken", self.attribution_token.as_str()),
        ]
    }

    /// Serialize as `key=value&key=value...` without any escaping
    pub fn to_query_string(&self) -> String {
        self.fields()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Mandatory device identity, collected fresh on every attempt
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceContext {
    pub os_version: String,
    pub device_model: String,
    pub bundle_id: String,
}

impl DeviceContext {
    /// True when every mandatory field carries a value
    pub fn is_complete(&self) -> bool {
        !self.os_version.is_empty() && !self.device_model.is_empty() && !self.bundle_id.is_empty()
    }
}

/// Generate the per-attempt device UUID (lowercase, hyphenated)
pub fn fresh_device_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Host/path pair supplied by remote configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLinkParts {
    pub host: String,
    pub path: String,
}

/// Backend answer to a resolution request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendLinkResponse {
    #[serde(rename = "finalURL", alias = "final_url", default)]
    pub final_url: Option<Url>,
}

/// Three-way decision handed to the presentation layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchOutcome {
    Loading,
    ShowStub,
    ShowWeb(Url),
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchOutcome::Loading => write!(f, "loading"),
            LaunchOutcome::ShowStub => write!(f, "stub"),
            LaunchOutcome::ShowWeb(url) => write!(f, "web({url})"),
        }
    }
}

/// Persisted launch decision
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionState {
    #[serde(default)]
    pub cached_url: Option<Url>,
    #[serde(default)]
    pub stub: bool,
}

/// Persisted state machine phase derived from a `DecisionState`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionPhase {
    NoDecision,
    Stub,
    Cached,
}

impl DecisionState {
    /// State after a successful resolution
    pub fn resolved(url: Url) -> Self {
        Self {
            cached_url: Some(url),
            stub: false,
        }
    }

    /// State after a failed resolution: flag set, cache untouched
    pub fn failed(&self) -> Self {
        Self {
            cached_url: self.cached_url.clone(),
            stub: true,
        }
    }

    /// Stub takes priority over a cached destination
    pub fn phase(&self) -> DecisionPhase {
        if self.stub {
            DecisionPhase::Stub
        } else if self.cached_url.is_some() {
            DecisionPhase::Cached
        } else {
            DecisionPhase::NoDecision
        }
    }

    /// Outcome implied by persisted state alone
    pub fn cached_outcome(&self) -> LaunchOutcome {
        match (self.phase(), &self.cached_url) {
            (DecisionPhase::Stub, _) => LaunchOutcome::ShowStub,
            (DecisionPhase::Cached, Some(url)) => LaunchOutcome::ShowWeb(url.clone()),
            _ => LaunchOutcome::Loading,
        }
    }
}
