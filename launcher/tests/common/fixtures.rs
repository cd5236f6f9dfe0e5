//! Test fixtures and data for launcher tests
//!
//! Consistent test data shared by all test suites.

use shared::{BackendLinkResponse, DecisionState, DeviceContext, RemoteLinkParts};
use url::Url;

/// Standard test data and fixtures
pub struct TestFixtures;

#[allow(dead_code)]
impl TestFixtures {
    pub const HOST: &'static str = "api.example.com";
    pub const PATH: &'static str = "/r";
    pub const FINAL_URL: &'static str = "https://dest.example.com/x";
    pub const STALE_URL: &'static str = "https://old.example.com/cached";
    pub const BUNDLE_ID: &'static str = "com.example.app";

    pub fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    pub fn final_url() -> Url {
        Self::url(Self::FINAL_URL)
    }

    pub fn stale_url() -> Url {
        Self::url(Self::STALE_URL)
    }

    pub fn link_parts() -> RemoteLinkParts {
        RemoteLinkParts {
            host: Self::HOST.to_string(),
            path: Self::PATH.to_string(),
        }
    }

    /// Link parts that cannot form a valid URL
    pub fn broken_link_parts() -> RemoteLinkParts {
        RemoteLinkParts {
            host: "bad host".to_string(),
            path: Self::PATH.to_string(),
        }
    }

    pub fn device_context() -> DeviceContext {
        DeviceContext {
            os_version: "17.2".to_string(),
            device_model: "iPhone15,2".to_string(),
            bundle_id: Self::BUNDLE_ID.to_string(),
        }
    }

    pub fn resolved_response() -> BackendLinkResponse {
        BackendLinkResponse {
            final_url: Some(Self::final_url()),
        }
    }

    pub fn empty_response() -> BackendLinkResponse {
        BackendLinkResponse { final_url: None }
    }

    pub fn no_decision() -> DecisionState {
        DecisionState::default()
    }

    pub fn stub_decision() -> DecisionState {
        DecisionState {
            cached_url: None,
            stub: true,
        }
    }

    pub fn cached_decision() -> DecisionState {
        DecisionState::resolved(Self::stale_url())
    }
}
