//! Environment-driven device/attribution collector
//!
//! Values are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Device identity (mandatory)
//! - `LAUNCH_BUNDLE_ID`: application bundle identifier, no default
//! - `LAUNCH_OS_VERSION`: defaults to the host OS name
//! - `LAUNCH_DEVICE_MODEL`: defaults to the host CPU architecture
//!
//! ## Attribution (best-effort)
//! - `LAUNCH_ATTRIBUTION_UID`, `LAUNCH_INSTALL_ID`, `LAUNCH_ATTRIBUTION_TOKEN`
//! - `LAUNCH_PUSH_TOKEN`: token returned by a fresh fetch

use std::sync::Arc;

use shared::DeviceContext;

use crate::error::{CollectorError, CollectorResult};
use crate::services::push_token::PushTokenStore;
use crate::traits::DeviceCollector;

/// Snapshot of collector inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSettings {
    pub bundle_id: Option<String>,
    pub os_version: Option<String>,
    pub device_model: Option<String>,
    pub attribution_uid: Option<String>,
    pub install_id: Option<String>,
    pub attribution_token: Option<String>,
    pub push_token: Option<String>,
}

impl DeviceSettings {
    pub const BUNDLE_ID: &'static str = "LAUNCH_BUNDLE_ID";
    pub const OS_VERSION: &'static str = "LAUNCH_OS_VERSION";
    pub const DEVICE_MODEL: &'static str = "LAUNCH_DEVICE_MODEL";
    pub const ATTRIBUTION_UID: &'static str = "LAUNCH_ATTRIBUTION_UID";
    pub const INSTALL_ID: &'static str = "LAUNCH_INSTALL_ID";
    pub const ATTRIBUTION_TOKEN: &'static str = "LAUNCH_ATTRIBUTION_TOKEN";
    pub const PUSH_TOKEN: &'static str = "LAUNCH_PUSH_TOKEN";

    /// Read settings from `.env` and the process environment
    pub fn from_env() -> Self {
        // Missing .env file is fine
        let _ = dotenv::dotenv();

        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            bundle_id: var(Self::BUNDLE_ID),
            os_version: var(Self::OS_VERSION).or_else(|| Some(std::env::consts::OS.to_string())),
            device_model: var(Self::DEVICE_MODEL).or_else(|| Some(std::env::consts::ARCH.to_string())),
            attribution_uid: var(Self::ATTRIBUTION_UID),
            install_id: var(Self::INSTALL_ID),
            attribution_token: var(Self::ATTRIBUTION_TOKEN),
            push_token: var(Self::PUSH_TOKEN),
        }
    }
}

/// Collector backed by static settings and a shared push token store
pub struct EnvDeviceCollector {
    settings: DeviceSettings,
    push_tokens: Arc<PushTokenStore>,
}

impl EnvDeviceCollector {
    pub fn new(settings: DeviceSettings, push_tokens: Arc<PushTokenStore>) -> Self {
        Self { settings, push_tokens }
    }

    pub fn from_env(push_tokens: Arc<PushTokenStore>) -> Self {
        Self::new(DeviceSettings::from_env(), push_tokens)
    }

    fn optional(value: &Option<String>, source_name: &str) -> CollectorResult<String> {
        value.clone().ok_or_else(|| CollectorError::Unavailable {
            source_name: source_name.to_string(),
        })
    }

    fn required(value: &Option<String>, field: &str) -> CollectorResult<String> {
        value.clone().ok_or_else(|| CollectorError::MissingIdentity {
            field: field.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl DeviceCollector for EnvDeviceCollector {
    fn attribution_uid(&self) -> String {
        self.settings.attribution_uid.clone().unwrap_or_default()
    }

    async fn install_id(&self) -> CollectorResult<String> {
        Self::optional(&self.settings.install_id, DeviceSettings::INSTALL_ID)
    }

    async fn attribution_token(&self) -> CollectorResult<String> {
        Self::optional(&self.settings.attribution_token, DeviceSettings::ATTRIBUTION_TOKEN)
    }

    fn cached_push_token(&self) -> Option<String> {
        self.push_tokens.current()
    }

    async fn fetch_push_token(&self) -> CollectorResult<String> {
        Self::optional(&self.settings.push_token, DeviceSettings::PUSH_TOKEN)
    }

    fn instant_push_token(&self) -> Option<String> {
        // No platform messaging SDK on this host
        None
    }

    async fn device_context(&self) -> CollectorResult<DeviceContext> {
        Ok(DeviceContext {
            os_version: Self::required(&self.settings.os_version, "os version")?,
            device_model: Self::required(&self.settings.device_model, "device model")?,
            bundle_id: Self::required(&self.settings.bundle_id, "bundle id")?,
        })
    }
}
