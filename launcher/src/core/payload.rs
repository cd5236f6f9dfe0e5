//! Tracking payload collection
//!
//! Runs every device/attribution sub-collection concurrently and joins them.
//! Device identity is mandatory; everything else degrades to an empty string.

use shared::{fresh_device_uuid, launch_debug, launch_warn, Component, TrackingPayload};

use crate::error::{CollectorError, CollectorResult, LaunchError, LaunchResult};
use crate::traits::DeviceCollector;

/// Builds one `TrackingPayload` per resolution attempt
pub struct TrackingPayloadBuilder<D>
where
    D: DeviceCollector,
{
    collector: D,
}

impl<D> TrackingPayloadBuilder<D>
where
    D: DeviceCollector,
{
    pub fn new(collector: D) -> Self {
        Self { collector }
    }

    /// Collect a payload, or `None` when device identity is unavailable
    pub async fn collect_payload(&self) -> Option<TrackingPayload> {
        match self.try_collect_payload().await {
            Ok(payload) => Some(payload),
            Err(e) => {
                launch_warn!(Component::Tracking, kind = e.kind(), "⚠️ {}", e);
                None
            }
        }
    }

    /// Same as `collect_payload`, keeping the failure reason
    pub async fn try_collect_payload(&self) -> LaunchResult<TrackingPayload> {
        let attribution_uid = self.collector.attribution_uid();
        // Registration-delivered token, sampled before any await
        let cached_token = self.collector.cached_push_token();

        let (install_id, attribution_token, fetched_token, context) = tokio::join!(
            self.collector.install_id(),
            self.collector.attribution_token(),
            self.collector.fetch_push_token(),
            self.collector.device_context(),
        );

        let context = context
            .and_then(|context| {
                if context.is_complete() {
                    Ok(context)
                } else {
                    Err(CollectorError::MissingIdentity {
                        field: "device context".to_string(),
                    })
                }
            })
            .map_err(|e| LaunchError::PayloadUncollectible { reason: e.to_string() })?;

        let instant_token = self.collector.instant_push_token();
        let push_token = select_push_token([
            cached_token,
            fetched_token.ok(),
            instant_token,
        ]);

        let payload = TrackingPayload {
            attribution_uid,
            install_id: or_empty("install id", install_id),
            device_uuid: fresh_device_uuid(),
            os_version: context.os_version,
            device_model: context.device_model,
            bundle_id: context.bundle_id,
            push_token,
            attribution_token: or_empty("attribution token", attribution_token),
        };

        launch_debug!(Component::Tracking, "📦 Collected payload: {:?}", payload);
        Ok(payload)
    }
}

/// First non-empty candidate wins, in priority order
fn select_push_token<const N: usize>(candidates: [Option<String>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|token| !token.is_empty())
        .unwrap_or_default()
}

fn or_empty(label: &str, value: CollectorResult<String>) -> String {
    match value {
        Ok(value) => value,
        Err(e) => {
            launch_debug!(Component::Tracking, "{} degraded to empty: {}", label, e);
            String::new()
        }
    }
}
