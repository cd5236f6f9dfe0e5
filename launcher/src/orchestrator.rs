//! Launch orchestrator
//!
//! Sequences payload collection, remote config lookup, URL assembly and the
//! backend handshake into a single `LaunchOutcome`, and is the only component
//! that writes the decision store. Every failure collapses to the stub
//! outcome with the stub flag persisted.

use std::sync::Arc;
use tokio::sync::watch;
use url::Url;

use shared::{launch_debug, launch_error, launch_info, launch_warn, logging, Component, DecisionState, LaunchOutcome};

use crate::{
    core::{build_request_url, DecisionUpdate, DecisionWriter, TrackingPayloadBuilder},
    error::{LaunchError, LaunchResult},
    traits::{BackendResolver, CookiePersistence, DecisionStore, DeviceCollector, RemoteConfigSource},
};

/// Per-call knobs for `resolve_with`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Ignore a persisted stub flag or cached destination and resolve again
    pub force_revalidate: bool,
}

impl ResolveOptions {
    pub fn revalidate() -> Self {
        Self { force_revalidate: true }
    }
}

/// Outcome of one resolution attempt together with why it fell back, if it did
#[derive(Debug)]
pub struct ResolutionReport {
    pub outcome: LaunchOutcome,
    pub failure: Option<LaunchError>,
    /// True when persisted state answered without any network work
    pub short_circuited: bool,
}

/// Drives the launch decision state machine with injected collaborators
pub struct LaunchOrchestrator<D, R, B, C>
where
    D: DeviceCollector + 'static,
    R: RemoteConfigSource + 'static,
    B: BackendResolver + 'static,
    C: CookiePersistence + 'static,
{
    payload_builder: TrackingPayloadBuilder<D>,
    remote_config: R,
    backend: B,
    cookies: C,
    writer: DecisionWriter,
}

impl<D, R, B, C> LaunchOrchestrator<D, R, B, C>
where
    D: DeviceCollector + 'static,
    R: RemoteConfigSource + 'static,
    B: BackendResolver + 'static,
    C: CookiePersistence + 'static,
{
    /// Create orchestrator with injected dependencies
    ///
    /// Loads the persisted decision once and spawns the store writer.
    pub async fn new<S>(store: Arc<S>, collector: D, remote_config: R, backend: B, cookies: C) -> Self
    where
        S: DecisionStore + 'static,
    {
        Self {
            payload_builder: TrackingPayloadBuilder::new(collector),
            remote_config,
            backend,
            cookies,
            writer: DecisionWriter::spawn(store).await,
        }
    }

    /// Outcome implied by persisted state alone; never performs I/O
    pub fn peek_cached_outcome(&self) -> LaunchOutcome {
        self.writer.snapshot().cached_outcome()
    }

    /// Current persisted decision
    pub fn decision(&self) -> DecisionState {
        self.writer.snapshot()
    }

    /// Observe decision changes as they are persisted
    pub fn subscribe(&self) -> watch::Receiver<DecisionState> {
        self.writer.subscribe()
    }

    /// Resolve the launch outcome, honouring persisted state
    pub async fn resolve(&self) -> LaunchOutcome {
        self.resolve_with(ResolveOptions::default()).await
    }

    /// User-initiated retry: resolve again regardless of persisted state
    pub async fn retry(&self) -> LaunchOutcome {
        self.resolve_with(ResolveOptions::revalidate()).await
    }

    pub async fn resolve_with(&self, options: ResolveOptions) -> LaunchOutcome {
        self.resolve_report(options).await.outcome
    }

    /// Single-pass resolution keeping the internal failure reason
    pub async fn resolve_report(&self, options: ResolveOptions) -> ResolutionReport {
        if !options.force_revalidate {
            let cached = self.peek_cached_outcome();
            if cached != LaunchOutcome::Loading {
                logging::log_outcome(Component::Launcher, "Persisted decision", &cached);
                return ResolutionReport {
                    outcome: cached,
                    failure: None,
                    short_circuited: true,
                };
            }
        }

        match self.run_handshake().await {
            Ok(final_url) => {
                if let Err(e) = self.writer.write(DecisionUpdate::Resolved(final_url.clone())).await {
                    logging::log_error(Component::Store, "Persisting resolved destination", &e);
                }
                self.cookies.persist_cookies();

                let outcome = LaunchOutcome::ShowWeb(final_url);
                logging::log_outcome(Component::Launcher, "Resolved", &outcome);
                ResolutionReport {
                    outcome,
                    failure: None,
                    short_circuited: false,
                }
            }
            Err(failure) => {
                launch_warn!(
                    Component::Launcher,
                    kind = failure.kind(),
                    "⚠️ Resolution failed, falling back to stub: {}",
                    failure
                );
                if let Err(e) = self.writer.write(DecisionUpdate::Failed).await {
                    launch_error!(Component::Store, "❌ Persisting stub flag failed: {}", e);
                }

                ResolutionReport {
                    outcome: LaunchOutcome::ShowStub,
                    failure: Some(failure),
                    short_circuited: false,
                }
            }
        }
    }

    /// Clear the persisted decision so the next launch starts from scratch
    pub async fn reset_decision(&self) -> LaunchResult<()> {
        self.writer.write(DecisionUpdate::Reset).await?;
        launch_info!(Component::Launcher, "🧹 Persisted decision cleared");
        Ok(())
    }

    /// Steps 3-7 of the resolution: payload, link parts, assembly, backend
    async fn run_handshake(&self) -> LaunchResult<Url> {
        let payload = self.payload_builder.try_collect_payload().await?;

        let parts = self.remote_config.fetch().await?;
        launch_debug!(Component::RemoteConfig, "🔗 Link parts: {}{}", parts.host, parts.path);

        let request_url = build_request_url(&parts, &payload)?;
        launch_debug!(Component::Backend, "📤 Request URL: {}", request_url);

        let response = self.backend.resolve(&request_url).await?;
        response.final_url.ok_or(LaunchError::BackendEmptyResult)
    }
}
