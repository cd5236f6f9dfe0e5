//! Test helpers and builder patterns for launcher tests
//!
//! Collaborators default to mocks with no expectations, so any unexpected
//! network call fails the test.

use std::sync::Arc;

use launcher::error::{BackendError, CollectorError, RemoteConfigError};
use launcher::services::MemoryDecisionStore;
use launcher::{
    LaunchOrchestrator, MockBackendResolver, MockCookiePersistence, MockDeviceCollector, MockRemoteConfigSource,
};
use shared::DecisionState;

use super::fixtures::TestFixtures;

pub type TestOrchestrator =
    LaunchOrchestrator<MockDeviceCollector, MockRemoteConfigSource, MockBackendResolver, MockCookiePersistence>;

/// Ready-made mock collaborators
pub struct TestMocks;

#[allow(dead_code)]
impl TestMocks {
    /// Collector whose every sub-collection succeeds
    pub fn healthy_collector() -> MockDeviceCollector {
        let mut collector = MockDeviceCollector::new();
        collector.expect_attribution_uid().returning(|| "af-uid".to_string());
        collector.expect_install_id().returning(|| Ok("install-1".to_string()));
        collector
            .expect_attribution_token()
            .returning(|| Ok("att-token".to_string()));
        collector.expect_cached_push_token().returning(|| None);
        collector
            .expect_fetch_push_token()
            .returning(|| Ok("push-token".to_string()));
        collector.expect_instant_push_token().returning(|| None);
        collector
            .expect_device_context()
            .returning(|| Ok(TestFixtures::device_context()));
        collector
    }

    /// Collector that cannot establish device identity
    pub fn identity_less_collector() -> MockDeviceCollector {
        let mut collector = MockDeviceCollector::new();
        collector.expect_attribution_uid().returning(String::new);
        collector.expect_install_id().returning(|| Ok(String::new()));
        collector.expect_attribution_token().returning(|| Ok(String::new()));
        collector.expect_cached_push_token().returning(|| None);
        collector.expect_fetch_push_token().returning(|| Ok(String::new()));
        collector.expect_instant_push_token().returning(|| None);
        collector.expect_device_context().returning(|| {
            Err(CollectorError::MissingIdentity {
                field: "bundle id".to_string(),
            })
        });
        collector
    }

    /// Collector that must never be consulted
    pub fn untouched_collector() -> MockDeviceCollector {
        let mut collector = MockDeviceCollector::new();
        collector.expect_device_context().times(0);
        collector
    }

    pub fn remote_config_ok() -> MockRemoteConfigSource {
        let mut remote = MockRemoteConfigSource::new();
        remote
            .expect_fetch()
            .times(1)
            .returning(|| Ok(TestFixtures::link_parts()));
        remote
    }

    pub fn remote_config_broken_parts() -> MockRemoteConfigSource {
        let mut remote = MockRemoteConfigSource::new();
        remote
            .expect_fetch()
            .times(1)
            .returning(|| Ok(TestFixtures::broken_link_parts()));
        remote
    }

    pub fn remote_config_failing(error: RemoteConfigError) -> MockRemoteConfigSource {
        let mut remote = MockRemoteConfigSource::new();
        remote.expect_fetch().times(1).returning(move || Err(error.clone()));
        remote
    }

    pub fn remote_config_never() -> MockRemoteConfigSource {
        let mut remote = MockRemoteConfigSource::new();
        remote.expect_fetch().times(0);
        remote
    }

    /// Backend that resolves to `TestFixtures::FINAL_URL` for requests aimed at the fixture host/path
    pub fn backend_ok() -> MockBackendResolver {
        let mut backend = MockBackendResolver::new();
        backend
            .expect_resolve()
            .withf(|url| url.host_str() == Some(TestFixtures::HOST) && url.path() == TestFixtures::PATH)
            .times(1)
            .returning(|_| Ok(TestFixtures::resolved_response()));
        backend
    }

    pub fn backend_empty() -> MockBackendResolver {
        let mut backend = MockBackendResolver::new();
        backend
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(TestFixtures::empty_response()));
        backend
    }

    pub fn backend_failing(error: BackendError) -> MockBackendResolver {
        let mut backend = MockBackendResolver::new();
        backend.expect_resolve().times(1).returning(move |_| Err(error.clone()));
        backend
    }

    pub fn backend_never() -> MockBackendResolver {
        let mut backend = MockBackendResolver::new();
        backend.expect_resolve().times(0);
        backend
    }

    pub fn cookies_once() -> MockCookiePersistence {
        let mut cookies = MockCookiePersistence::new();
        cookies.expect_persist_cookies().times(1).return_const(());
        cookies
    }

    pub fn cookies_never() -> MockCookiePersistence {
        let mut cookies = MockCookiePersistence::new();
        cookies.expect_persist_cookies().times(0);
        cookies
    }
}

/// Builder for test orchestrators over an in-memory decision store
pub struct OrchestratorBuilder {
    state: DecisionState,
    collector: MockDeviceCollector,
    remote_config: MockRemoteConfigSource,
    backend: MockBackendResolver,
    cookies: MockCookiePersistence,
}

#[allow(dead_code)]
impl OrchestratorBuilder {
    /// Empty decision, healthy collector, and collaborators that must not be called
    pub fn new() -> Self {
        Self {
            state: TestFixtures::no_decision(),
            collector: TestMocks::healthy_collector(),
            remote_config: TestMocks::remote_config_never(),
            backend: TestMocks::backend_never(),
            cookies: TestMocks::cookies_never(),
        }
    }

    pub fn with_state(mut self, state: DecisionState) -> Self {
        self.state = state;
        self
    }

    pub fn with_collector(mut self, collector: MockDeviceCollector) -> Self {
        self.collector = collector;
        self
    }

    pub fn with_remote_config(mut self, remote_config: MockRemoteConfigSource) -> Self {
        self.remote_config = remote_config;
        self
    }

    pub fn with_backend(mut self, backend: MockBackendResolver) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_cookies(mut self, cookies: MockCookiePersistence) -> Self {
        self.cookies = cookies;
        self
    }

    /// Happy-path collaborators end to end
    pub fn resolving(self) -> Self {
        self.with_remote_config(TestMocks::remote_config_ok())
            .with_backend(TestMocks::backend_ok())
            .with_cookies(TestMocks::cookies_once())
    }

    /// Build the orchestrator plus a handle on its store
    pub async fn build(self) -> (TestOrchestrator, Arc<MemoryDecisionStore>) {
        let store = Arc::new(MemoryDecisionStore::with_state(self.state));
        let orchestrator =
            LaunchOrchestrator::new(store.clone(), self.collector, self.remote_config, self.backend, self.cookies)
                .await;
        (orchestrator, store)
    }
}
