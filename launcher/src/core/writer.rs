//! Single-writer access to the decision store
//!
//! All writes are funnelled through one spawned task, so concurrent
//! resolutions can never interleave a read-modify-write of the persisted
//! decision. Reads are served from a `watch` snapshot and never touch the
//! store.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use url::Url;

use shared::{launch_debug, launch_warn, Component, DecisionState};

use crate::error::{StoreError, StoreResult};
use crate::traits::DecisionStore;

const WRITE_QUEUE_DEPTH: usize = 16;

/// Terminal transition requested by a resolution attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionUpdate {
    /// Cache the destination and clear the stub flag
    Resolved(Url),
    /// Set the stub flag, leave the cached destination alone
    Failed,
    /// Forget everything
    Reset,
}

impl DecisionUpdate {
    pub fn apply(&self, current: &DecisionState) -> DecisionState {
        match self {
            DecisionUpdate::Resolved(url) => DecisionState::resolved(url.clone()),
            DecisionUpdate::Failed => current.failed(),
            DecisionUpdate::Reset => DecisionState::default(),
        }
    }
}

struct WriteCommand {
    update: DecisionUpdate,
    ack: oneshot::Sender<StoreResult<DecisionState>>,
}

/// Handle to the writer task
#[derive(Clone)]
pub struct DecisionWriter {
    commands: mpsc::Sender<WriteCommand>,
    snapshot: watch::Receiver<DecisionState>,
}

impl DecisionWriter {
    /// Load the persisted decision and spawn the writer task
    ///
    /// An unreadable store is treated as holding no decision.
    pub async fn spawn<S>(store: Arc<S>) -> Self
    where
        S: DecisionStore + 'static,
    {
        let initial = store.load().await.unwrap_or_else(|e| {
            launch_warn!(Component::Store, "⚠️ Could not load decision, starting empty: {}", e);
            DecisionState::default()
        });

        let (commands, mut rx) = mpsc::channel::<WriteCommand>(WRITE_QUEUE_DEPTH);
        let (snapshot_tx, snapshot) = watch::channel(initial);

        tokio::spawn(async move {
            while let Some(WriteCommand { update, ack }) = rx.recv().await {
                let next = update.apply(&snapshot_tx.borrow());
                let saved = store.save(&next).await;
                launch_debug!(Component::Store, "💾 Applied {:?} -> {:?}", update, next);

                // In-memory decision follows the latest write even if persisting failed
                snapshot_tx.send_replace(next.clone());
                let _ = ack.send(saved.map(|_| next));
            }
            launch_debug!(Component::Store, "Decision writer stopped");
        });

        Self { commands, snapshot }
    }

    /// Current decision without touching the store
    pub fn snapshot(&self) -> DecisionState {
        self.snapshot.borrow().clone()
    }

    /// Receiver that observes every applied decision
    pub fn subscribe(&self) -> watch::Receiver<DecisionState> {
        self.snapshot.clone()
    }

    /// Apply `update` and wait until it has been persisted
    pub async fn write(&self, update: DecisionUpdate) -> StoreResult<DecisionState> {
        let (ack, done) = oneshot::channel();
        self.commands
            .send(WriteCommand { update, ack })
            .await
            .map_err(|_| StoreError::WriterClosed)?;

        done.await.map_err(|_| StoreError::WriterClosed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockDecisionStore;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_failed_update_keeps_cached_url() {
        let mut store = MockDecisionStore::new();
        store
            .expect_load()
            .returning(|| Ok(DecisionState::resolved(url("https://dest.example.com/x"))));
        store.expect_save().times(1).returning(|_| Ok(()));

        let writer = DecisionWriter::spawn(Arc::new(store)).await;
        let state = writer.write(DecisionUpdate::Failed).await.unwrap();

        assert!(state.stub);
        assert_eq!(state.cached_url, Some(url("https://dest.example.com/x")));
        assert_eq!(writer.snapshot(), state);
    }

    #[tokio::test]
    async fn test_unreadable_store_starts_empty() {
        let mut store = MockDecisionStore::new();
        store.expect_load().returning(|| Err(StoreError::WriterClosed));

        let writer = DecisionWriter::spawn(Arc::new(store)).await;
        assert_eq!(writer.snapshot(), DecisionState::default());
    }

    #[tokio::test]
    async fn test_save_failure_is_reported_but_snapshot_advances() {
        let mut store = MockDecisionStore::new();
        store.expect_load().returning(|| Ok(DecisionState::default()));
        store.expect_save().returning(|_| {
            Err(StoreError::Io {
                path: "decision.json".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        });

        let writer = DecisionWriter::spawn(Arc::new(store)).await;
        assert!(writer.write(DecisionUpdate::Failed).await.is_err());
        assert!(writer.snapshot().stub);
    }

    #[tokio::test]
    async fn test_concurrent_writes_are_serialized() {
        let mut store = MockDecisionStore::new();
        store.expect_load().returning(|| Ok(DecisionState::default()));
        store.expect_save().times(20).returning(|_| Ok(()));

        let writer = DecisionWriter::spawn(Arc::new(store)).await;
        let mut handles = Vec::new();
        for i in 0..20 {
            let writer = writer.clone();
            handles.push(tokio::spawn(async move {
                let update = if i % 2 == 0 {
                    DecisionUpdate::Resolved(url(&format!("https://dest.example.com/{i}")))
                } else {
                    DecisionUpdate::Failed
                };
                writer.write(update).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Whichever write landed last, the state is one a single writer can produce
        let last = writer.snapshot();
        assert!(last.stub || last.cached_url.is_some());
    }

    #[tokio::test]
    async fn test_subscribers_observe_writes() {
        let mut store = MockDecisionStore::new();
        store.expect_load().returning(|| Ok(DecisionState::default()));
        store.expect_save().returning(|_| Ok(()));

        let writer = DecisionWriter::spawn(Arc::new(store)).await;
        let mut rx = writer.subscribe();

        writer
            .write(DecisionUpdate::Resolved(url("https://dest.example.com/x")))
            .await
            .unwrap();

        rx.changed().await.unwrap();
        assert!(!rx.borrow().stub);
    }
}
