//! Decision store implementations
//!
//! `FileDecisionStore` keeps the decision as a small JSON document and
//! replaces it atomically on every save. `MemoryDecisionStore` is the
//! in-process variant used by tests and ephemeral runs.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::fs;

use shared::{launch_debug, Component, DecisionState};

use crate::error::{StoreError, StoreResult};
use crate::traits::DecisionStore;

/// JSON file backed decision store
pub struct FileDecisionStore {
    path: PathBuf,
}

impl FileDecisionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl DecisionStore for FileDecisionStore {
    async fn load(&self) -> StoreResult<DecisionState> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DecisionState::default()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(DecisionState::default());
        }

        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, state: &DecisionState) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(state)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, content).await.map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.path).await.map_err(|e| self.io_error(e))?;

        launch_debug!(Component::Store, "💾 Decision written to {}", self.path.display());
        Ok(())
    }
}

/// In-memory decision store
#[derive(Default)]
pub struct MemoryDecisionStore {
    state: Mutex<DecisionState>,
    saves: Mutex<usize>,
}

impl MemoryDecisionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: DecisionState) -> Self {
        Self {
            state: Mutex::new(state),
            saves: Mutex::new(0),
        }
    }

    /// Last saved state
    pub fn current(&self) -> DecisionState {
        self.state.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[async_trait]
impl DecisionStore for MemoryDecisionStore {
    async fn load(&self) -> StoreResult<DecisionState> {
        Ok(self.current())
    }

    async fn save(&self, state: &DecisionState) -> StoreResult<()> {
        *self.state.lock().unwrap_or_else(|p| p.into_inner()) = state.clone();
        *self.saves.lock().unwrap_or_else(|p| p.into_inner()) += 1;
        Ok(())
    }
}
