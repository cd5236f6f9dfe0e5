//! Holder for the most recent push registration token

use std::sync::RwLock;

/// Registration callbacks write here; payload collection reads the latest value.
#[derive(Debug, Default)]
pub struct PushTokenStore {
    token: RwLock<Option<String>>,
}

impl PushTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Replace the stored token; `None` clears it
    pub fn update(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(|p| p.into_inner()) = token;
    }

    pub fn current(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|p| p.into_inner()).clone()
    }
}
