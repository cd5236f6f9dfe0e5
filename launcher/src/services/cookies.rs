//! Cookie persistence side effect
//!
//! On a host without an embedded web view there is no cookie jar to flush,
//! so this implementation only records that the flush was requested.

use std::sync::atomic::{AtomicUsize, Ordering};

use shared::{launch_info, Component};

use crate::traits::CookiePersistence;

#[derive(Debug, Default)]
pub struct LoggingCookiePersistence {
    requests: AtomicUsize,
}

impl LoggingCookiePersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flushes requested so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl CookiePersistence for LoggingCookiePersistence {
    fn persist_cookies(&self) {
        let n = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        launch_info!(Component::Cookies, "🍪 Cookie persistence requested (#{})", n);
    }
}
