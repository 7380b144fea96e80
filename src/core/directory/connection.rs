//! Cached handle of a long-lived connection

use crate::utils::error::Result;
use std::future::Future;
use tokio::sync::Mutex;

/// Current handle of a connection that can be lost and reopened
///
/// The handle is opened on first use, and again whenever the held one is no
/// longer live or has been discarded. Opening happens under the lock, so
/// concurrent callers share one reconnect.
pub(crate) struct CachedHandle<H> {
    handle: Mutex<Option<H>>,
}

impl<H: Clone> CachedHandle<H> {
    pub(crate) fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Clone of the live handle, opening a new one when needed
    ///
    /// A failed open leaves nothing cached; the next call tries again.
    pub(crate) async fn get<L, F, Fut>(&self, is_live: L, open: F) -> Result<H>
    where
        L: FnOnce(&mut H) -> bool,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<H>>,
    {
        let mut cached = self.handle.lock().await;
        if let Some(handle) = cached.as_mut() {
            if is_live(handle) {
                return Ok(handle.clone());
            }
        }

        *cached = None;
        let handle = open().await?;
        *cached = Some(handle.clone());
        Ok(handle)
    }

    /// Forget the held handle so the next `get` opens a new one
    pub(crate) async fn discard(&self) {
        self.handle.lock().await.take();
    }
}
