//! View-scoped request cancellation
//!
//! A pending request must not mutate state belonging to a torn-down view.
//! `ViewScope` ties in-flight futures to a view's lifetime: once the view
//! is torn down every outstanding request resolves to `Cancelled` and any
//! late response is discarded.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use futures::future::{AbortHandle, Abortable, Aborted};
use tracing::debug;
use crate::utils::errors::{Result, UmmahError};

/// Cancellable task scope tied to a view's lifetime
#[derive(Debug, Default)]
pub struct ViewScope {
    handles: Mutex<Vec<AbortHandle>>,
    torn_down: AtomicBool,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a fallible future within this scope. Returns `Cancelled` if the
    /// scope was torn down before or during the await.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_torn_down() {
            return Err(UmmahError::Cancelled);
        }

        let (handle, registration) = AbortHandle::new_pair();
        self.handles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(handle);

        match Abortable::new(fut, registration).await {
            Ok(result) => result,
            Err(Aborted) => Err(UmmahError::Cancelled),
        }
    }

    /// Tear down the scope, aborting all in-flight requests
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
        let mut handles = self.handles.lock().unwrap_or_else(|e| e.into_inner());
        let count = handles.len();
        for handle in handles.drain(..) {
            handle.abort();
        }
        debug!(aborted = count, "View scope torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        if !self.is_torn_down() {
            self.teardown();
        }
    }
}
