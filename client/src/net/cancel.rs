//! Cancellation for in-flight requests owned by a page.
//!
//! A page creates one `CancelToken`, routes every request future through
//! `track`, and calls `cancel` from `on_cleanup`. Responses that settle after
//! teardown are then dropped instead of writing into disposed signals.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable};

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    handles: Mutex<Vec<AbortHandle>>,
}

/// Shared, clonable cancellation scope. All clones cancel together.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `future` so that `cancel` aborts it. Tracking on an already
    /// cancelled token yields a future that resolves to `Err(Aborted)`.
    pub fn track<F: Future>(&self, future: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let mut handles = self.inner.handles.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_cancelled() {
            handle.abort();
        } else {
            handles.retain(|h| !h.is_aborted());
            handles.push(handle);
        }
        Abortable::new(future, registration)
    }

    pub fn cancel(&self) {
        let mut handles = self.inner.handles.lock().unwrap_or_else(PoisonError::into_inner);
        self.inner.cancelled.store(true, Ordering::Release);
        for handle in handles.drain(..) {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }
}
