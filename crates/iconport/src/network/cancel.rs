//! Search request cancellation
//!
//! The UI fires a search for every (debounced) keystroke, so a slow
//! response for an old query must never overwrite the results of a newer
//! one. Each request takes a [`RequestTicket`] from a shared generation
//! counter; starting a newer request makes all older tickets stale, and
//! a stale request discards its response instead of delivering it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic generation counter shared by all requests of one client
#[derive(Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every ticket issued before
    pub fn begin(&self) -> RequestTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// Invalidate all outstanding tickets without starting a request
    pub fn cancel_all(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

/// Proof of participation in one request generation
pub struct RequestTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RequestTicket {
    /// Whether a newer request (or an explicit cancel) has superseded
    /// this one; stale responses must be dropped
    pub fn is_stale(&self) -> bool {
        self.current.load(Ordering::SeqCst) != self.generation
    }
}
