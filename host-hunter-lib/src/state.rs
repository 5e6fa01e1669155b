//! Shared mutable state of a run.
//!
//! The success list and the processed counter are the only state that
//! workers and the aggregator both write. A single mutex guards both, so
//! there is no lock ordering to get wrong.

use crate::types::Progress;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    successful: Vec<String>,
    processed: usize,
}

/// Success list and progress counter shared by the pool and the aggregator.
#[derive(Debug)]
pub struct SharedState {
    inner: Mutex<Inner>,
    total: usize,
}

impl SharedState {
    /// Create state for a run over `total` domains.
    pub fn new(total: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            total,
        }
    }

    // Every critical section is a push or an increment, so a poisoned guard
    // still holds consistent data.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a successful domain.
    pub fn record_success(&self, domain: String) {
        self.lock().successful.push(domain);
    }

    /// Count one more processed result and snapshot progress under the lock.
    pub fn record_processed(&self) -> Progress {
        let mut inner = self.lock();
        inner.processed += 1;
        Progress::new(inner.processed, self.total)
    }

    pub fn processed(&self) -> usize {
        self.lock().processed
    }

    /// Copy of the success list in append order.
    pub fn successful_domains(&self) -> Vec<String> {
        self.lock().successful.clone()
    }
}
