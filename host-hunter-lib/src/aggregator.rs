//! Result consumer.
//!
//! The aggregator is the single reader of the result queue. It accounts for
//! each result under the shared lock and hands the result plus a progress
//! snapshot to a caller-supplied reporter.

use crate::state::SharedState;
use crate::types::{ProbeResult, Progress};
use async_channel::Receiver;
use std::sync::Arc;

/// Drains the result queue and keeps the processed counter.
pub struct Aggregator {
    state: Arc<SharedState>,
}

impl Aggregator {
    pub fn new(state: Arc<SharedState>) -> Self {
        Self { state }
    }

    /// Consume results until the queue is closed and empty.
    ///
    /// `on_result` is called exactly once per result, in consumption order,
    /// so the percentages it sees never decrease. Returns the number of
    /// results consumed.
    pub async fn run<F>(&self, results: Receiver<ProbeResult>, mut on_result: F) -> usize
    where
        F: FnMut(&ProbeResult, Progress),
    {
        let mut consumed = 0;
        while let Ok(result) = results.recv().await {
            let progress = self.state.record_processed();
            on_result(&result, progress);
            consumed += 1;
        }
        consumed
    }
}
