//! Feeder, worker pool and shutdown coordinator.
//!
//! The pipeline is feeder -> work queue -> N workers -> result queue ->
//! aggregator. Both queues are bounded, so a slow consumer pushes back all the
//! way to the feeder instead of letting memory grow with the input list.
//!
//! Termination is close-then-drain: the feeder closes the work queue after the
//! last domain, each worker exits once that queue is closed and empty, and the
//! coordinator closes the result queue after the last worker has exited.

use crate::state::SharedState;
use crate::transport::Transport;
use crate::types::{is_successful_status, ProbeResult};
use crate::utils::{normalize_domain, strip_https};
use async_channel::{Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Push every domain onto the work queue in order, then close it.
///
/// Blocks on a full queue. The queue is closed exactly once, after the last
/// send.
pub fn spawn_feeder(domains: Vec<String>, work_tx: Sender<String>) -> JoinHandle<()> {
    tokio::spawn(async move {
        for domain in domains {
            if work_tx.send(domain).await.is_err() {
                warn!("work queue closed before all domains were fed");
                break;
            }
        }
        work_tx.close();
    })
}

/// Probe one domain and record it in `state` if it qualifies.
///
/// Transport failures come back as data in the result; nothing here can fail
/// the caller.
pub async fn probe_domain<T: Transport + ?Sized>(
    transport: &T,
    state: &SharedState,
    domain: &str,
) -> ProbeResult {
    let start = Instant::now();
    let url = normalize_domain(domain);

    match transport.get(&url).await {
        Ok(status) => {
            let duration = start.elapsed();
            let domain = if is_successful_status(status) {
                let stripped = strip_https(&url);
                state.record_success(stripped.clone());
                stripped
            } else {
                url
            };
            debug!(%domain, status, ?duration, "probe completed");
            ProbeResult::response(domain, status, duration)
        }
        Err(err) => {
            let duration = start.elapsed();
            debug!(%url, error = %err, ?duration, "probe failed");
            ProbeResult::failure(url, err, duration)
        }
    }
}

/// Consume loop of a single worker.
async fn run_worker<T: Transport>(
    id: usize,
    transport: Arc<T>,
    state: Arc<SharedState>,
    work_rx: Receiver<String>,
    result_tx: Sender<ProbeResult>,
) {
    while let Ok(domain) = work_rx.recv().await {
        let result = probe_domain(transport.as_ref(), &state, &domain).await;
        if result_tx.send(result).await.is_err() {
            warn!(worker = id, "result queue closed, worker stopping early");
            break;
        }
    }
    debug!(worker = id, "worker finished");
}

/// Start exactly `count` workers on the shared queues.
pub fn spawn_workers<T: Transport>(
    count: usize,
    transport: Arc<T>,
    state: Arc<SharedState>,
    work_rx: Receiver<String>,
    result_tx: Sender<ProbeResult>,
) -> Vec<JoinHandle<()>> {
    (0..count)
        .map(|id| {
            tokio::spawn(run_worker(
                id,
                Arc::clone(&transport),
                Arc::clone(&state),
                work_rx.clone(),
                result_tx.clone(),
            ))
        })
        .collect()
}

/// Wait for every worker, then close the result queue.
///
/// This is the only place the result queue is closed. It must run alongside
/// the aggregator: the workers cannot finish while the aggregator is not
/// draining a full result queue.
pub fn spawn_shutdown_coordinator(
    workers: Vec<JoinHandle<()>>,
    result_tx: Sender<ProbeResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        for outcome in futures::future::join_all(workers).await {
            if let Err(e) = outcome {
                error!(error = %e, "worker task did not complete");
            }
        }
        result_tx.close();
    })
}
