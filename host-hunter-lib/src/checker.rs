//! Main host checker implementation.
//!
//! This module provides the `HostChecker` struct that wires the feeder, the
//! worker pool, the shutdown coordinator and the aggregator into one run.

use crate::aggregator::Aggregator;
use crate::concurrent::{probe_domain, spawn_feeder, spawn_shutdown_coordinator, spawn_workers};
use crate::config::ProbeConfig;
use crate::error::HostHunterError;
use crate::state::SharedState;
use crate::transport::{HttpTransport, Transport};
use crate::types::{ProbeResult, Progress, ScanReport};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Coordinates a probe run over a list of domains.
///
/// The transport is created once and shared by every worker for the life of
/// the checker.
///
/// # Example
///
/// ```rust,no_run
/// use host_hunter_lib::{HostChecker, ProbeConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let checker = HostChecker::new(ProbeConfig::default())?;
///     let domains = vec!["example.com".to_string(), "example.org".to_string()];
///
///     let report = checker
///         .run(domains, 10, |result, progress| {
///             println!("{} {:?} {:.1}%", result.domain, result.status_code, progress.percent);
///         })
///         .await?;
///
///     println!("{} of {} alive", report.successful_count(), report.total);
///     Ok(())
/// }
/// ```
pub struct HostChecker<T: Transport = HttpTransport> {
    /// Configuration settings for this checker instance
    config: ProbeConfig,
    /// Transport shared by all workers
    transport: Arc<T>,
}

impl HostChecker<HttpTransport> {
    /// Create a checker backed by a real HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `HostHunterError` if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: ProbeConfig) -> Result<Self, HostHunterError> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> HostChecker<T> {
    /// Create a checker over any transport.
    pub fn with_transport(config: ProbeConfig, transport: T) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    /// Probe a single domain outside the pool.
    pub async fn probe(&self, domain: &str) -> ProbeResult {
        let state = SharedState::new(1);
        probe_domain(self.transport.as_ref(), &state, domain).await
    }

    /// Probe every domain with `workers` concurrent workers.
    ///
    /// Workers are started before the first domain is fed. `on_result` runs on
    /// the caller's task once per result, in completion order, with a progress
    /// snapshot whose percentage never decreases.
    ///
    /// # Errors
    ///
    /// Returns `HostHunterError` if:
    /// - `workers` is zero
    /// - The configuration is invalid
    ///
    /// Individual probe failures never produce an error here; they are
    /// reported through `on_result`.
    pub async fn run<F>(
        &self,
        domains: Vec<String>,
        workers: usize,
        on_result: F,
    ) -> Result<ScanReport, HostHunterError>
    where
        F: FnMut(&ProbeResult, Progress),
    {
        if workers == 0 {
            return Err(HostHunterError::InvalidWorkerCount { count: workers });
        }
        self.config.validate()?;

        let total = domains.len();
        let start = Instant::now();
        let state = Arc::new(SharedState::new(total));

        let (work_tx, work_rx) = async_channel::bounded(self.config.buffer_size);
        let (result_tx, result_rx) = async_channel::bounded(self.config.buffer_size);

        info!(total, workers, "starting worker pool");

        let handles = spawn_workers(
            workers,
            Arc::clone(&self.transport),
            Arc::clone(&state),
            work_rx,
            result_tx.clone(),
        );
        let coordinator = spawn_shutdown_coordinator(handles, result_tx);
        let feeder = spawn_feeder(domains, work_tx);

        let processed = Aggregator::new(Arc::clone(&state))
            .run(result_rx, on_result)
            .await;

        // Both tasks have finished their work once the result queue is closed.
        if let Err(e) = feeder.await {
            warn!(error = %e, "feeder task did not complete");
        }
        if let Err(e) = coordinator.await {
            warn!(error = %e, "shutdown coordinator did not complete");
        }

        let elapsed = start.elapsed();
        if processed != total {
            warn!(processed, total, "result count does not match input size");
        }
        info!(processed, ?elapsed, "worker pool drained");

        Ok(ScanReport {
            total,
            processed,
            successful: state.successful_domains(),
            elapsed,
        })
    }
}
