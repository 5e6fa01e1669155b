//! HTTP transport used by the workers.
//!
//! The pool only needs one operation from the network: GET a URL and report
//! the final status code. [`Transport`] captures that so the pool can run
//! against [`HttpTransport`] in production and an in-memory double in tests.

use crate::config::ProbeConfig;
use crate::error::{HostHunterError, ProbeError};
use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::warn;

/// A single-attempt HTTP GET.
///
/// Implementations are shared read-only by every worker, so they must be safe
/// for concurrent use.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Issue one GET against `url` and return the final status code after
    /// redirects. Never retries.
    async fn get(&self, url: &str) -> Result<u16, ProbeError>;
}

/// Production transport over a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    /// HTTP client shared by all workers
    client: reqwest::Client,
    /// Per-request timeout, kept for error classification
    timeout: Duration,
}

impl HttpTransport {
    /// Build the client described by `config`.
    ///
    /// Compression is disabled and redirects follow the configured hop limit.
    pub fn new(config: &ProbeConfig) -> Result<Self, HostHunterError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.connect_timeout)
            .tcp_keepalive(config.keep_alive)
            .pool_idle_timeout(config.idle_timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .redirect(Policy::limited(config.max_redirects))
            .no_gzip()
            .no_brotli()
            .no_deflate()
            .build()
            .map_err(|e| HostHunterError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            timeout: config.connect_timeout,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<u16, ProbeError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(&e, self.timeout))?;

        let status = response.status().as_u16();

        // Drain without buffering. The status line already arrived, so a
        // broken body does not change it.
        loop {
            match response.chunk().await {
                Ok(Some(_)) => continue,
                Ok(None) => break,
                Err(e) => {
                    warn!(url, status, error = %e, "failed to drain response body");
                    break;
                }
            }
        }

        Ok(status)
    }
}
