//! Probe configuration and TOML file loading.
//!
//! [`ProbeConfig`] holds the transport and queue settings. The defaults are
//! what a plain run uses; a TOML file can override any of them:
//!
//! ```toml
//! [probe]
//! buffer_size = 200
//! connect_timeout = "5s"
//! keep_alive = "10s"
//! idle_timeout = "10s"
//! max_idle_per_host = 50
//! max_redirects = 5
//! accept_invalid_certs = true
//! ```

use crate::error::HostHunterError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for the shared HTTP client and the two pipeline queues.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Capacity of both the work queue and the result queue
    /// Default: 100
    pub buffer_size: usize,

    /// Connection timeout, also used as the total per-request timeout
    /// Default: 3 seconds
    pub connect_timeout: Duration,

    /// TCP keep-alive interval for pooled connections
    /// Default: 10 seconds
    pub keep_alive: Duration,

    /// How long an idle pooled connection is kept
    /// Default: 10 seconds
    pub idle_timeout: Duration,

    /// Idle connections kept per host
    /// Default: 100
    pub max_idle_per_host: usize,

    /// Redirect hops followed before giving up
    /// Default: 10
    pub max_redirects: usize,

    /// Skip TLS certificate verification
    /// Default: true
    pub accept_invalid_certs: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            buffer_size: 100,
            connect_timeout: Duration::from_secs(3),
            keep_alive: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(10),
            max_idle_per_host: 100,
            max_redirects: 10,
            accept_invalid_certs: true,
        }
    }
}

impl ProbeConfig {
    /// Set the capacity of both queues.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Set the connection (and per-request) timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the TCP keep-alive interval.
    pub fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Enable or disable TLS certificate verification bypass.
    pub fn with_accept_invalid_certs(mut self, enabled: bool) -> Self {
        self.accept_invalid_certs = enabled;
        self
    }

    /// Check that the settings can drive a run.
    pub fn validate(&self) -> Result<(), HostHunterError> {
        if self.buffer_size == 0 {
            return Err(HostHunterError::config("buffer_size must be at least 1"));
        }
        if self.connect_timeout.is_zero() {
            return Err(HostHunterError::config(
                "connect_timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Overlay the values present in a loaded file.
    pub fn merge_file(mut self, file: FileConfig) -> Result<Self, HostHunterError> {
        let Some(probe) = file.probe else {
            return Ok(self);
        };

        if let Some(buffer_size) = probe.buffer_size {
            self.buffer_size = buffer_size;
        }
        if let Some(timeout) = probe.connect_timeout {
            self.connect_timeout = parse_duration(&timeout)?;
        }
        if let Some(keep_alive) = probe.keep_alive {
            self.keep_alive = parse_duration(&keep_alive)?;
        }
        if let Some(idle) = probe.idle_timeout {
            self.idle_timeout = parse_duration(&idle)?;
        }
        if let Some(max_idle) = probe.max_idle_per_host {
            self.max_idle_per_host = max_idle;
        }
        if let Some(max_redirects) = probe.max_redirects {
            self.max_redirects = max_redirects;
        }
        if let Some(accept) = probe.accept_invalid_certs {
            self.accept_invalid_certs = accept;
        }

        self.validate()?;
        Ok(self)
    }

    /// Defaults overlaid with the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HostHunterError> {
        Self::default().merge_file(load_file(path)?)
    }
}

/// Configuration loaded from TOML files.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Transport and queue overrides
    pub probe: Option<ProbeFileConfig>,
}

/// The `[probe]` table. Durations are strings such as `"3s"` or `"500ms"`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProbeFileConfig {
    pub buffer_size: Option<usize>,
    pub connect_timeout: Option<String>,
    pub keep_alive: Option<String>,
    pub idle_timeout: Option<String>,
    pub max_idle_per_host: Option<usize>,
    pub max_redirects: Option<usize>,
    pub accept_invalid_certs: Option<bool>,
}

/// Load and parse a configuration file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<FileConfig, HostHunterError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        HostHunterError::file_error(
            path.to_string_lossy(),
            format!("Failed to read configuration file: {}", e),
        )
    })?;

    Ok(toml::from_str(&content)?)
}

/// Parse a duration like "500ms", "3s" or "2m". A bare number is seconds.
fn parse_duration(value: &str) -> Result<Duration, HostHunterError> {
    let value = value.trim().to_lowercase();
    let invalid = || HostHunterError::config(format!("Invalid duration '{}'", value));

    if let Some(ms) = value.strip_suffix("ms") {
        ms.trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| invalid())
    } else if let Some(secs) = value.strip_suffix('s') {
        secs.trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| invalid())
    } else if let Some(mins) = value.strip_suffix('m') {
        mins.trim()
            .parse::<u64>()
            .map(|m| Duration::from_secs(m * 60))
            .map_err(|_| invalid())
    } else {
        value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| invalid())
    }
}
