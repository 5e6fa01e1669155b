//! Error handling for probe runs.
//!
//! Two taxonomies live here. [`HostHunterError`] covers the failures that end
//! a run before (or instead of) probing: bad input files, bad configuration,
//! an impossible worker count. [`ProbeError`] covers a single failed probe;
//! it is carried as data inside a [`ProbeResult`](crate::ProbeResult) and never
//! aborts the pool.

use std::time::Duration;
use thiserror::Error;

/// Fatal error type for the library.
#[derive(Debug, Clone, Error)]
pub enum HostHunterError {
    /// The domain list file could not be opened or read
    #[error("Unable to open file '{path}': {message}")]
    FileError { path: String, message: String },

    /// The domain list contained no usable lines
    #[error("No domains found in the file.")]
    EmptyDomainList,

    /// A pool was requested with zero workers
    #[error("Invalid worker count {count}: at least one worker is required")]
    InvalidWorkerCount { count: usize },

    /// The shared HTTP client could not be constructed
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    /// Configuration errors (invalid settings, unparsable file, etc.)
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl HostHunterError {
    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

/// Why a single probe produced no status code.
///
/// Every variant is terminal for its domain: the pool records it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The request did not complete within the per-request timeout
    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// DNS, TCP or TLS failure while establishing the connection
    #[error("connection failed: {message}")]
    Connect { message: String },

    /// The redirect chain could not be followed
    #[error("redirect failed: {message}")]
    Redirect { message: String },

    /// Any other transport or protocol failure
    #[error("request failed: {message}")]
    Request { message: String },
}

impl ProbeError {
    /// Create a new connection error.
    pub fn connect<M: Into<String>>(message: M) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Create a new generic request error.
    pub fn request<M: Into<String>>(message: M) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Classify a reqwest error, given the timeout the client was built with.
    pub fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout }
        } else if err.is_connect() {
            Self::connect(err.to_string())
        } else if err.is_redirect() {
            Self::Redirect {
                message: err.to_string(),
            }
        } else {
            Self::request(err.to_string())
        }
    }
}

impl From<toml::de::Error> for HostHunterError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError {
            message: format!("Failed to parse TOML configuration: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_messages() {
        let err = HostHunterError::file_error("hosts.txt", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "Unable to open file 'hosts.txt': No such file or directory"
        );
        assert_eq!(
            HostHunterError::EmptyDomainList.to_string(),
            "No domains found in the file."
        );
    }

    #[test]
    fn test_probe_error_display() {
        let err = ProbeError::Timeout {
            timeout: Duration::from_secs(3),
        };
        assert_eq!(err.to_string(), "request timed out after 3s");
        assert_eq!(
            ProbeError::connect("dns error").to_string(),
            "connection failed: dns error"
        );
    }
}
