//! Core data types for probe runs.
//!
//! This module defines the records that flow through the pipeline: one
//! [`ProbeResult`] per domain, a [`Progress`] snapshot per accounted result,
//! and the [`ScanReport`] handed back when the result stream is exhausted.

use crate::error::ProbeError;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Status codes that mark a domain as successful.
///
/// Only codes above 500 are rejected; everything a server actually answers
/// with below that counts as alive, redirects and client errors included.
pub const SUCCESS_STATUS_RANGE: RangeInclusive<u16> = 1..=500;

/// Outcome of a single probe.
///
/// Created exactly once per domain by a worker and consumed exactly once by
/// the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// The normalized URL that was requested, with `https://` stripped when
    /// the probe succeeded
    pub domain: String,

    /// Final status code after redirects, absent on transport failure
    pub status_code: Option<u16>,

    /// Transport failure, absent when a response was received
    pub error: Option<ProbeError>,

    /// Wall-clock time spent on the single attempt
    pub duration: Duration,
}

impl ProbeResult {
    /// Build a result for a probe that received a response.
    pub fn response(domain: String, status_code: u16, duration: Duration) -> Self {
        Self {
            domain,
            status_code: Some(status_code),
            error: None,
            duration,
        }
    }

    /// Build a result for a probe that failed in transport.
    pub fn failure(domain: String, error: ProbeError, duration: Duration) -> Self {
        Self {
            domain,
            status_code: None,
            error: Some(error),
            duration,
        }
    }

    /// Whether this result qualifies the domain as successful.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status_code.is_some_and(is_successful_status)
    }

    /// Canonical reason phrase for the status code ("OK", "Not Found", ...).
    ///
    /// Empty for failures and for nonstandard codes.
    pub fn status_text(&self) -> &'static str {
        self.status_code
            .and_then(|code| reqwest::StatusCode::from_u16(code).ok())
            .and_then(|status| status.canonical_reason())
            .unwrap_or("")
    }
}

/// Whether a status code falls inside [`SUCCESS_STATUS_RANGE`].
pub fn is_successful_status(code: u16) -> bool {
    SUCCESS_STATUS_RANGE.contains(&code)
}

/// Completion snapshot taken when the aggregator accounts for one result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Results accounted for so far, this one included
    pub processed: usize,
    /// Size of the input list, fixed at start
    pub total: usize,
    /// `processed / total * 100`
    pub percent: f64,
}

impl Progress {
    pub(crate) fn new(processed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            100.0
        } else {
            processed as f64 / total as f64 * 100.0
        };
        Self {
            processed,
            total,
            percent,
        }
    }
}

/// Final tally of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    /// Number of domains in the input list
    pub total: usize,
    /// Number of results the aggregator consumed
    pub processed: usize,
    /// Successful domains in the order workers recorded them
    pub successful: Vec<String>,
    /// Wall-clock time from pool start to stream exhaustion
    pub elapsed: Duration,
}

impl ScanReport {
    pub fn successful_count(&self) -> usize {
        self.successful.len()
    }

    pub fn failed_count(&self) -> usize {
        self.total.saturating_sub(self.successful.len())
    }

    /// Mean wall-clock time per input domain.
    pub fn average_per_domain(&self) -> Duration {
        if self.total == 0 {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.total as f64)
    }
}
