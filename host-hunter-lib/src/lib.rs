//! # Host Hunter Library
//!
//! A bulk HTTP availability prober built around a bounded worker pool.
//!
//! A feeder pushes domains onto a bounded work queue, a fixed number of
//! workers each issue one GET per domain, and an aggregator drains the bounded
//! result queue while a coordinator closes it once every worker has exited.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use host_hunter_lib::{HostChecker, ProbeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let checker = HostChecker::new(ProbeConfig::default())?;
//!     let result = checker.probe("example.com").await;
//!
//!     println!("{} -> {:?}", result.domain, result.status_code);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Backpressure**: both queues are bounded
//! - **Single attempt**: one GET per domain, never retried
//! - **Pluggable transport**: the [`Transport`] trait lets tests run the pool
//!   without a network

// Re-export main public API types and functions
pub use aggregator::Aggregator;
pub use checker::HostChecker;
pub use concurrent::{probe_domain, spawn_feeder, spawn_shutdown_coordinator, spawn_workers};
pub use config::{FileConfig, ProbeConfig, ProbeFileConfig};
pub use error::{HostHunterError, ProbeError};
pub use state::SharedState;
pub use transport::{HttpTransport, Transport};
pub use types::{is_successful_status, ProbeResult, Progress, ScanReport, SUCCESS_STATUS_RANGE};
pub use utils::{normalize_domain, parse_domain_list, read_domains_from_file, strip_https};

mod aggregator;
mod checker;
mod concurrent;
mod config;
mod error;
mod state;
mod transport;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, HostHunterError>;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
