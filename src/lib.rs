//! site-health - command-line access to a CMS host's Site Health data
//!
//! The host registers health checks and exposes structured debug information.
//! This crate runs those checks, summarizes them into one verdict, and
//! flattens the debug information into rows for table, CSV, JSON or YAML output.
//!
//! Layers:
//! - `domain`: entities, ports to the host, and the pure normalization logic
//! - `application`: check, status and info use cases
//! - `infrastructure`: host snapshot adapters
//! - `presentation`: CLI definition, wiring and output formatting

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{CheckResult, CheckStatus, InfoRow, SectionSummary, StatusCounts};
pub use domain::services::{overall_status, strip_tags, ResultNormalizer};
pub use domain::value_objects::{AsyncPolicy, OutputFormat};
pub use error::{SiteHealthError, SiteHealthResult};
pub use infrastructure::HostSnapshot;
