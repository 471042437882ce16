//! Error types for site-health
//!
//! Library code returns `SiteHealthError`; command glue wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for site-health operations
pub type SiteHealthResult<T> = Result<T, SiteHealthError>;

/// Main error type for site-health operations
#[derive(Error, Debug)]
pub enum SiteHealthError {
    /// `info` was called without a section and without `--all`
    #[error("Please specify a section, or use the --all flag.")]
    MissingSection,

    /// No host snapshot source was configured
    #[error(
        "no site health data available - pass --snapshot <PATH>, set SITE_HEALTH_SNAPSHOT, or configure [host] in site-health.toml"
    )]
    HostUnavailable,

    /// The host snapshot document could not be parsed
    #[error("invalid site health snapshot from {source_name}: {message}")]
    InvalidSnapshot {
        source_name: String,
        message: String,
    },

    /// The configured host export command did not succeed
    #[error("host command '{command}' failed ({status}): {stderr}")]
    HostCommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// `--fields` named a column the command does not produce
    #[error("Invalid field: {field}.")]
    InvalidField { field: String },

    /// `--format` named an unsupported output format
    #[error("invalid format '{format}' (expected one of: table, csv, json, yaml)")]
    InvalidFormat { format: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
