//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AsyncPolicy, ConfigWarning, OutputFormat};
use crate::error::SiteHealthResult;

use super::loader;

/// Where the host snapshot is read from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Snapshot JSON file (`-` for stdin)
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    /// Export command whose stdout is the snapshot, as argv
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

/// Check execution settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksConfig {
    #[serde(default)]
    pub async_policy: AsyncPolicy,
}

/// Color mode configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,

    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SiteHealthResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SiteHealthResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// `SITE_HEALTH_*` environment overrides.
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> SiteHealthResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }
}
