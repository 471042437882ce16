//! Configuration module for site-health
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SITE_HEALTH_*)
//! 3. Project config (./site-health.toml)
//! 4. User config (<config dir>/site-health/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{load_from, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{ChecksConfig, ColorMode, Config, HostConfig, OutputConfig};
