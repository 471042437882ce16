//! Use Case Factory
//!
//! Loads the host snapshot and wires use cases to it.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{CheckOptions, CheckUseCase, InfoUseCase, StatusUseCase};
use crate::config::Config;
use crate::error::{SiteHealthError, SiteHealthResult};
use crate::infrastructure::{HostSnapshot, SnapshotSource};

/// Load the host snapshot from the CLI path or the configured source.
pub fn load_host(explicit: Option<&Path>, config: &Config) -> SiteHealthResult<HostSnapshot> {
    let source =
        SnapshotSource::resolve(explicit, &config.host).ok_or(SiteHealthError::HostUnavailable)?;
    source.load()
}

pub fn check_options(config: &Config) -> CheckOptions {
    CheckOptions {
        async_policy: config.checks.async_policy,
    }
}

/// Create a check use case bound to `host`
pub fn create_check_use_case<'a>(
    host: &'a HostSnapshot,
    config: &Config,
) -> CheckUseCase<'a, HostSnapshot> {
    CheckUseCase::new(host, check_options(config))
}

/// Create a status use case bound to `host`
pub fn create_status_use_case<'a>(
    host: &'a HostSnapshot,
    config: &Config,
) -> StatusUseCase<'a, HostSnapshot> {
    StatusUseCase::new(host, check_options(config))
}

/// Create an info use case bound to `host`
pub fn create_info_use_case(host: &HostSnapshot) -> InfoUseCase<'_, HostSnapshot> {
    InfoUseCase::new(host)
}
