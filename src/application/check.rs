//! Check Use Case
//!
//! Collects the host's registered checks and runs them into flat rows.

use tracing::{debug, info};

use crate::domain::entities::{CheckDefinition, CheckResult};
use crate::domain::ports::TestRegistry;
use crate::domain::services::ResultNormalizer;
use crate::domain::value_objects::AsyncPolicy;
use crate::error::SiteHealthResult;

/// Options for the check operation
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// What to do with async checks
    pub async_policy: AsyncPolicy,
}

/// Check Use Case
///
/// Registry order is kept: check types in host order, then the definitions
/// within each type.
pub struct CheckUseCase<'a, R: TestRegistry + ?Sized> {
    registry: &'a R,
    options: CheckOptions,
}

impl<'a, R: TestRegistry + ?Sized> CheckUseCase<'a, R> {
    pub fn new(registry: &'a R, options: CheckOptions) -> Self {
        Self { registry, options }
    }

    /// All registered definitions, flattened across check types.
    pub fn definitions(&self) -> SiteHealthResult<Vec<CheckDefinition>> {
        Ok(self
            .registry
            .tests()?
            .into_iter()
            .flat_map(|group| group.definitions)
            .collect())
    }

    /// Run every registered check.
    pub fn execute(&self) -> SiteHealthResult<Vec<CheckResult>> {
        let definitions = self.definitions()?;
        info!(count = definitions.len(), "running site health checks");

        let results = ResultNormalizer::new(self.registry)
            .with_async_policy(self.options.async_policy)
            .normalize(&definitions)?;

        debug!(
            unresolved = results.iter().filter(|r| !r.is_resolved()).count(),
            "checks normalized"
        );
        Ok(results)
    }
}
