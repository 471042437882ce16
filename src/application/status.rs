//! Status Use Case
//!
//! Runs all checks and reduces them to one verdict.

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{CheckResult, CheckStatus, StatusCounts};
use crate::domain::ports::TestRegistry;
use crate::domain::services::{overall_status, verdict_token};
use crate::error::SiteHealthResult;

use super::check::{CheckOptions, CheckUseCase};

/// Result of the status operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub counts: StatusCounts,
    pub verdict: Option<CheckStatus>,
    #[serde(skip)]
    pub results: Vec<CheckResult>,
}

impl StatusReport {
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let counts = StatusCounts::from_results(&results);
        Self {
            counts,
            verdict: overall_status(&counts),
            results,
        }
    }

    /// `good`, `recommended`, `critical`, or empty.
    pub fn token(&self) -> &'static str {
        verdict_token(self.verdict)
    }
}

/// Status Use Case
pub struct StatusUseCase<'a, R: TestRegistry + ?Sized> {
    checks: CheckUseCase<'a, R>,
}

impl<'a, R: TestRegistry + ?Sized> StatusUseCase<'a, R> {
    pub fn new(registry: &'a R, options: CheckOptions) -> Self {
        Self {
            checks: CheckUseCase::new(registry, options),
        }
    }

    pub fn execute(&self) -> SiteHealthResult<StatusReport> {
        let report = StatusReport::from_results(self.checks.execute()?);
        debug!(
            critical = report.counts.critical,
            recommended = report.counts.recommended,
            good = report.counts.good,
            total = report.counts.total,
            verdict = report.token(),
            "site status computed"
        );
        Ok(report)
    }
}
