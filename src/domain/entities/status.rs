//! Status tallies over a set of check results

use serde::Serialize;

use super::check::{CheckResult, CheckStatus};

/// Counts of completed checks per status.
///
/// Rows without a status are not counted anywhere, including `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub critical: usize,
    pub recommended: usize,
    pub good: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn new(critical: usize, recommended: usize, good: usize) -> Self {
        Self {
            critical,
            recommended,
            good,
            total: critical + recommended + good,
        }
    }

    pub fn from_results(results: &[CheckResult]) -> Self {
        let count = |status: CheckStatus| {
            results
                .iter()
                .filter(|r| r.status == Some(status))
                .count()
        };

        Self::new(
            count(CheckStatus::Critical),
            count(CheckStatus::Recommended),
            count(CheckStatus::Good),
        )
    }
}
