//! Status aggregation
//!
//! Reduces check results to the single site verdict printed by `status`.

use crate::domain::entities::{CheckResult, CheckStatus, StatusCounts};

/// Share of good results (in percent) below which the site needs attention.
pub const GOOD_THRESHOLD_PERCENT: usize = 80;

/// Overall verdict for a set of counts.
///
/// `None` when no check completed. A single critical result does not make the
/// site critical; two or more do.
pub fn overall_status(counts: &StatusCounts) -> Option<CheckStatus> {
    if counts.total == 0 {
        return None;
    }

    if counts.critical > 1 {
        return Some(CheckStatus::Critical);
    }

    // good * 100 / total < 80, kept in integers so 80% exactly is good.
    if counts.good * 100 < GOOD_THRESHOLD_PERCENT * counts.total {
        Some(CheckStatus::Recommended)
    } else {
        Some(CheckStatus::Good)
    }
}

/// Overall verdict for a set of check results.
pub fn aggregate(results: &[CheckResult]) -> Option<CheckStatus> {
    overall_status(&StatusCounts::from_results(results))
}

/// Token printed for a verdict; empty when there is none.
pub fn verdict_token(verdict: Option<CheckStatus>) -> &'static str {
    verdict.map(|s| s.as_str()).unwrap_or("")
}
