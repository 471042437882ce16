//! Async Policy Value Object
//!
//! Decides what happens to checks the host registers as `async`.

use serde::{Deserialize, Serialize};

/// Handling of async checks during a run
///
/// - `Skip`: async checks produce an empty row (default)
/// - `Direct`: run the synchronous fallback the host registers for the check,
///   when one can be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AsyncPolicy {
    #[default]
    Skip,
    Direct,
}

impl AsyncPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "skip" => Some(AsyncPolicy::Skip),
            "direct" => Some(AsyncPolicy::Direct),
            _ => None,
        }
    }
}
