//! Test registry port - the host's catalogue of site health checks.

use crate::domain::entities::{CheckGroup, HostTestResult};
use crate::error::SiteHealthResult;

/// A host test function resolved by name.
pub trait TestFunction {
    fn call(&self) -> SiteHealthResult<HostTestResult>;
}

impl<F> TestFunction for F
where
    F: Fn() -> SiteHealthResult<HostTestResult>,
{
    fn call(&self) -> SiteHealthResult<HostTestResult> {
        self()
    }
}

/// Registry of the checks the host knows about.
///
/// Implementations own the lookup table from test function names
/// (`get_test_<identifier>`) to callables; nothing is resolved reflectively.
pub trait TestRegistry {
    /// Registered checks grouped by check type, in host order.
    fn tests(&self) -> SiteHealthResult<Vec<CheckGroup>>;

    /// Look up a test function by its full name.
    fn resolve(&self, function: &str) -> Option<&dyn TestFunction>;
}

/// Name of the host test function for a check identifier.
pub fn test_function_name(identifier: &str) -> String {
    format!("get_test_{}", identifier)
}
