//! Static lookup table of host test functions.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

use crate::domain::entities::HostTestResult;
use crate::domain::ports::{test_function_name, TestFunction};
use crate::error::SiteHealthResult;

/// Boxed host test function.
pub type TestFn = Box<dyn Fn() -> SiteHealthResult<HostTestResult>>;

/// Map from test function name (`get_test_<identifier>`) to callable,
/// populated once when the host data is loaded.
#[derive(Default)]
pub struct TestTable {
    functions: HashMap<String, TestFn>,
}

impl TestTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// One function per recorded result, named after the result key.
    pub fn from_results(results: IndexMap<String, HostTestResult>) -> Self {
        let mut table = Self::new();
        for (identifier, result) in results {
            table.register(test_function_name(&identifier), move || Ok(result.clone()));
        }
        table
    }

    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn() -> SiteHealthResult<HostTestResult> + 'static,
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    pub fn get(&self, name: &str) -> Option<&dyn TestFunction> {
        self.functions.get(name).map(|f| f as &dyn TestFunction)
    }
}

impl fmt::Debug for TestTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TestTable").field("functions", &names).finish()
    }
}
