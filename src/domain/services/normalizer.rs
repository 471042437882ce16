//! Result normalization
//!
//! Turns the host's check definitions into flat `CheckResult` rows by running
//! the matching host test functions.

use tracing::debug;

use crate::domain::entities::{CheckDefinition, CheckResult, CheckType, HostTestResult, TestRef};
use crate::domain::ports::{test_function_name, TestRegistry};
use crate::domain::value_objects::AsyncPolicy;
use crate::error::SiteHealthResult;

use super::markup::strip_tags;

/// Identifier fragment of the async check that has a synchronous twin.
const AUTHORIZATION_HEADER_TEST: &str = "authorization-header";

/// Runs check definitions against a registry and flattens the results.
///
/// Always yields one row per definition, in definition order. A definition
/// whose test function cannot be resolved keeps an empty row.
pub struct ResultNormalizer<'a, R: TestRegistry + ?Sized> {
    registry: &'a R,
    async_policy: AsyncPolicy,
}

impl<'a, R: TestRegistry + ?Sized> ResultNormalizer<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self {
            registry,
            async_policy: AsyncPolicy::default(),
        }
    }

    pub fn with_async_policy(mut self, policy: AsyncPolicy) -> Self {
        self.async_policy = policy;
        self
    }

    pub fn normalize(&self, definitions: &[CheckDefinition]) -> SiteHealthResult<Vec<CheckResult>> {
        definitions.iter().map(|d| self.normalize_one(d)).collect()
    }

    fn normalize_one(&self, definition: &CheckDefinition) -> SiteHealthResult<CheckResult> {
        let mut row = CheckResult::pending(&definition.label);

        // Later candidates overwrite earlier ones.
        for function in self.candidate_functions(definition) {
            match self.registry.resolve(&function) {
                Some(test) => apply(&mut row, test.call()?),
                None => debug!(
                    check = %definition.label,
                    function = %function,
                    "test function not resolvable"
                ),
            }
        }

        Ok(row)
    }

    fn candidate_functions(&self, definition: &CheckDefinition) -> Vec<String> {
        match definition.check_type {
            CheckType::Direct => definition
                .test
                .identifier()
                .map(test_function_name)
                .into_iter()
                .collect(),
            CheckType::Async => match self.async_policy {
                AsyncPolicy::Skip => Vec::new(),
                AsyncPolicy::Direct => async_candidates(definition),
            },
        }
    }
}

fn async_candidates(definition: &CheckDefinition) -> Vec<String> {
    let mut candidates = Vec::new();

    match &definition.async_direct_test {
        Some(callable @ TestRef::Callable(_)) => {
            candidates.extend(callable.method().map(str::to_string));
        }
        Some(TestRef::Identifier(id)) => candidates.push(test_function_name(id)),
        None => {}
    }

    let names_authorization_header = definition
        .test
        .identifier()
        .is_some_and(|id| id.contains(AUTHORIZATION_HEADER_TEST));
    if names_authorization_header {
        candidates.push(test_function_name("authorization_header"));
    }

    candidates
}

fn apply(row: &mut CheckResult, result: HostTestResult) {
    row.status = Some(result.status);
    row.label = result.label;
    row.test = result.test;
    row.description = strip_tags(&result.description);
    row.kind = result.badge.label;
}
