//! Check entities
//!
//! `CheckDefinition` is what the host's test registry announces,
//! `HostTestResult` is what a host test function returns, and `CheckResult`
//! is the flat row every command renders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// How the host expects a check to be run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    /// Invoked synchronously through `get_test_<identifier>`
    Direct,
    /// Normally run by the host in the background
    Async,
}

impl FromStr for CheckType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(CheckType::Direct),
            "async" => Ok(CheckType::Async),
            other => Err(format!("unknown check type '{}'", other)),
        }
    }
}

/// The `test` entry of a registry item.
///
/// The host uses a plain identifier for most checks but may register a
/// callable (`[class, method]`) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestRef {
    Identifier(String),
    Callable(Vec<String>),
}

impl TestRef {
    /// Identifier for string references, `None` for callables.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            TestRef::Identifier(id) => Some(id),
            TestRef::Callable(_) => None,
        }
    }

    /// Method name of a callable (its last element).
    pub fn method(&self) -> Option<&str> {
        match self {
            TestRef::Identifier(_) => None,
            TestRef::Callable(parts) => parts.last().map(String::as_str),
        }
    }
}

/// One diagnostic announced by the host's test registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDefinition {
    pub label: String,
    pub check_type: CheckType,
    pub test: TestRef,
    /// Synchronous fallback the host registers for some async checks
    pub async_direct_test: Option<TestRef>,
}

impl CheckDefinition {
    pub fn direct(label: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            check_type: CheckType::Direct,
            test: TestRef::Identifier(identifier.into()),
            async_direct_test: None,
        }
    }

    pub fn asynchronous(label: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            check_type: CheckType::Async,
            test: TestRef::Identifier(identifier.into()),
            async_direct_test: None,
        }
    }

    pub fn with_async_direct_test(mut self, callable: TestRef) -> Self {
        self.async_direct_test = Some(callable);
        self
    }
}

/// Definitions the registry lists under a single check type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckGroup {
    pub check_type: CheckType,
    pub definitions: Vec<CheckDefinition>,
}

/// Outcome of a completed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Good,
    Recommended,
    Critical,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Good => "good",
            CheckStatus::Recommended => "recommended",
            CheckStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category badge attached to a host result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    #[serde(default)]
    pub color: String,
}

/// Result structure returned by a host test function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostTestResult {
    pub status: CheckStatus,
    pub label: String,
    pub test: String,
    #[serde(default)]
    pub description: String,
    pub badge: Badge,
    #[serde(default)]
    pub actions: String,
}

/// One output row of `check`.
///
/// Every field except `check` stays empty when the host produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CheckResult {
    pub check: String,
    #[serde(serialize_with = "serialize_status")]
    pub status: Option<CheckStatus>,
    pub label: String,
    pub test: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CheckResult {
    /// Empty row for a definition that has not (yet) produced a result.
    pub fn pending(check: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            ..Self::default()
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.status.is_some()
    }
}

/// Column names of a `CheckResult` row, in serialization order.
pub const CHECK_RESULT_FIELDS: &[&str] = &["check", "status", "label", "test", "description", "type"];

fn serialize_status<S: Serializer>(
    status: &Option<CheckStatus>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(status.map(|s| s.as_str()).unwrap_or(""))
}
