//! Host snapshot document
//!
//! The host exports its site health state as one JSON document:
//!
//! ```json
//! {
//!   "tests":      { "direct": { "<id>": { "label": "...", "test": "<id>" } }, "async": { ... } },
//!   "results":    { "<id>": { "status": "good", "label": "...", "test": "...",
//!                             "description": "<p>...</p>", "badge": { "label": "Security" } } },
//!   "debug_data": { "<section>": { "label": "...", "fields": { "<key>": { "label": "...", "value": "..." } } } },
//!   "sizes":      { "<key>": { "size": "...", "debug": "..." } }
//! }
//! ```
//!
//! Key order is meaningful throughout and is preserved.

use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::entities::{
    CheckDefinition, CheckGroup, CheckType, DebugData, HostTestResult, SizesData, TestRef,
};
use crate::domain::ports::{DebugDataProvider, TestFunction, TestRegistry};
use crate::error::{SiteHealthError, SiteHealthResult};

use super::test_table::TestTable;

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    tests: IndexMap<String, RegistryItems>,
    #[serde(default)]
    results: IndexMap<String, HostTestResult>,
    #[serde(default)]
    debug_data: DebugData,
    #[serde(default)]
    sizes: Option<SizesData>,
}

/// Registry entries of one check type: keyed by slug, or a plain list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegistryItems {
    Keyed(IndexMap<String, RegistryItem>),
    Listed(Vec<RegistryItem>),
}

impl RegistryItems {
    fn into_items(self) -> Vec<RegistryItem> {
        match self {
            RegistryItems::Keyed(map) => map.into_values().collect(),
            RegistryItems::Listed(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegistryItem {
    label: String,
    test: TestRef,
    #[serde(default)]
    async_direct_test: Option<TestRef>,
}

/// Site health data loaded from a host snapshot.
#[derive(Debug)]
pub struct HostSnapshot {
    source_name: String,
    groups: Vec<CheckGroup>,
    table: TestTable,
    debug_data: DebugData,
    sizes: Option<SizesData>,
}

impl HostSnapshot {
    /// Parse a snapshot document; `source_name` is used in error messages.
    pub fn from_json(json: &str, source_name: &str) -> SiteHealthResult<Self> {
        let document: SnapshotDocument =
            serde_json::from_str(json).map_err(|e| invalid(source_name, e.to_string()))?;

        let mut groups = Vec::with_capacity(document.tests.len());
        for (key, items) in document.tests {
            let check_type: CheckType = key.parse().map_err(|e| invalid(source_name, e))?;
            let definitions = items
                .into_items()
                .into_iter()
                .map(|item| CheckDefinition {
                    label: item.label,
                    check_type,
                    test: item.test,
                    async_direct_test: item.async_direct_test,
                })
                .collect();
            groups.push(CheckGroup {
                check_type,
                definitions,
            });
        }

        Ok(Self {
            source_name: source_name.to_string(),
            groups,
            table: TestTable::from_results(document.results),
            debug_data: document.debug_data,
            sizes: document.sizes,
        })
    }

    pub fn from_reader(mut reader: impl Read, source_name: &str) -> SiteHealthResult<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json, source_name)
    }

    pub fn from_path(path: &Path) -> SiteHealthResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, &path.display().to_string())
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Number of registered check definitions across all check types.
    pub fn definition_count(&self) -> usize {
        self.groups.iter().map(|g| g.definitions.len()).sum()
    }
}

impl TestRegistry for HostSnapshot {
    fn tests(&self) -> SiteHealthResult<Vec<CheckGroup>> {
        Ok(self.groups.clone())
    }

    fn resolve(&self, function: &str) -> Option<&dyn TestFunction> {
        self.table.get(function)
    }
}

impl DebugDataProvider for HostSnapshot {
    fn debug_data(&self) -> SiteHealthResult<DebugData> {
        Ok(self.debug_data.clone())
    }

    fn sizes(&self) -> SiteHealthResult<Option<SizesData>> {
        Ok(self.sizes.clone())
    }
}

fn invalid(source_name: &str, message: impl Into<String>) -> SiteHealthError {
    SiteHealthError::InvalidSnapshot {
        source_name: source_name.to_string(),
        message: message.into(),
    }
}
