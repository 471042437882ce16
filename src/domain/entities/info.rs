//! Debug information entities
//!
//! The host groups its debug data into sections (`wp-core`, `wp-database`, ...),
//! each holding an ordered set of fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named group of debug fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfoSection {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub show_count: bool,
    #[serde(default)]
    pub fields: IndexMap<String, InfoField>,
}

/// One debug field as reported by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfoField {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub debug: Option<Value>,
    /// Loosely typed on the host side; see [`InfoField::is_private`].
    #[serde(default)]
    pub private: Option<Value>,
}

impl InfoField {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Private flag coerced to a boolean with the host's truthiness rules.
    pub fn is_private(&self) -> bool {
        self.private.as_ref().map(truthy).unwrap_or(false)
    }
}

/// Directory size entry the host computes separately for `wp-paths-sizes`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeEntry {
    #[serde(default)]
    pub size: Option<Value>,
    #[serde(default)]
    pub debug: Option<Value>,
}

/// Debug data keyed by section slug, in host order.
pub type DebugData = IndexMap<String, InfoSection>;

/// Directory sizes keyed by field key.
pub type SizesData = IndexMap<String, SizeEntry>;

/// Row of `list-info-sections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub label: String,
    pub section: String,
}

/// Row of `info`: one field of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoRow {
    pub field: String,
    pub section: String,
    pub label: String,
    pub value: Value,
    pub debug: Value,
    pub private: bool,
}

/// Column names of an `InfoRow`, in serialization order.
pub const INFO_ROW_FIELDS: &[&str] = &["field", "section", "label", "value", "debug", "private"];

/// Column names of a `SectionSummary`.
pub const SECTION_SUMMARY_FIELDS: &[&str] = &["label", "section"];

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
