//! Debug data flattening
//!
//! Produces one row per section field for `info` and one row per section for
//! `list-info-sections`.

use serde_json::Value;

use crate::domain::entities::{DebugData, InfoRow, SectionSummary, SizesData};

/// Section whose values are replaced by separately computed directory sizes.
pub const PATHS_SIZES_SECTION: &str = "wp-paths-sizes";

/// `{label, section}` for every section, in host order.
pub fn list_sections(data: &DebugData) -> Vec<SectionSummary> {
    data.iter()
        .map(|(key, section)| SectionSummary {
            label: section.label.clone(),
            section: key.to_string(),
        })
        .collect()
}

/// Rows for one section. An unknown section yields no rows.
pub fn flatten_section(data: &DebugData, section: &str, sizes: Option<&SizesData>) -> Vec<InfoRow> {
    let Some(info) = data.get(section) else {
        return Vec::new();
    };
    let sizes = sizes.filter(|_| section == PATHS_SIZES_SECTION);

    info.fields
        .iter()
        .map(|(key, field)| {
            let mut row = InfoRow {
                field: key.to_string(),
                section: section.to_string(),
                label: field.label.clone(),
                value: field.value.clone(),
                debug: field.debug.clone().unwrap_or(Value::Null),
                private: field.is_private(),
            };

            if let Some(entry) = sizes.and_then(|s| s.get(key)) {
                if let Some(size) = &entry.size {
                    row.value = size.clone();
                }
                if let Some(debug) = &entry.debug {
                    row.debug = debug.clone();
                }
            }

            row
        })
        .collect()
}

/// Rows for every section, section order first, then field order.
pub fn flatten_all(data: &DebugData, sizes: Option<&SizesData>) -> Vec<InfoRow> {
    data.keys()
        .flat_map(|section| flatten_section(data, section, sizes))
        .collect()
}

/// Drop private rows unless they were asked for.
pub fn filter_private(rows: Vec<InfoRow>, include_private: bool) -> Vec<InfoRow> {
    if include_private {
        return rows;
    }
    rows.into_iter().filter(|row| !row.private).collect()
}
