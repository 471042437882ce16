//! Record Formatter
//!
//! Renders a list of uniform records as a table, CSV, JSON, or YAML,
//! restricted to a list of fields.

mod csv;
mod table;

use std::io::Write;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::value_objects::OutputFormat;
use crate::error::{SiteHealthError, SiteHealthResult};

pub use csv::{escape_csv, render_csv};
pub use table::{render_table, status_colorizer};

/// Ordered projection of one record onto the selected fields.
pub type Record = Map<String, Value>;

/// Renders records in one format with a fixed field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    format: OutputFormat,
    fields: Vec<String>,
    color: bool,
}

impl Formatter {
    pub fn new(format: OutputFormat, fields: Vec<String>) -> Self {
        Self {
            format,
            fields,
            color: false,
        }
    }

    /// Use `requested` fields if given, `defaults` otherwise.
    ///
    /// Every requested field must be one of `available`.
    pub fn with_fields(
        format: OutputFormat,
        requested: Option<&[String]>,
        defaults: &[&str],
        available: &[&str],
    ) -> SiteHealthResult<Self> {
        let candidates: Vec<String> = match requested {
            Some(fields) if !fields.is_empty() => fields.iter().map(|f| f.trim().to_string()).collect(),
            _ => defaults.iter().map(|f| f.to_string()).collect(),
        };

        // A repeated field is shown once, at its first position.
        let mut fields: Vec<String> = Vec::with_capacity(candidates.len());
        for field in candidates {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }

        if let Some(unknown) = fields.iter().find(|f| !available.contains(&f.as_str())) {
            return Err(SiteHealthError::InvalidField {
                field: unknown.clone(),
            });
        }

        Ok(Self::new(format, fields))
    }

    /// Color the `status` column of tables.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Project serialized items onto the selected fields; missing fields are null.
    pub fn records<T: Serialize>(&self, items: &[T]) -> SiteHealthResult<Vec<Record>> {
        items
            .iter()
            .map(|item| -> SiteHealthResult<Record> {
                let value = serde_json::to_value(item)?;
                Ok(self
                    .fields
                    .iter()
                    .map(|field| {
                        let cell = value.get(field.as_str()).cloned().unwrap_or(Value::Null);
                        (field.clone(), cell)
                    })
                    .collect())
            })
            .collect()
    }

    pub fn render<T: Serialize>(&self, items: &[T]) -> SiteHealthResult<String> {
        let records = self.records(items)?;

        match self.format {
            OutputFormat::Table => {
                if records.is_empty() {
                    return Ok(String::new());
                }
                let rows = self.cells(&records, true);
                let colorize = self
                    .fields
                    .iter()
                    .position(|f| f == "status")
                    .filter(|_| self.color)
                    .map(status_colorizer);
                Ok(render_table(
                    &self.fields,
                    &rows,
                    colorize.as_ref().map(|f| f as &dyn Fn(usize, &str, String) -> String),
                ))
            }
            OutputFormat::Csv => Ok(render_csv(&self.fields, &self.cells(&records, false))),
            OutputFormat::Json => {
                let mut out = serde_json::to_string(&records)?;
                out.push('\n');
                Ok(out)
            }
            OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(&records)?),
        }
    }

    /// Write rendered items to `out`.
    pub fn display_items<T: Serialize>(&self, out: &mut impl Write, items: &[T]) -> SiteHealthResult<()> {
        out.write_all(self.render(items)?.as_bytes())?;
        Ok(())
    }

    fn cells(&self, records: &[Record], single_line: bool) -> Vec<Vec<String>> {
        records
            .iter()
            .map(|record| {
                self.fields
                    .iter()
                    .map(|field| {
                        let text = record.get(field).map(cell_text).unwrap_or_default();
                        if single_line {
                            text.replace("\r\n", " ").replace(['\n', '\r'], " ")
                        } else {
                            text
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Text of a scalar cell; arrays and objects become compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use serde_json::json;

    #[derive(Serialize)]
    struct Row {
        check: &'static str,
        status: &'static str,
        label: &'static str,
        #[serde(rename = "type")]
        kind: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                check: "WordPress Version",
                status: "good",
                label: "Your version of WordPress (6.5.2) is up to date",
                kind: "Performance",
            },
            Row {
                check: "Plugin Versions",
                status: "recommended",
                label: "You should remove inactive plugins",
                kind: "Security",
            },
        ]
    }

    fn formatter(format: OutputFormat) -> Formatter {
        Formatter::new(
            format,
            vec![
                "check".to_string(),
                "type".to_string(),
                "status".to_string(),
                "label".to_string(),
            ],
        )
    }

    #[test]
    fn table_output() {
        let out = formatter(OutputFormat::Table).render(&rows()).unwrap();
        assert_snapshot!(out, @r"
        +-------------------+-------------+-------------+-------------------------------------------------+
        | check             | type        | status      | label                                           |
        +-------------------+-------------+-------------+-------------------------------------------------+
        | WordPress Version | Performance | good        | Your version of WordPress (6.5.2) is up to date |
        | Plugin Versions   | Security    | recommended | You should remove inactive plugins              |
        +-------------------+-------------+-------------+-------------------------------------------------+
        ");
    }

    #[test]
    fn csv_output() {
        let out = formatter(OutputFormat::Csv).render(&rows()).unwrap();
        assert_snapshot!(out, @r"
        check,type,status,label
        WordPress Version,Performance,good,Your version of WordPress (6.5.2) is up to date
        Plugin Versions,Security,recommended,You should remove inactive plugins
        ");
    }

    #[test]
    fn json_output_keeps_field_order() {
        let out = Formatter::new(OutputFormat::Json, vec!["status".to_string(), "check".to_string()])
            .render(&rows()[..1])
            .unwrap();
        assert_eq!(out, "[{\"status\":\"good\",\"check\":\"WordPress Version\"}]\n");
    }

    #[test]
    fn yaml_output_is_a_sequence() {
        let out = Formatter::new(OutputFormat::Yaml, vec!["check".to_string(), "status".to_string()])
            .render(&rows())
            .unwrap();
        let parsed: Vec<Record> = serde_yaml_ng::from_str(&out).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1]["status"], json!("recommended"));
        assert!(out.starts_with("- check: WordPress Version\n"));
    }

    #[test]
    fn empty_table_prints_nothing() {
        let out = formatter(OutputFormat::Table).render::<Row>(&[]).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn empty_json_is_empty_array() {
        let out = formatter(OutputFormat::Json).render::<Row>(&[]).unwrap();
        assert_eq!(out, "[]\n");
    }

    #[test]
    fn requested_fields_override_defaults() {
        let requested = vec!["label".to_string(), " status".to_string()];
        let f = Formatter::with_fields(
            OutputFormat::Csv,
            Some(&requested),
            &["check", "status"],
            &["check", "status", "label"],
        )
        .unwrap();

        assert_eq!(f.fields(), &["label".to_string(), "status".to_string()]);
    }

    #[test]
    fn repeated_fields_are_shown_once() {
        let requested = vec!["label".to_string(), "status".to_string(), "label".to_string()];
        let f = Formatter::with_fields(
            OutputFormat::Csv,
            Some(&requested),
            &["check"],
            &["check", "status", "label"],
        )
        .unwrap();

        assert_eq!(f.fields(), &["label".to_string(), "status".to_string()]);
        let out = f.render(&rows()[..1]).unwrap();
        assert_eq!(
            out,
            "label,status\nYour version of WordPress (6.5.2) is up to date,good\n"
        );
    }

    #[test]
    fn every_row_has_one_cell_per_header() {
        let out = Formatter::new(OutputFormat::Csv, vec!["check".to_string(), "check".to_string()])
            .render(&rows()[..1])
            .unwrap();
        assert_eq!(out, "check,check\nWordPress Version,WordPress Version\n");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let requested = vec!["colour".to_string()];
        let err = Formatter::with_fields(OutputFormat::Table, Some(&requested), &["check"], &["check"])
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid field: colour.");
    }

    #[test]
    fn missing_fields_render_empty() {
        let out = Formatter::new(OutputFormat::Csv, vec!["check".to_string(), "debug".to_string()])
            .render(&rows()[..1])
            .unwrap();
        assert_eq!(out, "check,debug\nWordPress Version,\n");
    }

    #[test]
    fn cell_text_for_scalars_and_structures() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&json!(256)), "256");
        assert_eq!(cell_text(&json!("40M")), "40M");
        assert_eq!(cell_text(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(cell_text(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn table_cells_are_single_line() {
        #[derive(Serialize)]
        struct Note {
            text: &'static str,
        }
        let out = Formatter::new(OutputFormat::Table, vec!["text".to_string()])
            .render(&[Note { text: "a\nb" }])
            .unwrap();
        assert!(out.contains("| a b  |"));
    }
}
