use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use dctf_core::responses::{CompanyEntry, StatusSummary};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod table;

/// Column headers of the company table.
const COMPANY_HEADERS: [&str; 5] = ["#", "nome", "cnpj", "status", "ultima_verificacao"];

/// Position of `status` in [`COMPANY_HEADERS`].
const STATUS_COLUMN: usize = 3;

fn table_options(status_column: Option<usize>) -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
        status_column,
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Write a serializable response in the requested format.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

/// Write a one-line confirmation for a table-mode mutation, unless quiet.
pub fn confirm(flags: &GlobalFlags, out: &mut dyn Write, message: &str) -> anyhow::Result<()> {
    if !flags.quiet {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

/// Write the company list: an aligned table in table mode, JSON otherwise.
pub fn output_companies(
    entries: &[CompanyEntry],
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(&entries, format, out);
    }

    if entries.is_empty() {
        writeln!(out, "(no companies registered)")?;
        return Ok(());
    }

    writeln!(out, "{}", render_company_table(entries))?;
    Ok(())
}

/// One line with the per-status counts, labelled as on the results table.
#[must_use]
pub fn summary_line(summary: &StatusSummary) -> String {
    format!(
        "Entregue: {}  Não entregue: {}  Pendente: {}  Não verificado: {}",
        summary.delivered, summary.not_delivered, summary.pending, summary.unverified
    )
}

fn render_company_table(entries: &[CompanyEntry]) -> String {
    let rows = entries
        .iter()
        .map(|entry| {
            vec![
                entry.index.to_string(),
                entry.company.name.clone(),
                entry.company.tax_id.clone(),
                entry.company.status.label().to_string(),
                entry
                    .company
                    .last_checked_display()
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect::<Vec<_>>();

    table::render_table(
        &COMPANY_HEADERS,
        &rows,
        table_options(Some(STATUS_COLUMN)),
    )
}

fn render_key_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options(None);
    let value = serde_json::to_value(value)?;
    match value {
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&headers, &rows, options))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use dctf_core::entities::Company;
    use dctf_core::enums::DeliveryStatus;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Example {
        file_name: &'static str,
        encoded_len: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            file_name: "a.pfx",
            encoded_len: 7,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["file_name"], "a.pfx");
        assert_eq!(parsed["encoded_len"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            file_name: "a.pfx",
            encoded_len: 7,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example {
            file_name: "a.pfx",
            encoded_len: 7,
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("file_name"));
        assert!(out.contains("a.pfx"));
    }

    #[test]
    fn company_table_uses_labels_and_positions() {
        let mut checked = Company::new("Beta", "22222222000122");
        checked.record_check(DeliveryStatus::NotDelivered, Utc::now());
        let entries = vec![
            CompanyEntry {
                index: 0,
                company: Company::new("Alfa", "11111111000111"),
            },
            CompanyEntry {
                index: 1,
                company: checked,
            },
        ];

        let mut out = Vec::new();
        output_companies(&entries, OutputFormat::Table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with('#'));
        assert!(lines[2].contains("Não verificado"));
        assert!(lines[2].trim_end().ends_with('-'));
        assert!(lines[3].contains("Não entregue"));
    }

    #[test]
    fn empty_company_list_in_json_is_an_array() {
        let mut out = Vec::new();
        output_companies(&[], OutputFormat::Json, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[test]
    fn summary_line_lists_every_status() {
        let summary = StatusSummary {
            delivered: 2,
            not_delivered: 1,
            pending: 0,
            unverified: 3,
            total: 6,
        };
        assert_eq!(
            summary_line(&summary),
            "Entregue: 2  Não entregue: 1  Pendente: 0  Não verificado: 3"
        );
    }
}
