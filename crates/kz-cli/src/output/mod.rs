use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod results;
pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Table output for values without a dedicated layout falls back to a
/// key/value listing (objects) or one column per field (arrays of objects).
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Like [`output`], with an explicit table layout for `--format table`.
pub fn output_rows<T: Serialize>(
    value: &T,
    format: OutputFormat,
    headers: &[&str],
    rows: &[Vec<String>],
) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", render_rows(headers, rows));
        return Ok(());
    }
    output(value, format)
}

pub fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    table::render_entity_table(headers, rows, table_options())
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(render_rows(&["key", "value"], &rows))
        }
        scalar => Ok(render_rows(&["value"], &[vec![value_to_cell(scalar)]])),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_rows(&["value"], &rows);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    render_rows(&header_refs, &rows)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => yes_no(*v).to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

/// `"yes"` / `"no"` for table cells.
pub const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use kz_core::responses::DeleteResponse;
    use pretty_assertions::assert_eq;

    use super::{render, render_rows};
    use crate::cli::OutputFormat;

    fn deleted() -> DeleteResponse {
        DeleteResponse {
            entity: "quiz".into(),
            id: "Q1".into(),
            deleted: true,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&deleted(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "Q1");
        assert_eq!(parsed["deleted"], true);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&deleted(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.contains(r#""entity":"quiz""#));
    }

    #[test]
    fn table_render_for_object_lists_keys() {
        let out = render(&deleted(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("key"));
        assert!(out.lines().any(|line| line.starts_with("deleted") && line.ends_with("yes")));
    }

    #[test]
    fn table_render_for_arrays_uses_field_columns() {
        let out = render(&vec![deleted(), deleted()], OutputFormat::Table)
            .expect("table render should work");
        let header = out.lines().next().unwrap_or_default();
        assert!(header.contains("entity"));
        assert!(header.contains("deleted"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_rows_render_placeholder() {
        assert_eq!(render_rows(&["id"], &[]), "(no rows)");
    }
}
