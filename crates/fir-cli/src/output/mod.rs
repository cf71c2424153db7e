use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: Value) -> String {
    match value {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => match single_list(&map) {
            Some(items) => render_array_table(items),
            None => render_object_table(map),
        },
        scalar => table::render_entity_table(&["value"], &[vec![value_to_cell(&scalar)]], table_options()),
    }
}

/// `{"documents": [...]}` style envelopes render as their list.
fn single_list(map: &Map<String, Value>) -> Option<&Vec<Value>> {
    let mut lists = map.values().filter_map(Value::as_array);
    let list = lists.next()?;
    (lists.next().is_none() && map.len() == 1).then_some(list)
}

fn render_object_table(map: Map<String, Value>) -> String {
    let rows = map
        .into_iter()
        .map(|(key, value)| vec![key, value_to_cell(&value)])
        .collect::<Vec<_>>();
    table::render_entity_table(&["field", "value"], &rows, table_options())
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    // Union of keys across rows, in first-seen order.
    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }
    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&headers, &rows, table_options())
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
    use serde::Serialize;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        pages: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "doc-1", pages: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "doc-1");
        assert_eq!(parsed["pages"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "doc-1", pages: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_renders_as_field_value_table() {
        let value = Example { id: "doc-1", pages: 7 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("field")));
        assert!(out.contains("doc-1"));
    }

    #[test]
    fn list_envelope_renders_rows() {
        let value = json!({
            "documents": [
                {"id": "doc-1", "title": "FIR 101/2025", "processing_status": "ready"},
                {"id": "doc-2", "title": "FIR 7/2025", "processing_status": "error"},
            ]
        });
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let id_pos = header.find("id").expect("id column");
        let title_pos = header.find("title").expect("title column");
        assert!(id_pos < title_pos);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_list_has_placeholder() {
        let out = render(&json!([]), OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
