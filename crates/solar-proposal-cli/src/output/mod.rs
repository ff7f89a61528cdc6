pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Flatten nested objects into dotted field paths, depth-first, skipping
/// arrays (line items are echoed in JSON mode; tables show scalars).
pub(crate) fn flatten_fields(value: &Value) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    flatten_into(None, value, &mut fields);
    fields
}

fn flatten_into(prefix: Option<&str>, value: &Value, fields: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = match prefix {
                    Some(p) => format!("{p}.{key}"),
                    None => key.clone(),
                };
                flatten_into(Some(&path), val, fields);
            }
        }
        Value::Array(_) => {}
        other => {
            if let Some(p) = prefix {
                fields.push((p.to_string(), scalar_to_string(other)));
            }
        }
    }
}

pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
