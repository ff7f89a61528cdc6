use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten_fields, scalar_to_string};

/// Format output as a field/value table using the tabled crate.
///
/// Full calculation envelopes print only the resolved `output` section;
/// the echoed input and params stay in JSON mode.
pub fn print_table(value: &Value) {
    let section = value
        .as_object()
        .and_then(|m| m.get("output"))
        .unwrap_or(value);

    match section {
        Value::Object(_) => print_fields(section),
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", scalar_to_string(section)),
    }
}

fn print_fields(value: &Value) {
    let fields = flatten_fields(value);
    if fields.is_empty() {
        println!("(empty)");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in &fields {
        builder.push_record([key.as_str(), val.as_str()]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(scalar_to_string).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", scalar_to_string(item));
        }
    }
}
