use serde_json::Value;

use super::scalar_to_string;

/// Print just the headline figure from the output.
///
/// Heuristic: search well-known result fields in order of priority anywhere
/// in the (nested) output, then fall back to the first scalar field.
pub fn print_minimal(value: &Value) {
    let section = value
        .as_object()
        .and_then(|m| m.get("output"))
        .unwrap_or(value);

    let priority_keys = [
        "cash_total",
        "monthly_installment",
        "monthly_rate",
        "balance_after_grace",
        "value",
        "system_kwp",
    ];

    for key in &priority_keys {
        if let Some(val) = find_key(section, key) {
            if !val.is_null() {
                println!("{}", scalar_to_string(val));
                return;
            }
        }
    }

    // Fall back to the first scalar field.
    if let Some((key, val)) = first_scalar(section) {
        println!("{}: {}", key, scalar_to_string(val));
        return;
    }

    println!("{}", scalar_to_string(section));
}

/// Depth-first search for a key in nested objects.
fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let map = value.as_object()?;
    if let Some(v) = map.get(key) {
        return Some(v);
    }
    for v in map.values() {
        if let Some(found) = find_key(v, key) {
            return Some(found);
        }
    }
    None
}

fn first_scalar(value: &Value) -> Option<(&String, &Value)> {
    let map = value.as_object()?;
    for (k, v) in map {
        match v {
            Value::Object(_) | Value::Array(_) => continue,
            _ => return Some((k, v)),
        }
    }
    None
}
