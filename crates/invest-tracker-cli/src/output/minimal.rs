use serde_json::Value;

use super::cell_text;

/// Fields worth printing on their own, in priority order.
const KEY_FIELDS: [&str; 3] = ["expected_return", "total_expected_return", "maturity_value"];

/// Print just the headline figure.
///
/// Envelopes print their `result.expected_return`; lists print one headline
/// per row.
pub fn print_minimal(value: &Value) {
    let target = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match target {
        Value::Array(items) => items.iter().for_each(|item| println!("{}", headline(item))),
        other => println!("{}", headline(other)),
    }
}

fn headline(value: &Value) -> String {
    let Value::Object(map) = value else {
        return cell_text(value);
    };

    if let Some(val) = KEY_FIELDS
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|val| !val.is_null())
    {
        return cell_text(val);
    }

    map.iter()
        .next()
        .map(|(key, val)| format!("{}: {}", key, cell_text(val)))
        .unwrap_or_default()
}
