use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell_text, object_rows};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => print_envelope(result, map),
            _ => print_fields(map),
        },
        Value::Array(items) if items.is_empty() => println!("(no investments)"),
        Value::Array(items) => match object_rows(items) {
            Some((headers, rows)) => {
                let mut builder = Builder::default();
                builder.push_record(headers);
                for row in rows {
                    builder.push_record(row);
                }
                println!("{}", Table::from(builder));
            }
            None => items.iter().for_each(|item| println!("{}", cell_text(item))),
        },
        _ => println!("{}", cell_text(value)),
    }
}

fn print_envelope(result: &Map<String, Value>, envelope: &Map<String, Value>) {
    print_fields(result);

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.clone(), cell_text(val)]);
    }
    println!("{}", Table::from(builder));
}
