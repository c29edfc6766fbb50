use serde_json::Value;
use std::io;

use super::{cell_text, object_rows};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let written = match value {
        Value::Object(map) => {
            let fields = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };
            wtr.write_record(["field", "value"]).and_then(|_| {
                fields
                    .iter()
                    .try_for_each(|(key, val)| wtr.write_record([key.clone(), cell_text(val)]))
            })
        }
        Value::Array(items) => match object_rows(items) {
            Some((headers, rows)) => wtr
                .write_record(&headers)
                .and_then(|_| rows.iter().try_for_each(|row| wtr.write_record(row))),
            None => items
                .iter()
                .try_for_each(|item| wtr.write_record([cell_text(item)])),
        },
        _ => wtr.write_record([cell_text(value)]),
    };

    if let Err(e) = written.and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV write error: {}", e);
    }
}
