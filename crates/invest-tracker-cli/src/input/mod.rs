pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Read typed JSON from `--input <file>` when given, otherwise from piped
/// stdin. `Ok(None)` means neither source supplied anything.
pub fn read_input<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_json(path)?));
    }
    match stdin::read_stdin()? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}
