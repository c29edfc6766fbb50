use serde_json::Value;
use std::io::{self, Read};

/// JSON piped on stdin, or `None` when stdin is a terminal or blank.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

/// Parse piped text; whitespace alone counts as no input.
fn parse_piped(text: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    match text.trim() {
        "" => Ok(None),
        json => serde_json::from_str(json)
            .map(Some)
            .map_err(|e| format!("Failed to parse stdin: {}", e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_pipe_is_no_input() {
        assert!(parse_piped(" \n\t").unwrap().is_none());
    }

    #[test]
    fn test_piped_array_is_parsed() {
        let value = parse_piped("[{\"principal\": \"100\"}]\n").unwrap();
        assert_eq!(value, Some(json!([{"principal": "100"}])));
    }

    #[test]
    fn test_malformed_pipe_names_stdin() {
        let err = parse_piped("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse stdin"));
    }
}
