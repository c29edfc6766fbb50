use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing field: {field} — {reason}")]
    MissingField { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("No investment at position {index} (store holds {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for TrackerError {
    fn from(e: serde_json::Error) -> Self {
        TrackerError::SerializationError(e.to_string())
    }
}
