use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResistorError>;

#[derive(Debug, Error)]
pub enum ResistorError {
    /// Color name is unknown, or known but absent from the table of its band
    #[error("invalid {table} color '{color}'")]
    InvalidColor { color: String, table: &'static str },

    #[error("invalid band count {0} (expected 4, 5 or 6)")]
    InvalidBandMode(u8),

    #[error("{mode}-band resistor needs {expected} band selections, got {actual}")]
    WrongSelectionLength {
        mode: u8,
        expected: usize,
        actual: usize,
    },

    #[error("invalid resistance value {0}")]
    InvalidValue(f64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_is_not_io() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ResistorError::from(source);
        assert!(matches!(err, ResistorError::Json(_)));
        assert!(err.to_string().starts_with("json error:"));
    }
}
