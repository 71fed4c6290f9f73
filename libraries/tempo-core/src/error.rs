/// Core error types for Tempo
use thiserror::Error;

/// Result type alias using `TempoError`
pub type Result<T> = std::result::Result<T, TempoError>;

/// Core error type for Tempo
#[derive(Error, Debug)]
pub enum TempoError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity looked up (`track`, `playlist`, ...)
        entity: String,
        /// Identifier that had no match
        id: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl TempoError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = TempoError::not_found("Album", "a-42");
        assert_eq!(err.to_string(), "Album not found: a-42");
        assert!(matches!(
            err,
            TempoError::NotFound { ref entity, ref id } if entity == "Album" && id == "a-42"
        ));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: TempoError = parse.into();
        assert!(matches!(err, TempoError::Serialization(_)));
    }
}
