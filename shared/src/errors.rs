//! Shared error types for the resolution system

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },
}

impl SharedError {
    pub fn invalid_config(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        SharedError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        SharedError::SerializationError {
            message: message.to_string(),
        }
    }

    pub fn deserialization(message: impl ToString) -> Self {
        SharedError::DeserializationError {
            message: message.to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = SharedError::invalid_config("candidateCount", 0, "must be between 1 and 10");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: candidateCount = 0 (must be between 1 and 10)"
        );

        assert_eq!(
            SharedError::deserialization("expected value at line 1").to_string(),
            "Deserialization failed: expected value at line 1"
        );
        assert_eq!(
            SharedError::serialization("key must be a string").to_string(),
            "Serialization failed: key must be a string"
        );
    }
}
