//! Domain-level errors

use thiserror::Error;

/// Errors raised while interpreting wire values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A name or code outside an enumeration's code table
    #[error("Unknown {table} value: {value}")]
    UnknownCode {
        /// Human-readable name of the code table
        table: &'static str,
        /// The rejected name or code
        value: String,
    },

    /// A string that should have carried an integer
    #[error("Invalid integer: {0}")]
    InvalidInteger(String),

    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

impl DomainError {
    /// Create an unknown code error
    pub fn unknown_code(table: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownCode {
            table,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_message_names_the_table() {
        let err = DomainError::unknown_code("route type", "42");
        assert_eq!(err.to_string(), "Unknown route type value: 42");
    }

    #[test]
    fn invalid_integer_message() {
        let err = DomainError::InvalidInteger("abc".to_string());
        assert_eq!(err.to_string(), "Invalid integer: abc");
    }

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates("91, 0".to_string());
        assert!(err.to_string().contains("91, 0"));
    }
}
