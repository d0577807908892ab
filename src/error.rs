//! Error types for the demo commands
//!
//! Every variant is a user-input error. The dispatcher prints them as text
//! and never lets them escape to `main`.

use thiserror::Error;

/// Main error type for command handlers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// A command was invoked without the arguments it needs
    #[error("'{command}' requires {requirement}.")]
    MissingArgument {
        command: &'static str,
        requirement: &'static str,
    },

    /// A `sum` operand could not be read as a number
    #[error("'{token}' is not a valid number.")]
    InvalidNumber { token: String },
}

impl DemoError {
    /// Create a new missing-argument error
    pub const fn missing_argument(command: &'static str, requirement: &'static str) -> Self {
        Self::MissingArgument {
            command,
            requirement,
        }
    }

    /// Create a new invalid-number error
    pub fn invalid_number(token: impl Into<String>) -> Self {
        Self::InvalidNumber {
            token: token.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let err = DemoError::missing_argument("greet", "a name");
        assert_eq!(err.to_string(), "'greet' requires a name.");
    }

    #[test]
    fn test_invalid_number_keeps_original_token() {
        let err = DemoError::invalid_number("1,2,3");
        assert_eq!(err.to_string(), "'1,2,3' is not a valid number.");
    }
}
