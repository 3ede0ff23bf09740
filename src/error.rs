//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that a command can fail with.
///
/// Every variant renders as a single line that is shown to the user in
/// place of the command's normal reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}.")]
    ContactNotFound(String),

    /// The contact has no phone with the given value
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    /// The contact exists but has no birthday recorded
    #[error("No birthday set for {0}.")]
    BirthdayNotSet(String),

    /// The command was given fewer arguments than it needs
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssistantError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found: John.");

        let err = AssistantError::PhoneNotFound("1112223333".to_string());
        assert_eq!(err.to_string(), "Phone number 1112223333 not found.");

        let err = AssistantError::BirthdayNotSet("Jane".to_string());
        assert_eq!(err.to_string(), "No birthday set for Jane.");

        let err = AssistantError::MissingArguments {
            usage: "phone <name>",
        };
        assert_eq!(err.to_string(), "Not enough arguments. Usage: phone <name>");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: AssistantError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Phone number must consist of 10 digits.");
    }
}
