//! Error types for the messaging model.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::enums;

/// Message serde_json reports when an enum's `FromStr` rejects a value
static INVALID_ENUM_IN_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^Invalid value '(.*)' for (\w+)(?: at line \d+ column \d+)?$")
        .expect("enum error pattern is valid")
});

/// Result type alias for model operations
pub type MessagingResult<T> = Result<T, MessagingError>;

/// Main error type for the messaging model
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Duplicate key '{key}' in {field}")]
    DuplicateKey { field: String, key: String },

    #[error("Invalid value '{value}' for {type_name}")]
    InvalidEnumValue {
        type_name: &'static str,
        value: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl From<serde_json::Error> for MessagingError {
    /// Unknown enum values inside a payload surface as `InvalidEnumValue`,
    /// everything else as `Serialization`.
    fn from(error: serde_json::Error) -> Self {
        if error.is_data() {
            let message = error.to_string();
            if let Some(captures) = INVALID_ENUM_IN_JSON.captures(&message) {
                if let Some(type_name) = enums::type_name(&captures[2]) {
                    return Self::invalid_enum_value(type_name, &captures[1]);
                }
            }
        }
        Self::Serialization(error)
    }
}

impl MessagingError {
    /// Create a validation error for a field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate key error for a map field
    pub fn duplicate_key(field: impl Into<String>, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            field: field.into(),
            key: key.into(),
        }
    }

    /// Create an unknown enum value error
    pub fn invalid_enum_value(type_name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            type_name,
            value: value.into(),
        }
    }

    /// Prefix the field path of a validation error with the enclosing field.
    ///
    /// Other variants are returned unchanged.
    pub fn nested(self, parent: impl AsRef<str>) -> Self {
        match self {
            Self::Validation { field, message } => Self::Validation {
                field: format!("{}.{}", parent.as_ref(), field),
                message,
            },
            other => other,
        }
    }

    /// Field path the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::DuplicateKey { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_prefixes_validation_field() {
        let error = MessagingError::validation("ResourceArn", "too long").nested("Lambda");
        assert_eq!(error.field(), Some("Lambda.ResourceArn"));

        let error = error.nested("Processors[0].Configuration");
        assert_eq!(
            error.field(),
            Some("Processors[0].Configuration.Lambda.ResourceArn")
        );
    }

    #[test]
    fn test_nested_leaves_other_errors_alone() {
        let error =
            MessagingError::duplicate_key("MessageAttributes", "k").nested("ChannelMessage");
        assert_eq!(error.field(), Some("MessageAttributes"));

        let error = MessagingError::invalid_enum_value("ChannelMode", "OPEN").nested("Channel");
        assert!(error.field().is_none());
        assert_eq!(error.to_string(), "Invalid value 'OPEN' for ChannelMode");
    }

    #[test]
    fn test_json_enum_errors_keep_their_kind() {
        let error: MessagingError = serde_json::from_str::<crate::types::ChannelMode>(r#""OPEN""#)
            .unwrap_err()
            .into();
        let MessagingError::InvalidEnumValue { type_name, value } = error else {
            panic!("expected an enum error");
        };
        assert_eq!(type_name, "ChannelMode");
        assert_eq!(value, "OPEN");

        let error: MessagingError = serde_json::from_str::<crate::types::ChannelMode>("3")
            .unwrap_err()
            .into();
        assert!(matches!(error, MessagingError::Serialization(_)));

        let error: MessagingError = serde_json::from_str::<crate::types::ChannelMode>("{")
            .unwrap_err()
            .into();
        assert!(matches!(error, MessagingError::Serialization(_)));
    }

    #[test]
    fn test_error_messages() {
        let error = MessagingError::validation("Metadata", "must be at most 1024 bytes");
        assert_eq!(
            error.to_string(),
            "Validation error on Metadata: must be at most 1024 bytes"
        );

        let error = MessagingError::duplicate_key("MessageAttributes", "color");
        assert_eq!(error.to_string(), "Duplicate key 'color' in MessageAttributes");
    }
}
