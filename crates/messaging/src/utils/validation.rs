//! Validation utilities.
//!
//! Field constraints of the messaging service (lengths, patterns, ranges and
//! list sizes) are checked here before a request leaves the client.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{MessagingError, MessagingResult};

pub const ARN_MIN_LENGTH: usize = 5;
pub const ARN_MAX_LENGTH: usize = 1600;
pub const LAMBDA_ARN_MAX_LENGTH: usize = 2048;
pub const RESOURCE_NAME_MAX_LENGTH: usize = 256;
pub const METADATA_MAX_BYTES: usize = 1024;
pub const CONTENT_MAX_BYTES: usize = 4096;
pub const CONTENT_TYPE_MAX_LENGTH: usize = 45;
pub const NEXT_TOKEN_MAX_LENGTH: usize = 2048;
pub const MAX_RESULTS_LIMIT: i32 = 50;

static ARN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^arn:[-a-z0-9.]{1,63}:[-a-z0-9.]{0,63}:[-a-z0-9.]{0,63}:[-a-z0-9.]{0,63}:[^/].{0,1023}$")
        .expect("ARN pattern is valid")
});

static LAMBDA_ARN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^arn:(aws[a-zA-Z-]*)?:lambda:[a-z]{2}((-gov)|(-iso(b?)))?-[a-z]+-\d{1}:\d{12}:function:[-a-zA-Z0-9_.]+(:(\$LATEST|[-a-zA-Z0-9_]+))?$",
    )
    .expect("Lambda ARN pattern is valid")
});

static RESOURCE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-_a-zA-Z0-9]*$").expect("resource id pattern is valid"));

static CHANNEL_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([-A-Za-z0-9:_.@]{0,62}[A-Za-z0-9])?$")
        .expect("channel id pattern is valid")
});

static RESOURCE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t\n\r\x{20}-\x{7E}\x{85}\x{A0}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}]*$")
        .expect("resource name pattern is valid")
});

/// Shapes that carry field constraints
pub trait Validate {
    /// Check every constraint of the shape, returning the first violation
    fn validate(&self) -> MessagingResult<()>;
}

/// Validation utilities
pub struct Validator;

impl Validator {
    /// Validate a length in characters
    pub fn length(field: &str, value: &str, min: usize, max: usize) -> MessagingResult<()> {
        let len = value.chars().count();
        if len < min || len > max {
            return Err(MessagingError::validation(
                field,
                format!("length must be between {} and {} characters (got {})", min, max, len),
            ));
        }
        Ok(())
    }

    /// Validate a length in UTF-8 bytes
    pub fn byte_length(field: &str, value: &str, min: usize, max: usize) -> MessagingResult<()> {
        let len = value.len();
        if len < min || len > max {
            return Err(MessagingError::validation(
                field,
                format!("size must be between {} and {} bytes (got {})", min, max, len),
            ));
        }
        Ok(())
    }

    /// Validate a value against a compiled pattern
    pub fn pattern(field: &str, value: &str, regex: &Regex) -> MessagingResult<()> {
        if !regex.is_match(value) {
            return Err(MessagingError::validation(
                field,
                format!("value does not match pattern {}", regex.as_str()),
            ));
        }
        Ok(())
    }

    /// Validate an inclusive numeric range
    pub fn range(field: &str, value: i64, min: i64, max: i64) -> MessagingResult<()> {
        if value < min || value > max {
            return Err(MessagingError::validation(
                field,
                format!("must be between {} and {} (got {})", min, max, value),
            ));
        }
        Ok(())
    }

    /// Validate a numeric lower bound
    pub fn at_least(field: &str, value: i64, min: i64) -> MessagingResult<()> {
        if value < min {
            return Err(MessagingError::validation(
                field,
                format!("must be at least {} (got {})", min, value),
            ));
        }
        Ok(())
    }

    /// Validate the number of entries in a list
    pub fn list_length(field: &str, len: usize, min: usize, max: usize) -> MessagingResult<()> {
        if len < min || len > max {
            return Err(MessagingError::validation(
                field,
                format!("must contain between {} and {} entries (got {})", min, max, len),
            ));
        }
        Ok(())
    }

    /// Validate an Amazon Resource Name
    pub fn arn(field: &str, value: &str) -> MessagingResult<()> {
        Self::length(field, value, ARN_MIN_LENGTH, ARN_MAX_LENGTH)?;
        Self::pattern(field, value, &ARN_REGEX)
    }

    /// Validate every ARN of a list, reporting the index of the offending entry
    pub fn arns(field: &str, values: &[String]) -> MessagingResult<()> {
        for (i, value) in values.iter().enumerate() {
            Self::arn(&format!("{}[{}]", field, i), value)?;
        }
        Ok(())
    }

    /// Validate the ARN of a Lambda function
    pub fn lambda_arn(field: &str, value: &str) -> MessagingResult<()> {
        Self::length(field, value, 0, LAMBDA_ARN_MAX_LENGTH)?;
        Self::pattern(field, value, &LAMBDA_ARN_REGEX)
    }

    /// Validate an identifier made of letters, digits, `-` and `_`
    pub fn resource_id(field: &str, value: &str, min: usize, max: usize) -> MessagingResult<()> {
        Self::length(field, value, min, max)?;
        Self::pattern(field, value, &RESOURCE_ID_REGEX)
    }

    /// Validate a message identifier
    pub fn message_id(field: &str, value: &str) -> MessagingResult<()> {
        Self::resource_id(field, value, 1, 128)
    }

    /// Validate a sub-channel identifier of an elastic channel
    pub fn sub_channel_id(field: &str, value: &str) -> MessagingResult<()> {
        Self::resource_id(field, value, 1, 128)
    }

    /// Validate a channel flow callback identifier
    pub fn callback_id(field: &str, value: &str) -> MessagingResult<()> {
        Self::resource_id(field, value, 32, 64)
    }

    /// Validate an idempotency token
    pub fn client_request_token(field: &str, value: &str) -> MessagingResult<()> {
        Self::resource_id(field, value, 2, 64)
    }

    /// Validate a caller-chosen channel identifier
    pub fn channel_id(field: &str, value: &str) -> MessagingResult<()> {
        Self::length(field, value, 1, 64)?;
        Self::pattern(field, value, &CHANNEL_ID_REGEX)
    }

    /// Validate the name of a channel, channel flow or processor
    pub fn resource_name(field: &str, value: &str) -> MessagingResult<()> {
        Self::length(field, value, 1, RESOURCE_NAME_MAX_LENGTH)?;
        Self::pattern(field, value, &RESOURCE_NAME_REGEX)
    }

    /// Validate free-form metadata
    pub fn metadata(field: &str, value: &str) -> MessagingResult<()> {
        Self::byte_length(field, value, 0, METADATA_MAX_BYTES)
    }

    /// Validate message content, `min` is 1 for new messages and 0 for edits
    pub fn content(field: &str, value: &str, min: usize) -> MessagingResult<()> {
        Self::byte_length(field, value, min, CONTENT_MAX_BYTES)
    }

    /// Validate a message content type
    pub fn content_type(field: &str, value: &str) -> MessagingResult<()> {
        Self::length(field, value, 0, CONTENT_TYPE_MAX_LENGTH)
    }

    /// Validate a pagination token
    pub fn next_token(field: &str, value: &str) -> MessagingResult<()> {
        Self::length(field, value, 0, NEXT_TOKEN_MAX_LENGTH)
    }

    /// Validate a page size
    pub fn max_results(field: &str, value: i32) -> MessagingResult<()> {
        Self::range(field, i64::from(value), 1, i64::from(MAX_RESULTS_LIMIT))
    }

    /// Validate an embedded shape, prefixing its errors with `field`
    pub fn nested<T: Validate>(field: &str, shape: &T) -> MessagingResult<()> {
        shape.validate().map_err(|e| e.nested(field))
    }

    /// Validate every shape of a list, prefixing errors with `field[index]`
    pub fn each<T: Validate>(field: &str, shapes: &[T]) -> MessagingResult<()> {
        for (i, shape) in shapes.iter().enumerate() {
            shape
                .validate()
                .map_err(|e| e.nested(format!("{}[{}]", field, i)))?;
        }
        Ok(())
    }
}
