//! # Chime SDK Messaging Model
//!
//! Typed data model of the Chime SDK Messaging service: channels, channel
//! flows, memberships, moderation, messages and streaming configuration,
//! together with the request and response shapes of every service operation.
//!
//! ## Architecture
//!
//! - **Entities**: Value objects embedded in requests and responses
//! - **Operations**: One request/response pair per service operation
//! - **Types**: Enumerations and errors
//! - **Utils**: Validation, display and timestamp wire format
//!
//! ## Usage
//!
//! ```rust
//! use chime_messaging::{MessageAttributeValue, Operation, SendChannelMessageRequest};
//! use chime_messaging_config::ValidationConfig;
//!
//! let mut request = SendChannelMessageRequest::new(
//!     "arn:aws:chime:us-east-1:123456789012:app-instance/app/channel/general",
//!     "hello",
//!     "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/ana",
//! );
//! request.add_message_attributes_entry("lang", MessageAttributeValue::from_strings(["en"]))?;
//!
//! let payload = request.to_payload(&ValidationConfig::default())?;
//! assert!(payload.contains("\"Content\":\"hello\""));
//! # Ok::<(), chime_messaging::MessagingError>(())
//! ```

pub mod entities;
pub mod operations;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use entities::*;
pub use operations::*;
pub use types::*;
pub use utils::{Validate, Validator};
