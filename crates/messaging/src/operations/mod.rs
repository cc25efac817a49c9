//! Requests and responses of the messaging service operations.
//!
//! Every request implements [`Operation`], which names the service operation,
//! ties the request to its output type and provides the serialization
//! boundary where client-side validation is enforced.

use chime_messaging_config::ValidationConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::types::MessagingResult;
use crate::utils::validation::{Validate, Validator};

mod channel;
mod channel_flow;
mod membership;
mod message;
mod moderation;
mod streaming;
mod tagging;

pub use channel::*;
pub use channel_flow::*;
pub use membership::*;
pub use message::*;
pub use moderation::*;
pub use streaming::*;
pub use tagging::*;

/// Output of operations that return no body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoContent {}

/// A request to the messaging service.
pub trait Operation: Validate + Serialize {
    /// Name of the service operation
    const NAME: &'static str;

    /// Response shape of the operation
    type Output: DeserializeOwned + Default;

    /// Value of the `x-amz-chime-bearer` header, for operations acting on
    /// behalf of an `AppInstanceUser`
    fn chime_bearer(&self) -> Option<&str> {
        None
    }

    /// Serialize the request, validating it first when enforcement is on
    fn to_payload(&self, validation: &ValidationConfig) -> MessagingResult<String> {
        if validation.enforce {
            if let Err(error) = self.validate() {
                debug!(
                    operation = Self::NAME,
                    %error,
                    "request rejected by client-side validation"
                );
                return Err(error);
            }
        }

        let payload = serde_json::to_string(self)?;
        trace!(operation = Self::NAME, bytes = payload.len(), "serialized request");
        Ok(payload)
    }

    /// Parse a response body, an empty body yields the default output
    fn parse_output(body: &str) -> MessagingResult<Self::Output> {
        if body.trim().is_empty() {
            return Ok(Self::Output::default());
        }
        Ok(serde_json::from_str(body)?)
    }
}

/// Validate the pagination parameters shared by list operations
pub(crate) fn validate_page(
    max_results: Option<i32>,
    next_token: Option<&str>,
) -> MessagingResult<()> {
    if let Some(max_results) = max_results {
        Validator::max_results("MaxResults", max_results)?;
    }
    if let Some(next_token) = next_token {
        Validator::next_token("NextToken", next_token)?;
    }
    Ok(())
}
