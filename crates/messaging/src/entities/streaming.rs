use serde::{Deserialize, Serialize};

use crate::types::{MessagingDataType, MessagingResult};
use crate::utils::display::impl_display;
use crate::utils::validation::{Validate, Validator};

/// Where the data of an `AppInstance` is streamed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamingConfiguration {
    pub data_type: MessagingDataType,
    /// ARN of the Kinesis data stream
    pub resource_arn: String,
}

impl Validate for StreamingConfiguration {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ResourceArn", &self.resource_arn)
    }
}

/// The websocket endpoint of the messaging session.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessagingSessionEndpoint {
    pub url: Option<String>,
}

impl_display!(StreamingConfiguration, MessagingSessionEndpoint);
