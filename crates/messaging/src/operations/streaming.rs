//! Data streaming configuration and the messaging session endpoint.

use serde::{Deserialize, Serialize};

use super::{NoContent, Operation};
use crate::entities::{MessagingSessionEndpoint, StreamingConfiguration};
use crate::types::{MessagingDataType, MessagingResult, NetworkType};
use crate::utils::display::impl_display;
use crate::utils::validation::{Validate, Validator};

fn validate_configurations(configurations: &[StreamingConfiguration]) -> MessagingResult<()> {
    Validator::list_length("StreamingConfigurations", configurations.len(), 1, 2)?;
    Validator::each("StreamingConfigurations", configurations)
}

/// Stream channel or message data of an `AppInstance` to Kinesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutMessagingStreamingConfigurationsRequest {
    pub app_instance_arn: String,
    pub streaming_configurations: Vec<StreamingConfiguration>,
}

impl PutMessagingStreamingConfigurationsRequest {
    /// Data types configured more than once
    pub fn duplicate_data_types(&self) -> Vec<MessagingDataType> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for config in &self.streaming_configurations {
            if seen.contains(&config.data_type) {
                if !duplicates.contains(&config.data_type) {
                    duplicates.push(config.data_type);
                }
            } else {
                seen.push(config.data_type);
            }
        }
        duplicates
    }
}

impl Validate for PutMessagingStreamingConfigurationsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("AppInstanceArn", &self.app_instance_arn)?;
        validate_configurations(&self.streaming_configurations)
    }
}

impl Operation for PutMessagingStreamingConfigurationsRequest {
    const NAME: &'static str = "PutMessagingStreamingConfigurations";
    type Output = MessagingStreamingConfigurationsResponse;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMessagingStreamingConfigurationsRequest {
    pub app_instance_arn: String,
}

impl Validate for GetMessagingStreamingConfigurationsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("AppInstanceArn", &self.app_instance_arn)
    }
}

impl Operation for GetMessagingStreamingConfigurationsRequest {
    const NAME: &'static str = "GetMessagingStreamingConfigurations";
    type Output = MessagingStreamingConfigurationsResponse;
}

/// Response of both the get and put streaming configuration operations.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessagingStreamingConfigurationsResponse {
    pub streaming_configurations: Option<Vec<StreamingConfiguration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMessagingStreamingConfigurationsRequest {
    pub app_instance_arn: String,
}

impl Validate for DeleteMessagingStreamingConfigurationsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("AppInstanceArn", &self.app_instance_arn)
    }
}

impl Operation for DeleteMessagingStreamingConfigurationsRequest {
    const NAME: &'static str = "DeleteMessagingStreamingConfigurations";
    type Output = NoContent;
}

/// Fetch the websocket endpoint for the current account and region.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMessagingSessionEndpointRequest {
    pub network_type: Option<NetworkType>,
}

impl Validate for GetMessagingSessionEndpointRequest {
    fn validate(&self) -> MessagingResult<()> {
        Ok(())
    }
}

impl Operation for GetMessagingSessionEndpointRequest {
    const NAME: &'static str = "GetMessagingSessionEndpoint";
    type Output = GetMessagingSessionEndpointResponse;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMessagingSessionEndpointResponse {
    pub endpoint: Option<MessagingSessionEndpoint>,
}

impl_display!(
    PutMessagingStreamingConfigurationsRequest,
    GetMessagingStreamingConfigurationsRequest,
    MessagingStreamingConfigurationsResponse,
    DeleteMessagingStreamingConfigurationsRequest,
    GetMessagingSessionEndpointRequest,
    GetMessagingSessionEndpointResponse,
);
