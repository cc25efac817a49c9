//! Channel flow operations, including association with channels and the
//! processor callback.

use serde::{Deserialize, Serialize};

use super::{validate_page, NoContent, Operation};
use crate::entities::{
    ChannelAssociatedWithFlowSummary, ChannelFlow, ChannelFlowSummary, ChannelMessageCallback,
    Processor, Tag,
};
use crate::types::MessagingResult;
use crate::utils::display::impl_display;
use crate::utils::idempotency;
use crate::utils::validation::{Validate, Validator};

fn validate_processors(processors: &[Processor]) -> MessagingResult<()> {
    Validator::list_length("Processors", processors.len(), 1, 3)?;
    Validator::each("Processors", processors)
}

/// Create a channel flow in an `AppInstance`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChannelFlowRequest {
    pub app_instance_arn: String,
    pub processors: Vec<Processor>,
    pub name: String,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    #[serde(default)]
    pub client_request_token: Option<String>,
}

impl CreateChannelFlowRequest {
    pub fn new(
        app_instance_arn: impl Into<String>,
        name: impl Into<String>,
        processors: Vec<Processor>,
    ) -> Self {
        Self {
            app_instance_arn: app_instance_arn.into(),
            name: name.into(),
            processors,
            ..Default::default()
        }
    }

    /// Generate a client request token unless the caller supplied one
    pub fn ensure_client_request_token(&mut self) -> &str {
        idempotency::ensure_token(&mut self.client_request_token)
    }
}

impl Validate for CreateChannelFlowRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("AppInstanceArn", &self.app_instance_arn)?;
        validate_processors(&self.processors)?;
        Validator::resource_name("Name", &self.name)?;
        if let Some(tags) = &self.tags {
            Validator::list_length("Tags", tags.len(), 1, 50)?;
            Validator::each("Tags", tags)?;
        }
        if let Some(token) = &self.client_request_token {
            Validator::client_request_token("ClientRequestToken", token)?;
        }
        Ok(())
    }
}

impl Operation for CreateChannelFlowRequest {
    const NAME: &'static str = "CreateChannelFlow";
    type Output = CreateChannelFlowResponse;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateChannelFlowResponse {
    pub channel_flow_arn: Option<String>,
}

/// Delete a channel flow. Flows still associated with channels cannot be deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteChannelFlowRequest {
    pub channel_flow_arn: String,
}

impl Validate for DeleteChannelFlowRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelFlowArn", &self.channel_flow_arn)
    }
}

impl Operation for DeleteChannelFlowRequest {
    const NAME: &'static str = "DeleteChannelFlow";
    type Output = NoContent;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChannelFlowRequest {
    pub channel_flow_arn: String,
}

impl Validate for DescribeChannelFlowRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelFlowArn", &self.channel_flow_arn)
    }
}

impl Operation for DescribeChannelFlowRequest {
    const NAME: &'static str = "DescribeChannelFlow";
    type Output = DescribeChannelFlowResponse;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelFlowResponse {
    pub channel_flow: Option<ChannelFlow>,
}

/// Replace the processors and name of a channel flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateChannelFlowRequest {
    pub channel_flow_arn: String,
    pub processors: Vec<Processor>,
    pub name: String,
}

impl Validate for UpdateChannelFlowRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelFlowArn", &self.channel_flow_arn)?;
        validate_processors(&self.processors)?;
        Validator::resource_name("Name", &self.name)
    }
}

impl Operation for UpdateChannelFlowRequest {
    const NAME: &'static str = "UpdateChannelFlow";
    type Output = UpdateChannelFlowResponse;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateChannelFlowResponse {
    pub channel_flow_arn: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelFlowsRequest {
    pub app_instance_arn: String,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl Validate for ListChannelFlowsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("AppInstanceArn", &self.app_instance_arn)?;
        validate_page(self.max_results, self.next_token.as_deref())
    }
}

impl Operation for ListChannelFlowsRequest {
    const NAME: &'static str = "ListChannelFlows";
    type Output = ListChannelFlowsResponse;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelFlowsResponse {
    pub channel_flows: Option<Vec<ChannelFlowSummary>>,
    pub next_token: Option<String>,
}

/// Attach a channel flow to a channel. Only one flow can be attached at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateChannelFlowRequest {
    pub channel_arn: String,
    pub channel_flow_arn: String,
    pub chime_bearer: String,
}

impl Validate for AssociateChannelFlowRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("ChannelFlowArn", &self.channel_flow_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for AssociateChannelFlowRequest {
    const NAME: &'static str = "AssociateChannelFlow";
    type Output = NoContent;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateChannelFlowRequest {
    pub channel_arn: String,
    pub channel_flow_arn: String,
    pub chime_bearer: String,
}

impl Validate for DisassociateChannelFlowRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("ChannelFlowArn", &self.channel_flow_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for DisassociateChannelFlowRequest {
    const NAME: &'static str = "DisassociateChannelFlow";
    type Output = NoContent;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelsAssociatedWithChannelFlowRequest {
    pub channel_flow_arn: String,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl Validate for ListChannelsAssociatedWithChannelFlowRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelFlowArn", &self.channel_flow_arn)?;
        validate_page(self.max_results, self.next_token.as_deref())
    }
}

impl Operation for ListChannelsAssociatedWithChannelFlowRequest {
    const NAME: &'static str = "ListChannelsAssociatedWithChannelFlow";
    type Output = ListChannelsAssociatedWithChannelFlowResponse;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelsAssociatedWithChannelFlowResponse {
    pub channels: Option<Vec<ChannelAssociatedWithFlowSummary>>,
    pub next_token: Option<String>,
}

/// Return the outcome of a processor back to the channel.
///
/// With `delete_resource` set the message is deleted instead of delivered.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelFlowCallbackRequest {
    /// Identifier of the callback, 32 to 64 characters
    pub callback_id: String,
    pub channel_arn: String,
    #[serde(default)]
    pub delete_resource: Option<bool>,
    pub channel_message: ChannelMessageCallback,
}

impl ChannelFlowCallbackRequest {
    pub fn new(
        channel_arn: impl Into<String>,
        channel_message: ChannelMessageCallback,
    ) -> Self {
        Self {
            callback_id: idempotency::client_request_token(),
            channel_arn: channel_arn.into(),
            delete_resource: None,
            channel_message,
        }
    }

    pub fn deletes_message(&self) -> bool {
        self.delete_resource.unwrap_or(false)
    }
}

impl Validate for ChannelFlowCallbackRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::callback_id("CallbackId", &self.callback_id)?;
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::nested("ChannelMessage", &self.channel_message)
    }
}

impl Operation for ChannelFlowCallbackRequest {
    const NAME: &'static str = "ChannelFlowCallback";
    type Output = ChannelFlowCallbackResponse;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelFlowCallbackResponse {
    pub channel_arn: Option<String>,
    pub callback_id: Option<String>,
}

impl_display!(
    CreateChannelFlowRequest,
    CreateChannelFlowResponse,
    DeleteChannelFlowRequest,
    DescribeChannelFlowRequest,
    DescribeChannelFlowResponse,
    UpdateChannelFlowRequest,
    UpdateChannelFlowResponse,
    ListChannelFlowsRequest,
    ListChannelFlowsResponse,
    AssociateChannelFlowRequest,
    DisassociateChannelFlowRequest,
    ListChannelsAssociatedWithChannelFlowRequest,
    ListChannelsAssociatedWithChannelFlowResponse,
    ChannelFlowCallbackRequest,
    ChannelFlowCallbackResponse,
);
