//! Channel lifecycle, listing and search operations.

use serde::{Deserialize, Serialize};

use super::{validate_page, NoContent, Operation};
use crate::entities::{
    Channel, ChannelSummary, ElasticChannelConfiguration, ExpirationSettings, SearchField,
    SubChannelSummary, Tag,
};
use crate::types::{ChannelMode, ChannelPrivacy, MessagingResult};
use crate::utils::display::impl_display;
use crate::utils::idempotency;
use crate::utils::validation::{Validate, Validator};

/// Create a channel in an `AppInstance`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChannelRequest {
    pub app_instance_arn: String,
    pub name: String,
    #[serde(default)]
    pub mode: Option<ChannelMode>,
    #[serde(default)]
    pub privacy: Option<ChannelPrivacy>,
    #[serde(default)]
    pub metadata: Option<String>,
    /// Idempotency token, see [`CreateChannelRequest::ensure_client_request_token`]
    #[serde(default)]
    pub client_request_token: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    pub chime_bearer: String,
    /// Caller-chosen channel identifier
    #[serde(default)]
    pub channel_id: Option<String>,
    /// Members added on creation, 1 to 100
    #[serde(default)]
    pub member_arns: Option<Vec<String>>,
    /// Moderators added on creation, 1 to 10
    #[serde(default)]
    pub moderator_arns: Option<Vec<String>>,
    #[serde(default)]
    pub elastic_channel_configuration: Option<ElasticChannelConfiguration>,
    #[serde(default)]
    pub expiration_settings: Option<ExpirationSettings>,
}

impl CreateChannelRequest {
    pub fn new(
        app_instance_arn: impl Into<String>,
        name: impl Into<String>,
        chime_bearer: impl Into<String>,
    ) -> Self {
        Self {
            app_instance_arn: app_instance_arn.into(),
            name: name.into(),
            chime_bearer: chime_bearer.into(),
            ..Default::default()
        }
    }

    /// Generate a client request token unless the caller supplied one
    pub fn ensure_client_request_token(&mut self) -> &str {
        idempotency::ensure_token(&mut self.client_request_token)
    }
}

impl Validate for CreateChannelRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("AppInstanceArn", &self.app_instance_arn)?;
        Validator::resource_name("Name", &self.name)?;
        if let Some(metadata) = &self.metadata {
            Validator::metadata("Metadata", metadata)?;
        }
        if let Some(token) = &self.client_request_token {
            Validator::client_request_token("ClientRequestToken", token)?;
        }
        if let Some(tags) = &self.tags {
            Validator::list_length("Tags", tags.len(), 1, 50)?;
            Validator::each("Tags", tags)?;
        }
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        if let Some(channel_id) = &self.channel_id {
            Validator::channel_id("ChannelId", channel_id)?;
        }
        if let Some(member_arns) = &self.member_arns {
            Validator::list_length("MemberArns", member_arns.len(), 1, 100)?;
            Validator::arns("MemberArns", member_arns)?;
        }
        if let Some(moderator_arns) = &self.moderator_arns {
            Validator::list_length("ModeratorArns", moderator_arns.len(), 1, 10)?;
            Validator::arns("ModeratorArns", moderator_arns)?;
        }
        if let Some(elastic) = &self.elastic_channel_configuration {
            Validator::nested("ElasticChannelConfiguration", elastic)?;
        }
        if let Some(expiration) = &self.expiration_settings {
            Validator::nested("ExpirationSettings", expiration)?;
        }
        Ok(())
    }
}

impl Operation for CreateChannelRequest {
    const NAME: &'static str = "CreateChannel";
    type Output = CreateChannelResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateChannelResponse {
    pub channel_arn: Option<String>,
}

/// Delete a channel and its memberships, moderators and messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteChannelRequest {
    pub channel_arn: String,
    pub chime_bearer: String,
}

impl Validate for DeleteChannelRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for DeleteChannelRequest {
    const NAME: &'static str = "DeleteChannel";
    type Output = NoContent;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChannelRequest {
    pub channel_arn: String,
    pub chime_bearer: String,
}

impl Validate for DescribeChannelRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for DescribeChannelRequest {
    const NAME: &'static str = "DescribeChannel";
    type Output = DescribeChannelResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelResponse {
    pub channel: Option<Channel>,
}

/// Update the name, mode or metadata of a channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateChannelRequest {
    pub channel_arn: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mode: Option<ChannelMode>,
    #[serde(default)]
    pub metadata: Option<String>,
    pub chime_bearer: String,
}

impl Validate for UpdateChannelRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        if let Some(name) = &self.name {
            Validator::resource_name("Name", name)?;
        }
        if let Some(metadata) = &self.metadata {
            Validator::metadata("Metadata", metadata)?;
        }
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for UpdateChannelRequest {
    const NAME: &'static str = "UpdateChannel";
    type Output = UpdateChannelResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateChannelResponse {
    pub channel_arn: Option<String>,
}

/// List the channels of an `AppInstance`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelsRequest {
    pub app_instance_arn: String,
    /// Private channels are only listed for `AppInstanceAdmin` callers
    #[serde(default)]
    pub privacy: Option<ChannelPrivacy>,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
    pub chime_bearer: String,
}

impl Validate for ListChannelsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("AppInstanceArn", &self.app_instance_arn)?;
        validate_page(self.max_results, self.next_token.as_deref())?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for ListChannelsRequest {
    const NAME: &'static str = "ListChannels";
    type Output = ListChannelsResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelsResponse {
    pub channels: Option<Vec<ChannelSummary>>,
    pub next_token: Option<String>,
}

/// Search channels with predicates over their fields.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchChannelsRequest {
    /// Optional, `AppInstanceAdmin` callers may search without one
    #[serde(default)]
    pub chime_bearer: Option<String>,
    pub fields: Vec<SearchField>,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl SearchChannelsRequest {
    pub fn new(fields: Vec<SearchField>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }
}

impl Validate for SearchChannelsRequest {
    fn validate(&self) -> MessagingResult<()> {
        if let Some(bearer) = &self.chime_bearer {
            Validator::arn("ChimeBearer", bearer)?;
        }
        Validator::list_length("Fields", self.fields.len(), 1, 20)?;
        Validator::each("Fields", &self.fields)?;
        validate_page(self.max_results, self.next_token.as_deref())
    }
}

impl Operation for SearchChannelsRequest {
    const NAME: &'static str = "SearchChannels";
    type Output = SearchChannelsResponse;

    fn chime_bearer(&self) -> Option<&str> {
        self.chime_bearer.as_deref()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchChannelsResponse {
    pub channels: Option<Vec<ChannelSummary>>,
    pub next_token: Option<String>,
}

/// List the sub-channels of an elastic channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSubChannelsRequest {
    pub channel_arn: String,
    pub chime_bearer: String,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl Validate for ListSubChannelsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        validate_page(self.max_results, self.next_token.as_deref())
    }
}

impl Operation for ListSubChannelsRequest {
    const NAME: &'static str = "ListSubChannels";
    type Output = ListSubChannelsResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListSubChannelsResponse {
    pub channel_arn: Option<String>,
    pub sub_channels: Option<Vec<SubChannelSummary>>,
    pub next_token: Option<String>,
}

/// Set or clear the expiration of a channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutChannelExpirationSettingsRequest {
    pub channel_arn: String,
    #[serde(default)]
    pub chime_bearer: Option<String>,
    /// Absent settings remove the expiration
    #[serde(default)]
    pub expiration_settings: Option<ExpirationSettings>,
}

impl Validate for PutChannelExpirationSettingsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        if let Some(bearer) = &self.chime_bearer {
            Validator::arn("ChimeBearer", bearer)?;
        }
        if let Some(settings) = &self.expiration_settings {
            Validator::nested("ExpirationSettings", settings)?;
        }
        Ok(())
    }
}

impl Operation for PutChannelExpirationSettingsRequest {
    const NAME: &'static str = "PutChannelExpirationSettings";
    type Output = PutChannelExpirationSettingsResponse;

    fn chime_bearer(&self) -> Option<&str> {
        self.chime_bearer.as_deref()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutChannelExpirationSettingsResponse {
    pub channel_arn: Option<String>,
    pub expiration_settings: Option<ExpirationSettings>,
}

/// Mark the channel as read up to now for the bearer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateChannelReadMarkerRequest {
    pub channel_arn: String,
    pub chime_bearer: String,
}

impl Validate for UpdateChannelReadMarkerRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for UpdateChannelReadMarkerRequest {
    const NAME: &'static str = "UpdateChannelReadMarker";
    type Output = UpdateChannelReadMarkerResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateChannelReadMarkerResponse {
    pub channel_arn: Option<String>,
}

impl_display!(
    CreateChannelRequest,
    CreateChannelResponse,
    DeleteChannelRequest,
    DescribeChannelRequest,
    DescribeChannelResponse,
    UpdateChannelRequest,
    UpdateChannelResponse,
    ListChannelsRequest,
    ListChannelsResponse,
    SearchChannelsRequest,
    SearchChannelsResponse,
    ListSubChannelsRequest,
    ListSubChannelsResponse,
    PutChannelExpirationSettingsRequest,
    PutChannelExpirationSettingsResponse,
    UpdateChannelReadMarkerRequest,
    UpdateChannelReadMarkerResponse,
);
