//! Channel membership operations and per-member preferences.

use serde::{Deserialize, Serialize};

use super::{validate_page, NoContent, Operation};
use crate::entities::{
    BatchChannelMemberships, BatchCreateChannelMembershipError, ChannelMembership,
    ChannelMembershipForAppInstanceUserSummary, ChannelMembershipPreferences,
    ChannelMembershipSummary, Identity,
};
use crate::types::{ChannelMembershipType, MessagingResult};
use crate::utils::display::impl_display;
use crate::utils::validation::{Validate, Validator};

/// Add up to 100 members to a channel in one call.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchCreateChannelMembershipRequest {
    pub channel_arn: String,
    #[serde(rename = "Type", default)]
    pub membership_type: Option<ChannelMembershipType>,
    pub member_arns: Vec<String>,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for BatchCreateChannelMembershipRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::list_length("MemberArns", self.member_arns.len(), 1, 100)?;
        Validator::arns("MemberArns", &self.member_arns)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        if let Some(sub_channel_id) = &self.sub_channel_id {
            Validator::sub_channel_id("SubChannelId", sub_channel_id)?;
        }
        Ok(())
    }
}

impl Operation for BatchCreateChannelMembershipRequest {
    const NAME: &'static str = "BatchCreateChannelMembership";
    type Output = BatchCreateChannelMembershipResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

/// Memberships that were created and the members that were rejected.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchCreateChannelMembershipResponse {
    pub batch_channel_memberships: Option<BatchChannelMemberships>,
    pub errors: Option<Vec<BatchCreateChannelMembershipError>>,
}

impl BatchCreateChannelMembershipResponse {
    /// Check if at least one member was rejected
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().map_or(false, |errors| !errors.is_empty())
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChannelMembershipRequest {
    pub channel_arn: String,
    pub member_arn: String,
    #[serde(rename = "Type")]
    pub membership_type: ChannelMembershipType,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for CreateChannelMembershipRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("MemberArn", &self.member_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        if let Some(sub_channel_id) = &self.sub_channel_id {
            Validator::sub_channel_id("SubChannelId", sub_channel_id)?;
        }
        Ok(())
    }
}

impl Operation for CreateChannelMembershipRequest {
    const NAME: &'static str = "CreateChannelMembership";
    type Output = CreateChannelMembershipResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateChannelMembershipResponse {
    pub channel_arn: Option<String>,
    pub member: Option<Identity>,
    pub sub_channel_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteChannelMembershipRequest {
    pub channel_arn: String,
    pub member_arn: String,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for DeleteChannelMembershipRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("MemberArn", &self.member_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        if let Some(sub_channel_id) = &self.sub_channel_id {
            Validator::sub_channel_id("SubChannelId", sub_channel_id)?;
        }
        Ok(())
    }
}

impl Operation for DeleteChannelMembershipRequest {
    const NAME: &'static str = "DeleteChannelMembership";
    type Output = NoContent;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChannelMembershipRequest {
    pub channel_arn: String,
    pub member_arn: String,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for DescribeChannelMembershipRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("MemberArn", &self.member_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        if let Some(sub_channel_id) = &self.sub_channel_id {
            Validator::sub_channel_id("SubChannelId", sub_channel_id)?;
        }
        Ok(())
    }
}

impl Operation for DescribeChannelMembershipRequest {
    const NAME: &'static str = "DescribeChannelMembership";
    type Output = DescribeChannelMembershipResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelMembershipResponse {
    pub channel_membership: Option<ChannelMembership>,
}

/// Describe the membership of an `AppInstanceUser` in one channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChannelMembershipForAppInstanceUserRequest {
    pub channel_arn: String,
    pub app_instance_user_arn: String,
    pub chime_bearer: String,
}

impl Validate for DescribeChannelMembershipForAppInstanceUserRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("AppInstanceUserArn", &self.app_instance_user_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for DescribeChannelMembershipForAppInstanceUserRequest {
    const NAME: &'static str = "DescribeChannelMembershipForAppInstanceUser";
    type Output = DescribeChannelMembershipForAppInstanceUserResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelMembershipForAppInstanceUserResponse {
    pub channel_membership: Option<ChannelMembershipForAppInstanceUserSummary>,
}

/// List the members of a channel, optionally filtered by membership type.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelMembershipsRequest {
    pub channel_arn: String,
    #[serde(rename = "Type", default)]
    pub membership_type: Option<ChannelMembershipType>,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for ListChannelMembershipsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        validate_page(self.max_results, self.next_token.as_deref())?;
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        if let Some(sub_channel_id) = &self.sub_channel_id {
            Validator::sub_channel_id("SubChannelId", sub_channel_id)?;
        }
        Ok(())
    }
}

impl Operation for ListChannelMembershipsRequest {
    const NAME: &'static str = "ListChannelMemberships";
    type Output = ListChannelMembershipsResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelMembershipsResponse {
    pub channel_arn: Option<String>,
    pub channel_memberships: Option<Vec<ChannelMembershipSummary>>,
    pub next_token: Option<String>,
}

/// List the channels an `AppInstanceUser` belongs to.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelMembershipsForAppInstanceUserRequest {
    /// Defaults to the bearer when absent
    #[serde(default)]
    pub app_instance_user_arn: Option<String>,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
    pub chime_bearer: String,
}

impl Validate for ListChannelMembershipsForAppInstanceUserRequest {
    fn validate(&self) -> MessagingResult<()> {
        if let Some(user) = &self.app_instance_user_arn {
            Validator::arn("AppInstanceUserArn", user)?;
        }
        validate_page(self.max_results, self.next_token.as_deref())?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for ListChannelMembershipsForAppInstanceUserRequest {
    const NAME: &'static str = "ListChannelMembershipsForAppInstanceUser";
    type Output = ListChannelMembershipsForAppInstanceUserResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelMembershipsForAppInstanceUserResponse {
    pub channel_memberships: Option<Vec<ChannelMembershipForAppInstanceUserSummary>>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetChannelMembershipPreferencesRequest {
    pub channel_arn: String,
    pub member_arn: String,
    pub chime_bearer: String,
}

impl Validate for GetChannelMembershipPreferencesRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("MemberArn", &self.member_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for GetChannelMembershipPreferencesRequest {
    const NAME: &'static str = "GetChannelMembershipPreferences";
    type Output = ChannelMembershipPreferencesResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

/// Set the preferences of a member. Members can only set their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutChannelMembershipPreferencesRequest {
    pub channel_arn: String,
    pub member_arn: String,
    pub chime_bearer: String,
    pub preferences: ChannelMembershipPreferences,
}

impl Validate for PutChannelMembershipPreferencesRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("MemberArn", &self.member_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        Validator::nested("Preferences", &self.preferences)
    }
}

impl Operation for PutChannelMembershipPreferencesRequest {
    const NAME: &'static str = "PutChannelMembershipPreferences";
    type Output = ChannelMembershipPreferencesResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

/// Response of both the get and put preference operations.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelMembershipPreferencesResponse {
    pub channel_arn: Option<String>,
    pub member: Option<Identity>,
    pub preferences: Option<ChannelMembershipPreferences>,
}

impl_display!(
    BatchCreateChannelMembershipRequest,
    BatchCreateChannelMembershipResponse,
    CreateChannelMembershipRequest,
    CreateChannelMembershipResponse,
    DeleteChannelMembershipRequest,
    DescribeChannelMembershipRequest,
    DescribeChannelMembershipResponse,
    DescribeChannelMembershipForAppInstanceUserRequest,
    DescribeChannelMembershipForAppInstanceUserResponse,
    ListChannelMembershipsRequest,
    ListChannelMembershipsResponse,
    ListChannelMembershipsForAppInstanceUserRequest,
    ListChannelMembershipsForAppInstanceUserResponse,
    GetChannelMembershipPreferencesRequest,
    PutChannelMembershipPreferencesRequest,
    ChannelMembershipPreferencesResponse,
);
