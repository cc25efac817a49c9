//! Bans and moderators.

use serde::{Deserialize, Serialize};

use super::{validate_page, NoContent, Operation};
use crate::entities::{
    ChannelBan, ChannelBanSummary, ChannelModeratedByAppInstanceUserSummary, ChannelModerator,
    ChannelModeratorSummary, Identity,
};
use crate::types::MessagingResult;
use crate::utils::display::impl_display;
use crate::utils::validation::{Validate, Validator};

/// A request addressing one member of a channel on behalf of the bearer.
///
/// Shared by the ban and moderator operations, which differ only in the
/// name of the member field.
macro_rules! channel_member_request {
    ($name:ident, $member:ident, $member_label:literal, $op:literal, $output:ty) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            pub channel_arn: String,
            pub $member: String,
            pub chime_bearer: String,
        }

        impl Validate for $name {
            fn validate(&self) -> MessagingResult<()> {
                Validator::arn("ChannelArn", &self.channel_arn)?;
                Validator::arn($member_label, &self.$member)?;
                Validator::arn("ChimeBearer", &self.chime_bearer)
            }
        }

        impl Operation for $name {
            const NAME: &'static str = $op;
            type Output = $output;

            fn chime_bearer(&self) -> Option<&str> {
                Some(&self.chime_bearer)
            }
        }
    };
}

channel_member_request!(
    CreateChannelBanRequest,
    member_arn,
    "MemberArn",
    "CreateChannelBan",
    CreateChannelBanResponse
);
channel_member_request!(
    DeleteChannelBanRequest,
    member_arn,
    "MemberArn",
    "DeleteChannelBan",
    NoContent
);
channel_member_request!(
    DescribeChannelBanRequest,
    member_arn,
    "MemberArn",
    "DescribeChannelBan",
    DescribeChannelBanResponse
);
channel_member_request!(
    CreateChannelModeratorRequest,
    channel_moderator_arn,
    "ChannelModeratorArn",
    "CreateChannelModerator",
    CreateChannelModeratorResponse
);
channel_member_request!(
    DeleteChannelModeratorRequest,
    channel_moderator_arn,
    "ChannelModeratorArn",
    "DeleteChannelModerator",
    NoContent
);
channel_member_request!(
    DescribeChannelModeratorRequest,
    channel_moderator_arn,
    "ChannelModeratorArn",
    "DescribeChannelModerator",
    DescribeChannelModeratorResponse
);

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateChannelBanResponse {
    pub channel_arn: Option<String>,
    pub member: Option<Identity>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelBanResponse {
    pub channel_ban: Option<ChannelBan>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelBansRequest {
    pub channel_arn: String,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
    pub chime_bearer: String,
}

impl Validate for ListChannelBansRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        validate_page(self.max_results, self.next_token.as_deref())?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for ListChannelBansRequest {
    const NAME: &'static str = "ListChannelBans";
    type Output = ListChannelBansResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelBansResponse {
    pub channel_arn: Option<String>,
    pub next_token: Option<String>,
    pub channel_bans: Option<Vec<ChannelBanSummary>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateChannelModeratorResponse {
    pub channel_arn: Option<String>,
    pub channel_moderator: Option<Identity>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelModeratorResponse {
    pub channel_moderator: Option<ChannelModerator>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelModeratorsRequest {
    pub channel_arn: String,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
    pub chime_bearer: String,
}

impl Validate for ListChannelModeratorsRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        validate_page(self.max_results, self.next_token.as_deref())?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for ListChannelModeratorsRequest {
    const NAME: &'static str = "ListChannelModerators";
    type Output = ListChannelModeratorsResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelModeratorsResponse {
    pub channel_arn: Option<String>,
    pub next_token: Option<String>,
    pub channel_moderators: Option<Vec<ChannelModeratorSummary>>,
}

/// Check whether an `AppInstanceUser` moderates a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChannelModeratedByAppInstanceUserRequest {
    pub channel_arn: String,
    pub app_instance_user_arn: String,
    pub chime_bearer: String,
}

impl Validate for DescribeChannelModeratedByAppInstanceUserRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::arn("AppInstanceUserArn", &self.app_instance_user_arn)?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for DescribeChannelModeratedByAppInstanceUserRequest {
    const NAME: &'static str = "DescribeChannelModeratedByAppInstanceUser";
    type Output = DescribeChannelModeratedByAppInstanceUserResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeChannelModeratedByAppInstanceUserResponse {
    pub channel: Option<ChannelModeratedByAppInstanceUserSummary>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelsModeratedByAppInstanceUserRequest {
    /// Defaults to the bearer when absent
    #[serde(default)]
    pub app_instance_user_arn: Option<String>,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
    pub chime_bearer: String,
}

impl Validate for ListChannelsModeratedByAppInstanceUserRequest {
    fn validate(&self) -> MessagingResult<()> {
        if let Some(user) = &self.app_instance_user_arn {
            Validator::arn("AppInstanceUserArn", user)?;
        }
        validate_page(self.max_results, self.next_token.as_deref())?;
        Validator::arn("ChimeBearer", &self.chime_bearer)
    }
}

impl Operation for ListChannelsModeratedByAppInstanceUserRequest {
    const NAME: &'static str = "ListChannelsModeratedByAppInstanceUser";
    type Output = ListChannelsModeratedByAppInstanceUserResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelsModeratedByAppInstanceUserResponse {
    pub channels: Option<Vec<ChannelModeratedByAppInstanceUserSummary>>,
    pub next_token: Option<String>,
}

impl_display!(
    CreateChannelBanRequest,
    CreateChannelBanResponse,
    DeleteChannelBanRequest,
    DescribeChannelBanRequest,
    DescribeChannelBanResponse,
    ListChannelBansRequest,
    ListChannelBansResponse,
    CreateChannelModeratorRequest,
    CreateChannelModeratorResponse,
    DeleteChannelModeratorRequest,
    DescribeChannelModeratorRequest,
    DescribeChannelModeratorResponse,
    ListChannelModeratorsRequest,
    ListChannelModeratorsResponse,
    DescribeChannelModeratedByAppInstanceUserRequest,
    DescribeChannelModeratedByAppInstanceUserResponse,
    ListChannelsModeratedByAppInstanceUserRequest,
    ListChannelsModeratedByAppInstanceUserResponse,
);

#[cfg(test)]
mod tests {
    use super::*;

    const CHANNEL: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/channel/general";
    const MODERATOR: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/mod";
    const TROLL: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/troll";

    #[test]
    fn test_ban_requests() {
        let request = CreateChannelBanRequest {
            channel_arn: CHANNEL.to_string(),
            member_arn: TROLL.to_string(),
            chime_bearer: MODERATOR.to_string(),
        };
        assert!(request.validate().is_ok());
        assert_eq!(CreateChannelBanRequest::NAME, "CreateChannelBan");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["MemberArn"], TROLL);

        let invalid = DeleteChannelBanRequest {
            channel_arn: CHANNEL.to_string(),
            member_arn: "troll".to_string(),
            chime_bearer: MODERATOR.to_string(),
        };
        assert_eq!(invalid.validate().unwrap_err().field(), Some("MemberArn"));
        assert_eq!(DeleteChannelBanRequest::parse_output("").unwrap(), NoContent {});
    }

    #[test]
    fn test_moderator_requests_use_moderator_label() {
        let request = CreateChannelModeratorRequest {
            channel_arn: CHANNEL.to_string(),
            channel_moderator_arn: String::new(),
            chime_bearer: MODERATOR.to_string(),
        };
        assert_eq!(
            request.validate().unwrap_err().field(),
            Some("ChannelModeratorArn")
        );

        let value = serde_json::to_value(&DescribeChannelModeratorRequest {
            channel_arn: CHANNEL.to_string(),
            channel_moderator_arn: MODERATOR.to_string(),
            chime_bearer: MODERATOR.to_string(),
        })
        .unwrap();
        assert_eq!(value["ChannelModeratorArn"], MODERATOR);
    }

    #[test]
    fn test_list_bans_output() {
        let output = ListChannelBansRequest::parse_output(&format!(
            r#"{{"ChannelArn": "{}", "ChannelBans": [{{"Member": {{"Arn": "{}", "Name": "troll"}}}}]}}"#,
            CHANNEL, TROLL
        ))
        .unwrap();
        let bans = output.channel_bans.unwrap();
        assert_eq!(
            bans[0].member.as_ref().and_then(|m| m.name.as_deref()),
            Some("troll")
        );
    }

    #[test]
    fn test_list_moderated_channels() {
        let request = ListChannelsModeratedByAppInstanceUserRequest {
            chime_bearer: MODERATOR.to_string(),
            max_results: Some(51),
            ..Default::default()
        };
        assert_eq!(request.validate().unwrap_err().field(), Some("MaxResults"));

        let output = ListChannelsModeratedByAppInstanceUserRequest::parse_output(
            r#"{"Channels": [{"ChannelSummary": {"Name": "general"}}]}"#,
        )
        .unwrap();
        assert_eq!(output.channels.map(|c| c.len()), Some(1));
    }
}
