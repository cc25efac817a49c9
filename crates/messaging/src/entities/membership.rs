use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::channel::ChannelSummary;
use super::identity::Identity;
use super::push::PushNotificationPreferences;
use crate::types::{ChannelMembershipType, ErrorCode, MessagingResult};
use crate::utils::display::impl_display;
use crate::utils::timestamp::epoch_seconds;
use crate::utils::validation::{Validate, Validator};

/// The membership of a user in a channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelMembership {
    /// The user that added the member
    pub invited_by: Option<Identity>,
    #[serde(rename = "Type")]
    pub membership_type: Option<ChannelMembershipType>,
    pub member: Option<Identity>,
    pub channel_arn: Option<String>,
    #[serde(with = "epoch_seconds")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub last_updated_timestamp: Option<DateTime<Utc>>,
    /// Sub-channel the member was placed in, elastic channels only
    pub sub_channel_id: Option<String>,
}

impl ChannelMembership {
    pub fn is_hidden(&self) -> bool {
        matches!(self.membership_type, Some(ChannelMembershipType::Hidden))
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelMembershipSummary {
    pub member: Option<Identity>,
}

/// Memberships created by a batch call.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchChannelMemberships {
    pub invited_by: Option<Identity>,
    #[serde(rename = "Type")]
    pub membership_type: Option<ChannelMembershipType>,
    pub members: Option<Vec<Identity>>,
    pub channel_arn: Option<String>,
    pub sub_channel_id: Option<String>,
}

/// A member a batch call could not add, with the reason.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchCreateChannelMembershipError {
    pub member_arn: Option<String>,
    pub error_code: Option<ErrorCode>,
    pub error_message: Option<String>,
}

/// Membership details of an `AppInstanceUser` as seen from the user's side.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppInstanceUserMembershipSummary {
    #[serde(rename = "Type")]
    pub membership_type: Option<ChannelMembershipType>,
    /// Last time the user read messages in the channel
    #[serde(with = "epoch_seconds")]
    pub read_marker_timestamp: Option<DateTime<Utc>>,
    pub sub_channel_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelMembershipForAppInstanceUserSummary {
    pub channel_summary: Option<ChannelSummary>,
    pub app_instance_user_membership_summary: Option<AppInstanceUserMembershipSummary>,
}

/// Per-member channel preferences.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelMembershipPreferences {
    pub push_notifications: Option<PushNotificationPreferences>,
}

impl Validate for ChannelMembershipPreferences {
    fn validate(&self) -> MessagingResult<()> {
        if let Some(push) = &self.push_notifications {
            Validator::nested("PushNotifications", push)?;
        }
        Ok(())
    }
}

impl_display!(
    ChannelMembership,
    ChannelMembershipSummary,
    BatchChannelMemberships,
    BatchCreateChannelMembershipError,
    AppInstanceUserMembershipSummary,
    ChannelMembershipForAppInstanceUserSummary,
    ChannelMembershipPreferences,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_type_wire_label() {
        let membership = ChannelMembership {
            membership_type: Some(ChannelMembershipType::Hidden),
            sub_channel_id: Some("sub-1".to_string()),
            ..Default::default()
        };
        assert!(membership.is_hidden());

        let value = serde_json::to_value(&membership).unwrap();
        assert_eq!(value["Type"], "HIDDEN");
        assert_eq!(value["SubChannelId"], "sub-1");
        assert!(value.get("Member").is_none());
    }

    #[test]
    fn test_batch_error_parsing() {
        let error: BatchCreateChannelMembershipError = serde_json::from_str(
            r#"{"MemberArn": "arn:aws:chime:us-east-1:1:app-instance/a/user/u",
                "ErrorCode": "Forbidden",
                "ErrorMessage": "banned"}"#,
        )
        .unwrap();
        assert_eq!(error.error_code, Some(ErrorCode::Forbidden));
        assert_eq!(error.error_message.as_deref(), Some("banned"));
    }

    #[test]
    fn test_preferences_validation_path() {
        let preferences = ChannelMembershipPreferences {
            push_notifications: Some(PushNotificationPreferences::filtered("r".repeat(2049))),
        };
        let err = preferences.validate().unwrap_err();
        assert_eq!(err.field(), Some("PushNotifications.FilterRule"));

        assert!(ChannelMembershipPreferences::default().validate().is_ok());
    }

    #[test]
    fn test_user_membership_summary_display() {
        let summary = ChannelMembershipForAppInstanceUserSummary {
            channel_summary: Some(ChannelSummary {
                name: Some("general".to_string()),
                ..Default::default()
            }),
            app_instance_user_membership_summary: Some(AppInstanceUserMembershipSummary {
                membership_type: Some(ChannelMembershipType::Default),
                ..Default::default()
            }),
        };
        assert_eq!(
            summary.to_string(),
            "{ChannelSummary: {Name: general}, AppInstanceUserMembershipSummary: {Type: DEFAULT}}"
        );
    }
}
