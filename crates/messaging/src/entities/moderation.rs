use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::channel::ChannelSummary;
use super::identity::Identity;
use crate::utils::display::impl_display;
use crate::utils::timestamp::epoch_seconds;

/// A member banned from a channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelBan {
    pub member: Option<Identity>,
    pub channel_arn: Option<String>,
    #[serde(with = "epoch_seconds")]
    pub created_timestamp: Option<DateTime<Utc>>,
    /// The moderator that issued the ban
    pub created_by: Option<Identity>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelBanSummary {
    pub member: Option<Identity>,
}

/// A moderator of a channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelModerator {
    pub moderator: Option<Identity>,
    pub channel_arn: Option<String>,
    #[serde(with = "epoch_seconds")]
    pub created_timestamp: Option<DateTime<Utc>>,
    pub created_by: Option<Identity>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelModeratorSummary {
    pub moderator: Option<Identity>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelModeratedByAppInstanceUserSummary {
    pub channel_summary: Option<ChannelSummary>,
}

impl_display!(
    ChannelBan,
    ChannelBanSummary,
    ChannelModerator,
    ChannelModeratorSummary,
    ChannelModeratedByAppInstanceUserSummary,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ban_round_trip_keeps_timestamp() {
        let ban = ChannelBan {
            member: Some(Identity::new(
                "arn:aws:chime:us-east-1:1:app-instance/a/user/troll",
                "troll",
            )),
            channel_arn: Some("arn:aws:chime:us-east-1:1:app-instance/a/channel/c".to_string()),
            created_timestamp: Some(Utc.timestamp_millis_opt(1_650_000_000_250).unwrap()),
            created_by: Some(Identity::new(
                "arn:aws:chime:us-east-1:1:app-instance/a/user/mod",
                "mod",
            )),
        };

        let json = serde_json::to_string(&ban).unwrap();
        let parsed: ChannelBan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ban);
    }

    #[test]
    fn test_moderator_equality_distinguishes_creator() {
        let a = ChannelModerator {
            moderator: Some(Identity::new("arn:aws:chime:us-east-1:1:app-instance/a/user/m", "m")),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.created_by = Some(Identity::new("arn:aws:chime:us-east-1:1:app-instance/a/user/o", "o"));
        assert_ne!(a, b);
    }
}
