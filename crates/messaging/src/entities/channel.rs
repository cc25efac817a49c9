use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;
use crate::types::{ChannelMode, ChannelPrivacy, ExpirationCriterion, MessagingResult};
use crate::utils::display::impl_display;
use crate::utils::timestamp::epoch_seconds;
use crate::utils::validation::{Validate, Validator};

/// The details of a channel in an `AppInstance`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Channel {
    /// Channel name
    pub name: Option<String>,
    /// ARN of the channel
    pub channel_arn: Option<String>,
    /// Who may add or remove members
    pub mode: Option<ChannelMode>,
    /// Who may see the channel
    pub privacy: Option<ChannelPrivacy>,
    /// Application metadata, at most 1024 bytes
    pub metadata: Option<String>,
    /// The user that created the channel
    pub created_by: Option<Identity>,
    #[serde(with = "epoch_seconds")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub last_message_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub last_updated_timestamp: Option<DateTime<Utc>>,
    /// ARN of the channel flow processing messages of this channel
    pub channel_flow_arn: Option<String>,
    /// Sub-channel partitioning, present on elastic channels only
    pub elastic_channel_configuration: Option<ElasticChannelConfiguration>,
    pub expiration_settings: Option<ExpirationSettings>,
}

impl Channel {
    /// Check if the channel partitions its membership into sub-channels
    pub fn is_elastic(&self) -> bool {
        self.elastic_channel_configuration.is_some()
    }

    /// Check if messages go through a channel flow before delivery
    pub fn has_channel_flow(&self) -> bool {
        self.channel_flow_arn.is_some()
    }

    /// Check if only moderators can manage membership
    pub fn is_restricted(&self) -> bool {
        matches!(self.mode, Some(ChannelMode::Restricted))
    }

    pub fn is_private(&self) -> bool {
        matches!(self.privacy, Some(ChannelPrivacy::Private))
    }
}

/// Summary of a channel as returned by listing and search operations.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelSummary {
    pub name: Option<String>,
    pub channel_arn: Option<String>,
    pub mode: Option<ChannelMode>,
    pub privacy: Option<ChannelPrivacy>,
    pub metadata: Option<String>,
    #[serde(with = "epoch_seconds")]
    pub last_message_timestamp: Option<DateTime<Utc>>,
}

/// Summary of a channel associated with a channel flow.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelAssociatedWithFlowSummary {
    pub name: Option<String>,
    pub channel_arn: Option<String>,
    pub mode: Option<ChannelMode>,
    pub privacy: Option<ChannelPrivacy>,
    pub metadata: Option<String>,
}

/// Parameters for partitioning the membership of a large channel across
/// sub-channels.
///
/// New members are placed in the existing sub-channels until each holds
/// `target_memberships_per_sub_channel` members, after which a new sub-channel
/// is opened, up to `maximum_sub_channels`. Sub-channels whose membership drops
/// under `minimum_membership_percentage` of the target are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticChannelConfiguration {
    pub maximum_sub_channels: i32,
    pub target_memberships_per_sub_channel: i32,
    pub minimum_membership_percentage: i32,
}

impl ElasticChannelConfiguration {
    pub fn new(
        maximum_sub_channels: i32,
        target_memberships_per_sub_channel: i32,
        minimum_membership_percentage: i32,
    ) -> Self {
        Self {
            maximum_sub_channels,
            target_memberships_per_sub_channel,
            minimum_membership_percentage,
        }
    }
}

impl Validate for ElasticChannelConfiguration {
    fn validate(&self) -> MessagingResult<()> {
        Validator::at_least("MaximumSubChannels", i64::from(self.maximum_sub_channels), 2)?;
        Validator::at_least(
            "TargetMembershipsPerSubChannel",
            i64::from(self.target_memberships_per_sub_channel),
            2,
        )?;
        Validator::range(
            "MinimumMembershipPercentage",
            i64::from(self.minimum_membership_percentage),
            1,
            40,
        )
    }
}

/// When a channel and its messages are deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpirationSettings {
    /// Days after the criterion timestamp, 1 to 5475
    pub expiration_days: i32,
    pub expiration_criterion: ExpirationCriterion,
}

impl Validate for ExpirationSettings {
    fn validate(&self) -> MessagingResult<()> {
        Validator::range("ExpirationDays", i64::from(self.expiration_days), 1, 5475)
    }
}

/// Summary of a sub-channel of an elastic channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SubChannelSummary {
    pub sub_channel_id: Option<String>,
    pub membership_count: Option<i32>,
}

impl_display!(
    Channel,
    ChannelSummary,
    ChannelAssociatedWithFlowSummary,
    ElasticChannelConfiguration,
    ExpirationSettings,
    SubChannelSummary,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn general() -> Channel {
        Channel {
            name: Some("general".to_string()),
            channel_arn: Some(
                "arn:aws:chime:us-east-1:123456789012:app-instance/a/channel/general".to_string(),
            ),
            mode: Some(ChannelMode::Restricted),
            privacy: Some(ChannelPrivacy::Private),
            metadata: Some("{\"topic\":\"all hands\"}".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_channel_equality() {
        let a = general();
        let b = general();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let mut renamed = general();
        renamed.name = Some("random".to_string());
        assert_ne!(a, renamed);

        let mut other_mode = general();
        other_mode.mode = Some(ChannelMode::Unrestricted);
        assert_ne!(a, other_mode);

        let mut public = general();
        public.privacy = Some(ChannelPrivacy::Public);
        assert_ne!(a, public);

        let mut no_metadata = general();
        no_metadata.metadata = None;
        assert_ne!(a, no_metadata);

        let mut other_arn = general();
        other_arn.channel_arn = Some("arn:aws:chime:us-east-1:1:x".to_string());
        assert_ne!(a, other_arn);
    }

    #[test]
    fn test_channel_queries() {
        let mut channel = general();
        assert!(channel.is_restricted());
        assert!(channel.is_private());
        assert!(!channel.is_elastic());
        assert!(!channel.has_channel_flow());

        channel.elastic_channel_configuration =
            Some(ElasticChannelConfiguration::new(10, 1000, 25));
        channel.channel_flow_arn =
            Some("arn:aws:chime:us-east-1:123456789012:app-instance/a/channel-flow/f".to_string());
        assert!(channel.is_elastic());
        assert!(channel.has_channel_flow());
    }

    #[test]
    fn test_channel_display_omits_absent_fields() {
        let rendered = general().to_string();
        assert!(rendered.starts_with("{Name: general, ChannelArn: "));
        assert!(rendered.contains("Mode: RESTRICTED"));
        assert!(rendered.contains("Privacy: PRIVATE"));
        assert_eq!(rendered.matches("Name:").count(), 1);
        assert!(!rendered.contains("CreatedBy"));
        assert!(!rendered.contains("Timestamp"));
    }

    #[test]
    fn test_channel_wire_format() {
        let json = r#"{
            "Name": "general",
            "ChannelArn": "arn:aws:chime:us-east-1:123456789012:app-instance/a/channel/general",
            "Mode": "UNRESTRICTED",
            "Privacy": "PUBLIC",
            "CreatedBy": {"Arn": "arn:aws:chime:us-east-1:123456789012:app-instance/a/user/u", "Name": "U"},
            "CreatedTimestamp": 1700000000.5,
            "ElasticChannelConfiguration": {
                "MaximumSubChannels": 4,
                "TargetMembershipsPerSubChannel": 100,
                "MinimumMembershipPercentage": 10
            }
        }"#;

        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.mode, Some(ChannelMode::Unrestricted));
        assert_eq!(
            channel.created_timestamp.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_500)
        );
        assert!(channel.is_elastic());
        assert_eq!(channel.created_by.as_ref().and_then(|i| i.name.as_deref()), Some("U"));

        let value = serde_json::to_value(&channel).unwrap();
        assert!(value.get("LastMessageTimestamp").is_none());
        assert_eq!(value["Privacy"], "PUBLIC");
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let json = r#"{"Mode": "OPEN"}"#;
        assert!(serde_json::from_str::<Channel>(json).is_err());
    }

    #[test]
    fn test_elastic_configuration_validation() {
        assert!(ElasticChannelConfiguration::new(2, 2, 1).validate().is_ok());
        assert!(ElasticChannelConfiguration::new(1000, 10000, 40).validate().is_ok());

        let err = ElasticChannelConfiguration::new(1, 2, 1).validate().unwrap_err();
        assert_eq!(err.field(), Some("MaximumSubChannels"));

        let err = ElasticChannelConfiguration::new(2, 1, 1).validate().unwrap_err();
        assert_eq!(err.field(), Some("TargetMembershipsPerSubChannel"));

        assert!(ElasticChannelConfiguration::new(2, 2, 0).validate().is_err());
        assert!(ElasticChannelConfiguration::new(2, 2, 41).validate().is_err());
    }

    #[test]
    fn test_expiration_settings_validation() {
        let mut settings = ExpirationSettings {
            expiration_days: 1,
            expiration_criterion: ExpirationCriterion::LastMessageTimestamp,
        };
        assert!(settings.validate().is_ok());

        settings.expiration_days = 5475;
        assert!(settings.validate().is_ok());

        settings.expiration_days = 0;
        assert!(settings.validate().is_err());

        settings.expiration_days = 5476;
        assert!(settings.validate().is_err());
    }
}
