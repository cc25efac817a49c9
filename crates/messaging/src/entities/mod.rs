//! Domain entities of the messaging service.
//!
//! These are the value objects embedded in requests and responses. Input
//! shapes implement [`Validate`](crate::utils::Validate).

pub mod channel;
pub mod channel_flow;
pub mod identity;
pub mod membership;
pub mod message;
pub mod moderation;
pub mod push;
pub mod search;
pub mod streaming;
pub mod tag;

// Re-export all entity types
pub use channel::{
    Channel, ChannelAssociatedWithFlowSummary, ChannelSummary, ElasticChannelConfiguration,
    ExpirationSettings, SubChannelSummary,
};
pub use channel_flow::{
    ChannelFlow, ChannelFlowSummary, LambdaConfiguration, Processor, ProcessorConfiguration,
};
pub use identity::Identity;
pub use membership::{
    AppInstanceUserMembershipSummary, BatchChannelMemberships, BatchCreateChannelMembershipError,
    ChannelMembership, ChannelMembershipForAppInstanceUserSummary, ChannelMembershipPreferences,
    ChannelMembershipSummary,
};
pub use message::{
    ChannelMessage, ChannelMessageCallback, ChannelMessageStatusStructure, ChannelMessageSummary,
    MessageAttributeValue, MessageAttributes, Target,
};
pub use moderation::{
    ChannelBan, ChannelBanSummary, ChannelModeratedByAppInstanceUserSummary, ChannelModerator,
    ChannelModeratorSummary,
};
pub use push::{PushNotificationConfiguration, PushNotificationPreferences};
pub use search::SearchField;
pub use streaming::{MessagingSessionEndpoint, StreamingConfiguration};
pub use tag::Tag;
