use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::push::PushNotificationConfiguration;
use crate::types::{
    ChannelMessagePersistenceType, ChannelMessageStatus, ChannelMessageType, MessagingError,
    MessagingResult,
};
use crate::utils::display::impl_display;
use crate::utils::timestamp::epoch_seconds;
use crate::utils::validation::{Validate, Validator};

/// Free-form attributes attached to a message, keyed by attribute name
pub type MessageAttributes = BTreeMap<String, MessageAttributeValue>;

const MESSAGE_ATTRIBUTES_FIELD: &str = "MessageAttributes";

/// Insert an attribute, failing if the key is already present
pub(crate) fn insert_message_attribute(
    attributes: &mut Option<MessageAttributes>,
    key: String,
    value: MessageAttributeValue,
) -> MessagingResult<()> {
    match attributes.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(entry) => Err(MessagingError::duplicate_key(
            MESSAGE_ATTRIBUTES_FIELD,
            entry.key().clone(),
        )),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

pub(crate) fn validate_message_attributes(
    attributes: &Option<MessageAttributes>,
) -> MessagingResult<()> {
    for (name, value) in attributes.iter().flatten() {
        Validator::length(&format!("{}.{}", MESSAGE_ATTRIBUTES_FIELD, name), name, 1, 64)?;
        Validator::nested(&format!("{}.{}", MESSAGE_ATTRIBUTES_FIELD, name), value)?;
    }
    Ok(())
}

/// A message in a channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelMessage {
    pub channel_arn: Option<String>,
    pub message_id: Option<String>,
    /// Message body, at most 4096 bytes
    pub content: Option<String>,
    /// Application metadata, at most 1024 bytes
    pub metadata: Option<String>,
    #[serde(rename = "Type")]
    pub message_type: Option<ChannelMessageType>,
    #[serde(with = "epoch_seconds")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub last_edited_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub last_updated_timestamp: Option<DateTime<Utc>>,
    pub sender: Option<Identity>,
    /// Whether the content was removed by a redaction
    pub redacted: Option<bool>,
    pub persistence: Option<ChannelMessagePersistenceType>,
    /// Processing status when the channel has a flow
    pub status: Option<ChannelMessageStatusStructure>,
    pub message_attributes: Option<MessageAttributes>,
    pub sub_channel_id: Option<String>,
    pub content_type: Option<String>,
    /// Members the message is restricted to
    pub target: Option<Vec<Target>>,
}

impl ChannelMessage {
    /// Add a message attribute.
    ///
    /// Fails with [`MessagingError::DuplicateKey`] if the key is already present.
    pub fn add_message_attributes_entry(
        &mut self,
        key: impl Into<String>,
        value: MessageAttributeValue,
    ) -> MessagingResult<&mut Self> {
        insert_message_attribute(&mut self.message_attributes, key.into(), value)?;
        Ok(self)
    }

    /// Remove all message attributes
    pub fn clear_message_attributes_entries(&mut self) -> &mut Self {
        self.message_attributes = None;
        self
    }

    pub fn is_control(&self) -> bool {
        matches!(self.message_type, Some(ChannelMessageType::Control))
    }

    pub fn is_redacted(&self) -> bool {
        self.redacted.unwrap_or(false)
    }

    pub fn is_persistent(&self) -> bool {
        !matches!(
            self.persistence,
            Some(ChannelMessagePersistenceType::NonPersistent)
        )
    }
}

/// Summary of a message as returned by message listings.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelMessageSummary {
    pub message_id: Option<String>,
    pub content: Option<String>,
    pub metadata: Option<String>,
    #[serde(rename = "Type")]
    pub message_type: Option<ChannelMessageType>,
    #[serde(with = "epoch_seconds")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub last_updated_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub last_edited_timestamp: Option<DateTime<Utc>>,
    pub sender: Option<Identity>,
    pub redacted: Option<bool>,
    pub status: Option<ChannelMessageStatusStructure>,
    pub message_attributes: Option<MessageAttributes>,
    pub content_type: Option<String>,
    pub target: Option<Vec<Target>>,
}

impl ChannelMessageSummary {
    /// Add a message attribute.
    ///
    /// Fails with [`MessagingError::DuplicateKey`] if the key is already present.
    pub fn add_message_attributes_entry(
        &mut self,
        key: impl Into<String>,
        value: MessageAttributeValue,
    ) -> MessagingResult<&mut Self> {
        insert_message_attribute(&mut self.message_attributes, key.into(), value)?;
        Ok(self)
    }

    /// Remove all message attributes
    pub fn clear_message_attributes_entries(&mut self) -> &mut Self {
        self.message_attributes = None;
        self
    }
}

/// The message a channel flow processor hands back through `ChannelFlowCallback`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelMessageCallback {
    pub message_id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<String>,
    #[serde(default)]
    pub push_notification: Option<PushNotificationConfiguration>,
    #[serde(default)]
    pub message_attributes: Option<MessageAttributes>,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl ChannelMessageCallback {
    /// Add a message attribute.
    ///
    /// Fails with [`MessagingError::DuplicateKey`] if the key is already present.
    pub fn add_message_attributes_entry(
        &mut self,
        key: impl Into<String>,
        value: MessageAttributeValue,
    ) -> MessagingResult<&mut Self> {
        insert_message_attribute(&mut self.message_attributes, key.into(), value)?;
        Ok(self)
    }

    /// Remove all message attributes
    pub fn clear_message_attributes_entries(&mut self) -> &mut Self {
        self.message_attributes = None;
        self
    }
}

impl Validate for ChannelMessageCallback {
    fn validate(&self) -> MessagingResult<()> {
        Validator::message_id("MessageId", &self.message_id)?;
        if let Some(content) = &self.content {
            Validator::content("Content", content, 1)?;
        }
        if let Some(metadata) = &self.metadata {
            Validator::metadata("Metadata", metadata)?;
        }
        if let Some(push) = &self.push_notification {
            Validator::nested("PushNotification", push)?;
        }
        validate_message_attributes(&self.message_attributes)?;
        if let Some(sub_channel_id) = &self.sub_channel_id {
            Validator::sub_channel_id("SubChannelId", sub_channel_id)?;
        }
        if let Some(content_type) = &self.content_type {
            Validator::content_type("ContentType", content_type)?;
        }
        Ok(())
    }
}

/// Status of a message processed by a channel flow.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelMessageStatusStructure {
    pub value: Option<ChannelMessageStatus>,
    /// Reason given by the processor, if any
    pub detail: Option<String>,
}

/// Values of a message attribute.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageAttributeValue {
    pub string_values: Option<Vec<String>>,
}

impl MessageAttributeValue {
    pub fn from_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            string_values: Some(values.into_iter().map(Into::into).collect()),
        }
    }
}

impl Validate for MessageAttributeValue {
    fn validate(&self) -> MessagingResult<()> {
        for (i, value) in self.string_values.iter().flatten().enumerate() {
            Validator::length(&format!("StringValues[{}]", i), value, 1, 512)?;
        }
        Ok(())
    }
}

/// A member a targeted message is delivered to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Target {
    pub member_arn: String,
}

impl Target {
    pub fn member(member_arn: impl Into<String>) -> Self {
        Self {
            member_arn: member_arn.into(),
        }
    }
}

impl Validate for Target {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("MemberArn", &self.member_arn)
    }
}

impl_display!(
    ChannelMessage,
    ChannelMessageSummary,
    ChannelMessageCallback,
    ChannelMessageStatusStructure,
    MessageAttributeValue,
    Target,
);
