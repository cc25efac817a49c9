//! Channel message operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{validate_page, NoContent, Operation};
use crate::entities::message::{insert_message_attribute, validate_message_attributes};
use crate::entities::{
    ChannelMessage, ChannelMessageStatusStructure, ChannelMessageSummary, MessageAttributeValue,
    MessageAttributes, PushNotificationConfiguration, Target,
};
use crate::types::{
    ChannelMessagePersistenceType, ChannelMessageType, MessagingError, MessagingResult, SortOrder,
};
use crate::utils::display::impl_display;
use crate::utils::idempotency;
use crate::utils::timestamp::epoch_seconds;
use crate::utils::validation::{Validate, Validator};

/// Send a message to a channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendChannelMessageRequest {
    pub channel_arn: String,
    /// Message body, 1 to 4096 bytes
    pub content: String,
    #[serde(rename = "Type")]
    pub message_type: ChannelMessageType,
    pub persistence: ChannelMessagePersistenceType,
    #[serde(default)]
    pub metadata: Option<String>,
    #[serde(default)]
    pub client_request_token: Option<String>,
    pub chime_bearer: String,
    #[serde(default)]
    pub push_notification: Option<PushNotificationConfiguration>,
    #[serde(default)]
    pub message_attributes: Option<MessageAttributes>,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    /// Restrict delivery to a single member
    #[serde(default)]
    pub target: Option<Vec<Target>>,
}

impl SendChannelMessageRequest {
    /// A persistent standard message
    pub fn new(
        channel_arn: impl Into<String>,
        content: impl Into<String>,
        chime_bearer: impl Into<String>,
    ) -> Self {
        Self {
            channel_arn: channel_arn.into(),
            content: content.into(),
            chime_bearer: chime_bearer.into(),
            ..Default::default()
        }
    }

    /// Add a message attribute.
    ///
    /// Fails with [`MessagingError::DuplicateKey`](crate::types::MessagingError::DuplicateKey)
    /// if the key is already present.
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

    /// Generate a client request token unless the caller supplied one
    pub fn ensure_client_request_token(&mut self) -> &str {
        idempotency::ensure_token(&mut self.client_request_token)
    }
}

impl Validate for SendChannelMessageRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        Validator::content("Content", &self.content, 1)?;
        if let Some(metadata) = &self.metadata {
            Validator::metadata("Metadata", metadata)?;
        }
        if let Some(token) = &self.client_request_token {
            Validator::client_request_token("ClientRequestToken", token)?;
        }
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
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
        if let Some(target) = &self.target {
            Validator::list_length("Target", target.len(), 1, 1)?;
            Validator::each("Target", target)?;
        }
        Ok(())
    }
}

impl Operation for SendChannelMessageRequest {
    const NAME: &'static str = "SendChannelMessage";
    type Output = SendChannelMessageResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SendChannelMessageResponse {
    pub channel_arn: Option<String>,
    pub message_id: Option<String>,
    /// Present when the channel has a flow
    pub status: Option<ChannelMessageStatusStructure>,
    pub sub_channel_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetChannelMessageRequest {
    pub channel_arn: String,
    pub message_id: String,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for GetChannelMessageRequest {
    fn validate(&self) -> MessagingResult<()> {
        validate_message_ref(
            &self.channel_arn,
            &self.message_id,
            &self.chime_bearer,
            self.sub_channel_id.as_deref(),
        )
    }
}

impl Operation for GetChannelMessageRequest {
    const NAME: &'static str = "GetChannelMessage";
    type Output = GetChannelMessageResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetChannelMessageResponse {
    pub channel_message: Option<ChannelMessage>,
}

/// Fetch the processing status of a message sent to a channel with a flow.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetChannelMessageStatusRequest {
    pub channel_arn: String,
    pub message_id: String,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for GetChannelMessageStatusRequest {
    fn validate(&self) -> MessagingResult<()> {
        validate_message_ref(
            &self.channel_arn,
            &self.message_id,
            &self.chime_bearer,
            self.sub_channel_id.as_deref(),
        )
    }
}

impl Operation for GetChannelMessageStatusRequest {
    const NAME: &'static str = "GetChannelMessageStatus";
    type Output = GetChannelMessageStatusResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetChannelMessageStatusResponse {
    pub status: Option<ChannelMessageStatusStructure>,
}

/// List the messages of a channel, newest first unless `sort_order` says otherwise.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChannelMessagesRequest {
    pub channel_arn: String,
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
    /// Only messages created at or after this instant
    #[serde(default, with = "epoch_seconds")]
    pub not_before: Option<DateTime<Utc>>,
    /// Only messages created at or before this instant
    #[serde(default, with = "epoch_seconds")]
    pub not_after: Option<DateTime<Utc>>,
    #[serde(default)]
    pub max_results: Option<i32>,
    #[serde(default)]
    pub next_token: Option<String>,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for ListChannelMessagesRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::arn("ChannelArn", &self.channel_arn)?;
        if let (Some(not_before), Some(not_after)) = (self.not_before, self.not_after) {
            // compared at the precision the instants have on the wire
            if not_before.timestamp_millis() > not_after.timestamp_millis() {
                return Err(MessagingError::validation(
                    "NotBefore",
                    "must not be later than NotAfter",
                ));
            }
        }
        validate_page(self.max_results, self.next_token.as_deref())?;
        Validator::arn("ChimeBearer", &self.chime_bearer)?;
        if let Some(sub_channel_id) = &self.sub_channel_id {
            Validator::sub_channel_id("SubChannelId", sub_channel_id)?;
        }
        Ok(())
    }
}

impl Operation for ListChannelMessagesRequest {
    const NAME: &'static str = "ListChannelMessages";
    type Output = ListChannelMessagesResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListChannelMessagesResponse {
    pub channel_arn: Option<String>,
    pub next_token: Option<String>,
    pub channel_messages: Option<Vec<ChannelMessageSummary>>,
    pub sub_channel_id: Option<String>,
}

/// Edit the content of a message.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateChannelMessageRequest {
    pub channel_arn: String,
    pub message_id: String,
    /// New body, may be empty
    pub content: String,
    #[serde(default)]
    pub metadata: Option<String>,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl Validate for UpdateChannelMessageRequest {
    fn validate(&self) -> MessagingResult<()> {
        validate_message_ref(
            &self.channel_arn,
            &self.message_id,
            &self.chime_bearer,
            self.sub_channel_id.as_deref(),
        )?;
        Validator::content("Content", &self.content, 0)?;
        if let Some(metadata) = &self.metadata {
            Validator::metadata("Metadata", metadata)?;
        }
        if let Some(content_type) = &self.content_type {
            Validator::content_type("ContentType", content_type)?;
        }
        Ok(())
    }
}

impl Operation for UpdateChannelMessageRequest {
    const NAME: &'static str = "UpdateChannelMessage";
    type Output = UpdateChannelMessageResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateChannelMessageResponse {
    pub channel_arn: Option<String>,
    pub message_id: Option<String>,
    pub status: Option<ChannelMessageStatusStructure>,
    pub sub_channel_id: Option<String>,
}

/// Remove the content of a message while keeping its place in the channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RedactChannelMessageRequest {
    pub channel_arn: String,
    pub message_id: String,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for RedactChannelMessageRequest {
    fn validate(&self) -> MessagingResult<()> {
        validate_message_ref(
            &self.channel_arn,
            &self.message_id,
            &self.chime_bearer,
            self.sub_channel_id.as_deref(),
        )
    }
}

impl Operation for RedactChannelMessageRequest {
    const NAME: &'static str = "RedactChannelMessage";
    type Output = RedactChannelMessageResponse;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RedactChannelMessageResponse {
    pub channel_arn: Option<String>,
    pub message_id: Option<String>,
    pub sub_channel_id: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteChannelMessageRequest {
    pub channel_arn: String,
    pub message_id: String,
    pub chime_bearer: String,
    #[serde(default)]
    pub sub_channel_id: Option<String>,
}

impl Validate for DeleteChannelMessageRequest {
    fn validate(&self) -> MessagingResult<()> {
        validate_message_ref(
            &self.channel_arn,
            &self.message_id,
            &self.chime_bearer,
            self.sub_channel_id.as_deref(),
        )
    }
}

impl Operation for DeleteChannelMessageRequest {
    const NAME: &'static str = "DeleteChannelMessage";
    type Output = NoContent;

    fn chime_bearer(&self) -> Option<&str> {
        Some(&self.chime_bearer)
    }
}

/// Validate the fields that address a single message
fn validate_message_ref(
    channel_arn: &str,
    message_id: &str,
    chime_bearer: &str,
    sub_channel_id: Option<&str>,
) -> MessagingResult<()> {
    Validator::arn("ChannelArn", channel_arn)?;
    Validator::message_id("MessageId", message_id)?;
    Validator::arn("ChimeBearer", chime_bearer)?;
    if let Some(sub_channel_id) = sub_channel_id {
        Validator::sub_channel_id("SubChannelId", sub_channel_id)?;
    }
    Ok(())
}

impl_display!(
    SendChannelMessageRequest,
    SendChannelMessageResponse,
    GetChannelMessageRequest,
    GetChannelMessageResponse,
    GetChannelMessageStatusRequest,
    GetChannelMessageStatusResponse,
    ListChannelMessagesRequest,
    ListChannelMessagesResponse,
    UpdateChannelMessageRequest,
    UpdateChannelMessageResponse,
    RedactChannelMessageRequest,
    RedactChannelMessageResponse,
    DeleteChannelMessageRequest,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChannelMessageStatus;
    use chime_messaging_config::ValidationConfig;
    use chrono::TimeZone;

    const CHANNEL: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/channel/general";
    const ANA: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/ana";

    #[test]
    fn test_send_message_defaults() {
        let request = SendChannelMessageRequest::new(CHANNEL, "hello", ANA);
        assert_eq!(request.message_type, ChannelMessageType::Standard);
        assert_eq!(request.persistence, ChannelMessagePersistenceType::Persistent);
        assert!(request.validate().is_ok());

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["Type"], "STANDARD");
        assert_eq!(value["Persistence"], "PERSISTENT");
        assert!(value.get("MessageAttributes").is_none());
    }

    #[test]
    fn test_send_message_content_bounds() {
        let mut request = SendChannelMessageRequest::new(CHANNEL, "", ANA);
        assert_eq!(request.validate().unwrap_err().field(), Some("Content"));

        request.content = "x".repeat(4096);
        assert!(request.validate().is_ok());

        // four bytes per character
        request.content = "\u{1F600}".repeat(1025);
        assert_eq!(request.validate().unwrap_err().field(), Some("Content"));
    }

    #[test]
    fn test_send_message_attributes() {
        let mut request = SendChannelMessageRequest::new(CHANNEL, "hello", ANA);
        request
            .add_message_attributes_entry("lang", MessageAttributeValue::from_strings(["en"]))
            .unwrap();

        let err = request
            .add_message_attributes_entry("lang", MessageAttributeValue::from_strings(["fr"]))
            .unwrap_err();
        let MessagingError::DuplicateKey { field, key } = err else {
            panic!("expected a duplicate key error");
        };
        assert_eq!(field, "MessageAttributes");
        assert_eq!(key, "lang");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["MessageAttributes"]["lang"]["StringValues"][0], "en");

        request.clear_message_attributes_entries();
        assert!(request.message_attributes.is_none());
    }

    #[test]
    fn test_send_message_target_cardinality() {
        let mut request = SendChannelMessageRequest {
            target: Some(vec![Target::member(ANA)]),
            ..SendChannelMessageRequest::new(CHANNEL, "psst", ANA)
        };
        assert!(request.validate().is_ok());

        request.target = Some(vec![Target::member(ANA), Target::member(ANA)]);
        assert_eq!(request.validate().unwrap_err().field(), Some("Target"));

        request.target = Some(vec![Target::member("x")]);
        assert_eq!(request.validate().unwrap_err().field(), Some("Target[0].MemberArn"));
    }

    #[test]
    fn test_send_message_token_and_payload() {
        let mut request = SendChannelMessageRequest::new(CHANNEL, "hello", ANA);
        let token = request.ensure_client_request_token().to_string();
        let payload = request.to_payload(&ValidationConfig::default()).unwrap();
        assert!(payload.contains(&token));
    }

    #[test]
    fn test_send_message_response_status() {
        let output = SendChannelMessageRequest::parse_output(
            r#"{"ChannelArn": "c", "MessageId": "m", "Status": {"Value": "PENDING"}}"#,
        )
        .unwrap();
        assert_eq!(
            output.status.and_then(|s| s.value),
            Some(ChannelMessageStatus::Pending)
        );
    }

    #[test]
    fn test_update_message_allows_empty_content() {
        let mut request = UpdateChannelMessageRequest {
            channel_arn: CHANNEL.to_string(),
            message_id: "m-1".to_string(),
            chime_bearer: ANA.to_string(),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        request.content = "x".repeat(4097);
        assert_eq!(request.validate().unwrap_err().field(), Some("Content"));
    }

    #[test]
    fn test_list_messages_time_window() {
        let start = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let end = Utc.timestamp_millis_opt(1_700_000_060_500).unwrap();
        let mut request = ListChannelMessagesRequest {
            channel_arn: CHANNEL.to_string(),
            chime_bearer: ANA.to_string(),
            sort_order: Some(SortOrder::Ascending),
            not_before: Some(start),
            not_after: Some(end),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["SortOrder"], "ASCENDING");
        assert_eq!(value["NotBefore"], 1_700_000_000.0);
        assert_eq!(value["NotAfter"], 1_700_000_060.5);

        request.not_before = Some(end);
        request.not_after = Some(start);
        assert_eq!(request.validate().unwrap_err().field(), Some("NotBefore"));
    }

    #[test]
    fn test_list_messages_window_within_one_millisecond() {
        let not_after = Utc.timestamp_nanos(1_700_000_000_123_000_001);
        let not_before = Utc.timestamp_nanos(1_700_000_000_123_456_789);
        let request = ListChannelMessagesRequest {
            channel_arn: CHANNEL.to_string(),
            chime_bearer: ANA.to_string(),
            not_before: Some(not_before),
            not_after: Some(not_after),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let payload = request.to_payload(&ValidationConfig::default()).unwrap();
        assert!(payload.contains("\"NotBefore\":1700000000.123"));
        assert!(payload.contains("\"NotAfter\":1700000000.123"));

        // the rebuilt request carries millisecond instants
        let rebuilt: ListChannelMessagesRequest = serde_json::from_str(&payload).unwrap();
        assert_eq!(
            rebuilt.not_before.map(|t| t.timestamp_millis()),
            Some(not_before.timestamp_millis())
        );
        assert_eq!(rebuilt.not_before.map(|t| t.timestamp_subsec_nanos()), Some(123_000_000));
        assert!(rebuilt.validate().is_ok());
    }

    #[test]
    fn test_message_ref_validation() {
        let request = RedactChannelMessageRequest {
            channel_arn: CHANNEL.to_string(),
            message_id: "m".repeat(129),
            chime_bearer: ANA.to_string(),
            sub_channel_id: None,
        };
        assert_eq!(request.validate().unwrap_err().field(), Some("MessageId"));

        let request = DeleteChannelMessageRequest {
            message_id: "m-1".to_string(),
            ..Default::default()
        };
        assert_eq!(request.validate().unwrap_err().field(), Some("ChannelArn"));
    }

    #[test]
    fn test_get_message_output() {
        let output = GetChannelMessageRequest::parse_output(
            r#"{"ChannelMessage": {"MessageId": "m-1", "Content": "hi", "Redacted": true}}"#,
        )
        .unwrap();
        assert!(output.channel_message.unwrap().is_redacted());
    }
}
