use serde::{Deserialize, Serialize};

use crate::types::{AllowNotifications, MessagingResult, PushNotificationType};
use crate::utils::display::impl_display;
use crate::utils::validation::{Validate, Validator};

/// Push notification sent alongside a message.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PushNotificationConfiguration {
    /// 1 to 50 characters
    pub title: Option<String>,
    /// 1 to 150 characters
    pub body: Option<String>,
    #[serde(rename = "Type")]
    pub notification_type: Option<PushNotificationType>,
}

impl Validate for PushNotificationConfiguration {
    fn validate(&self) -> MessagingResult<()> {
        if let Some(title) = &self.title {
            Validator::length("Title", title, 1, 50)?;
        }
        if let Some(body) = &self.body {
            Validator::length("Body", body, 1, 150)?;
        }
        Ok(())
    }
}

/// A member's push notification settings for one channel.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PushNotificationPreferences {
    pub allow_notifications: AllowNotifications,
    /// Filter expression applied when notifications are `FILTERED`
    #[serde(default)]
    pub filter_rule: Option<String>,
}

impl PushNotificationPreferences {
    pub fn filtered(filter_rule: impl Into<String>) -> Self {
        Self {
            allow_notifications: AllowNotifications::Filtered,
            filter_rule: Some(filter_rule.into()),
        }
    }
}

impl Validate for PushNotificationPreferences {
    fn validate(&self) -> MessagingResult<()> {
        if let Some(rule) = &self.filter_rule {
            Validator::length("FilterRule", rule, 1, 2048)?;
        }
        Ok(())
    }
}

impl_display!(PushNotificationConfiguration, PushNotificationPreferences);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_configuration_validation() {
        let mut push = PushNotificationConfiguration {
            title: Some("New message".to_string()),
            body: Some("Ana: lunch?".to_string()),
            notification_type: Some(PushNotificationType::Default),
        };
        assert!(push.validate().is_ok());

        push.title = Some("t".repeat(51));
        assert_eq!(push.validate().unwrap_err().field(), Some("Title"));

        push.title = None;
        push.body = Some(String::new());
        assert_eq!(push.validate().unwrap_err().field(), Some("Body"));

        assert!(PushNotificationConfiguration::default().validate().is_ok());
    }

    #[test]
    fn test_push_configuration_type_label() {
        let push = PushNotificationConfiguration {
            notification_type: Some(PushNotificationType::Voip),
            ..Default::default()
        };
        assert_eq!(push.to_string(), "{Type: VOIP}");
    }

    #[test]
    fn test_preferences() {
        let preferences = PushNotificationPreferences::filtered("{\"mention\": [\"me\"]}");
        assert_eq!(preferences.allow_notifications, AllowNotifications::Filtered);
        assert!(preferences.validate().is_ok());

        let empty_rule = PushNotificationPreferences::filtered("");
        assert!(empty_rule.validate().is_err());

        let parsed: PushNotificationPreferences =
            serde_json::from_str(r#"{"AllowNotifications": "NONE"}"#).unwrap();
        assert_eq!(parsed.allow_notifications, AllowNotifications::None);
        assert!(parsed.filter_rule.is_none());
    }
}
