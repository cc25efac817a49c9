use anyhow::{anyhow, bail, Context, Result};
use chime_messaging::*;
use chime_messaging_config::ValidationConfig;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Expand `$callback!` with every request type known to the CLI
macro_rules! with_operations {
    ($callback:ident ! ($($args:tt)*)) => {
        $callback!(
            ($($args)*)
            CreateChannelRequest,
            DeleteChannelRequest,
            DescribeChannelRequest,
            UpdateChannelRequest,
            ListChannelsRequest,
            SearchChannelsRequest,
            ListSubChannelsRequest,
            PutChannelExpirationSettingsRequest,
            UpdateChannelReadMarkerRequest,
            CreateChannelFlowRequest,
            DeleteChannelFlowRequest,
            DescribeChannelFlowRequest,
            UpdateChannelFlowRequest,
            ListChannelFlowsRequest,
            AssociateChannelFlowRequest,
            DisassociateChannelFlowRequest,
            ListChannelsAssociatedWithChannelFlowRequest,
            ChannelFlowCallbackRequest,
            BatchCreateChannelMembershipRequest,
            CreateChannelMembershipRequest,
            DeleteChannelMembershipRequest,
            DescribeChannelMembershipRequest,
            DescribeChannelMembershipForAppInstanceUserRequest,
            ListChannelMembershipsRequest,
            ListChannelMembershipsForAppInstanceUserRequest,
            GetChannelMembershipPreferencesRequest,
            PutChannelMembershipPreferencesRequest,
            CreateChannelBanRequest,
            DeleteChannelBanRequest,
            DescribeChannelBanRequest,
            ListChannelBansRequest,
            CreateChannelModeratorRequest,
            DeleteChannelModeratorRequest,
            DescribeChannelModeratorRequest,
            ListChannelModeratorsRequest,
            DescribeChannelModeratedByAppInstanceUserRequest,
            ListChannelsModeratedByAppInstanceUserRequest,
            SendChannelMessageRequest,
            GetChannelMessageRequest,
            GetChannelMessageStatusRequest,
            ListChannelMessagesRequest,
            UpdateChannelMessageRequest,
            RedactChannelMessageRequest,
            DeleteChannelMessageRequest,
            PutMessagingStreamingConfigurationsRequest,
            GetMessagingStreamingConfigurationsRequest,
            DeleteMessagingStreamingConfigurationsRequest,
            GetMessagingSessionEndpointRequest,
            TagResourceRequest,
            UntagResourceRequest,
            ListTagsForResourceRequest,
        )
    };
}

macro_rules! names_of {
    (() $($request:ty),* $(,)?) => {
        vec![$(<$request as Operation>::NAME),*]
    };
}

macro_rules! dispatch {
    (($operation:expr, $body:expr, $config:expr) $($request:ty),* $(,)?) => {{
        $(
            if $operation == <$request as Operation>::NAME {
                return normalize::<$request>($body, $config);
            }
        )*
    }};
}

/// Names of every operation accepted by `validate`
pub fn operation_names() -> Vec<&'static str> {
    with_operations!(names_of!())
}

/// Parse a request payload for `operation`, validate it and re-serialize it
pub fn validate_payload(operation: &str, body: &str, config: &ValidationConfig) -> Result<String> {
    with_operations!(dispatch!(operation, body, config));
    bail!("unknown operation `{}`", operation)
}

fn normalize<R>(body: &str, config: &ValidationConfig) -> Result<String>
where
    R: Operation + DeserializeOwned,
{
    let request: R = serde_json::from_str(body)
        .map_err(MessagingError::from)
        .with_context(|| format!("invalid {} request payload", R::NAME))?;
    debug!(operation = R::NAME, bearer = ?request.chime_bearer(), "parsed request");

    let payload = request
        .to_payload(config)
        .with_context(|| format!("{} request rejected", R::NAME))?;
    info!(operation = R::NAME, "request is valid");
    Ok(payload)
}

/// Split a `key=value` message attribute argument
pub fn parse_attribute(raw: &str) -> Result<(String, MessageAttributeValue)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("attribute `{}` is not of the form key=value", raw))?;
    let values = value.split(',').filter(|v| !v.is_empty());
    Ok((key.to_string(), MessageAttributeValue::from_strings(values)))
}

/// Re-indent a compact JSON payload
pub fn pretty(payload: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const CHANNEL: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/channel/general";
    const ANA: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/ana";

    #[test]
    fn operation_names_are_unique() {
        let names = operation_names();
        assert_eq!(names.len(), 51);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
        assert!(names.contains(&"ChannelFlowCallback"));
    }

    #[test]
    fn validate_payload_normalizes_requests() {
        let body = format!(
            r#"{{"ChannelArn": "{}", "Content": "hi", "Type": "STANDARD",
                "Persistence": "PERSISTENT", "ChimeBearer": "{}"}}"#,
            CHANNEL, ANA
        );
        let payload =
            validate_payload("SendChannelMessage", &body, &ValidationConfig::default()).unwrap();
        assert!(payload.starts_with("{\"ChannelArn\""));
        assert!(!payload.contains(' '));
    }

    #[test]
    fn validate_payload_reports_violations() {
        let body = format!(r#"{{"ChannelArn": "{}", "ChimeBearer": "bad"}}"#, CHANNEL);
        let error =
            validate_payload("DeleteChannel", &body, &ValidationConfig::default()).unwrap_err();
        assert!(format!("{:#}", error).contains("ChimeBearer"));

        let lenient = ValidationConfig { enforce: false };
        assert!(validate_payload("DeleteChannel", &body, &lenient).is_ok());
    }

    #[test]
    fn validate_payload_reports_unknown_enum_values() {
        let body = format!(
            r#"{{"ChannelArn": "{}", "Content": "hi", "Type": "URGENT",
                "Persistence": "PERSISTENT", "ChimeBearer": "{}"}}"#,
            CHANNEL, ANA
        );
        let error =
            validate_payload("SendChannelMessage", &body, &ValidationConfig::default()).unwrap_err();
        let cause = error.downcast_ref::<MessagingError>().unwrap();
        assert!(matches!(
            cause,
            MessagingError::InvalidEnumValue { type_name: "ChannelMessageType", .. }
        ));
    }

    #[test]
    fn validate_payload_rejects_unknown_operations() {
        let error =
            validate_payload("CreateMeeting", "{}", &ValidationConfig::default()).unwrap_err();
        assert!(error.to_string().contains("CreateMeeting"));
    }

    #[test]
    fn parse_attribute_splits_values() {
        let (key, value) = parse_attribute("lang=en,fr").unwrap();
        assert_eq!(key, "lang");
        assert_eq!(value, MessageAttributeValue::from_strings(["en", "fr"]));

        assert!(parse_attribute("missing-separator").is_err());
    }

    #[test]
    fn pretty_keeps_field_order() {
        let rendered = pretty(r#"{"b":1,"a":2}"#).unwrap();
        assert!(rendered.find("\"b\"").unwrap() < rendered.find("\"a\"").unwrap());
    }
}
