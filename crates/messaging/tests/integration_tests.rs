//! Integration tests for the messaging crate.

#[cfg(test)]
mod tests {
    use chime_messaging::*;
    use chime_messaging_config::ValidationConfig;

    const APP_INSTANCE: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app";
    const CHANNEL: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/channel/general";
    const ANA: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/ana";
    const BO: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/app/user/bo";
    const FUNCTION_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:moderate";

    #[test]
    fn test_channel_lifecycle_payloads() {
        let config = ValidationConfig::default();

        let mut create = CreateChannelRequest {
            mode: Some(ChannelMode::Unrestricted),
            privacy: Some(ChannelPrivacy::Public),
            member_arns: Some(vec![BO.to_string()]),
            tags: Some(vec![Tag::new("team", "core")]),
            ..CreateChannelRequest::new(APP_INSTANCE, "general", ANA)
        };
        create.ensure_client_request_token();
        let payload = create.to_payload(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["MemberArns"][0], BO);
        assert_eq!(value["Tags"][0]["Value"], "core");

        let created =
            CreateChannelRequest::parse_output(&format!(r#"{{"ChannelArn": "{}"}}"#, CHANNEL))
                .unwrap();
        assert_eq!(created.channel_arn.as_deref(), Some(CHANNEL));

        let describe = DescribeChannelRequest {
            channel_arn: CHANNEL.to_string(),
            chime_bearer: ANA.to_string(),
        };
        assert!(describe.to_payload(&config).is_ok());

        let described = DescribeChannelRequest::parse_output(&format!(
            r#"{{"Channel": {{"Name": "general", "ChannelArn": "{}", "Mode": "UNRESTRICTED",
                "Privacy": "PUBLIC", "CreatedBy": {{"Arn": "{}", "Name": "ana"}},
                "ElasticChannelConfiguration": {{"MaximumSubChannels": 10,
                "TargetMembershipsPerSubChannel": 100, "MinimumMembershipPercentage": 10}}}}}}"#,
            CHANNEL, ANA
        ))
        .unwrap();
        let channel = described.channel.unwrap();
        assert!(channel.is_elastic());
        assert!(!channel.is_restricted());
        assert!(!channel.has_channel_flow());

        let delete = DeleteChannelRequest {
            channel_arn: CHANNEL.to_string(),
            chime_bearer: ANA.to_string(),
        };
        assert!(delete.to_payload(&config).is_ok());
        assert_eq!(DeleteChannelRequest::parse_output("").unwrap(), NoContent {});
    }

    #[test]
    fn test_channel_equality_follows_fields() {
        let channel = Channel {
            name: Some("general".to_string()),
            channel_arn: Some(CHANNEL.to_string()),
            mode: Some(ChannelMode::Restricted),
            privacy: Some(ChannelPrivacy::Private),
            metadata: Some("{}".to_string()),
            ..Default::default()
        };
        assert_eq!(channel, channel.clone());

        let variants = [
            Channel { name: Some("random".to_string()), ..channel.clone() },
            Channel { channel_arn: Some(format!("{}-2", CHANNEL)), ..channel.clone() },
            Channel { mode: Some(ChannelMode::Unrestricted), ..channel.clone() },
            Channel { privacy: Some(ChannelPrivacy::Public), ..channel.clone() },
            Channel { metadata: None, ..channel.clone() },
        ];
        for variant in &variants {
            assert_ne!(&channel, variant);
        }
    }

    #[test]
    fn test_channel_flow_pipeline() {
        let config = ValidationConfig::default();
        let processors = vec![
            Processor::new(
                "scrub",
                ProcessorConfiguration::lambda(FUNCTION_ARN),
                2,
                FallbackAction::Continue,
            ),
            Processor::new(
                "gate",
                ProcessorConfiguration::lambda(FUNCTION_ARN),
                1,
                FallbackAction::Abort,
            ),
        ];
        let mut create =
            CreateChannelFlowRequest::new(APP_INSTANCE, "moderation", processors.clone());
        create.ensure_client_request_token();
        assert!(create.to_payload(&config).is_ok());

        let flow = ChannelFlow {
            processors: Some(processors),
            ..Default::default()
        };
        let order: Vec<&str> = flow.ordered_processors().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["gate", "scrub"]);

        let callback = ChannelFlowCallbackRequest::new(
            CHANNEL,
            ChannelMessageCallback {
                message_id: "msg-1".to_string(),
                content: Some("[redacted]".to_string()),
                ..Default::default()
            },
        );
        let payload = callback.to_payload(&config).unwrap();
        assert!(payload.contains("\"CallbackId\""));
        assert!(payload.contains("\"ChannelMessage\":{\"MessageId\":\"msg-1\""));
    }

    #[test]
    fn test_messaging_round() {
        let config = ValidationConfig::default();

        let mut send = SendChannelMessageRequest {
            push_notification: Some(PushNotificationConfiguration {
                title: Some("general".to_string()),
                body: Some("ana: hi".to_string()),
                notification_type: Some(PushNotificationType::Default),
            }),
            ..SendChannelMessageRequest::new(CHANNEL, "hi", ANA)
        };
        send.add_message_attributes_entry("mentions", MessageAttributeValue::from_strings([BO]))
            .unwrap()
            .add_message_attributes_entry("lang", MessageAttributeValue::from_strings(["en"]))
            .unwrap();
        let payload = send.to_payload(&config).unwrap();

        // attribute maps render in key order
        assert!(payload.find("\"lang\"").unwrap() < payload.find("\"mentions\"").unwrap());

        let listed = ListChannelMessagesRequest::parse_output(
            r#"{"ChannelArn": "c", "ChannelMessages": [
                {"MessageId": "m-2", "Content": "hi", "CreatedTimestamp": 1700000001.5,
                 "MessageAttributes": {"lang": {"StringValues": ["en"]}}},
                {"MessageId": "m-1", "Type": "CONTROL", "CreatedTimestamp": 1700000000}
            ], "NextToken": "page-2"}"#,
        )
        .unwrap();
        let messages = listed.channel_messages.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0].created_timestamp.map(|t| t.timestamp_millis()),
            Some(1_700_000_001_500)
        );
        assert_eq!(messages[1].message_type, Some(ChannelMessageType::Control));
        assert_eq!(listed.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let request = SendChannelMessageRequest::new(CHANNEL, "", ANA);

        let err = request.to_payload(&ValidationConfig::default()).unwrap_err();
        assert!(matches!(err, MessagingError::Validation { ref field, .. } if field == "Content"));

        let payload = request.to_payload(&ValidationConfig { enforce: false }).unwrap();
        assert!(payload.contains("\"Content\":\"\""));
    }

    #[test]
    fn test_enum_parsing_and_errors() {
        assert_eq!("RESTRICTED".parse::<ChannelMode>().unwrap(), ChannelMode::Restricted);
        assert_eq!(
            "ChannelMessage".parse::<MessagingDataType>().unwrap(),
            MessagingDataType::ChannelMessage
        );

        let err = "restricted".parse::<ChannelMode>().unwrap_err();
        assert!(matches!(err, MessagingError::InvalidEnumValue { type_name: "ChannelMode", .. }));

        let err = serde_json::from_str::<Channel>(r#"{"Mode": "OPEN"}"#).unwrap_err();
        assert!(err.to_string().contains("OPEN"));
    }

    #[test]
    fn test_unknown_enum_in_response_is_an_enum_error() {
        let err = DescribeChannelRequest::parse_output(r#"{"Channel": {"Mode": "OPEN"}}"#)
            .unwrap_err();
        let MessagingError::InvalidEnumValue { type_name, value } = err else {
            panic!("expected an enum error");
        };
        assert_eq!(type_name, "ChannelMode");
        assert_eq!(value, "OPEN");

        let err = GetChannelMessageRequest::parse_output(
            r#"{"ChannelMessage": {"MessageId": "m-1", "Persistence": "TRANSIENT"}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MessagingError::InvalidEnumValue { type_name: "ChannelMessagePersistenceType", .. }
        ));

        let err = DescribeChannelRequest::parse_output(r#"{"Channel": {"Mode": 1}}"#).unwrap_err();
        assert!(matches!(err, MessagingError::Serialization(_)));
    }

    #[test]
    fn test_message_display_shows_instants() {
        let listed = ListChannelMessagesRequest::parse_output(
            r#"{"ChannelMessages": [{"MessageId": "m-1", "CreatedTimestamp": 1700000000.5}]}"#,
        )
        .unwrap();
        let message = &listed.channel_messages.unwrap()[0];
        assert_eq!(
            message.to_string(),
            "{MessageId: m-1, CreatedTimestamp: 2023-11-14T22:13:20.500Z}"
        );
    }

    #[test]
    fn test_batch_membership_and_moderation() {
        let config = ValidationConfig::default();

        let batch = BatchCreateChannelMembershipRequest {
            channel_arn: CHANNEL.to_string(),
            member_arns: vec![BO.to_string()],
            chime_bearer: ANA.to_string(),
            ..Default::default()
        };
        assert!(batch.to_payload(&config).is_ok());

        let ban = CreateChannelBanRequest {
            channel_arn: CHANNEL.to_string(),
            member_arn: BO.to_string(),
            chime_bearer: ANA.to_string(),
        };
        assert_eq!(
            ban.to_string(),
            format!("{{ChannelArn: {}, MemberArn: {}, ChimeBearer: {}}}", CHANNEL, BO, ANA)
        );

        let moderator = CreateChannelModeratorRequest {
            channel_arn: CHANNEL.to_string(),
            channel_moderator_arn: BO.to_string(),
            chime_bearer: ANA.to_string(),
        };
        assert_eq!(moderator.chime_bearer(), Some(ANA));
        assert!(moderator.to_payload(&config).is_ok());
    }

    #[test]
    fn test_error_codes_cover_service_errors() {
        assert_eq!(ErrorCode::values().len(), 15);
        assert_eq!(
            serde_json::to_string(&ErrorCode::ServiceUnavailable).unwrap(),
            "\"ServiceUnavailable\""
        );
    }
}
