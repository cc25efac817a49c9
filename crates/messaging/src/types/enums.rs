//! Closed enumerations used by the messaging shapes.
//!
//! Every enum serializes to its wire value through `Display` and parses
//! through `FromStr`, so an unknown value fails with
//! [`MessagingError::InvalidEnumValue`] whether it comes from a string or a
//! JSON payload.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::errors::MessagingError;

/// Declare a closed enum from its variant to wire value table
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Wire value of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// All variants in declaration order
            pub fn values() -> &'static [$name] {
                &[$($name::$variant),+]
            }
        }

        impl FromStr for $name {
            type Err = MessagingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(MessagingError::invalid_enum_value(stringify!($name), s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Whether members can join or leave a channel on their own (`UNRESTRICTED`)
    /// or only through a moderator (`RESTRICTED`).
    ChannelMode {
        Unrestricted => "UNRESTRICTED",
        Restricted => "RESTRICTED",
    }
}

wire_enum! {
    /// Visibility of a channel. Private channels are not discoverable outside
    /// their membership.
    ChannelPrivacy {
        Public => "PUBLIC",
        Private => "PRIVATE",
    }
}

wire_enum! {
    /// Membership type. Hidden members are not returned by membership listings.
    #[derive(Default)]
    ChannelMembershipType {
        #[default]
        Default => "DEFAULT",
        Hidden => "HIDDEN",
    }
}

wire_enum! {
    /// Standard messages are shown to members, control messages carry application signalling.
    #[derive(Default)]
    ChannelMessageType {
        #[default]
        Standard => "STANDARD",
        Control => "CONTROL",
    }
}

wire_enum! {
    /// Whether a message is stored by the service.
    #[derive(Default)]
    ChannelMessagePersistenceType {
        #[default]
        Persistent => "PERSISTENT",
        NonPersistent => "NON_PERSISTENT",
    }
}

wire_enum! {
    /// Delivery status of a message that went through a channel flow.
    ChannelMessageStatus {
        Sent => "SENT",
        Pending => "PENDING",
        Failed => "FAILED",
        Denied => "DENIED",
    }
}

wire_enum! {
    /// What the channel flow does when a processor fails.
    #[derive(Default)]
    FallbackAction {
        #[default]
        Continue => "CONTINUE",
        Abort => "ABORT",
    }
}

wire_enum! {
    /// How a processor's Lambda function is invoked.
    #[derive(Default)]
    InvocationType {
        #[default]
        Async => "ASYNC",
    }
}

wire_enum! {
    /// Which push notifications a member receives.
    #[derive(Default)]
    AllowNotifications {
        #[default]
        All => "ALL",
        None => "NONE",
        Filtered => "FILTERED",
    }
}

wire_enum! {
    PushNotificationType {
        Default => "DEFAULT",
        Voip => "VOIP",
    }
}

wire_enum! {
    /// Field a channel search predicate applies to.
    #[derive(Default)]
    SearchFieldKey {
        #[default]
        Members => "MEMBERS",
    }
}

wire_enum! {
    /// Comparison used by a channel search predicate.
    #[derive(Default)]
    SearchFieldOperator {
        #[default]
        Equals => "EQUALS",
        Includes => "INCLUDES",
    }
}

wire_enum! {
    SortOrder {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

wire_enum! {
    /// Timestamp a channel expiration is measured from.
    #[derive(Default)]
    ExpirationCriterion {
        #[default]
        CreatedTimestamp => "CREATED_TIMESTAMP",
        LastMessageTimestamp => "LAST_MESSAGE_TIMESTAMP",
    }
}

wire_enum! {
    /// Kind of data streamed to a messaging streaming configuration.
    #[derive(Default)]
    MessagingDataType {
        #[default]
        Channel => "Channel",
        ChannelMessage => "ChannelMessage",
    }
}

wire_enum! {
    /// IP stack of the messaging session endpoint.
    NetworkType {
        Ipv4Only => "IPV4_ONLY",
        DualStack => "DUAL_STACK",
    }
}

wire_enum! {
    /// Error codes reported per member by batch operations.
    ErrorCode {
        BadRequest => "BadRequest",
        Conflict => "Conflict",
        Forbidden => "Forbidden",
        NotFound => "NotFound",
        PreconditionFailed => "PreconditionFailed",
        ResourceLimitExceeded => "ResourceLimitExceeded",
        ServiceFailure => "ServiceFailure",
        AccessDenied => "AccessDenied",
        ServiceUnavailable => "ServiceUnavailable",
        Throttled => "Throttled",
        Throttling => "Throttling",
        Unauthorized => "Unauthorized",
        Unprocessable => "Unprocessable",
        VoiceConnectorGroupAssociationsExist => "VoiceConnectorGroupAssociationsExist",
        PhoneNumberAssociationsExist => "PhoneNumberAssociationsExist",
    }
}

/// Names of the enums above, as reported in `InvalidEnumValue`
const TYPE_NAMES: &[&str] = &[
    "ChannelMode",
    "ChannelPrivacy",
    "ChannelMembershipType",
    "ChannelMessageType",
    "ChannelMessagePersistenceType",
    "ChannelMessageStatus",
    "FallbackAction",
    "InvocationType",
    "AllowNotifications",
    "PushNotificationType",
    "SearchFieldKey",
    "SearchFieldOperator",
    "SortOrder",
    "ExpirationCriterion",
    "MessagingDataType",
    "NetworkType",
    "ErrorCode",
];

/// Static name of the enum called `name`
pub(crate) fn type_name(name: &str) -> Option<&'static str> {
    TYPE_NAMES.iter().find(|known| **known == name).copied()
}
