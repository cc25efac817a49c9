use serde::{Deserialize, Serialize};

use crate::utils::display::impl_display;

/// The identity of the user acting on a channel, such as a sender or a moderator.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Identity {
    /// ARN of the `AppInstanceUser` or `AppInstanceBot`
    pub arn: Option<String>,
    /// Display name
    pub name: Option<String>,
}

impl Identity {
    pub fn new(arn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            arn: Some(arn.into()),
            name: Some(name.into()),
        }
    }
}

impl_display!(Identity);
