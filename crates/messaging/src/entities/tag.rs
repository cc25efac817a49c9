use serde::{Deserialize, Serialize};

use crate::types::MessagingResult;
use crate::utils::display::impl_display;
use crate::utils::validation::{Validate, Validator};

/// A key-value pair attached to a channel or channel flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Validate for Tag {
    fn validate(&self) -> MessagingResult<()> {
        Validator::length("Key", &self.key, 1, 128)?;
        Validator::length("Value", &self.value, 1, 256)
    }
}

impl_display!(Tag);
