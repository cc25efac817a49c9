//! Resource tags.

use serde::{Deserialize, Serialize};

use super::{NoContent, Operation};
use crate::entities::Tag;
use crate::types::MessagingResult;
use crate::utils::display::impl_display;
use crate::utils::validation::{Validate, Validator};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,
    pub tags: Vec<Tag>,
}

impl Validate for TagResourceRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::length("ResourceARN", &self.resource_arn, 1, 1011)?;
        Validator::arn("ResourceARN", &self.resource_arn)?;
        Validator::list_length("Tags", self.tags.len(), 1, 50)?;
        Validator::each("Tags", &self.tags)
    }
}

impl Operation for TagResourceRequest {
    const NAME: &'static str = "TagResource";
    type Output = NoContent;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,
    pub tag_keys: Vec<String>,
}

impl Validate for UntagResourceRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::length("ResourceARN", &self.resource_arn, 1, 1011)?;
        Validator::arn("ResourceARN", &self.resource_arn)?;
        Validator::list_length("TagKeys", self.tag_keys.len(), 1, 50)?;
        for (i, key) in self.tag_keys.iter().enumerate() {
            Validator::length(&format!("TagKeys[{}]", i), key, 1, 128)?;
        }
        Ok(())
    }
}

impl Operation for UntagResourceRequest {
    const NAME: &'static str = "UntagResource";
    type Output = NoContent;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,
}

impl Validate for ListTagsForResourceRequest {
    fn validate(&self) -> MessagingResult<()> {
        Validator::length("ResourceARN", &self.resource_arn, 1, 1011)?;
        Validator::arn("ResourceARN", &self.resource_arn)
    }
}

impl Operation for ListTagsForResourceRequest {
    const NAME: &'static str = "ListTagsForResource";
    type Output = ListTagsForResourceResponse;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsForResourceResponse {
    pub tags: Option<Vec<Tag>>,
}

impl_display!(
    TagResourceRequest,
    UntagResourceRequest,
    ListTagsForResourceRequest,
    ListTagsForResourceResponse,
);
