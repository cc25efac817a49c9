use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{FallbackAction, InvocationType, MessagingResult};
use crate::utils::display::impl_display;
use crate::utils::timestamp::epoch_seconds;
use crate::utils::validation::{Validate, Validator};

/// Lowest and highest position of a processor in a channel flow
pub const EXECUTION_ORDER_RANGE: (i32, i32) = (1, 3);

/// An ordered pipeline of processors that inspect or transform channel
/// messages before they are delivered.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelFlow {
    pub channel_flow_arn: Option<String>,
    pub processors: Option<Vec<Processor>>,
    pub name: Option<String>,
    #[serde(with = "epoch_seconds")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "epoch_seconds")]
    pub last_updated_timestamp: Option<DateTime<Utc>>,
}

impl ChannelFlow {
    /// Processors sorted by execution order
    pub fn ordered_processors(&self) -> Vec<&Processor> {
        let mut processors: Vec<&Processor> = self.processors.iter().flatten().collect();
        processors.sort_by_key(|p| p.execution_order);
        processors
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChannelFlowSummary {
    pub channel_flow_arn: Option<String>,
    pub name: Option<String>,
    pub processors: Option<Vec<Processor>>,
}

/// A step of a channel flow backed by a Lambda function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Processor {
    pub name: String,
    pub configuration: ProcessorConfiguration,
    /// Position in the flow, 1 to 3
    pub execution_order: i32,
    /// What happens to the message when this processor fails
    pub fallback_action: FallbackAction,
}

impl Processor {
    pub fn new(
        name: impl Into<String>,
        configuration: ProcessorConfiguration,
        execution_order: i32,
        fallback_action: FallbackAction,
    ) -> Self {
        Self {
            name: name.into(),
            configuration,
            execution_order,
            fallback_action,
        }
    }

    /// Check if a failure of this processor stops the flow
    pub fn halts_on_failure(&self) -> bool {
        matches!(self.fallback_action, FallbackAction::Abort)
    }
}

impl Validate for Processor {
    fn validate(&self) -> MessagingResult<()> {
        Validator::resource_name("Name", &self.name)?;
        Validator::nested("Configuration", &self.configuration)?;
        let (min, max) = EXECUTION_ORDER_RANGE;
        Validator::range(
            "ExecutionOrder",
            i64::from(self.execution_order),
            i64::from(min),
            i64::from(max),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorConfiguration {
    pub lambda: LambdaConfiguration,
}

impl ProcessorConfiguration {
    pub fn lambda(resource_arn: impl Into<String>) -> Self {
        Self {
            lambda: LambdaConfiguration {
                resource_arn: resource_arn.into(),
                invocation_type: InvocationType::Async,
            },
        }
    }
}

impl Validate for ProcessorConfiguration {
    fn validate(&self) -> MessagingResult<()> {
        Validator::nested("Lambda", &self.lambda)
    }
}

/// The Lambda function backing a processor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaConfiguration {
    pub resource_arn: String,
    pub invocation_type: InvocationType,
}

impl Validate for LambdaConfiguration {
    fn validate(&self) -> MessagingResult<()> {
        Validator::lambda_arn("ResourceArn", &self.resource_arn)
    }
}

impl_display!(
    ChannelFlow,
    ChannelFlowSummary,
    Processor,
    ProcessorConfiguration,
    LambdaConfiguration,
);
