use serde::{Deserialize, Serialize};

use crate::types::{MessagingResult, SearchFieldKey, SearchFieldOperator};
use crate::utils::display::impl_display;
use crate::utils::validation::{Validate, Validator};

/// A predicate of a channel search.
///
/// `EQUALS` matches channels whose members are exactly `values`, `INCLUDES`
/// matches channels that contain all of `values` among their members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchField {
    pub key: SearchFieldKey,
    pub values: Vec<String>,
    pub operator: SearchFieldOperator,
}

impl SearchField {
    pub fn members_equal<I, S>(member_arns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: SearchFieldKey::Members,
            values: member_arns.into_iter().map(Into::into).collect(),
            operator: SearchFieldOperator::Equals,
        }
    }

    pub fn members_include<I, S>(member_arns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: SearchFieldKey::Members,
            values: member_arns.into_iter().map(Into::into).collect(),
            operator: SearchFieldOperator::Includes,
        }
    }
}

impl Validate for SearchField {
    fn validate(&self) -> MessagingResult<()> {
        Validator::list_length("Values", self.values.len(), 1, 20)?;
        for (i, value) in self.values.iter().enumerate() {
            Validator::length(&format!("Values[{}]", i), value, 1, 512)?;
        }
        Ok(())
    }
}

impl_display!(SearchField);

#[cfg(test)]
mod tests {
    use super::*;

    const ANA: &str = "arn:aws:chime:us-east-1:1:app-instance/a/user/ana";
    const BO: &str = "arn:aws:chime:us-east-1:1:app-instance/a/user/bo";

    #[test]
    fn test_constructors() {
        let field = SearchField::members_include([ANA, BO]);
        assert_eq!(field.key, SearchFieldKey::Members);
        assert_eq!(field.operator, SearchFieldOperator::Includes);
        assert_eq!(field.values, vec![ANA.to_string(), BO.to_string()]);

        assert_eq!(
            SearchField::members_equal([ANA]).operator,
            SearchFieldOperator::Equals
        );
    }

    #[test]
    fn test_validation() {
        assert!(SearchField::members_equal([ANA]).validate().is_ok());
        assert!(SearchField::members_equal(Vec::<String>::new()).validate().is_err());

        let too_many: Vec<String> = (0..21).map(|i| format!("{}{}", ANA, i)).collect();
        assert!(SearchField::members_include(too_many).validate().is_err());

        let err = SearchField::members_include([ANA, ""]).validate().unwrap_err();
        assert_eq!(err.field(), Some("Values[1]"));
    }

    #[test]
    fn test_display_and_wire_format() {
        let field = SearchField::members_equal([ANA]);
        assert_eq!(
            field.to_string(),
            format!("{{Key: MEMBERS, Values: [{}], Operator: EQUALS}}", ANA)
        );
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["Operator"], "EQUALS");
        assert_eq!(value["Key"], "MEMBERS");
    }
}
