//! Decorators for `checkbox` fields.

use serde::Deserialize;
use serde_json::Value;

use crate::result_ext::DecorArgsExt;
use crate::{ConfigMap, DecorResult, FieldDecorator, FromArgs};

/// Sets the value submitted when a checkbox is left unchecked.
#[derive(Clone, Debug, PartialEq, Eq, crate::FieldDecorator)]
#[field_decorator(field_type = "checkbox", mutation = "setUncheckedValue", priority = 15, from_args)]
pub struct UncheckedValueDecorator {
    unchecked_value: Value,
    priority: Option<i32>,
}

impl UncheckedValueDecorator {
    /// Create the decorator with any JSON value.
    #[must_use]
    pub fn new(unchecked_value: impl Into<Value>) -> Self {
        Self {
            unchecked_value: unchecked_value.into(),
            priority: None,
        }
    }

    /// Override the default priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// The value used when the box is unchecked.
    #[must_use]
    pub const fn unchecked_value(&self) -> &Value {
        &self.unchecked_value
    }
}

impl FieldDecorator for UncheckedValueDecorator {
    fn config_modifications(&self) -> ConfigMap {
        ConfigMap::from_iter([(String::from("unchecked_value"), self.unchecked_value.clone())])
    }
}

#[derive(Deserialize)]
struct UncheckedValueArgs {
    unchecked_value: Value,
}

impl FromArgs for UncheckedValueDecorator {
    fn from_args(args: &Value, priority: Option<i32>) -> DecorResult<Self> {
        let parsed = UncheckedValueArgs::deserialize(args).into_decor_args(&Self::DESCRIPTOR)?;
        Ok(Self {
            unchecked_value: parsed.unchecked_value,
            priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::Describe;

    #[rstest]
    #[case::string(json!("no"))]
    #[case::zero(json!(0))]
    #[case::boolean(json!(false))]
    #[case::null(Value::Null)]
    fn unchecked_value_is_stored_verbatim(#[case] value: Value) {
        let delta = UncheckedValueDecorator::new(value.clone()).config_modifications();
        assert_eq!(delta.into_value(), json!({ "unchecked_value": value }));
    }

    #[test]
    fn overrides_existing_unchecked_value() {
        let base = ConfigMap::from_iter([(String::from("unchecked_value"), json!("0"))]);
        let result = UncheckedValueDecorator::new("off").apply_to_config(base);
        assert_eq!(result.get("unchecked_value"), Some(&json!("off")));
    }

    #[test]
    fn from_args_keeps_priority() {
        let decorator =
            UncheckedValueDecorator::from_args(&json!({"unchecked_value": "no"}), Some(1))
                .unwrap_or_else(|err| panic!("arguments should decode: {err}"));
        assert_eq!(decorator.priority(), 1);
        assert_eq!(decorator.unchecked_value(), &json!("no"));
    }

    #[rstest]
    #[case::empty(json!({}))]
    #[case::misspelt(json!({"uncheked_value": "no"}))]
    #[case::not_a_map(json!("no"))]
    fn from_args_rejects_missing_value(#[case] args: Value) {
        let err = UncheckedValueDecorator::from_args(&args, None)
            .err()
            .unwrap_or_else(|| panic!("unchecked_value is required"));
        assert!(matches!(
            &*err,
            crate::DecorError::InvalidArguments { mutation, .. } if mutation == "setUncheckedValue"
        ));
    }

    #[test]
    fn from_args_accepts_explicit_null() {
        let decorator = UncheckedValueDecorator::from_args(&json!({"unchecked_value": null}), None)
            .unwrap_or_else(|err| panic!("explicit null should decode: {err}"));
        assert_eq!(decorator.unchecked_value(), &Value::Null);
    }
}
