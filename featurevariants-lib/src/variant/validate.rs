//! Descriptor validation.
//!
//! Checks run in a fixed order and the first failure is reported:
//! name, strategy, then the field the strategy requires.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::variant::descriptor::{AtRuleSpec, Variant, VariantDescriptor};

/// Check `descriptor` and resolve it into a [`Variant`].
///
/// A `class` descriptor without `parentClassName` uses its own name as the
/// parent class. The descriptor itself is never modified.
pub fn validate(descriptor: &VariantDescriptor) -> Result<Variant, ValidationError> {
    let name = match descriptor.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => {
            return Err(ValidationError::InvalidName {
                variant: descriptor.to_json(),
            })
        }
    };

    match descriptor.get("strategy").and_then(Value::as_str) {
        Some("class") => {
            let parent_class_name = match descriptor.get("parentClassName") {
                None => name.clone(),
                Some(Value::String(parent)) if !parent.trim().is_empty() => parent.clone(),
                Some(_) => {
                    return Err(ValidationError::InvalidParentClassName {
                        variant: descriptor.to_json(),
                    })
                }
            };
            Ok(Variant::Class {
                name,
                parent_class_name,
            })
        }
        Some("atRule") => {
            let at_rule = descriptor
                .get("atRule")
                .and_then(Value::as_object)
                .and_then(at_rule_spec)
                .ok_or_else(|| ValidationError::InvalidAtRule {
                    variant: descriptor.to_json(),
                })?;
            Ok(Variant::AtRule { name, at_rule })
        }
        _ => Err(ValidationError::InvalidStrategy {
            variant: descriptor.to_json(),
        }),
    }
}

fn at_rule_spec(object: &Map<String, Value>) -> Option<AtRuleSpec> {
    let name = match object.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => return None,
    };
    let params = match object.get("params") {
        None => String::new(),
        Some(Value::String(params)) => params.clone(),
        Some(_) => return None,
    };
    let extra = object
        .iter()
        .filter(|(key, _)| key.as_str() != "name" && key.as_str() != "params")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(AtRuleSpec {
        name,
        params,
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;
    use serde_json::json;

    fn descriptor(value: Value) -> VariantDescriptor {
        serde_json::from_value(value).expect("descriptor should deserialize")
    }

    fn kind_of(value: Value) -> ValidationErrorKind {
        validate(&descriptor(value))
            .expect_err("descriptor should be rejected")
            .kind()
    }

    #[test]
    fn rejects_missing_or_blank_names() {
        for name in [json!(null), json!(""), json!("  \t"), json!(3), json!(["a"]), json!({})] {
            assert_eq!(
                kind_of(json!({ "name": name, "strategy": "class" })),
                ValidationErrorKind::InvalidName
            );
        }
        assert_eq!(
            kind_of(json!({ "strategy": "class" })),
            ValidationErrorKind::InvalidName
        );
    }

    #[test]
    fn name_is_checked_before_strategy() {
        assert_eq!(
            kind_of(json!({ "name": " ", "strategy": "nope" })),
            ValidationErrorKind::InvalidName
        );
    }

    #[test]
    fn rejects_unknown_strategies() {
        for strategy in [json!(null), json!("Class"), json!("at-rule"), json!(1)] {
            assert_eq!(
                kind_of(json!({ "name": "yolo", "strategy": strategy })),
                ValidationErrorKind::InvalidStrategy
            );
        }
        assert_eq!(
            kind_of(json!({ "name": "yolo" })),
            ValidationErrorKind::InvalidStrategy
        );
    }

    #[test]
    fn parent_class_defaults_to_name() {
        let variant = validate(&VariantDescriptor::class(" yolo")).expect("valid descriptor");
        assert_eq!(
            variant,
            Variant::Class {
                name: " yolo".to_string(),
                parent_class_name: " yolo".to_string(),
            }
        );
    }

    #[test]
    fn explicit_blank_parent_class_fails() {
        let values = [
            json!(""),
            json!(" "),
            json!(0),
            json!(1),
            json!(true),
            json!(null),
            json!(["hey"]),
            json!({}),
        ];
        for parent in values {
            assert_eq!(
                kind_of(json!({ "name": "yolo", "strategy": "class", "parentClassName": parent })),
                ValidationErrorKind::InvalidParentClassName
            );
        }
    }

    #[test]
    fn class_strategy_ignores_at_rule_fields() {
        let variant = validate(&descriptor(json!({
            "name": "yolo",
            "strategy": "class",
            "parentClassName": "hey",
            "atRule": 42
        })))
        .expect("valid descriptor");
        assert_eq!(
            variant,
            Variant::Class {
                name: "yolo".to_string(),
                parent_class_name: "hey".to_string(),
            }
        );
    }

    #[test]
    fn at_rule_strategy_ignores_parent_class() {
        let variant = validate(&descriptor(json!({
            "name": "sup",
            "strategy": "atRule",
            "parentClassName": "",
            "atRule": { "name": "supports", "params": "(display: grid)" }
        })))
        .expect("valid descriptor");
        assert_eq!(variant.name(), "sup");
    }

    #[test]
    fn rejects_invalid_at_rules() {
        let values = [
            json!(null),
            json!("supports"),
            json!(["supports"]),
            json!({}),
            json!({ "name": "" }),
            json!({ "name": "   ", "params": "(display: grid)" }),
            json!({ "params": "(display: grid)" }),
            json!({ "name": "supports", "params": 3 }),
        ];
        for at_rule in values {
            assert_eq!(
                kind_of(json!({ "name": "sup", "strategy": "atRule", "atRule": at_rule })),
                ValidationErrorKind::InvalidAtRule
            );
        }
        assert_eq!(
            kind_of(json!({ "name": "sup", "strategy": "atRule" })),
            ValidationErrorKind::InvalidAtRule
        );
    }

    #[test]
    fn at_rule_extra_properties_pass_through() {
        let variant = validate(&descriptor(json!({
            "name": "sup",
            "strategy": "atRule",
            "atRule": { "name": "supports", "raws": { "afterName": " " }, "source": 1 }
        })))
        .expect("valid descriptor");
        let Variant::AtRule { at_rule, .. } = variant else {
            panic!("expected an at-rule variant");
        };
        assert_eq!(at_rule.name, "supports");
        assert_eq!(at_rule.params, "");
        assert_eq!(
            Value::Object(at_rule.extra),
            json!({ "raws": { "afterName": " " }, "source": 1 })
        );
    }

    #[test]
    fn error_embeds_serialized_descriptor() {
        let err = validate(&descriptor(json!({ "name": "yolo", "strategy": "nope" })))
            .expect_err("descriptor should be rejected");
        assert_eq!(err.variant(), r#"{"name":"yolo","strategy":"nope"}"#);
        assert!(err.to_string().contains(
            "The provided variant `{\"name\":\"yolo\",\"strategy\":\"nope\"}` does not have a valid strategy."
        ));
    }
}
