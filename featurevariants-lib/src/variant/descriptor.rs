//! Raw and validated variant descriptors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A variant exactly as configured: a JSON object whose fields have not
/// been checked yet.
///
/// Recognized fields are `name`, `strategy`, `parentClassName`, `atRule`
/// and `enabled`. Field order is preserved so the descriptor serializes the
/// way it was written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantDescriptor(Map<String, Value>);

impl VariantDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a `class` strategy descriptor.
    pub fn class(name: &str) -> Self {
        Self::new().with("name", name).with("strategy", "class")
    }

    /// Shorthand for an `atRule` strategy descriptor.
    pub fn at_rule(name: &str, at_rule: &str, params: &str) -> Self {
        let mut spec = Map::new();
        spec.insert("name".to_string(), Value::from(at_rule));
        spec.insert("params".to_string(), Value::from(params));
        Self::new()
            .with("name", name)
            .with("strategy", "atRule")
            .with("atRule", Value::Object(spec))
    }

    /// Set `key`, keeping its position if already present.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The configured name, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// Only an explicit `"enabled": false` disables a descriptor.
    pub fn is_enabled(&self) -> bool {
        !matches!(self.get("enabled"), Some(Value::Bool(false)))
    }

    /// Compact JSON, fields in their original order.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for VariantDescriptor {
    fn from(map: Map<String, Value>) -> Self {
        VariantDescriptor(map)
    }
}

/// Parameters of the at-rule a variant wraps its rules in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtRuleSpec {
    pub name: String,
    /// Empty when the descriptor does not set `params`.
    pub params: String,
    /// Every other property of the descriptor's `atRule`, untouched.
    pub extra: Map<String, Value>,
}

/// A descriptor that passed validation.
///
/// `name` keeps the configured value as-is; only emptiness is judged on the
/// trimmed form.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    /// Nest generated selectors under an ancestor class.
    Class {
        name: String,
        parent_class_name: String,
    },
    /// Wrap generated rules in a new at-rule.
    AtRule { name: String, at_rule: AtRuleSpec },
}

impl Variant {
    pub fn name(&self) -> &str {
        match self {
            Variant::Class { name, .. } | Variant::AtRule { name, .. } => name,
        }
    }
}
