//! Actions and the dispatch-time validity check.
//!
//! Anything handed to `dispatch` is first converted into a
//! [`serde_json::Value`]. Only a JSON object carrying a `type` key is a
//! well-formed action; every other variant is rejected before the reducer
//! runs.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the mandatory discriminator field.
pub const TYPE_KEY: &str = "type";

/// A validated action: a plain record with a `type` field.
///
/// `type` may hold any JSON value, `null` included. Only an absent key is
/// treated as missing.
///
/// # Example
///
/// ```rust
/// use oneway::Action;
/// use serde_json::json;
///
/// let action = Action::new("todos/add").with("text", "write docs");
///
/// assert!(action.is("todos/add"));
/// assert_eq!(action.get("text"), Some(&json!("write docs")));
///
/// let raw = json!({ "type": "todos/add", "text": "write docs" });
/// assert_eq!(Action::try_from(raw).unwrap(), action);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Action {
    fields: Map<String, Value>,
}

impl Action {
    /// Create an action with the given type and no other fields.
    pub fn new(action_type: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert(TYPE_KEY.to_string(), action_type.into());
        Self { fields }
    }

    /// Add (or replace) a field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The value of the `type` field.
    pub fn action_type(&self) -> &Value {
        self.fields.get(TYPE_KEY).unwrap_or(&Value::Null)
    }

    /// The `type` field as a string, if it is one.
    pub fn type_str(&self) -> Option<&str> {
        self.action_type().as_str()
    }

    /// Check whether the `type` field is the given string.
    pub fn is(&self, action_type: &str) -> bool {
        self.type_str() == Some(action_type)
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Every field except `type`.
    pub fn payload(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter(|(key, _)| key.as_str() != TYPE_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// All fields, `type` included.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Value> for Action {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => {
                if !fields.contains_key(TYPE_KEY) {
                    return Err(ValidationError::MissingType);
                }
                Ok(Self { fields })
            }
            other => Err(ValidationError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }
}

impl From<Action> for Value {
    fn from(action: Action) -> Self {
        Value::Object(action.fields)
    }
}

/// Check a raw value against the action invariants without consuming it.
pub fn validate(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Object(fields) if fields.contains_key(TYPE_KEY) => Ok(()),
        Value::Object(_) => Err(ValidationError::MissingType),
        other => Err(ValidationError::NotAnObject {
            found: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
