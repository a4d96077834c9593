// File: src/context.rs
// Purpose: Render context that carries validation errors and submitted values to templates

use std::collections::HashMap;

use serde::Serialize;

use crate::value::Value;

/// Set to `true` once a targeted violation has been seen
pub const HAS_ERROR: &str = "HasError";

/// The single rendered error message
pub const ERROR_MSG: &str = "ErrorMsg";

/// Prefix of the per-field error flag, e.g. `Err_UserName`
pub const FIELD_ERROR_PREFIX: &str = "Err_";

/// Key of the error flag for a field identity
pub fn field_error_key(identity: &str) -> String {
    format!("{}{}", FIELD_ERROR_PREFIX, identity)
}

/// Template data for one request
///
/// Owned by the request handler. Validation only adds or overwrites its own
/// keys (`HasError`, `ErrorMsg`, `Err_<field>` and the echoed wire names) and
/// leaves everything else alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    data: HashMap<String, Value>,
}

impl RenderContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }

    /// Check if validation flagged the submission
    pub fn has_error(&self) -> bool {
        self.get(HAS_ERROR).map(Value::to_bool).unwrap_or(false)
    }

    /// Get the rendered error message, if any
    pub fn error_msg(&self) -> Option<&str> {
        self.get(ERROR_MSG).and_then(Value::as_str)
    }

    /// Check if a field identity carries the error flag
    pub fn field_error(&self, identity: &str) -> bool {
        self.get(&field_error_key(identity))
            .map(Value::to_bool)
            .unwrap_or(false)
    }

    /// Get the echoed value for a wire name
    pub fn value(&self, wire_name: &str) -> Option<&Value> {
        self.get(wire_name)
    }

    /// Serialize as a flat JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.data
                .iter()
                .map(|(key, value)| {
                    (
                        key.clone(),
                        serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
                    )
                })
                .collect(),
        )
    }
}

impl From<HashMap<String, Value>> for RenderContext {
    fn from(data: HashMap<String, Value>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        let ctx = RenderContext::new();
        assert!(ctx.is_empty());
        assert!(!ctx.has_error());
        assert!(ctx.error_msg().is_none());
        assert!(!ctx.field_error("UserName"));
    }

    #[test]
    fn test_error_accessors() {
        let mut ctx = RenderContext::new();
        ctx.insert(HAS_ERROR, true);
        ctx.insert(ERROR_MSG, "Username cannot be empty");
        ctx.insert(field_error_key("UserName"), true);

        assert!(ctx.has_error());
        assert_eq!(ctx.error_msg(), Some("Username cannot be empty"));
        assert!(ctx.field_error("UserName"));
        assert!(!ctx.field_error("Password"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut ctx = RenderContext::new();
        ctx.insert("username", "old");
        ctx.insert("username", "new");

        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.value("username"), Some(&Value::from("new")));
    }

    #[test]
    fn test_to_json() {
        let mut ctx = RenderContext::new();
        ctx.insert(HAS_ERROR, true);
        ctx.insert("username", "alice");

        assert_eq!(
            ctx.to_json(),
            serde_json::json!({ "HasError": true, "username": "alice" })
        );
    }
}
