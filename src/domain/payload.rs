//! Search payload and form value types.
//!
//! Both sides of the query construction are plain mappings from field name to
//! JSON value: [`FormValues`] is a read-only snapshot of the advanced filter
//! form, [`SearchPayload`] is the assembled query handed to the dispatch
//! callback. Values are `serde_json::Value` because the filter form is defined
//! by an external schema and may carry strings, numbers, booleans or null.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Snapshot of advanced filter field values, keyed by field name.
pub type FormValues = BTreeMap<String, Value>;

/// Identifier of the folder the widget is currently scoped to.
pub type FolderScopeId = i64;

/// Returns whether a form value counts as set.
///
/// `null`, `false`, numeric zero and the empty string are falsy. Arrays and
/// objects are truthy even when empty.
///
/// # Examples
///
/// ```
/// use asset_search::domain::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("report")));
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!(null)));
/// ```
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Query payload produced on search submission.
///
/// Assembled fresh for every submission and consumed by the dispatch callback.
/// Serializes as a flat JSON object. Key order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SearchPayload {
    fields: BTreeMap<String, Value>,
}

impl SearchPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(field, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Converts the payload into a JSON object value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Consumes the payload, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.fields
    }
}
