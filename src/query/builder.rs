//! Search payload construction.
//!
//! [`build_payload`] merges the raw text input with a snapshot of the advanced
//! filter form. It performs no I/O and cannot fail.
//!
//! # Merge Rules
//!
//! 1. A non-empty text value becomes `Name`
//! 2. Falsy form values are dropped
//! 3. Remaining fields go through [`FieldPolicy::for_field`]
//!
//! Form fields are applied after the text value, so a truthy `Name` field in
//! the form replaces the typed text.
//!
//! Form fields are visited in field-name order. `CurrentFolderOnly` sorts
//! before `ParentID`, so a truthy form field literally named `ParentID` always
//! replaces the folder scope.

use super::policy::{FieldPolicy, NAME_FIELD, PARENT_ID_FIELD};
use crate::domain::{is_truthy, FolderScopeId, FormValues, SearchPayload};
use serde_json::Value;

/// Builds the payload handed to the search dispatch callback.
///
/// # Parameters
///
/// * `text` - Current value of the search text field
/// * `form_values` - Advanced filter snapshot, `None` when the form has no values yet
/// * `folder_id` - Current folder scope, consulted only for `CurrentFolderOnly`
///
/// When `CurrentFolderOnly` is set but `folder_id` is `None`, `ParentID` is
/// still written, as JSON `null`.
///
/// # Example
///
/// ```
/// use asset_search::query::build_payload;
/// use asset_search::FormValues;
/// use serde_json::json;
///
/// let mut form = FormValues::new();
/// form.insert("CurrentFolderOnly".to_string(), json!(true));
/// form.insert("SecurityID".to_string(), json!("abc"));
///
/// let payload = build_payload("cat", Some(&form), Some(42));
/// assert_eq!(payload.to_json(), json!({"Name": "cat", "ParentID": 42}));
/// ```
#[must_use]
pub fn build_payload(
    text: &str,
    form_values: Option<&FormValues>,
    folder_id: Option<FolderScopeId>,
) -> SearchPayload {
    let _span = tracing::debug_span!(
        "build_payload",
        text_len = text.len(),
        form_fields = form_values.map_or(0, FormValues::len),
        folder_id = ?folder_id
    )
    .entered();

    let mut payload = SearchPayload::new();

    if !text.is_empty() {
        payload.insert(NAME_FIELD, Value::String(text.to_string()));
    }

    for (field, value) in form_values.into_iter().flatten() {
        if !is_truthy(value) {
            tracing::trace!(field = %field, "skipping falsy field");
            continue;
        }

        match FieldPolicy::for_field(field) {
            FieldPolicy::Skip => {
                tracing::trace!(field = %field, "skipping transport field");
            }
            FieldPolicy::ScopeToFolder => {
                let parent = folder_id.map_or(Value::Null, Value::from);
                tracing::trace!(field = %field, parent = %parent, "scoping to current folder");
                payload.insert(PARENT_ID_FIELD, parent);
            }
            FieldPolicy::Passthrough => {
                payload.insert(field.clone(), value.clone());
            }
        }
    }

    tracing::debug!(fields = payload.len(), "search payload built");

    payload
}
