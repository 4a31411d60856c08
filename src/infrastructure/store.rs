//! Read access to the advanced filter form state.
//!
//! The filter form is rendered and edited elsewhere; its values live in an
//! external form-state store keyed by the form's schema URL. The widget only
//! reads a snapshot at submission time.

use crate::domain::FormValues;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

/// Snapshot reads of form values by schema URL.
pub trait FormStateStore {
    /// Returns the current values of the form registered under `schema_url`.
    ///
    /// `None` when no such form exists or it has no values yet.
    fn form_values(&self, schema_url: &str) -> Option<FormValues>;
}

/// In-memory form-state store.
///
/// Uses interior mutability so the host can keep editing values while the
/// widget holds a shared reference.
///
/// # Example
///
/// ```
/// use asset_search::infrastructure::{FormStateStore, MemoryFormStore};
/// use serde_json::json;
///
/// let store = MemoryFormStore::new();
/// store.set_value("schema/search", "Title", json!("report"));
///
/// let values = store.form_values("schema/search").unwrap();
/// assert_eq!(values["Title"], json!("report"));
/// assert!(store.form_values("schema/other").is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    forms: RefCell<HashMap<String, FormValues>>,
}

impl MemoryFormStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all values of a form.
    pub fn set_values(&self, schema_url: impl Into<String>, values: FormValues) {
        self.forms.borrow_mut().insert(schema_url.into(), values);
    }

    /// Sets a single field, creating the form if needed.
    pub fn set_value(&self, schema_url: &str, field: impl Into<String>, value: Value) {
        self.forms
            .borrow_mut()
            .entry(schema_url.to_string())
            .or_default()
            .insert(field.into(), value);
    }

    /// Removes a form and all its values.
    pub fn clear(&self, schema_url: &str) {
        self.forms.borrow_mut().remove(schema_url);
    }
}

impl FormStateStore for MemoryFormStore {
    fn form_values(&self, schema_url: &str) -> Option<FormValues> {
        self.forms.borrow().get(schema_url).cloned()
    }
}

impl<S: FormStateStore + ?Sized> FormStateStore for std::rc::Rc<S> {
    fn form_values(&self, schema_url: &str) -> Option<FormValues> {
        (**self).form_values(schema_url)
    }
}
