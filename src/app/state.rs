//! Widget state and view model computation.
//!
//! [`WidgetState`] is the single source of truth for the widget: the current
//! [`ViewState`] plus the configuration that shapes the view model and the
//! search payload. It is owned by one widget instance and mutated only by
//! [`handle_event`](super::handle_event).

use super::modes::ViewState;
use crate::domain::FolderScopeId;
use crate::infrastructure::i18n::Translate;
use crate::ui::viewmodel::{Labels, SearchViewModel};

/// Suffix appended to the widget id to form the advanced filter form id.
const FILTER_FORM_SUFFIX: &str = "_ExtraFields";

/// Central widget state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    /// Current visibility state.
    pub view: ViewState,

    /// DOM id of the search group.
    pub id: String,

    /// Schema reference of the advanced filter form.
    ///
    /// Passed through unmodified to the form renderer and used as the key for
    /// reading form values from the form-state store.
    pub schema_url: String,

    /// Current folder scope, used to resolve `CurrentFolderOnly`.
    pub folder_id: Option<FolderScopeId>,
}

impl WidgetState {
    /// Creates a new state in [`ViewState::Hidden`].
    ///
    /// # Example
    ///
    /// ```
    /// use asset_search::{ViewState, WidgetState};
    ///
    /// let state = WidgetState::new("AssetSearch", "admin/assets/schema/search", Some(3));
    /// assert_eq!(state.view, ViewState::Hidden);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, schema_url: impl Into<String>, folder_id: Option<FolderScopeId>) -> Self {
        Self {
            view: ViewState::Hidden,
            id: id.into(),
            schema_url: schema_url.into(),
            folder_id,
        }
    }

    /// Replaces the view state, returning whether it changed.
    pub(crate) fn set_view(&mut self, next: ViewState) -> bool {
        if self.view == next {
            return false;
        }
        tracing::debug!(from = ?self.view, to = ?next, "view state transition");
        self.view = next;
        true
    }

    /// Id of the advanced filter form element.
    #[must_use]
    pub fn filter_form_id(&self) -> String {
        format!("{}{FILTER_FORM_SUFFIX}", self.id)
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Labels are resolved through `translator` on every call.
    #[must_use]
    pub fn compute_viewmodel(&self, translator: &dyn Translate) -> SearchViewModel {
        SearchViewModel {
            view: self.view,
            is_active: self.view.is_active(),
            filter_panel_open: self.view.is_expanded(),
            advanced_toggle_collapsed: !self.view.is_expanded(),
            group_id: self.id.clone(),
            filter_form_id: self.filter_form_id(),
            schema_url: self.schema_url.clone(),
            labels: Labels::resolve(translator),
        }
    }
}
