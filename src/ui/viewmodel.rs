//! View model types representing renderable widget state.
//!
//! View models are computed by
//! [`WidgetState::compute_viewmodel`](crate::app::WidgetState::compute_viewmodel)
//! and consumed by whatever renders the widget. They contain no business
//! logic, only display-ready data: which parts are logically visible, the ids
//! that tie the toggle to the filter panel, and translated labels.

use crate::app::ViewState;
use crate::infrastructure::i18n::Translate;
use serde::Serialize;

/// Translation key and fallback for the advanced toggle label.
pub const ADVANCED_LABEL: (&str, &str) = ("AssetAdmin.ADVANCED", "Advanced");

/// Translation key and fallback for the submit button title.
pub const SEARCH_LABEL: (&str, &str) = ("AssetAdmin.SEARCH", "Search");

/// Translation key and fallback for the close button title.
pub const CLOSE_LABEL: (&str, &str) = ("AssetAdmin.CLOSE", "Close");

/// Placeholder shown in the empty text field.
const PLACEHOLDER: &str = "Search";

/// Complete widget view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchViewModel {
    /// Visibility state the model was computed from.
    pub view: ViewState,

    /// Whether the text field is shown (`Visible` or `Expanded`).
    pub is_active: bool,

    /// Whether the advanced filter panel is open.
    pub filter_panel_open: bool,

    /// Whether the advanced toggle shows its collapsed state.
    pub advanced_toggle_collapsed: bool,

    /// Id of the search group element.
    pub group_id: String,

    /// Id of the advanced filter form element (`{id}_ExtraFields`).
    pub filter_form_id: String,

    /// Schema reference handed to the filter form renderer.
    pub schema_url: String,

    /// Translated labels.
    pub labels: Labels,
}

/// Display labels, already translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub advanced: String,
    pub search: String,
    pub close: String,
    pub placeholder: String,
}

impl Labels {
    /// Resolves all labels through `translator`.
    #[must_use]
    pub fn resolve(translator: &dyn Translate) -> Self {
        let (advanced_key, advanced) = ADVANCED_LABEL;
        let (search_key, search) = SEARCH_LABEL;
        let (close_key, close) = CLOSE_LABEL;
        Self {
            advanced: translator.translate(advanced_key, advanced),
            search: translator.translate(search_key, search),
            close: translator.translate(close_key, close),
            placeholder: PLACEHOLDER.to_string(),
        }
    }
}
