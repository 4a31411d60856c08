//! Visibility state of the search widget.
//!
//! The widget is always in exactly one [`ViewState`]. It starts `Hidden` and
//! moves between states only in response to the events handled in
//! [`handler`](super::handler).
//!
//! ```text
//!            show                  toggle
//!  Hidden ──────────▶ Visible ◀──────────▶ Expanded
//!    ▲                   │                     │
//!    └─── hide / outside click ◀───────────────┘
//! ```

use serde::Serialize;

/// Which parts of the widget are logically shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ViewState {
    /// Only the trigger icon is shown.
    #[default]
    Hidden,

    /// The text field is shown, advanced panel collapsed.
    Visible,

    /// The text field and the advanced filter panel are both shown.
    Expanded,
}

impl ViewState {
    /// Returns `true` when the text field is shown.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Visible | Self::Expanded)
    }

    /// Returns `true` when the advanced filter panel is shown.
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}
