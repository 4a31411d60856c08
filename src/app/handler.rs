//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place the view state changes. It pattern-matches
//! the incoming [`Event`], updates the [`WidgetState`] and returns the actions the
//! host must execute.
//!
//! # Transitions
//!
//! | Current    | Event          | Next       | Actions          |
//! |------------|----------------|------------|------------------|
//! | any        | `Show`         | `Visible`  | `FocusTextField` |
//! | `Visible`  | `Toggle`       | `Expanded` |                  |
//! | `Expanded` | `Toggle`       | `Visible`  | `FocusTextField` |
//! | `Hidden`   | `Toggle`       | `Hidden`   |                  |
//! | any        | `Hide`         | `Hidden`   |                  |
//! | any        | outside click  | `Hidden`   |                  |
//! | any        | inside click   | unchanged  |                  |
//! | any        | `Expand`       | `Expanded` |                  |
//!
//! Expanding leaves focus where it is so the advanced panel's own fields keep
//! it; collapsing returns focus to the text field.

use super::modes::ViewState;
use super::{Action, WidgetState};
use crate::domain::FormValues;
use crate::query::build_payload;

/// Interactions the widget reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The trigger icon was clicked.
    Show,
    /// The advanced toggle was clicked.
    Toggle,
    /// The close icon was clicked.
    Hide,
    /// The advanced panel was explicitly requested.
    Expand,
    /// A click happened somewhere in the document.
    DocumentClick {
        /// Whether the click target lies inside the widget's rendered region.
        inside: bool,
    },
    /// The search button was pressed.
    Submit {
        /// Current value of the text field.
        text: String,
        /// Snapshot of the advanced filter form, if it has values.
        form_values: Option<FormValues>,
    },
}

/// Processes an event, mutates widget state, and returns actions to execute.
///
/// The returned flag is `true` when the view state changed and the host should
/// re-render. Transitions cannot fail; failures only arise when the host
/// executes the returned actions.
///
/// # Example
///
/// ```
/// use asset_search::{handle_event, Action, Event, ViewState, WidgetState};
///
/// let mut state = WidgetState::new("AssetSearch", "schema/search", None);
/// let (changed, actions) = handle_event(&mut state, &Event::Show);
/// assert!(changed);
/// assert_eq!(state.view, ViewState::Visible);
/// assert_eq!(actions, vec![Action::FocusTextField]);
/// ```
pub fn handle_event(state: &mut WidgetState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event), view = ?state.view).entered();

    match event {
        Event::Show => {
            let changed = state.set_view(ViewState::Visible);
            (changed, vec![Action::FocusTextField])
        }
        Event::Toggle => match state.view {
            ViewState::Visible => (state.set_view(ViewState::Expanded), vec![]),
            ViewState::Expanded => {
                let changed = state.set_view(ViewState::Visible);
                (changed, vec![Action::FocusTextField])
            }
            ViewState::Hidden => {
                tracing::debug!("toggle ignored while hidden");
                (false, vec![])
            }
        },
        Event::Hide => (state.set_view(ViewState::Hidden), vec![]),
        Event::Expand => (state.set_view(ViewState::Expanded), vec![]),
        Event::DocumentClick { inside: true } => (false, vec![]),
        Event::DocumentClick { inside: false } => {
            let changed = state.set_view(ViewState::Hidden);
            if changed {
                tracing::debug!("dismissed by outside click");
            }
            (changed, vec![])
        }
        Event::Submit { text, form_values } => {
            let payload = build_payload(text, form_values.as_ref(), state.folder_id);
            (false, vec![Action::DispatchSearch(payload)])
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Show => "Show",
        Event::Toggle => "Toggle",
        Event::Hide => "Hide",
        Event::Expand => "Expand",
        Event::DocumentClick { .. } => "DocumentClick",
        Event::Submit { .. } => "Submit",
    }
}
