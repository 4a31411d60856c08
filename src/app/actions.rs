//! Actions representing side effects to be executed by the widget host.
//!
//! The event handler never touches the text field or the dispatch callback
//! itself. It returns a list of [`Action`]s and the host
//! ([`SearchWidget`](crate::widget::SearchWidget)) executes them in order
//! through its injected capabilities.

use crate::domain::SearchPayload;

/// Commands produced by [`handle_event`](super::handle_event).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Moves keyboard focus to the text field and selects its contents.
    FocusTextField,

    /// Hands a finished payload to the search dispatch callback.
    DispatchSearch(SearchPayload),
}
