//! Text field capabilities injected into the widget.
//!
//! The state machine never looks up rendered nodes itself. Focus, selection and
//! reading the typed text go through these traits over an opaque input handle.
//! Implementations must fail with
//! [`SearchError::InvariantViolation`](crate::SearchError::InvariantViolation)
//! when the underlying node is not rendered.

use crate::domain::Result;

/// Keyboard focus and selection on the search text field.
pub trait FocusController {
    /// Moves keyboard focus to the text field.
    ///
    /// # Errors
    ///
    /// Fails if the text field is not rendered.
    fn acquire_focus(&self) -> Result<()>;

    /// Selects the field's entire contents.
    ///
    /// # Errors
    ///
    /// Fails if the text field is not rendered.
    fn select_all(&self) -> Result<()>;
}

/// A focusable text field whose value can be read.
pub trait TextInput: FocusController {
    /// Current text of the field.
    ///
    /// # Errors
    ///
    /// Fails if the text field is not rendered.
    fn value(&self) -> Result<String>;
}

impl<T: TextInput + ?Sized> FocusController for std::rc::Rc<T> {
    fn acquire_focus(&self) -> Result<()> {
        (**self).acquire_focus()
    }

    fn select_all(&self) -> Result<()> {
        (**self).select_all()
    }
}

impl<T: TextInput + ?Sized> TextInput for std::rc::Rc<T> {
    fn value(&self) -> Result<String> {
        (**self).value()
    }
}
