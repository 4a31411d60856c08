//! Document-level click subscription.
//!
//! Outside-click dismissal needs a listener on every click in the document, not
//! just clicks on the widget. [`OutsideInteractionSource`] is the capability to
//! register such a listener; [`Document`] is a single-threaded implementation.
//!
//! Registrations are scoped: [`ClickSubscription`] removes its listener when it
//! is released explicitly or dropped, so a torn-down widget can never keep
//! reacting to clicks.

use super::dom::NodeId;
use crate::domain::Result;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Identifier of a registered click listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Receives every click dispatched to the document.
pub trait ClickListener {
    /// Handles a click on `target`.
    ///
    /// # Errors
    ///
    /// An error aborts the current dispatch and is returned to its caller.
    fn on_document_click(&self, target: NodeId) -> Result<()>;
}

/// Capability to register and deregister document click listeners.
pub trait OutsideInteractionSource {
    /// Registers `listener` for all subsequent clicks.
    fn subscribe(&self, listener: Rc<dyn ClickListener>) -> ListenerId;

    /// Removes a listener. Returns `false` if it was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

/// In-process click dispatcher standing in for the document.
#[derive(Default)]
pub struct Document {
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<ListenerId, Rc<dyn ClickListener>>>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Delivers a click on `target` to every registered listener.
    ///
    /// Listeners registered when the dispatch starts are called in registration
    /// order. A listener may unsubscribe itself or others while being called;
    /// a listener removed before its turn is skipped.
    ///
    /// # Errors
    ///
    /// Returns the first listener error; later listeners are not called.
    pub fn dispatch_click(&self, target: NodeId) -> Result<()> {
        let listeners: Vec<(ListenerId, Rc<dyn ClickListener>)> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        tracing::trace!(node = ?target, listeners = listeners.len(), "dispatching document click");

        for (id, listener) in listeners {
            if !self.listeners.borrow().contains_key(&id) {
                tracing::trace!(listener = ?id, "skipping listener removed during dispatch");
                continue;
            }
            listener.on_document_click(target)?;
        }
        Ok(())
    }
}

impl OutsideInteractionSource for Document {
    fn subscribe(&self, listener: Rc<dyn ClickListener>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().insert(id, listener);
        tracing::debug!(listener = ?id, "click listener registered");
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        let removed = self.listeners.borrow_mut().remove(&id).is_some();
        if removed {
            tracing::debug!(listener = ?id, "click listener removed");
        }
        removed
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A registered listener, removed when this value is released or dropped.
#[must_use = "dropping a subscription immediately removes its listener"]
pub struct ClickSubscription {
    source: Rc<dyn OutsideInteractionSource>,
    id: ListenerId,
}

impl ClickSubscription {
    /// Registers `listener` with `source`.
    pub fn register(source: Rc<dyn OutsideInteractionSource>, listener: Rc<dyn ClickListener>) -> Self {
        let id = source.subscribe(listener);
        Self { source, id }
    }

    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Removes the listener now.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        self.source.unsubscribe(self.id);
    }
}

impl fmt::Debug for ClickSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickSubscription").field("id", &self.id).finish()
    }
}
