//! Headless stand-ins for the rendered node tree.
//!
//! The widget needs two things from the rendering layer: a containment check
//! for its root element ([`RenderedRegion`]) and a handle on its text input
//! ([`TextInput`](super::focus::TextInput)). [`NodeTree`], [`Region`] and
//! [`MemoryTextInput`] implement both without a browser, for hosts that drive
//! the widget from their own event loop and for tests.

use super::focus::{FocusController, TextInput};
use crate::domain::{Result, SearchError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Opaque identifier of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// Containment check against the widget's rendered root.
pub trait RenderedRegion {
    /// Returns whether `target` is the root node or one of its descendants.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvariantViolation`] if the root node is not
    /// currently rendered.
    fn contains(&self, target: NodeId) -> Result<bool>;
}

/// Parent-linked tree of rendered nodes.
#[derive(Debug, Default)]
pub struct NodeTree {
    next_id: u64,
    parents: HashMap<NodeId, Option<NodeId>>,
}

impl NodeTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node with no parent.
    pub fn create_root(&mut self) -> NodeId {
        self.insert(None)
    }

    /// Creates a child of `parent`, or `None` if `parent` does not exist.
    pub fn append_child(&mut self, parent: NodeId) -> Option<NodeId> {
        self.exists(parent).then(|| self.insert(Some(parent)))
    }

    fn insert(&mut self, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.parents.insert(id, parent);
        id
    }

    #[must_use]
    pub fn exists(&self, node: NodeId) -> bool {
        self.parents.contains_key(&node)
    }

    /// Returns whether `node` is `ancestor` or lies beneath it.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parents.get(&id).copied().flatten();
        }
        false
    }

    /// Removes `node` and all of its descendants, returning how many were removed.
    pub fn remove(&mut self, node: NodeId) -> usize {
        if !self.exists(node) {
            return 0;
        }
        let doomed: Vec<NodeId> = self
            .parents
            .keys()
            .copied()
            .filter(|&id| self.contains(node, id))
            .collect();
        for id in &doomed {
            self.parents.remove(id);
        }
        doomed.len()
    }
}

/// The widget's rendered root within a shared [`NodeTree`].
#[derive(Debug, Clone)]
pub struct Region {
    tree: Rc<RefCell<NodeTree>>,
    root: NodeId,
}

impl Region {
    #[must_use]
    pub fn new(tree: Rc<RefCell<NodeTree>>, root: NodeId) -> Self {
        Self { tree, root }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }
}

impl RenderedRegion for Region {
    fn contains(&self, target: NodeId) -> Result<bool> {
        let tree = self.tree.borrow();
        if !tree.exists(self.root) {
            return Err(SearchError::InvariantViolation(format!(
                "widget root {:?} is not rendered",
                self.root
            )));
        }
        Ok(tree.contains(self.root, target))
    }
}

/// Text input backed by a node in a shared [`NodeTree`].
///
/// Focus and selection fail while the node is absent from the tree. Selection
/// is tracked as a byte range over the current value.
#[derive(Debug)]
pub struct MemoryTextInput {
    tree: Rc<RefCell<NodeTree>>,
    node: NodeId,
    value: RefCell<String>,
    focused: Cell<bool>,
    selection: Cell<Option<(usize, usize)>>,
    focus_count: Cell<usize>,
}

impl MemoryTextInput {
    #[must_use]
    pub fn new(tree: Rc<RefCell<NodeTree>>, node: NodeId) -> Self {
        Self {
            tree,
            node,
            value: RefCell::new(String::new()),
            focused: Cell::new(false),
            selection: Cell::new(None),
            focus_count: Cell::new(0),
        }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Replaces the field's text, as if the user typed it. Clears any selection.
    pub fn set_value(&self, text: impl Into<String>) {
        *self.value.borrow_mut() = text.into();
        self.selection.set(None);
    }

    /// Moves focus away from the field.
    pub fn blur(&self) {
        self.focused.set(false);
        self.selection.set(None);
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    /// Currently selected byte range, if any.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection.get()
    }

    /// How many times focus has been acquired.
    #[must_use]
    pub fn focus_count(&self) -> usize {
        self.focus_count.get()
    }

    fn ensure_rendered(&self, operation: &str) -> Result<()> {
        if self.tree.borrow().exists(self.node) {
            Ok(())
        } else {
            Err(SearchError::InvariantViolation(format!(
                "{operation}: text field {:?} is not rendered",
                self.node
            )))
        }
    }
}

impl FocusController for MemoryTextInput {
    fn acquire_focus(&self) -> Result<()> {
        self.ensure_rendered("acquire_focus")?;
        self.focused.set(true);
        self.focus_count.set(self.focus_count.get() + 1);
        Ok(())
    }

    fn select_all(&self) -> Result<()> {
        self.ensure_rendered("select_all")?;
        self.selection.set(Some((0, self.value.borrow().len())));
        Ok(())
    }
}

impl TextInput for MemoryTextInput {
    fn value(&self) -> Result<String> {
        self.ensure_rendered("value")?;
        Ok(self.value.borrow().clone())
    }
}
