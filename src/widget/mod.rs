//! Widget host: wiring between the state machine and its collaborators.
//!
//! [`SearchWidget`] owns the [`WidgetState`], translates user interactions into
//! [`Event`]s, runs them through [`handle_event`] and executes the returned
//! [`Action`]s through injected capabilities:
//!
//! ```text
//!  show/toggle/hide/expand/submit ──▶ handle_event ──▶ Vec<Action>
//!  Document::dispatch_click ─────────▶      │              │
//!                                           ▼              ▼
//!                                     WidgetState    TextInput / dispatch callback
//! ```
//!
//! # Lifecycle
//!
//! 1. **Build**: [`SearchWidget::builder`] validates required configuration
//! 2. **Mount**: [`SearchWidget::mount`] registers the document click listener
//! 3. **Interact**: state transitions, focus changes, search dispatch
//! 4. **Unmount**: [`SearchWidget::unmount`] (or drop) removes the listener
//!
//! # Modules
//!
//! - [`document`]: Document click registry and scoped subscriptions
//! - [`dom`]: Headless node tree, rendered region and text input
//! - [`focus`]: Focus and text input capabilities

pub mod document;
pub mod dom;
pub mod focus;

pub use document::{ClickListener, ClickSubscription, Document, ListenerId, OutsideInteractionSource};
pub use dom::{MemoryTextInput, NodeId, NodeTree, Region, RenderedRegion};
pub use focus::{FocusController, TextInput};

use crate::app::{handle_event, Action, Event, ViewState, WidgetState};
use crate::domain::{FolderScopeId, Result, SearchError, SearchPayload};
use crate::infrastructure::{Catalog, FormStateStore, MemoryFormStore, Translate};
use crate::ui::SearchViewModel;
use crate::WidgetConfig;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// State shared between the widget and its document click listener.
struct Shared {
    state: RefCell<WidgetState>,
    region: Box<dyn RenderedRegion>,
    needs_render: Cell<bool>,
}

impl ClickListener for Shared {
    fn on_document_click(&self, target: NodeId) -> Result<()> {
        let inside = self.region.contains(target)?;
        let (changed, actions) = handle_event(&mut self.state.borrow_mut(), &Event::DocumentClick { inside });
        debug_assert!(actions.is_empty(), "document clicks never produce actions");
        if changed {
            self.needs_render.set(true);
        }
        Ok(())
    }
}

/// Interactive search trigger: icon, text field and advanced filter panel.
///
/// # Example
///
/// ```
/// use asset_search::widget::{Document, MemoryTextInput, NodeTree, Region, SearchWidget};
/// use asset_search::{SearchPayload, ViewState};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let tree = Rc::new(RefCell::new(NodeTree::new()));
/// let page = tree.borrow_mut().create_root();
/// let root = tree.borrow_mut().append_child(page).unwrap();
/// let field = tree.borrow_mut().append_child(root).unwrap();
/// let input = Rc::new(MemoryTextInput::new(Rc::clone(&tree), field));
///
/// let sent = Rc::new(RefCell::new(Vec::<SearchPayload>::new()));
/// let sink = Rc::clone(&sent);
///
/// let mut widget = SearchWidget::builder()
///     .id("AssetSearch")
///     .schema_url("admin/assets/schema/search")
///     .text_input(Rc::clone(&input))
///     .region(Region::new(Rc::clone(&tree), root))
///     .on_search(move |payload| sink.borrow_mut().push(payload))
///     .build()?;
///
/// let document = Rc::new(Document::new());
/// widget.mount(&document);
///
/// widget.show()?;
/// input.set_value("cat");
/// widget.submit()?;
/// assert_eq!(sent.borrow()[0].get("Name"), Some(&serde_json::json!("cat")));
///
/// document.dispatch_click(page)?;
/// assert_eq!(widget.view_state(), ViewState::Hidden);
/// # Ok::<(), asset_search::SearchError>(())
/// ```
pub struct SearchWidget {
    shared: Rc<Shared>,
    input: Box<dyn TextInput>,
    store: Box<dyn FormStateStore>,
    translator: Box<dyn Translate>,
    dispatch: Box<dyn FnMut(SearchPayload)>,
    subscription: Option<ClickSubscription>,
}

impl SearchWidget {
    #[must_use]
    pub fn builder() -> SearchWidgetBuilder {
        SearchWidgetBuilder::default()
    }

    /// Registers the outside-click listener with `source`.
    ///
    /// Mounting an already mounted widget does nothing.
    pub fn mount<S>(&mut self, source: &Rc<S>)
    where
        S: OutsideInteractionSource + 'static,
    {
        if self.subscription.is_some() {
            tracing::debug!("widget already mounted");
            return;
        }
        let source: Rc<dyn OutsideInteractionSource> = Rc::clone(source) as Rc<dyn OutsideInteractionSource>;
        let listener: Rc<dyn ClickListener> = Rc::clone(&self.shared) as Rc<dyn ClickListener>;
        let subscription = ClickSubscription::register(source, listener);
        tracing::debug!(listener = ?subscription.id(), id = %self.shared.state.borrow().id, "widget mounted");
        self.subscription = Some(subscription);
    }

    /// Removes the outside-click listener. Safe to call when not mounted.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!(listener = ?subscription.id(), "widget unmounted");
            subscription.release();
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Trigger icon clicked.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvariantViolation`] if the text field is not rendered.
    pub fn show(&mut self) -> Result<bool> {
        self.apply(Event::Show)
    }

    /// Advanced toggle clicked.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvariantViolation`] if collapsing back to the
    /// text field finds it not rendered.
    pub fn toggle(&mut self) -> Result<bool> {
        self.apply(Event::Toggle)
    }

    /// Close icon clicked. Returns whether the view state changed.
    pub fn hide(&mut self) -> bool {
        self.transition(&Event::Hide)
    }

    /// Opens the advanced panel directly. Returns whether the view state changed.
    pub fn expand(&mut self) -> bool {
        self.transition(&Event::Expand)
    }

    /// Builds the search payload and hands it to the dispatch callback.
    ///
    /// Reads the text field value and the filter form snapshot stored under the
    /// widget's schema URL. The callback is invoked exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvariantViolation`] if the text field is not rendered.
    pub fn submit(&mut self) -> Result<()> {
        let text = self.input.value()?;
        let form_values = {
            let state = self.shared.state.borrow();
            self.store.form_values(&state.schema_url)
        };
        self.apply(Event::Submit { text, form_values }).map(|_| ())
    }

    /// Current visibility state.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.shared.state.borrow().view
    }

    /// Schema reference to pass through to the filter form renderer.
    #[must_use]
    pub fn schema_url(&self) -> String {
        self.shared.state.borrow().schema_url.clone()
    }

    /// Updates the current folder scope.
    pub fn set_folder_id(&mut self, folder_id: Option<FolderScopeId>) {
        self.shared.state.borrow_mut().folder_id = folder_id;
    }

    /// Computes the view model for rendering.
    #[must_use]
    pub fn viewmodel(&self) -> SearchViewModel {
        self.shared.state.borrow().compute_viewmodel(self.translator.as_ref())
    }

    /// Returns and clears the pending re-render flag set by outside clicks.
    pub fn take_needs_render(&self) -> bool {
        self.shared.needs_render.replace(false)
    }

    fn apply(&mut self, event: Event) -> Result<bool> {
        let (changed, actions) = handle_event(&mut self.shared.state.borrow_mut(), &event);

        tracing::debug!(action_count = actions.len(), changed = changed, "event handled");

        for action in actions {
            self.execute_action(action)?;
        }
        Ok(changed)
    }

    /// Runs an event whose transition never produces actions.
    fn transition(&mut self, event: &Event) -> bool {
        let (changed, actions) = handle_event(&mut self.shared.state.borrow_mut(), event);
        debug_assert!(actions.is_empty(), "{event:?} produced actions");
        tracing::debug!(changed = changed, "event handled");
        changed
    }

    fn execute_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::FocusTextField => {
                self.input.acquire_focus()?;
                self.input.select_all()?;
            }
            Action::DispatchSearch(payload) => {
                tracing::debug!(fields = payload.len(), "dispatching search");
                (self.dispatch)(payload);
            }
        }
        Ok(())
    }
}

impl Drop for SearchWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for SearchWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchWidget")
            .field("state", &*self.shared.state.borrow())
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SearchWidget`].
///
/// `id`, `schema_url`, the dispatch callback, the text input and the rendered
/// region are required. The form store defaults to an empty one and the
/// translator to an empty [`Catalog`].
#[derive(Default)]
pub struct SearchWidgetBuilder {
    id: Option<String>,
    schema_url: Option<String>,
    folder_id: Option<FolderScopeId>,
    dispatch: Option<Box<dyn FnMut(SearchPayload)>>,
    input: Option<Box<dyn TextInput>>,
    region: Option<Box<dyn RenderedRegion>>,
    store: Option<Box<dyn FormStateStore>>,
    translator: Option<Box<dyn Translate>>,
}

impl SearchWidgetBuilder {
    /// Copies `id`, `schema_url` and `folder_id` from a parsed configuration.
    #[must_use]
    pub fn config(mut self, config: &WidgetConfig) -> Self {
        self.id = config.id.clone();
        self.schema_url = config.schema_url.clone();
        self.folder_id = config.folder_id;
        self
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.schema_url = Some(schema_url.into());
        self
    }

    #[must_use]
    pub fn folder_id(mut self, folder_id: Option<FolderScopeId>) -> Self {
        self.folder_id = folder_id;
        self
    }

    /// Sets the callback that receives each search payload.
    #[must_use]
    pub fn on_search(mut self, dispatch: impl FnMut(SearchPayload) + 'static) -> Self {
        self.dispatch = Some(Box::new(dispatch));
        self
    }

    #[must_use]
    pub fn text_input(mut self, input: impl TextInput + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    #[must_use]
    pub fn region(mut self, region: impl RenderedRegion + 'static) -> Self {
        self.region = Some(Box::new(region));
        self
    }

    #[must_use]
    pub fn form_store(mut self, store: impl FormStateStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    #[must_use]
    pub fn translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    /// Validates the configuration and creates a hidden, unmounted widget.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingCallback`] naming the first missing
    /// required field. Empty `id` or `schema_url` strings count as missing.
    pub fn build(self) -> Result<SearchWidget> {
        let dispatch = self.dispatch.ok_or(SearchError::MissingCallback("dispatch"))?;
        let schema_url = self
            .schema_url
            .filter(|s| !s.is_empty())
            .ok_or(SearchError::MissingCallback("schema_url"))?;
        let id = self
            .id
            .filter(|s| !s.is_empty())
            .ok_or(SearchError::MissingCallback("id"))?;
        let input = self.input.ok_or(SearchError::MissingCallback("text_input"))?;
        let region = self.region.ok_or(SearchError::MissingCallback("region"))?;

        tracing::debug!(id = %id, schema_url = %schema_url, folder_id = ?self.folder_id, "search widget built");

        Ok(SearchWidget {
            shared: Rc::new(Shared {
                state: RefCell::new(WidgetState::new(id, schema_url, self.folder_id)),
                region,
                needs_render: Cell::new(false),
            }),
            input,
            store: self.store.unwrap_or_else(|| Box::new(MemoryFormStore::new())),
            translator: self.translator.unwrap_or_else(|| Box::new(Catalog::empty())),
            dispatch,
            subscription: None,
        })
    }
}
