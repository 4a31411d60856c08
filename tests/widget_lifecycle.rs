//! End-to-end widget behavior: mounting, outside clicks, focus and submission.

use asset_search::infrastructure::{Catalog, MemoryFormStore};
use asset_search::widget::{
    ClickListener, Document, MemoryTextInput, NodeId, NodeTree, OutsideInteractionSource, Region, SearchWidget,
};
use asset_search::{SearchError, SearchPayload, ViewState, WidgetConfig};
use serde_json::json;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

const SCHEMA_URL: &str = "admin/assets/schema/search";

/// A page with the widget rendered inside it.
struct Page {
    tree: Rc<RefCell<NodeTree>>,
    body: NodeId,
    widget_root: NodeId,
    advanced_field: NodeId,
    input: Rc<MemoryTextInput>,
    store: Rc<MemoryFormStore>,
    document: Rc<Document>,
    sent: Rc<RefCell<Vec<SearchPayload>>>,
}

impl Page {
    fn new() -> Self {
        let tree = Rc::new(RefCell::new(NodeTree::new()));
        let (body, widget_root, text_node, advanced_field) = {
            let mut t = tree.borrow_mut();
            let body = t.create_root();
            let widget_root = t.append_child(body).unwrap();
            let group = t.append_child(widget_root).unwrap();
            let text_node = t.append_child(group).unwrap();
            let panel = t.append_child(group).unwrap();
            let advanced_field = t.append_child(panel).unwrap();
            (body, widget_root, text_node, advanced_field)
        };

        Self {
            input: Rc::new(MemoryTextInput::new(Rc::clone(&tree), text_node)),
            tree,
            body,
            widget_root,
            advanced_field,
            store: Rc::new(MemoryFormStore::new()),
            document: Rc::new(Document::new()),
            sent: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn widget(&self, folder_id: Option<i64>) -> SearchWidget {
        let sink = Rc::clone(&self.sent);
        let mut widget = SearchWidget::builder()
            .id("AssetSearch")
            .schema_url(SCHEMA_URL)
            .folder_id(folder_id)
            .text_input(Rc::clone(&self.input))
            .region(Region::new(Rc::clone(&self.tree), self.widget_root))
            .form_store(Rc::clone(&self.store))
            .on_search(move |payload| sink.borrow_mut().push(payload))
            .build()
            .unwrap();
        widget.mount(&self.document);
        widget
    }

    fn outside_node(&self) -> NodeId {
        self.tree.borrow_mut().append_child(self.body).unwrap()
    }
}

#[test]
fn starts_hidden_and_mounts_one_listener() {
    let page = Page::new();
    let mut widget = page.widget(None);

    assert_eq!(widget.view_state(), ViewState::Hidden);
    assert!(widget.is_mounted());
    assert_eq!(page.document.listener_count(), 1);

    widget.mount(&page.document);
    assert_eq!(page.document.listener_count(), 1);
}

#[test]
fn show_focuses_and_selects_existing_text() {
    let page = Page::new();
    let mut widget = page.widget(None);
    page.input.set_value("previous query");

    assert!(widget.show().unwrap());
    assert_eq!(widget.view_state(), ViewState::Visible);
    assert!(page.input.is_focused());
    assert_eq!(page.input.selection(), Some((0, "previous query".len())));
}

#[test]
fn focus_is_reacquired_only_when_collapsing() {
    let page = Page::new();
    let mut widget = page.widget(None);
    page.input.set_value("cat");

    widget.show().unwrap();
    assert_eq!(page.input.focus_count(), 1);

    // User moves into the advanced panel.
    page.input.blur();
    widget.toggle().unwrap();
    assert_eq!(widget.view_state(), ViewState::Expanded);
    assert_eq!(page.input.focus_count(), 1);
    assert!(!page.input.is_focused());
    assert_eq!(page.input.selection(), None);

    widget.toggle().unwrap();
    assert_eq!(widget.view_state(), ViewState::Visible);
    assert_eq!(page.input.focus_count(), 2);
    assert!(page.input.is_focused());
    assert_eq!(page.input.selection(), Some((0, 3)));
}

#[test]
fn outside_click_hides_from_any_state() {
    let page = Page::new();
    let mut widget = page.widget(None);
    let outside = page.outside_node();

    let setups: [fn(&mut SearchWidget); 3] = [
        |_| {},
        |w| {
            w.show().unwrap();
        },
        |w| {
            w.expand();
        },
    ];

    for setup in setups {
        setup(&mut widget);
        page.document.dispatch_click(outside).unwrap();
        assert_eq!(widget.view_state(), ViewState::Hidden);
    }
}

#[test]
fn outside_click_requests_a_render_only_when_state_changes() {
    let page = Page::new();
    let mut widget = page.widget(None);
    let outside = page.outside_node();

    page.document.dispatch_click(outside).unwrap();
    assert!(!widget.take_needs_render());

    widget.expand();
    page.document.dispatch_click(outside).unwrap();
    assert!(widget.take_needs_render());
    assert!(!widget.take_needs_render());
}

#[test]
fn inside_click_leaves_state_alone() {
    let page = Page::new();
    let mut widget = page.widget(None);

    for target in [page.widget_root, page.input.node(), page.advanced_field] {
        widget.expand();
        page.document.dispatch_click(target).unwrap();
        assert_eq!(widget.view_state(), ViewState::Expanded);

        widget.show().unwrap();
        page.document.dispatch_click(target).unwrap();
        assert_eq!(widget.view_state(), ViewState::Visible);
    }
}

#[test]
fn hide_and_expand_report_state_changes() {
    let page = Page::new();
    let mut widget = page.widget(None);

    assert!(!widget.hide());
    assert!(widget.expand());
    assert!(!widget.expand());
    assert_eq!(page.input.focus_count(), 0);
    assert!(widget.hide());
    assert_eq!(widget.view_state(), ViewState::Hidden);
}

#[test]
fn unmount_stops_outside_click_handling() {
    let page = Page::new();
    let mut widget = page.widget(None);
    let outside = page.outside_node();

    widget.show().unwrap();
    widget.unmount();
    assert!(!widget.is_mounted());
    assert_eq!(page.document.listener_count(), 0);

    page.document.dispatch_click(outside).unwrap();
    assert_eq!(widget.view_state(), ViewState::Visible);

    widget.unmount();
}

#[test]
fn dropping_a_mounted_widget_releases_its_listener() {
    let page = Page::new();
    let widget = page.widget(None);
    assert_eq!(page.document.listener_count(), 1);

    drop(widget);
    assert_eq!(page.document.listener_count(), 0);
    page.document.dispatch_click(page.body).unwrap();
}

#[test]
fn panic_while_mounted_still_releases_listener() {
    let page = Page::new();
    let document = Rc::clone(&page.document);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _widget = page.widget(None);
        panic!("host render failed");
    }));

    assert!(result.is_err());
    assert_eq!(document.listener_count(), 0);
}

/// Host listener that tears the widget down when any click arrives.
struct Unmounter {
    widget: Rc<RefCell<SearchWidget>>,
}

impl ClickListener for Unmounter {
    fn on_document_click(&self, _target: NodeId) -> asset_search::Result<()> {
        self.widget.borrow_mut().unmount();
        Ok(())
    }
}

#[test]
fn widget_unmounted_by_an_earlier_listener_ignores_that_click() {
    let page = Page::new();
    let outside = page.outside_node();
    let widget = page.widget(None);
    let widget = Rc::new(RefCell::new(widget));
    widget.borrow_mut().unmount();

    let unmounter_id = page.document.subscribe(Rc::new(Unmounter { widget: Rc::clone(&widget) }));
    widget.borrow_mut().mount(&page.document);
    widget.borrow_mut().show().unwrap();

    page.document.dispatch_click(outside).unwrap();

    assert!(!widget.borrow().is_mounted());
    assert_eq!(widget.borrow().view_state(), ViewState::Visible);
    assert!(!widget.borrow().take_needs_render());

    page.document.unsubscribe(unmounter_id);
    assert_eq!(page.document.listener_count(), 0);
}

#[test]
fn remount_after_unmount_registers_again() {
    let page = Page::new();
    let mut widget = page.widget(None);
    let outside = page.outside_node();

    widget.unmount();
    widget.mount(&page.document);
    widget.show().unwrap();
    page.document.dispatch_click(outside).unwrap();
    assert_eq!(widget.view_state(), ViewState::Hidden);
}

#[test]
fn submit_merges_text_and_form_values() {
    let page = Page::new();
    let mut widget = page.widget(Some(42));

    page.input.set_value("cat");
    page.store.set_values(
        SCHEMA_URL,
        serde_json::from_value(json!({
            "SecurityID": "abc123",
            "CurrentFolderOnly": true,
            "AppCategory": "image",
            "LastEditedFrom": "",
        }))
        .unwrap(),
    );

    widget.submit().unwrap();

    let sent = page.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].to_json(),
        json!({"Name": "cat", "ParentID": 42, "AppCategory": "image"})
    );
}

#[test]
fn submit_reads_only_the_widgets_own_form() {
    let page = Page::new();
    let mut widget = page.widget(None);

    page.store.set_value("admin/pages/schema/search", "Title", json!("other"));
    widget.submit().unwrap();

    assert!(page.sent.borrow()[0].is_empty());
}

#[test]
fn submit_does_not_change_view_state() {
    let page = Page::new();
    let mut widget = page.widget(None);
    widget.expand();

    widget.submit().unwrap();
    widget.submit().unwrap();

    assert_eq!(widget.view_state(), ViewState::Expanded);
    assert_eq!(page.sent.borrow().len(), 2);
}

#[test]
fn folder_scope_updates_apply_to_next_submission() {
    let page = Page::new();
    let mut widget = page.widget(None);
    page.store.set_value(SCHEMA_URL, "CurrentFolderOnly", json!(true));

    widget.submit().unwrap();
    widget.set_folder_id(Some(9));
    widget.submit().unwrap();

    let sent = page.sent.borrow();
    assert_eq!(sent[0].to_json(), json!({"ParentID": null}));
    assert_eq!(sent[1].to_json(), json!({"ParentID": 9}));
}

#[test]
fn focus_without_rendered_field_is_an_invariant_violation() {
    let page = Page::new();
    let mut widget = page.widget(None);
    page.tree.borrow_mut().remove(page.input.node());

    let err = widget.show().unwrap_err();
    assert!(matches!(err, SearchError::InvariantViolation(_)));
    assert!(matches!(widget.submit(), Err(SearchError::InvariantViolation(_))));
}

#[test]
fn outside_click_without_rendered_root_is_an_invariant_violation() {
    let page = Page::new();
    let _widget = page.widget(None);
    let outside = page.outside_node();
    page.tree.borrow_mut().remove(page.widget_root);

    let err = page.document.dispatch_click(outside).unwrap_err();
    assert!(matches!(err, SearchError::InvariantViolation(_)));
}

#[test]
fn build_rejects_missing_required_configuration() {
    let page = Page::new();

    let missing_dispatch = SearchWidget::builder()
        .id("AssetSearch")
        .schema_url(SCHEMA_URL)
        .text_input(Rc::clone(&page.input))
        .region(Region::new(Rc::clone(&page.tree), page.widget_root))
        .build();
    assert!(matches!(missing_dispatch, Err(SearchError::MissingCallback("dispatch"))));

    let missing_schema = SearchWidget::builder()
        .id("AssetSearch")
        .schema_url("")
        .text_input(Rc::clone(&page.input))
        .region(Region::new(Rc::clone(&page.tree), page.widget_root))
        .on_search(|_| {})
        .build();
    assert!(matches!(missing_schema, Err(SearchError::MissingCallback("schema_url"))));

    let missing_id = SearchWidget::builder()
        .schema_url(SCHEMA_URL)
        .text_input(Rc::clone(&page.input))
        .region(Region::new(Rc::clone(&page.tree), page.widget_root))
        .on_search(|_| {})
        .build();
    assert!(matches!(missing_id, Err(SearchError::MissingCallback("id"))));
}

#[test]
fn builds_from_parsed_config() {
    let page = Page::new();
    let props: BTreeMap<String, String> = [
        ("id", "AssetSearch"),
        ("schema_url", SCHEMA_URL),
        ("folder_id", "5"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    let config = WidgetConfig::from_map(&props);

    let catalog = Catalog::from_toml_str("[AssetAdmin]\nADVANCED = \"Erweitert\"").unwrap();
    let mut widget = SearchWidget::builder()
        .config(&config)
        .text_input(Rc::clone(&page.input))
        .region(Region::new(Rc::clone(&page.tree), page.widget_root))
        .translator(catalog)
        .on_search(|_| {})
        .build()
        .unwrap();

    assert_eq!(widget.schema_url(), SCHEMA_URL);

    widget.expand();
    let vm = widget.viewmodel();
    assert!(vm.filter_panel_open);
    assert_eq!(vm.group_id, "AssetSearch");
    assert_eq!(vm.filter_form_id, "AssetSearch_ExtraFields");
    assert_eq!(vm.labels.advanced, "Erweitert");
    assert_eq!(vm.labels.close, "Close");
}
