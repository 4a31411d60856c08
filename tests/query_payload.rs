use asset_search::query::build_payload;
use asset_search::FormValues;
use serde_json::{json, Value};

fn form(value: Value) -> FormValues {
    serde_json::from_value(value).unwrap()
}

#[test]
fn text_with_empty_form() {
    let payload = build_payload("cat", Some(&form(json!({}))), None);
    assert_eq!(payload.to_json(), json!({"Name": "cat"}));
}

#[test]
fn security_token_never_reaches_the_payload() {
    let payload = build_payload("", Some(&form(json!({"SecurityID": "abc", "Title": "report"}))), None);
    assert_eq!(payload.to_json(), json!({"Title": "report"}));
}

#[test]
fn current_folder_only_resolves_to_folder_scope() {
    let payload = build_payload("", Some(&form(json!({"CurrentFolderOnly": true}))), Some(42));
    assert_eq!(payload.to_json(), json!({"ParentID": 42}));
}

#[test]
fn empty_filter_values_are_dropped() {
    let payload = build_payload("", Some(&form(json!({"Status": "", "Author": "jane"}))), None);
    assert_eq!(payload.to_json(), json!({"Author": "jane"}));
}

#[test]
fn empty_text_and_no_form_is_an_empty_payload() {
    let payload = build_payload("", None, None);
    assert!(payload.is_empty());
    assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
}
