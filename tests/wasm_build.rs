//! Browser smoke test for the exported API.
//!
//! Exercises the wasm exports against a real document; the reconciliation
//! logic itself is covered natively in the other test files.

#![cfg(target_arch = "wasm32")]

use fieldtools_wasm::api::{
    configure_fields, hide_loading_indicator, set_field_value, show_loading_indicator,
};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Build a `{ord, kind, labelContainer, editingArea}` entry with fresh
/// elements appended to the page body.
fn field_entry(ord: u32, kind: &str) -> (Object, web_sys::Element, web_sys::Element) {
    let document = document();
    let body = document.body().unwrap();
    let label = document.create_element("div").unwrap();
    let edit = document.create_element("div").unwrap();
    body.append_child(&label).unwrap();
    body.append_child(&edit).unwrap();

    let entry = Object::new();
    Reflect::set(&entry, &"ord".into(), &JsValue::from_f64(ord as f64)).unwrap();
    Reflect::set(&entry, &"kind".into(), &kind.into()).unwrap();
    Reflect::set(&entry, &"labelContainer".into(), &label).unwrap();
    Reflect::set(&entry, &"editingArea".into(), &edit).unwrap();
    (entry, label, edit)
}

fn summary_count(summary: &JsValue, key: &str) -> f64 {
    Reflect::get(summary, &key.into())
        .unwrap()
        .as_f64()
        .unwrap()
}

#[wasm_bindgen_test]
fn configure_fields_decorates_and_is_idempotent() {
    let (entry, label, _) = field_entry(0, "language");
    let fields = Array::of1(&entry);

    let summary = configure_fields(fields.clone());
    assert_eq!(summary_count(&summary, "decorated"), 1.0);
    assert_eq!(summary_count(&summary, "actions_added"), 1.0);
    // Two indicator spans plus the Speak button.
    assert_eq!(label.child_element_count(), 3);

    let summary = configure_fields(fields);
    assert_eq!(summary_count(&summary, "decorated"), 0.0);
    assert_eq!(summary_count(&summary, "actions_added"), 0.0);
    assert_eq!(label.child_element_count(), 3);
}

#[wasm_bindgen_test]
fn setters_before_configure_are_dropped() {
    show_loading_indicator(99);
    hide_loading_indicator(99, "text");
    set_field_value(99, "value");
}

#[wasm_bindgen_test]
fn hide_loading_sets_decoded_source_text() {
    let (entry, _, _) = field_entry(20, "plain");
    configure_fields(Array::of1(&entry));

    show_loading_indicator(20);
    hide_loading_indicator(20, "h%C3%A9llo");

    let generated = document()
        .get_element_by_id("generatedfor_indicator20")
        .unwrap();
    assert_eq!(
        generated.text_content().unwrap(),
        "generated from: héllo"
    );
}

#[wasm_bindgen_test]
fn set_field_value_overwrites_editing_area() {
    let (entry, _, edit) = field_entry(30, "plain");
    configure_fields(Array::of1(&entry));

    set_field_value(30, "%3Cb%3Eh%C3%A9llo%3C%2Fb%3E");

    assert_eq!(edit.inner_html(), "<b>héllo</b>");
}
