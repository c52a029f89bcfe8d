//! Field decoration entry points.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::augment::FieldSpec;
use crate::models::field::{FieldId, FieldKind};
use crate::{wasm_log, wasm_warn};

use super::with_augmentor;

/// Extract one `{ord, kind, labelContainer, editingArea}` entry.
fn field_spec_from_entry(entry: &JsValue) -> Result<FieldSpec<Element>, JsValue> {
    let ord = Reflect::get(entry, &JsValue::from_str("ord"))?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("ord is not a number"))? as FieldId;
    let kind = Reflect::get(entry, &JsValue::from_str("kind"))?
        .as_string()
        .unwrap_or_default();
    let label_container: Element =
        Reflect::get(entry, &JsValue::from_str("labelContainer"))?.dyn_into()?;
    let editing_area: Element =
        Reflect::get(entry, &JsValue::from_str("editingArea"))?.dyn_into()?;
    Ok(FieldSpec {
        id: ord,
        kind: FieldKind::from_tag(&kind),
        label_container,
        editing_area,
    })
}

/// Reconcile decoration against the host's current field set.
///
/// `fields` is an array of `{ord, kind, labelContainer, editingArea}`
/// objects; malformed entries are skipped. Returns the pass summary, or
/// `null` when no augmentor is available.
///
/// JavaScript: `configureFields(fields)`
#[wasm_bindgen(js_name = configureFields)]
pub fn configure_fields(fields: js_sys::Array) -> JsValue {
    let mut specs = Vec::with_capacity(fields.length() as usize);
    for entry in fields.iter() {
        match field_spec_from_entry(&entry) {
            Ok(spec) => specs.push(spec),
            Err(e) => wasm_warn!("skipping malformed field entry: {:?}", e),
        }
    }
    wasm_log!("configureFields: {} fields", specs.len());

    match with_augmentor(|augmentor| augmentor.reconfigure(specs)) {
        Some(summary) => serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

/// Reveal the loading indicator for a field.
///
/// JavaScript: `showLoadingIndicator(fieldId)`
#[wasm_bindgen(js_name = showLoadingIndicator)]
pub fn show_loading_indicator(field_id: FieldId) {
    with_augmentor(|augmentor| augmentor.show_loading(field_id));
}

/// Hide the loading indicator and show what the value was generated from.
/// `source_text` arrives percent-encoded.
///
/// JavaScript: `hideLoadingIndicator(fieldId, sourceText)`
#[wasm_bindgen(js_name = hideLoadingIndicator)]
pub fn hide_loading_indicator(field_id: FieldId, source_text: &str) {
    with_augmentor(|augmentor| augmentor.hide_loading(field_id, source_text));
}

/// Overwrite a field's content with a percent-encoded HTML fragment.
///
/// JavaScript: `setFieldValue(fieldId, value)`
#[wasm_bindgen(js_name = setFieldValue)]
pub fn set_field_value(field_id: FieldId, value: &str) {
    with_augmentor(|augmentor| augmentor.set_field_content(field_id, value));
}
