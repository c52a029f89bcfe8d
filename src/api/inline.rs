//! Inline row entry points.

use wasm_bindgen::prelude::*;

use crate::models::field::FieldId;
use crate::wasm_log;

use super::with_augmentor;

/// Insert an inline value row after the field's own row.
///
/// JavaScript: `addInlineField(fieldType, fieldId, headerText)`
#[wasm_bindgen(js_name = addInlineField)]
pub fn add_inline_field(field_type: &str, field_id: FieldId, header_text: &str) {
    wasm_log!("addInlineField: {}{}", field_type, field_id);
    with_augmentor(|augmentor| augmentor.add_inline_field(field_type, field_id, header_text));
}

/// Remove the inline row for the composite key. No-op if absent.
///
/// JavaScript: `removeInlineField(fieldType, fieldId)`
#[wasm_bindgen(js_name = removeInlineField)]
pub fn remove_inline_field(field_type: &str, field_id: FieldId) {
    with_augmentor(|augmentor| augmentor.remove_inline_field(field_type, field_id));
}

/// Overwrite an inline row's value cell with a percent-encoded fragment.
///
/// JavaScript: `setInlineFieldValue(fieldType, fieldId, value)`
#[wasm_bindgen(js_name = setInlineFieldValue)]
pub fn set_inline_field_value(field_type: &str, field_id: FieldId, value: &str) {
    with_augmentor(|augmentor| augmentor.set_inline_field_value(field_type, field_id, value));
}

/// Forget all tracked inline rows after the host rebuilt the field table.
///
/// JavaScript: `clearInlineFields()`
#[wasm_bindgen(js_name = clearInlineFields)]
pub fn clear_inline_fields() {
    with_augmentor(|augmentor| augmentor.clear_inline_fields());
}
