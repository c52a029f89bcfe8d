//! Inline value rows, the alternate decoration strategy.
//!
//! Instead of a button on the field's label, a sibling table row is inserted
//! immediately after the field's own row, showing a labelled value that
//! loads asynchronously. Rows are addressed by the composite key
//! `(field_type, field_id)`; the host removes a row before re-adding it for
//! the same key.

use crate::models::field::FieldId;
use crate::models::InlineRowSpec;

use super::{Augmentor, DecorationHost};

/// Composite key addressing one inline row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineKey {
    pub field_type: String,
    pub field_id: FieldId,
}

impl InlineKey {
    pub fn new(field_type: &str, field_id: FieldId) -> Self {
        Self {
            field_type: field_type.to_string(),
            field_id,
        }
    }

    /// Id of the row element: `row_<type><ord>`.
    pub fn row_id(&self) -> String {
        format!("row_{}{}", self.field_type, self.field_id)
    }

    /// Id of the value cell: `<type><ord>`.
    pub fn value_id(&self) -> String {
        format!("{}{}", self.field_type, self.field_id)
    }
}

/// Handles kept per inserted row.
pub(super) struct InlineRow<T> {
    pub(super) row: T,
    pub(super) value_cell: T,
}

impl<H: DecorationHost> Augmentor<H> {
    /// Insert an inline row after the field's own row, showing the header
    /// text and a loading placeholder. Returns whether the row was inserted;
    /// a missing anchor row drops the call.
    pub fn add_inline_field(
        &mut self,
        field_type: &str,
        field_id: FieldId,
        header_text: &str,
    ) -> bool {
        let key = InlineKey::new(field_type, field_id);
        let spec = InlineRowSpec {
            row_id: key.row_id(),
            value_id: key.value_id(),
            header: header_text.to_string(),
            placeholder: self.config.inline_placeholder.clone(),
        };
        let Some(handles) = self.host.insert_inline_row(field_id, &spec) else {
            log::warn!(
                "no anchor row for field {}, dropping inline row {}",
                field_id,
                spec.row_id
            );
            return false;
        };
        let row = InlineRow {
            row: handles.row,
            value_cell: handles.value_cell,
        };
        if self.inline.insert(key, row).is_some() {
            log::warn!(
                "inline row {} re-added without removal, previous row is orphaned",
                spec.row_id
            );
        }
        true
    }

    /// Remove the row addressed by the composite key. No-op if absent.
    pub fn remove_inline_field(&mut self, field_type: &str, field_id: FieldId) {
        let key = InlineKey::new(field_type, field_id);
        match self.inline.remove(&key) {
            Some(row) => self.host.remove(&row.row),
            None => log::debug!("remove_inline_field for absent row {}", key.row_id()),
        }
    }

    /// Decode and overwrite the row's value cell in place.
    pub fn set_inline_field_value(
        &mut self,
        field_type: &str,
        field_id: FieldId,
        encoded_value: &str,
    ) {
        let key = InlineKey::new(field_type, field_id);
        let Some(row) = self.inline.get(&key) else {
            log::warn!("set_inline_field_value for absent row {}, dropping", key.row_id());
            return;
        };
        let value = crate::utils::encoding::decode_or_raw(encoded_value);
        self.host.set_html(&row.value_cell, &value);
    }

    /// Forget all tracked rows without touching the DOM. Called when a note
    /// (re)load replaces the whole field table.
    pub fn clear_inline_fields(&mut self) {
        if !self.inline.is_empty() {
            log::debug!("clearing {} tracked inline rows", self.inline.len());
        }
        self.inline.clear();
    }

    /// Number of inline rows currently tracked.
    pub fn tracked_inline_rows(&self) -> usize {
        self.inline.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_keys_use_fixed_prefixes() {
        let key = InlineKey::new("translation", 2);
        assert_eq!(key.row_id(), "row_translation2");
        assert_eq!(key.value_id(), "translation2");
    }
}
