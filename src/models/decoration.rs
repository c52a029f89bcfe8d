//! Element descriptions handed to the DOM seam.
//!
//! The augmentor decides *what* exists; a `DecorationHost` realizes it.
//! These specs carry the ids, classes, and text of the realized elements.
//! The id prefixes are fixed for host interop: indicators are addressable as
//! `loading_indicator<ord>` / `generatedfor_indicator<ord>`, inline rows as
//! `row_<type><ord>` with their value cell as `<type><ord>`.

use crate::models::field::{FieldAction, FieldId};

/// Shared CSS class for everything appended to a field's label container.
pub const LABEL_ELEMENT_CLASS: &str = "field-label-element";

/// Presentation constants for generated decoration.
#[derive(Debug, Clone)]
pub struct DecorationConfig {
    /// Text shown by the loading indicator.
    pub loading_text: String,
    /// Prefix of the generated-for indicator text.
    pub generated_prefix: String,
    /// Placeholder shown in an inline row until its value arrives.
    pub inline_placeholder: String,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            loading_text: "loading...".to_string(),
            generated_prefix: "generated from: ".to_string(),
            inline_placeholder: "translation loading...".to_string(),
        }
    }
}

/// An indicator span appended hidden to a field's label container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSpec {
    pub id: String,
    pub classes: [&'static str; 2],
    pub text: String,
}

impl IndicatorSpec {
    pub fn loading(id: FieldId, config: &DecorationConfig) -> Self {
        Self {
            id: format!("loading_indicator{}", id),
            classes: [LABEL_ELEMENT_CLASS, "loading-indicator"],
            text: config.loading_text.clone(),
        }
    }

    pub fn generated_for(id: FieldId) -> Self {
        Self {
            id: format!("generatedfor_indicator{}", id),
            classes: [LABEL_ELEMENT_CLASS, "generated-for"],
            text: String::new(),
        }
    }
}

/// An action button appended to a field's label container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub label: &'static str,
    pub classes: [&'static str; 2],
    /// Command string emitted through the host bridge on activation.
    pub command: String,
}

impl ActionSpec {
    pub fn new(action: FieldAction, id: FieldId) -> Self {
        Self {
            label: action.label,
            classes: [LABEL_ELEMENT_CLASS, action.class],
            command: action.command(id),
        }
    }
}

/// An inline value row inserted after a field's own table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRowSpec {
    /// Id of the inserted row element.
    pub row_id: String,
    /// Id of the cell holding the asynchronously loaded value.
    pub value_id: String,
    /// Header text labelling the row.
    pub header: String,
    /// Placeholder shown until the value arrives.
    pub placeholder: String,
}
