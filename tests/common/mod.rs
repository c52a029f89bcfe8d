//! Recording fake of the hosting page for native tests.

#![allow(dead_code)]

use std::collections::HashSet;

use fieldtools_wasm::augment::host::{DecorationHost, InlineRowHandles};
use fieldtools_wasm::models::field::FieldId;
use fieldtools_wasm::models::{ActionSpec, IndicatorSpec, InlineRowSpec};

/// One recorded element.
#[derive(Debug, Clone)]
pub struct MockElement {
    pub tag: &'static str,
    pub id: String,
    pub classes: Vec<String>,
    pub text: String,
    pub html: String,
    pub visible: bool,
    pub removed: bool,
    pub container: Option<usize>,
    pub command: Option<String>,
}

fn blank() -> MockElement {
    MockElement {
        tag: "",
        id: String::new(),
        classes: Vec::new(),
        text: String::new(),
        html: String::new(),
        visible: true,
        removed: false,
        container: None,
        command: None,
    }
}

/// Host fake: elements live in a flat arena, handles are indices.
#[derive(Default)]
pub struct MockHost {
    pub elements: Vec<MockElement>,
    /// Field ordinals with no anchor row in the fake page.
    pub missing_anchors: HashSet<FieldId>,
}

impl MockHost {
    /// Arena slot for a host-owned container (label container, editing area).
    pub fn container(&mut self, id: &str) -> usize {
        self.push(MockElement {
            tag: "div",
            id: id.to_string(),
            ..blank()
        })
    }

    fn push(&mut self, element: MockElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Live (not removed) elements appended under `container`.
    pub fn children_of(&self, container: usize) -> Vec<&MockElement> {
        self.elements
            .iter()
            .filter(|e| e.container == Some(container) && !e.removed)
            .collect()
    }

    /// Live element by id.
    pub fn by_id(&self, id: &str) -> Option<&MockElement> {
        self.elements.iter().find(|e| e.id == id && !e.removed)
    }

    /// Every element ever created with this id, removed ones included.
    pub fn created_with_id(&self, id: &str) -> usize {
        self.elements.iter().filter(|e| e.id == id).count()
    }
}

impl DecorationHost for MockHost {
    type Handle = usize;

    fn append_indicator(&mut self, container: &usize, spec: &IndicatorSpec) -> usize {
        self.push(MockElement {
            tag: "span",
            id: spec.id.clone(),
            classes: spec.classes.iter().map(|c| c.to_string()).collect(),
            text: spec.text.clone(),
            visible: false,
            container: Some(*container),
            ..blank()
        })
    }

    fn append_action(&mut self, container: &usize, spec: &ActionSpec) -> usize {
        self.push(MockElement {
            tag: "button",
            classes: spec.classes.iter().map(|c| c.to_string()).collect(),
            text: spec.label.to_string(),
            command: Some(spec.command.clone()),
            container: Some(*container),
            ..blank()
        })
    }

    fn insert_inline_row(
        &mut self,
        anchor: FieldId,
        spec: &InlineRowSpec,
    ) -> Option<InlineRowHandles<usize>> {
        if self.missing_anchors.contains(&anchor) {
            return None;
        }
        let row = self.push(MockElement {
            tag: "tr",
            id: spec.row_id.clone(),
            text: spec.header.clone(),
            ..blank()
        });
        let value_cell = self.push(MockElement {
            tag: "td",
            id: spec.value_id.clone(),
            text: spec.placeholder.clone(),
            container: Some(row),
            ..blank()
        });
        Some(InlineRowHandles { row, value_cell })
    }

    fn remove(&mut self, element: &usize) {
        let parent = *element;
        self.elements[parent].removed = true;
        for child in &mut self.elements {
            if child.container == Some(parent) {
                child.removed = true;
            }
        }
    }

    fn set_text(&mut self, element: &usize, text: &str) {
        self.elements[*element].text = text.to_string();
    }

    fn set_html(&mut self, element: &usize, html: &str) {
        self.elements[*element].html = html.to_string();
    }

    fn set_visible(&mut self, element: &usize, visible: bool) {
        self.elements[*element].visible = visible;
    }
}
