//! `web_sys` implementation of the decoration host.
//!
//! Elements are created under the field's label container; action buttons
//! get a click listener that forwards their command through the bridge.
//! Element creation with static tag names cannot fail; everything driven by
//! host data degrades to a logged drop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::augment::host::{DecorationHost, InlineRowHandles};
use crate::models::field::FieldId;
use crate::models::{ActionSpec, IndicatorSpec, InlineRowSpec};

use super::bridge;

/// Decoration host backed by the live page.
pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// Bind to the page's document. `None` outside a browser host.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn make_element(&self, tag: &str) -> Element {
        self.document
            .create_element(tag)
            .expect("element creation failed")
    }

    fn add_classes(element: &Element, classes: &[&str]) {
        for class in classes {
            if let Err(e) = element.class_list().add_1(class) {
                log::warn!("could not add class '{}': {:?}", class, e);
            }
        }
    }

    fn append(container: &Element, element: &Element) {
        if let Err(e) = container.append_child(element) {
            log::warn!("could not append element '{}': {:?}", element.id(), e);
        }
    }

    fn set_display(element: &Element, visible: bool) {
        let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let result = if visible {
            html.style().remove_property("display").map(|_| ())
        } else {
            html.style().set_property("display", "none")
        };
        if let Err(e) = result {
            log::warn!("could not toggle visibility of '{}': {:?}", element.id(), e);
        }
    }

    /// The `tr` an inline row is inserted after: the row holding the host
    /// page's `name<ord>` cell.
    fn anchor_row(&self, field_id: FieldId) -> Option<Element> {
        let name_cell = self.document.get_element_by_id(&format!("name{}", field_id))?;
        name_cell.closest("tr").ok().flatten()
    }
}

impl DecorationHost for WebHost {
    type Handle = Element;

    fn append_indicator(&mut self, container: &Element, spec: &IndicatorSpec) -> Element {
        let indicator = self.make_element("span");
        indicator.set_id(&spec.id);
        Self::add_classes(&indicator, &spec.classes);
        indicator.set_text_content(Some(&spec.text));
        Self::set_display(&indicator, false);
        Self::append(container, &indicator);
        indicator
    }

    fn append_action(&mut self, container: &Element, spec: &ActionSpec) -> Element {
        let button = self.make_element("button");
        Self::add_classes(&button, &spec.classes);
        button.set_text_content(Some(spec.label));

        let command = spec.command.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || bridge::send_command(&command));
        if let Err(e) =
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            log::warn!("could not attach click listener for '{}': {:?}", spec.command, e);
        }
        // The listener lives as long as the button; the page owns both.
        on_click.forget();

        Self::append(container, &button);
        button
    }

    fn insert_inline_row(
        &mut self,
        anchor: FieldId,
        spec: &InlineRowSpec,
    ) -> Option<InlineRowHandles<Element>> {
        let anchor_row = self.anchor_row(anchor)?;
        let parent = anchor_row.parent_node()?;

        let row = self.make_element("tr");
        row.set_id(&spec.row_id);

        let header_cell = self.make_element("td");
        header_cell.set_text_content(Some(&spec.header));
        Self::append(&row, &header_cell);

        let value_cell = self.make_element("td");
        value_cell.set_id(&spec.value_id);
        value_cell.set_text_content(Some(&spec.placeholder));
        Self::append(&row, &value_cell);

        if let Err(e) = parent.insert_before(&row, anchor_row.next_sibling().as_ref()) {
            log::warn!("could not insert inline row '{}': {:?}", spec.row_id, e);
            return None;
        }
        Some(InlineRowHandles { row, value_cell })
    }

    fn remove(&mut self, element: &Element) {
        element.remove();
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_html(&mut self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn set_visible(&mut self, element: &Element, visible: bool) {
        Self::set_display(element, visible);
    }
}
