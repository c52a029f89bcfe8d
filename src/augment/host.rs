//! DOM seam for the augmentor.
//!
//! The state machine never touches `web_sys` directly: everything it does to
//! the page goes through this trait. The browser binding lives in
//! `crate::dom`; native tests drive the same machine with a recording fake.

use crate::models::field::FieldId;
use crate::models::{ActionSpec, IndicatorSpec, InlineRowSpec};

/// Handles to the two elements of an inline row.
pub struct InlineRowHandles<T> {
    pub row: T,
    pub value_cell: T,
}

/// Realizes decoration elements on behalf of the augmentor.
///
/// Creation methods append to the given container and return an owned
/// handle. The augmentor keeps handles for later mutation and removal
/// instead of re-resolving elements by id.
pub trait DecorationHost {
    /// Opaque reference to a realized element.
    type Handle: Clone;

    /// Append an indicator span to `container`, hidden.
    fn append_indicator(&mut self, container: &Self::Handle, spec: &IndicatorSpec) -> Self::Handle;

    /// Append an action button to `container`. Activation sends
    /// `spec.command` through the host's command channel.
    fn append_action(&mut self, container: &Self::Handle, spec: &ActionSpec) -> Self::Handle;

    /// Insert an inline row after the row belonging to `anchor`. Returns
    /// `None` when the anchor row cannot be located.
    fn insert_inline_row(
        &mut self,
        anchor: FieldId,
        spec: &InlineRowSpec,
    ) -> Option<InlineRowHandles<Self::Handle>>;

    /// Detach an element from the page.
    fn remove(&mut self, element: &Self::Handle);

    /// Replace an element's text content.
    fn set_text(&mut self, element: &Self::Handle, text: &str);

    /// Replace an element's content with an HTML fragment.
    fn set_html(&mut self, element: &Self::Handle, html: &str);

    /// Show or hide an element.
    fn set_visible(&mut self, element: &Self::Handle, visible: bool);
}
