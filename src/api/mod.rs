//! JavaScript-facing API.
//!
//! The hosting page drives decoration through these exports. All state lives
//! in a WASM-owned [`Augmentor`] (canonical source of truth); the host only
//! ever passes ordinals, kind tags, element references, and percent-encoded
//! payloads.

pub mod helpers;
pub mod fields;
pub mod inline;

pub use fields::{configure_fields, hide_loading_indicator, set_field_value, show_loading_indicator};
pub use inline::{add_inline_field, clear_inline_fields, remove_inline_field, set_inline_field_value};

use std::cell::RefCell;

use crate::augment::Augmentor;
use crate::dom::WebHost;

// WASM-owned augmentor storage. DOM handles are not Send, so the slot is
// thread-local rather than a locked static.
thread_local! {
    static AUGMENTOR: RefCell<Option<Augmentor<WebHost>>> = RefCell::new(None);
}

/// Run `f` against the augmentor, initializing it on first use. Returns
/// `None` when no document is available (not running under a browser host).
pub(crate) fn with_augmentor<R>(f: impl FnOnce(&mut Augmentor<WebHost>) -> R) -> Option<R> {
    AUGMENTOR.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            match WebHost::from_window() {
                Some(host) => *slot = Some(Augmentor::new(host)),
                None => {
                    log::warn!("no browser document available, dropping call");
                    return None;
                }
            }
        }
        slot.as_mut().map(f)
    })
}
