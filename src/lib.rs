//! Note Editor Field Augmentation WASM Module
//!
//! Decorates a third-party note-editing page with loading indicators,
//! Speak/Play action buttons, and inline translation rows, and lets the
//! hosting application push asynchronously computed values (translations,
//! audio flags) back into the DOM.

pub mod models;
pub mod augment;
pub mod dom;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use augment::{Augmentor, DecorationHost, FieldSpec, ReconfigureSummary};
pub use models::field::{FieldId, FieldKind};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Field augmentation WASM module initialized");
}
