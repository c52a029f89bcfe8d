//! Plain data types shared by the augmentor core and the DOM layer.

pub mod field;
pub mod decoration;

pub use field::{FieldAction, FieldId, FieldKind};
pub use decoration::{ActionSpec, DecorationConfig, IndicatorSpec, InlineRowSpec};
