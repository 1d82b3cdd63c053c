//! # input_core
//!
//! UI-agnostic value and editing layer for form controls.
//!
//! - [`InputId`]: opaque key of a control
//! - [`InputValueStore`]: values, caret and selection per control
//! - [`SelectionRange`]: normalized byte range inside a value
//!
//! Nothing here knows about documents, layout or rendering; hosts map their
//! node ids onto [`InputId`] and drive the store from their event loop.

mod id;
mod selection;
mod state;
mod store;
mod text;

pub use id::InputId;
pub use selection::SelectionRange;
pub use store::InputValueStore;

pub use text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, normalize_newlines,
    prev_cursor_boundary,
};
