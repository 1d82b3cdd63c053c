//! # chip_input
//!
//! Chip editor for delimited code fields.
//!
//! A `<textarea>` holding newline (or comma) separated codes is hidden and
//! paired with an editor: one removable chip per code and a single-line entry
//! where new codes are typed. The textarea stays in its form as the backing
//! field, and its value is rewritten to the newline-joined code list after
//! every change, so a plain form post always carries what the chips show.
//!
//! - [`parse`], [`is_valid`], [`serialize`]: the text format
//! - [`CodeList`]: ordered, deduplicated, validated codes
//! - [`ChipListController`]: one enhanced field and its event handlers
//! - [`ChipInputs`] / [`init_chip_inputs`]: document-wide mounting and routing
//!
//! Invalid, empty and duplicate input is dropped without feedback.

mod code_list;
mod codes;
mod config;
mod controller;
mod registry;

pub use code_list::{CodeList, Rejection};
pub use codes::{Codes, is_valid, normalize, parse, serialize};
pub use config::{ChipInputConfig, ConfigError};
pub use controller::ChipListController;
pub use registry::{ChipEvent, ChipInputs, EventOutcome, init_chip_inputs};

use dom::{Document, Id};
use input_core::{InputId, InputValueStore};

/// The document and control values a handler reads and mutates.
pub struct ChipCtx<'a> {
    pub document: &'a mut Document,
    pub inputs: &'a mut InputValueStore,
}

impl<'a> ChipCtx<'a> {
    pub fn new(document: &'a mut Document, inputs: &'a mut InputValueStore) -> Self {
        Self { document, inputs }
    }
}

#[inline]
pub fn to_input_id(id: Id) -> InputId {
    InputId::from(id.0)
}

#[cfg(test)]
mod tests;
