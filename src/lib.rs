//! Chip editors for delimited code fields, with the document host that drives them.
//!
//! The work is split across the workspace crates and re-exported here:
//! [`dom`] holds the tree, [`input_core`] the control values, [`chip_input`]
//! the editor itself, and [`page`] ties them to focus, keys and form submission.

pub use chip_input;
pub use core_types;
pub use dom;
pub use input_core;
pub use page;

pub use chip_input::{ChipInputConfig, init_chip_inputs};
pub use page::{FormSubmission, Page};
