//! Document host for enhanced forms.
//!
//! A [`Page`] owns a loaded document, the live values of its form controls,
//! keyboard focus, and the chip editors mounted on it. It turns user input
//! (keys, clicks, focus changes, form submission) into calls on those parts in
//! the order a browser would: control handlers first, default editing after,
//! and the form data set built only once submit handlers have run.

mod interaction;
mod page;
mod seed;
mod submit;

pub use interaction::InteractionState;
pub use page::Page;
pub use seed::seed_input_values_from_dom;
pub use submit::{FormSubmission, collect_form_data};
