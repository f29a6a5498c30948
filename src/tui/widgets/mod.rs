//! Reusable TUI widgets.

pub mod form;
pub mod submitted;

pub use form::{Form, FormField, FormFocus, draw_form};
pub use submitted::{draw_submitted, submitted_height};
