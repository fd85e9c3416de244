//! Overlay widgets drawn on top of the digit row.

mod popups;

pub use popups::{draw_chooser, draw_popup};
