//! Core logic for the vintage seven-segment clock.
//!
//! This crate contains the platform-agnostic pieces shared by every host:
//!
//! - [`geometry`]: Segment polygons, digit layout and separator dots
//! - [`symbols`]: Symbol to segment pattern lookup table
//! - [`surface`]: Retained-mode drawing surface capability
//! - [`canvas`]: Fixed-capacity [`surface::Surface`] rasterised with `embedded-graphics`
//! - [`controller`]: Digit row controller (rebuild on resize/recolor, blink on tick)
//! - [`colors`]: RGB565 color constants and color parsing
//! - [`config`]: Row layout and sizing constants
//! - [`layout`]: Column placement for the digit row
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and never allocates. Shapes live in
//! `heapless` vectors sized at compile time.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod colors;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod layout;
pub mod surface;
pub mod symbols;

// Re-export commonly used items
pub use canvas::ShapeCanvas;
pub use controller::{ControllerState, DisplayController};
pub use geometry::{DigitLayout, Orientation, Segment, layout_digit, layout_separator, segment_polygon};
pub use surface::Surface;
pub use symbols::{SegmentPattern, Symbol, lookup};
