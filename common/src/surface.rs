//! Retained-mode drawing surface driven by the display controller.
//!
//! A surface owns the shapes created on it and hands back opaque handles. The
//! controller only ever toggles visibility through those handles or wipes the
//! whole surface before a rebuild; it never touches backend types.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Drawing surface for one slot column (one digit or one separator).
pub trait Surface {
    /// Opaque reference to a shape on this surface.
    type Handle: Copy;

    /// Create a filled polygon. Shapes start visible.
    fn create_polygon(
        &mut self,
        points: &[Point],
        color: Rgb565,
    ) -> Self::Handle;

    /// Create a filled oval inscribed in `bounds`. Shapes start visible.
    fn create_oval(
        &mut self,
        bounds: Rectangle,
        color: Rgb565,
    ) -> Self::Handle;

    /// Show or hide a shape.
    fn set_visible(
        &mut self,
        handle: Self::Handle,
        visible: bool,
    );

    /// Remove every shape. Handles from before the call are dead afterwards.
    fn clear_all(&mut self);

    /// Current size of the surface as reported by the host.
    fn size(&self) -> Size;
}
