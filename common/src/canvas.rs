//! Fixed-capacity retained-mode canvas.
//!
//! [`ShapeCanvas`] is the [`Surface`] used by the hosts. It keeps the shapes of
//! one slot column in a `heapless::Vec` and rasterises the visible ones onto any
//! `DrawTarget<Color = Rgb565>` at its own position.
//!
//! Polygons are filled as a triangle fan from the first vertex, which is exact
//! for the convex segment hexagons.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Ellipse, PrimitiveStyle, Rectangle, Triangle};
use heapless::Vec;

use crate::geometry::{POLYGON_VERTICES, SEGMENT_COUNT};
use crate::surface::Surface;

// =============================================================================
// Capacity
// =============================================================================

/// Maximum number of shapes on one canvas.
pub const MAX_SHAPES: usize = 8;

/// Maximum number of vertices kept per polygon. Extra vertices are dropped.
pub const MAX_POLYGON_POINTS: usize = POLYGON_VERTICES;

// A digit column holds all of its segments at once
const _: () = assert!(MAX_SHAPES >= SEGMENT_COUNT);

// =============================================================================
// Shapes
// =============================================================================

/// Handle to a shape on a [`ShapeCanvas`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShapeId(usize);

/// Geometry of a stored shape, in canvas-local coordinates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Polygon(Vec<Point, MAX_POLYGON_POINTS>),
    Oval(Rectangle),
}

/// A filled shape with its visibility.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Shape {
    kind: ShapeKind,
    color: Rgb565,
    visible: bool,
}

impl Shape {
    #[inline]
    pub const fn kind(&self) -> &ShapeKind { &self.kind }

    #[inline]
    pub const fn color(&self) -> Rgb565 { self.color }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.visible }

    fn draw<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = PrimitiveStyle::with_fill(self.color);
        match &self.kind {
            ShapeKind::Polygon(points) => {
                if let Some((&first, rest)) = points.split_first() {
                    for pair in rest.windows(2) {
                        Triangle::new(first, pair[0], pair[1])
                            .into_styled(style)
                            .draw(target)
                            .ok();
                    }
                }
            }
            ShapeKind::Oval(bounds) => {
                Ellipse::new(bounds.top_left, bounds.size)
                    .into_styled(style)
                    .draw(target)
                    .ok();
            }
        }
    }
}

// =============================================================================
// Shape Canvas
// =============================================================================

/// Retained shapes for one slot column, placed at `bounds` on the display.
#[derive(Clone, Debug)]
pub struct ShapeCanvas {
    bounds: Rectangle,
    shapes: Vec<Shape, MAX_SHAPES>,
}

impl ShapeCanvas {
    /// Create an empty canvas covering `bounds` on the display.
    pub const fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            shapes: Vec::new(),
        }
    }

    /// Position and size on the display.
    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    /// Move or resize the canvas. Existing shapes are kept as they are;
    /// the controller rebuilds them once it is told about the resize.
    pub fn set_bounds(
        &mut self,
        bounds: Rectangle,
    ) {
        self.bounds = bounds;
    }

    /// Stored shapes in creation order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> { self.shapes.iter() }

    /// Look up a shape by handle.
    pub fn shape(
        &self,
        id: ShapeId,
    ) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize { self.shapes.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.shapes.is_empty() }

    /// Rasterise the visible shapes, clipped to the canvas bounds.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut clipped = display.clipped(&self.bounds);
        let mut target = clipped.translated(self.bounds.top_left);
        for shape in self.shapes.iter().filter(|s| s.visible) {
            shape.draw(&mut target);
        }
    }

    fn push(
        &mut self,
        kind: ShapeKind,
        color: Rgb565,
    ) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        let shape = Shape {
            kind,
            color,
            visible: true,
        };
        if self.shapes.push(shape).is_err() {
            // Handle stays dangling; set_visible on it is a no-op
            log::warn!("shape canvas full ({MAX_SHAPES} shapes), dropping shape");
        }
        id
    }
}

impl Surface for ShapeCanvas {
    type Handle = ShapeId;

    fn create_polygon(
        &mut self,
        points: &[Point],
        color: Rgb565,
    ) -> ShapeId {
        let points = points.iter().copied().take(MAX_POLYGON_POINTS).collect();
        self.push(ShapeKind::Polygon(points), color)
    }

    fn create_oval(
        &mut self,
        bounds: Rectangle,
        color: Rgb565,
    ) -> ShapeId {
        self.push(ShapeKind::Oval(bounds), color)
    }

    fn set_visible(
        &mut self,
        handle: ShapeId,
        visible: bool,
    ) {
        if let Some(shape) = self.shapes.get_mut(handle.0) {
            shape.visible = visible;
        }
    }

    fn clear_all(&mut self) { self.shapes.clear(); }

    fn size(&self) -> Size { self.bounds.size }
}

// =============================================================================
// Tests
// =============================================================================
