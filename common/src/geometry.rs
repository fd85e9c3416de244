//! Segment geometry for the seven-segment digits and the separator dots.
//!
//! Every segment is the same hexagon, scaled and optionally rotated by 90°:
//!
//! ```text
//!        (10,-10)          (90,-10)
//!           ___________________
//!   (0,0)  /                   \  (100,0)
//!          \___________________/
//!        (10,10)           (90,10)
//! ```
//!
//! # Truncation
//!
//! Scaled coordinates are truncated toward zero, never rounded. The slightly
//! uneven edges this produces at small sizes are part of the vintage look.
//! The scaling is done in integers as `(origin * 100 + t * length) / 100`,
//! so `i32` division supplies the truncation and no float rounding leaks in.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Segment Template
// =============================================================================

/// Number of segments in one digit.
pub const SEGMENT_COUNT: usize = 7;

/// Number of vertices in one segment polygon.
pub const POLYGON_VERTICES: usize = 6;

/// Length of the template along its long axis.
const TEMPLATE_LENGTH: i32 = 100;

/// Horizontal hexagon, 100 units long and 20 units tall.
const TEMPLATE: [(i32, i32); POLYGON_VERTICES] = [(0, 0), (10, -10), (90, -10), (100, 0), (90, 10), (10, 10)];

/// One segment polygon.
pub type Polygon = [Point; POLYGON_VERTICES];

// =============================================================================
// Segment Roles
// =============================================================================

/// Segment roles in fixed order.
///
/// ```text
///    ---Top---
///   |         |
/// UpperLeft UpperRight
///   |         |
///    --Middle--
///   |         |
/// LowerLeft LowerRight
///   |         |
///    --Bottom--
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Segment {
    Top,
    UpperLeft,
    UpperRight,
    Middle,
    LowerLeft,
    LowerRight,
    Bottom,
}

impl Segment {
    /// All segments in role order. Patterns and layouts index by this order.
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self::Top,
        Self::UpperLeft,
        Self::UpperRight,
        Self::Middle,
        Self::LowerLeft,
        Self::LowerRight,
        Self::Bottom,
    ];

    /// Position of this segment in [`Segment::ALL`].
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Whether the segment lies along the x or the y axis.
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Top | Self::Middle | Self::Bottom => Orientation::Horizontal,
            Self::UpperLeft | Self::UpperRight | Self::LowerLeft | Self::LowerRight => Orientation::Vertical,
        }
    }
}

/// Segment direction. `Vertical` swaps the template axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

// =============================================================================
// Segment Polygon
// =============================================================================

/// Compute the 6 vertices of one segment.
///
/// `origin` is where template point (0,0) lands, `length` the size of the long
/// axis in pixels.
pub fn segment_polygon(
    origin: Point,
    length: i32,
    orientation: Orientation,
) -> Polygon {
    TEMPLATE.map(|(x, y)| {
        let (dx, dy) = match orientation {
            Orientation::Horizontal => (x, y),
            Orientation::Vertical => (y, x),
        };
        Point::new(scale_coord(origin.x, dx, length), scale_coord(origin.y, dy, length))
    })
}

#[inline]
const fn scale_coord(
    origin: i32,
    t: i32,
    length: i32,
) -> i32 {
    (origin * TEMPLATE_LENGTH + t * length) / TEMPLATE_LENGTH
}

// =============================================================================
// Digit Layout
// =============================================================================

/// Derived measurements and polygons for one digit column.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DigitLayout {
    /// Left edge of the digit inside its column.
    pub x_top: i32,
    /// Top edge of the digit inside its column.
    pub y_top: i32,
    /// Full digit height (two vertical segments plus gaps).
    pub height: i32,
    /// Length of the horizontal segments.
    pub width: i32,
    /// Spacing between neighbouring segments.
    pub gap: i32,
    /// Polygons in [`Segment::ALL`] order.
    pub polygons: [Polygon; SEGMENT_COUNT],
}

impl DigitLayout {
    /// Polygon for one segment role.
    #[inline]
    pub const fn polygon(
        &self,
        segment: Segment,
    ) -> &Polygon {
        &self.polygons[segment.index()]
    }
}

/// Lay out the seven segments of a digit for a column `bounding_height` pixels tall.
///
/// Degenerate heights do not fail: `height` and `width` are floored at 1.
pub fn layout_digit(bounding_height: u32) -> DigitLayout {
    let h = bounding_height as i32;

    let x_top = h / 10 + 5;
    let y_top = x_top;
    let height = (h - y_top - 5 * (h / 40) - 2 * (h / 20)).max(1);
    let width = (height / 2).max(1);
    let gap = height / 40;
    let half = height / 2;

    let place = |segment: Segment, x: i32, y: i32, length: i32| {
        segment_polygon(Point::new(x, y), length, segment.orientation())
    };

    let polygons = [
        place(Segment::Top, x_top + 2 * gap, y_top + gap, width),
        place(Segment::UpperLeft, x_top + gap, y_top + 2 * gap, half),
        place(Segment::UpperRight, x_top + 3 * gap + width, y_top + 2 * gap, half),
        place(Segment::Middle, x_top + 2 * gap, y_top + 3 * gap + half, width),
        place(Segment::LowerLeft, x_top + gap, y_top + 4 * gap + half, half),
        place(Segment::LowerRight, x_top + 3 * gap + width, y_top + 4 * gap + half, half),
        place(Segment::Bottom, x_top + 2 * gap, y_top + 5 * gap + height, width),
    ];

    DigitLayout {
        x_top,
        y_top,
        height,
        width,
        gap,
        polygons,
    }
}

// =============================================================================
// Separator Layout
// =============================================================================

/// Bounding boxes of the upper and lower separator dots for a column of the given size.
pub fn layout_separator(
    bounding_height: u32,
    bounding_width: u32,
) -> [Rectangle; 2] {
    let h = bounding_height as i32;
    let w = bounding_width as i32;

    let radius = (h / 20).max(1);
    let distance = h / 6;
    let center = Point::new(w / 2, h / 2);

    [
        dot_bounds(center - Point::new(0, distance), radius),
        dot_bounds(center + Point::new(0, distance), radius),
    ]
}

fn dot_bounds(
    center: Point,
    radius: i32,
) -> Rectangle {
    Rectangle::new(center - Point::new(radius, radius), Size::new_equal((2 * radius) as u32))
}

// =============================================================================
// Tests
// =============================================================================
