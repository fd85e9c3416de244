//! Display controller for the six digit slots and two separator slots.
//!
//! The controller owns one [`Surface`] per slot column and drives it with
//! two kinds of stimulus:
//!
//! | Stimulus | Entry point | Effect |
//! |----------|-------------|--------|
//! | Timer tick | [`DisplayController::update`] | Segment visibility from the symbol table, separator blink toggle |
//! | Resize | [`DisplayController::on_resize`] | Full rebuild, only if the size changed |
//! | Recolor | [`DisplayController::set_color`] | Full rebuild, always |
//!
//! # Rebuild Pass
//!
//! A rebuild clears every surface and recreates all shapes from the geometry
//! module in the current color, hidden. It then reapplies the pattern each
//! digit slot last showed and the current blink state, so a resize or recolor
//! never blanks the display. Every pass covers all eight slots.
//!
//! # Blink
//!
//! The blink flag flips on every `update`, whatever time value is shown. The
//! blink rate is therefore set entirely by how often the host ticks.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::{DIGIT_COUNT, SEPARATOR_COUNT};
use crate::geometry::{SEGMENT_COUNT, Segment, layout_digit, layout_separator};
use crate::surface::Surface;
use crate::symbols::{SegmentPattern, Symbol, lookup};

// =============================================================================
// Controller State
// =============================================================================

/// Phase of the controller. Passes run to completion inside one call, so
/// callers only ever observe `Idle`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Rebuilding,
}

// =============================================================================
// Slots
// =============================================================================

struct DigitSlot<S: Surface> {
    surface: S,
    segments: Option<[S::Handle; SEGMENT_COUNT]>,
    pattern: SegmentPattern,
}

impl<S: Surface> DigitSlot<S> {
    const fn new(surface: S) -> Self {
        Self {
            surface,
            segments: None,
            pattern: SegmentPattern::BLANK,
        }
    }

    fn rebuild(
        &mut self,
        color: Rgb565,
    ) {
        self.surface.clear_all();

        let layout = layout_digit(self.surface.size().height);
        let surface = &mut self.surface;
        let handles = layout.polygons.map(|points| {
            let handle = surface.create_polygon(&points, color);
            surface.set_visible(handle, false);
            handle
        });

        self.segments = Some(handles);
        self.show(self.pattern);
    }

    fn show(
        &mut self,
        pattern: SegmentPattern,
    ) {
        self.pattern = pattern;
        if let Some(handles) = self.segments {
            for (segment, handle) in Segment::ALL.into_iter().zip(handles) {
                self.surface.set_visible(handle, pattern.is_lit(segment));
            }
        }
    }
}

struct SeparatorSlot<S: Surface> {
    surface: S,
    dots: Option<[S::Handle; 2]>,
}

impl<S: Surface> SeparatorSlot<S> {
    const fn new(surface: S) -> Self { Self { surface, dots: None } }

    fn rebuild(
        &mut self,
        color: Rgb565,
        visible: bool,
    ) {
        self.surface.clear_all();

        let size = self.surface.size();
        let surface = &mut self.surface;
        let dots = layout_separator(size.height, size.width).map(|bounds| surface.create_oval(bounds, color));

        self.dots = Some(dots);
        self.show(visible);
    }

    fn show(
        &mut self,
        visible: bool,
    ) {
        if let Some(dots) = self.dots {
            for dot in dots {
                self.surface.set_visible(dot, visible);
            }
        }
    }
}

// =============================================================================
// Display Controller
// =============================================================================

/// Owns the digit row and keeps its shapes in sync with size, color and the
/// symbols to show.
pub struct DisplayController<S: Surface> {
    digits: [DigitSlot<S>; DIGIT_COUNT],
    separators: [SeparatorSlot<S>; SEPARATOR_COUNT],
    color: Rgb565,

    /// Last size reported through `on_resize` (initially the first digit surface's size).
    size: Size,

    /// Separator dots shown after the last update.
    blink_on: bool,

    state: ControllerState,

    /// Completed rebuild passes, including the initial one.
    rebuilds: u32,
}

impl<S: Surface> DisplayController<S> {
    /// Take ownership of the slot surfaces and draw the initial (blank) row.
    pub fn new(
        digits: [S; DIGIT_COUNT],
        separators: [S; SEPARATOR_COUNT],
        color: Rgb565,
    ) -> Self {
        let size = digits[0].size();
        let mut controller = Self {
            digits: digits.map(DigitSlot::new),
            separators: separators.map(SeparatorSlot::new),
            color,
            size,
            blink_on: false,
            state: ControllerState::Idle,
            rebuilds: 0,
        };
        controller.rebuild();
        controller
    }

    /// Show one symbol per digit slot, then toggle the separators.
    ///
    /// Item `i` drives slot `i`. Extra items are ignored and missing items
    /// leave their slots alone. A symbol outside the table also leaves its
    /// slot showing whatever it showed before.
    pub fn update<I>(
        &mut self,
        symbols: I,
    ) where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        for (index, (slot, symbol)) in self.digits.iter_mut().zip(symbols).enumerate() {
            let symbol = symbol.into();
            match lookup(symbol) {
                Some(pattern) => slot.show(pattern),
                None => log::trace!("slot {index}: ignoring undisplayable {symbol:?}"),
            }
        }

        self.blink_on = !self.blink_on;
        let visible = self.blink_on;
        for separator in &mut self.separators {
            separator.show(visible);
        }
    }

    /// Handle a size notification from the host.
    ///
    /// Returns `true` if the size changed and the row was rebuilt. Hosts may
    /// repeat notifications freely; an unchanged size does nothing.
    pub fn on_resize(
        &mut self,
        size: Size,
    ) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        self.rebuild();
        true
    }

    /// Change the display color. Always rebuilds the whole row.
    pub fn set_color(
        &mut self,
        color: Rgb565,
    ) {
        self.color = color;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.state = ControllerState::Rebuilding;
        log::debug!(
            "rebuilding display: {}x{} pass {}",
            self.size.width,
            self.size.height,
            self.rebuilds + 1
        );

        for slot in &mut self.digits {
            slot.rebuild(self.color);
        }
        for separator in &mut self.separators {
            separator.rebuild(self.color, self.blink_on);
        }

        self.rebuilds = self.rebuilds.wrapping_add(1);
        self.state = ControllerState::Idle;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn color(&self) -> Rgb565 { self.color }

    #[inline]
    pub const fn state(&self) -> ControllerState { self.state }

    /// Last size accepted by [`on_resize`](Self::on_resize).
    #[inline]
    pub const fn size(&self) -> Size { self.size }

    /// Whether the separator dots are currently shown.
    #[inline]
    pub const fn separators_visible(&self) -> bool { self.blink_on }

    /// Number of completed rebuild passes.
    #[inline]
    pub const fn rebuilds(&self) -> u32 { self.rebuilds }

    /// Pattern currently shown by digit slot `index`.
    pub fn pattern(
        &self,
        index: usize,
    ) -> Option<SegmentPattern> {
        self.digits.get(index).map(|slot| slot.pattern)
    }

    /// Digit surfaces, left to right.
    pub fn digit_surfaces(&self) -> impl Iterator<Item = &S> { self.digits.iter().map(|slot| &slot.surface) }

    /// Mutable digit surfaces, for hosts that position or resize them.
    pub fn digit_surfaces_mut(&mut self) -> impl Iterator<Item = &mut S> {
        self.digits.iter_mut().map(|slot| &mut slot.surface)
    }

    /// Separator surfaces, left to right.
    pub fn separator_surfaces(&self) -> impl Iterator<Item = &S> {
        self.separators.iter().map(|slot| &slot.surface)
    }

    /// Mutable separator surfaces, for hosts that position or resize them.
    pub fn separator_surfaces_mut(&mut self) -> impl Iterator<Item = &mut S> {
        self.separators.iter_mut().map(|slot| &mut slot.surface)
    }

    /// Every surface: digits first, then separators.
    pub fn surfaces(&self) -> impl Iterator<Item = &S> { self.digit_surfaces().chain(self.separator_surfaces()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::colors::{GREEN, RED};
    use crate::geometry::Polygon;
    use crate::symbols::lookup_char;

    // -------------------------------------------------------------------------
    // Recording Surface
    // -------------------------------------------------------------------------

    #[derive(Clone, Debug, PartialEq)]
    enum Recorded {
        Polygon(Vec<Point>),
        Oval(Rectangle),
    }

    #[derive(Clone, Debug)]
    struct RecordedShape {
        kind: Recorded,
        color: Rgb565,
        visible: bool,
    }

    /// Fake surface that records everything the controller asks of it.
    #[derive(Default)]
    struct RecordingSurface {
        size: Size,
        shapes: Vec<RecordedShape>,
        clears: usize,
    }

    impl RecordingSurface {
        fn sized(size: Size) -> Self {
            Self {
                size,
                ..Self::default()
            }
        }

        fn visibility(&self) -> Vec<bool> { self.shapes.iter().map(|s| s.visible).collect() }

        fn push(
            &mut self,
            kind: Recorded,
            color: Rgb565,
        ) -> usize {
            self.shapes.push(RecordedShape {
                kind,
                color,
                visible: true,
            });
            self.shapes.len() - 1
        }
    }

    impl Surface for RecordingSurface {
        type Handle = usize;

        fn create_polygon(
            &mut self,
            points: &[Point],
            color: Rgb565,
        ) -> usize {
            self.push(Recorded::Polygon(points.to_vec()), color)
        }

        fn create_oval(
            &mut self,
            bounds: Rectangle,
            color: Rgb565,
        ) -> usize {
            self.push(Recorded::Oval(bounds), color)
        }

        fn set_visible(
            &mut self,
            handle: usize,
            visible: bool,
        ) {
            self.shapes[handle].visible = visible;
        }

        fn clear_all(&mut self) {
            self.shapes.clear();
            self.clears += 1;
        }

        fn size(&self) -> Size { self.size }
    }

    const DIGIT_SIZE: Size = Size::new(125, 200);
    const SEPARATOR_SIZE: Size = Size::new(30, 200);

    fn controller() -> DisplayController<RecordingSurface> {
        DisplayController::new(
            core::array::from_fn(|_| RecordingSurface::sized(DIGIT_SIZE)),
            core::array::from_fn(|_| RecordingSurface::sized(SEPARATOR_SIZE)),
            RED,
        )
    }

    fn states(c: char) -> Vec<bool> { lookup_char(c).unwrap().states().to_vec() }

    /// Resize every surface, then notify the controller like a host would.
    fn resize(
        controller: &mut DisplayController<RecordingSurface>,
        height: u32,
    ) -> bool {
        let digit = Size::new(height * 125 / 200, height);
        let separator = Size::new(height * 30 / 200, height);
        for surface in controller.digit_surfaces_mut() {
            surface.size = digit;
        }
        for surface in controller.separator_surfaces_mut() {
            surface.size = separator;
        }
        controller.on_resize(digit)
    }

    // -------------------------------------------------------------------------
    // Initial Draw Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_initial_draw() {
        let controller = controller();

        assert_eq!(controller.rebuilds(), 1, "Construction is the first rebuild");
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(controller.size(), DIGIT_SIZE);

        for surface in controller.digit_surfaces() {
            assert_eq!(surface.shapes.len(), SEGMENT_COUNT, "Every digit has 7 segments");
            assert!(
                surface.shapes.iter().all(|s| !s.visible),
                "Segments start hidden until a symbol is shown"
            );
        }
        for surface in controller.separator_surfaces() {
            assert_eq!(surface.shapes.len(), 2, "Every separator has 2 dots");
            assert!(surface.shapes.iter().all(|s| matches!(s.kind, Recorded::Oval(_))));
        }
    }

    #[test]
    fn test_segments_follow_layout() {
        let controller = controller();
        let layout = layout_digit(200);

        for surface in controller.digit_surfaces() {
            let polys: Vec<Polygon> = surface
                .shapes
                .iter()
                .map(|s| match &s.kind {
                    Recorded::Polygon(points) => points.as_slice().try_into().unwrap(),
                    Recorded::Oval(_) => panic!("digit surfaces hold polygons only"),
                })
                .collect();
            assert_eq!(polys, layout.polygons.to_vec(), "Segments are created in role order");
        }
    }

    // -------------------------------------------------------------------------
    // Update Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_update_all_zeros() {
        let mut controller = controller();
        controller.update("000000".chars());

        for (index, surface) in controller.digit_surfaces().enumerate() {
            assert_eq!(surface.visibility(), vec![true, true, true, false, true, true, true]);
            assert_eq!(controller.pattern(index), lookup_char('0'));
        }
    }

    #[test]
    fn test_update_time_string() {
        let mut controller = controller();
        controller.update("235959".chars());

        let surfaces: Vec<_> = controller.digit_surfaces().collect();
        assert_eq!(surfaces[0].visibility(), vec![true, false, true, true, true, false, true]);
        assert_eq!(surfaces[5].visibility(), vec![true, true, true, true, false, true, true]);
        for (surface, c) in surfaces.iter().zip("235959".chars()) {
            assert_eq!(surface.visibility(), states(c));
        }
    }

    #[test]
    fn test_unknown_symbol_keeps_pattern() {
        let mut controller = controller();
        controller.update("555555".chars());
        controller.update("X5555?".chars());

        assert_eq!(controller.pattern(0), lookup_char('5'), "Unknown symbol must not change slot 0");
        assert_eq!(controller.pattern(5), lookup_char('5'), "Unknown symbol must not change slot 5");
        let first = controller.digit_surfaces().next().unwrap();
        assert_eq!(first.visibility(), states('5'));
    }

    #[test]
    fn test_short_and_long_input() {
        let mut controller = controller();
        controller.update("888888".chars());

        controller.update("12".chars());
        assert_eq!(controller.pattern(0), lookup_char('1'));
        assert_eq!(controller.pattern(1), lookup_char('2'));
        assert_eq!(controller.pattern(2), lookup_char('8'), "Missing positions stay unchanged");

        controller.update("0123456789".chars());
        assert_eq!(controller.pattern(5), lookup_char('5'), "Positions past slot 5 are ignored");
        assert_eq!(controller.pattern(6), None);
    }

    #[test]
    fn test_helper_symbols() {
        let mut controller = controller();
        controller.update([Symbol::Lower, Symbol::Upper, Symbol::Lower, Symbol::Upper, Symbol::Lower, Symbol::Upper]);

        assert_eq!(controller.pattern(0), lookup(Symbol::Lower));
        assert_eq!(controller.pattern(1), lookup(Symbol::Upper));
    }

    // -------------------------------------------------------------------------
    // Blink Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_blink_alternates() {
        let mut controller = controller();
        assert!(!controller.separators_visible(), "Dots start hidden");

        for tick in 0..8 {
            controller.update("123456".chars());
            let expected = tick % 2 == 0;
            assert_eq!(controller.separators_visible(), expected, "tick {tick}");
            for surface in controller.separator_surfaces() {
                assert_eq!(surface.visibility(), vec![expected, expected], "Both dots follow the flag");
            }
        }
    }

    #[test]
    fn test_blink_toggles_on_unknown_input() {
        let mut controller = controller();
        controller.update("??????".chars());
        assert!(controller.separators_visible());
        controller.update("".chars());
        assert!(!controller.separators_visible(), "Toggle is unconditional");
    }

    // -------------------------------------------------------------------------
    // Resize Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_resize_same_size_is_noop() {
        let mut controller = controller();
        assert!(!controller.on_resize(DIGIT_SIZE), "Initial size is already known");
        assert_eq!(controller.rebuilds(), 1);
    }

    #[test]
    fn test_resize_twice_rebuilds_once() {
        let mut controller = controller();

        assert!(resize(&mut controller, 400));
        assert!(!resize(&mut controller, 400), "Repeated notification must not rebuild");

        assert_eq!(controller.rebuilds(), 2);
        for surface in controller.surfaces() {
            assert_eq!(surface.clears, 2, "Initial draw plus one resize");
        }
    }

    #[test]
    fn test_resize_recomputes_geometry() {
        let mut controller = controller();
        resize(&mut controller, 400);

        let layout = layout_digit(400);
        let first = controller.digit_surfaces().next().unwrap();
        assert_eq!(first.shapes.len(), SEGMENT_COUNT, "Old shapes are discarded");
        assert_eq!(first.shapes[0].kind, Recorded::Polygon(layout.polygons[0].to_vec()));

        let [upper, lower] = layout_separator(400, 60);
        let separator = controller.separator_surfaces().next().unwrap();
        assert_eq!(separator.shapes[0].kind, Recorded::Oval(upper));
        assert_eq!(separator.shapes[1].kind, Recorded::Oval(lower));
    }

    #[test]
    fn test_resize_keeps_symbols_and_blink() {
        let mut controller = controller();
        controller.update("123456".chars());
        resize(&mut controller, 300);

        for (surface, c) in controller.digit_surfaces().zip("123456".chars()) {
            assert_eq!(surface.visibility(), states(c), "Resize must not blank the display");
        }
        assert!(controller.separators_visible(), "Rebuild does not toggle the blink");
        for surface in controller.separator_surfaces() {
            assert_eq!(surface.visibility(), vec![true, true]);
        }
    }

    // -------------------------------------------------------------------------
    // Recolor Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_color_recolors_everything() {
        let mut controller = controller();
        controller.update("888888".chars());
        controller.set_color(GREEN);

        assert_eq!(controller.color(), GREEN);
        assert_eq!(controller.rebuilds(), 2, "Recolor is a full rebuild");
        for surface in controller.surfaces() {
            assert!(surface.shapes.iter().all(|s| s.color == GREEN), "Every shape takes the new color");
        }
        for surface in controller.digit_surfaces() {
            assert_eq!(surface.visibility(), vec![true; SEGMENT_COUNT]);
        }
    }

    #[test]
    fn test_set_same_color_still_rebuilds() {
        let mut controller = controller();
        controller.set_color(RED);
        assert_eq!(controller.rebuilds(), 2);
    }
}
