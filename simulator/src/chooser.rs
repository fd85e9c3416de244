//! Palette color chooser.
//!
//! The chooser is modal: while it is open the main loop routes arrow keys,
//! `Return` and `Escape` here. Closing it yields `Some(color)` on confirm and
//! `None` on cancel, the same contract as a desktop color dialog.

use embedded_graphics::pixelcolor::Rgb565;
use segclock_common::colors::{AMBER, BLUE, CYAN, GREEN, MAGENTA, ORANGE, RED, WHITE, YELLOW};

/// Colors offered by the chooser, in cycling order.
pub const PALETTE: [Rgb565; 9] = [RED, ORANGE, AMBER, YELLOW, GREEN, CYAN, BLUE, MAGENTA, WHITE];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ColorChooser {
    selected: Option<usize>,
}

impl ColorChooser {
    pub const fn new() -> Self { Self { selected: None } }

    /// Open the chooser with `current` preselected, or the first palette
    /// entry when `current` is not in the palette.
    pub fn open(
        &mut self,
        current: Rgb565,
    ) {
        let index = PALETTE.iter().position(|&c| c == current).unwrap_or(0);
        self.selected = Some(index);
    }

    #[inline]
    pub const fn is_open(&self) -> bool { self.selected.is_some() }

    /// Index of the highlighted swatch, if open.
    #[inline]
    pub const fn selected_index(&self) -> Option<usize> { self.selected }

    /// Highlighted color, if open.
    pub fn selected(&self) -> Option<Rgb565> { self.selected.map(|i| PALETTE[i]) }

    pub fn next(&mut self) {
        if let Some(i) = self.selected.as_mut() {
            *i = (*i + 1) % PALETTE.len();
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.selected.as_mut() {
            *i = (*i + PALETTE.len() - 1) % PALETTE.len();
        }
    }

    /// Close and return the highlighted color.
    pub fn confirm(&mut self) -> Option<Rgb565> { self.selected.take().map(|i| PALETTE[i]) }

    /// Close without choosing.
    pub fn cancel(&mut self) -> Option<Rgb565> {
        self.selected = None;
        None
    }
}
