//! Column placement for the digit row.
//!
//! Splits a row of a given height into six digit columns and two separator
//! columns. Hosts position their canvases from this before notifying the
//! controller of a resize.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{
    DIGIT_COLUMN_WIDTH,
    DIGIT_COUNT,
    INITIAL_HEIGHT,
    PADDING_X,
    PADDING_Y,
    SEPARATOR_AFTER,
    SEPARATOR_COLUMN_WIDTH,
    SEPARATOR_COUNT,
};

/// Width of one digit column for a row `height` pixels tall.
#[inline]
pub const fn digit_width(height: u32) -> u32 { height * DIGIT_COLUMN_WIDTH / INITIAL_HEIGHT }

/// Width of one separator column for a row `height` pixels tall.
#[inline]
pub const fn separator_width(height: u32) -> u32 { height * SEPARATOR_COLUMN_WIDTH / INITIAL_HEIGHT }

/// Width of the whole row without padding.
pub const fn row_width(height: u32) -> u32 {
    DIGIT_COUNT as u32 * digit_width(height) + SEPARATOR_COUNT as u32 * separator_width(height)
}

/// Display size needed to show a row `height` pixels tall, padding included.
pub const fn window_size(height: u32) -> Size {
    Size::new(row_width(height) + 2 * PADDING_X, height + 2 * PADDING_Y)
}

/// Column rectangles of one row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RowLayout {
    pub digits: [Rectangle; DIGIT_COUNT],
    pub separators: [Rectangle; SEPARATOR_COUNT],
}

/// Place the row `height` pixels tall, centred inside `area`.
pub fn layout_row(
    area: Rectangle,
    height: u32,
) -> RowLayout {
    let digit = Size::new(digit_width(height), height);
    let separator = Size::new(separator_width(height), height);

    let left = area.top_left.x + (area.size.width.saturating_sub(row_width(height)) / 2) as i32;
    let top = area.top_left.y + (area.size.height.saturating_sub(height) / 2) as i32;

    let mut digits = [Rectangle::zero(); DIGIT_COUNT];
    let mut separators = [Rectangle::zero(); SEPARATOR_COUNT];
    let mut x = left;
    let mut next_separator = 0;

    for (index, slot) in digits.iter_mut().enumerate() {
        *slot = Rectangle::new(Point::new(x, top), digit);
        x += digit.width as i32;

        if next_separator < SEPARATOR_COUNT && SEPARATOR_AFTER[next_separator] == index {
            separators[next_separator] = Rectangle::new(Point::new(x, top), separator);
            x += separator.width as i32;
            next_separator += 1;
        }
    }

    RowLayout { digits, separators }
}
