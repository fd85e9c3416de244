//! Color constants and color parsing for the clock display.
//!
//! Colors are `Rgb565` throughout, the native format of the
//! `embedded-graphics` targets the canvases draw onto. Standard colors come
//! from the `RgbColor` trait constants.
//!
//! User supplied colors (command line, color chooser) go through
//! [`parse_color`], which accepts `#rrggbb`, `rrggbb`, `#rgb` and a handful of
//! color names.

use core::fmt::Write;

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};
use heapless::String;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Background behind every slot column.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Popup text and borders.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Default segment color, like a vintage LED display.
pub const RED: Rgb565 = Rgb565::RED;

pub const GREEN: Rgb565 = Rgb565::GREEN;

pub const BLUE: Rgb565 = Rgb565::BLUE;

pub const YELLOW: Rgb565 = Rgb565::YELLOW;

pub const CYAN: Rgb565 = Rgb565::CYAN;

pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors
// =============================================================================

/// Amber, the color of vacuum fluorescent clock displays.
/// RGB565: (31, 40, 0).
pub const AMBER: Rgb565 = Rgb565::new(31, 40, 0);

/// Orange. RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for popup backgrounds. RGB565: (4, 8, 4).
pub const DARK_GRAY: Rgb565 = Rgb565::new(4, 8, 4);

// =============================================================================
// Parsing
// =============================================================================

/// Reasons a color string could not be parsed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ParseColorError {
    #[error("empty color")]
    Empty,
    #[error("expected 3 or 6 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit {0:?}")]
    BadDigit(char),
}

const NAMED_COLORS: [(&str, Rgb565); 11] = [
    ("black", BLACK),
    ("white", WHITE),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("cyan", CYAN),
    ("magenta", MAGENTA),
    ("amber", AMBER),
    ("orange", ORANGE),
    ("gray", DARK_GRAY),
];

/// Parse a color name or hex string.
pub fn parse_color(input: &str) -> Result<Rgb565, ParseColorError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some((_, color)) = NAMED_COLORS.iter().find(|(name, _)| name.eq_ignore_ascii_case(input)) {
        return Ok(*color);
    }

    let hex = input.strip_prefix('#').unwrap_or(input);
    let count = hex.chars().count();
    if count != 3 && count != 6 {
        return Err(ParseColorError::BadLength(count));
    }

    let mut nibbles = [0u8; 6];
    for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
        *slot = c.to_digit(16).ok_or(ParseColorError::BadDigit(c))? as u8;
    }

    let [r, g, b] = if count == 3 {
        [nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17]
    } else {
        [
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ]
    };

    Ok(Rgb565::from(Rgb888::new(r, g, b)))
}

/// Format a color as `#rrggbb` (after widening from RGB565).
pub fn to_hex(color: Rgb565) -> String<7> {
    let wide = Rgb888::from(color);
    let mut s = String::new();
    write!(s, "#{:02x}{:02x}{:02x}", wide.r(), wide.g(), wide.b()).ok();
    s
}

// =============================================================================
// Tests
// =============================================================================
