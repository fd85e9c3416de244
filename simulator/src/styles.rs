//! Text and fill styles shared by the overlay widgets.
//!
//! Styles are `const` so nothing is constructed per frame.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT};
use segclock_common::colors::{BLACK, DARK_GRAY, WHITE};

// =============================================================================
// Text
// =============================================================================

/// Centered text alignment for popup and chooser labels.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Popup message text (`ProFont` 18pt).
pub const POPUP_TEXT: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Chooser hint line (`ProFont` 14pt).
pub const HINT_TEXT: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

// =============================================================================
// Fills
// =============================================================================

/// Popup frame: dark panel with a white border.
pub const PANEL: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(DARK_GRAY)
    .stroke_color(WHITE)
    .stroke_width(2)
    .build();

/// Outline drawn around the selected chooser swatch.
pub const SELECTION: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 3);

/// Thin border that keeps dark swatches visible on the panel.
pub const SWATCH_BORDER: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 1);
