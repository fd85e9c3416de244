//! Status popup and color chooser overlays.
//!
//! Both are centred on the display and sized from its bounding box, since the
//! window size follows the digit height chosen on the command line.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text, TextStyleBuilder};

use crate::chooser::{ColorChooser, PALETTE};
use crate::styles::{CENTERED, HINT_TEXT, PANEL, POPUP_TEXT, SELECTION, SWATCH_BORDER};

const POPUP_WIDTH: u32 = 240;
const POPUP_HEIGHT: u32 = 44;

const SWATCH_SIZE: u32 = 28;
const SWATCH_GAP: u32 = 8;
const CHOOSER_PADDING: u32 = 12;
const HINT_HEIGHT: u32 = 22;

/// Centre `size` inside `area`.
fn centered(
    area: Rectangle,
    size: Size,
) -> Rectangle {
    let x = area.top_left.x + (area.size.width.saturating_sub(size.width) / 2) as i32;
    let y = area.top_left.y + (area.size.height.saturating_sub(size.height) / 2) as i32;
    Rectangle::new(Point::new(x, y), size)
}

/// Draw a one-line status popup centred on the display.
pub fn draw_popup<D>(
    display: &mut D,
    message: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let panel = centered(display.bounding_box(), Size::new(POPUP_WIDTH, POPUP_HEIGHT));
    panel.into_styled(PANEL).draw(display).ok();

    let style = TextStyleBuilder::from(&CENTERED).baseline(Baseline::Middle).build();
    Text::with_text_style(message, panel.center(), POPUP_TEXT, style)
        .draw(display)
        .ok();
}

/// Draw the palette with the highlighted swatch outlined. Nothing is drawn
/// when the chooser is closed.
pub fn draw_chooser<D>(
    display: &mut D,
    chooser: &ColorChooser,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(selected) = chooser.selected_index() else {
        return;
    };

    let count = PALETTE.len() as u32;
    let strip_width = count * SWATCH_SIZE + (count - 1) * SWATCH_GAP;
    let panel_size = Size::new(
        strip_width + 2 * CHOOSER_PADDING,
        SWATCH_SIZE + HINT_HEIGHT + 3 * CHOOSER_PADDING,
    );
    let panel = centered(display.bounding_box(), panel_size);
    panel.into_styled(PANEL).draw(display).ok();

    let origin = panel.top_left + Point::new(CHOOSER_PADDING as i32, CHOOSER_PADDING as i32);
    for (index, &color) in PALETTE.iter().enumerate() {
        let offset = index as i32 * (SWATCH_SIZE + SWATCH_GAP) as i32;
        let swatch = Rectangle::new(origin + Point::new(offset, 0), Size::new_equal(SWATCH_SIZE));

        swatch.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
        swatch.into_styled(SWATCH_BORDER).draw(display).ok();
        if index == selected {
            swatch.offset(3).into_styled(SELECTION).draw(display).ok();
        }
    }

    let hint_y = origin.y + (SWATCH_SIZE + CHOOSER_PADDING + HINT_HEIGHT / 2) as i32;
    let style = TextStyleBuilder::from(&CENTERED).baseline(Baseline::Middle).build();
    Text::with_text_style("< > pick  ENTER ok  ESC cancel", Point::new(panel.center().x, hint_y), HINT_TEXT, style)
        .draw(display)
        .ok();
}
