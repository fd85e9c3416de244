//! Desktop host for the seven-segment clock.
//!
//! Runs the clock in an `embedded-graphics-simulator` window. The digit row is
//! driven by [`DisplayController`] over one [`ShapeCanvas`] per column; this
//! binary supplies the time source, the tick timer, keyboard handling and
//! the color chooser.
//!
//! # Keys
//!
//! | Key            | Action                                    |
//! |----------------|-------------------------------------------|
//! | `C`            | Open the color chooser                    |
//! | `Left`/`Right` | Cycle chooser colors                      |
//! | `Return`       | Apply the highlighted color               |
//! | `Escape`       | Close the chooser, or quit when closed    |
//! | `M`            | Toggle 24h / 12h time                     |
//! | `D`            | Toggle date display                       |
//! | `Up`/`Down`    | Grow / shrink the digit row               |
//! | `Q`            | Quit                                      |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod chooser;
mod cli;
mod clock;
mod popup;
mod styles;
mod timing;
mod widgets;

use std::thread;
use std::time::Instant;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use segclock_common::colors::{BLACK, to_hex};
use segclock_common::config::{HEIGHT_STEP, MIN_HEIGHT};
use segclock_common::layout::{layout_row, window_size};
use segclock_common::{DisplayController, ShapeCanvas};

use crate::chooser::ColorChooser;
use crate::cli::Cli;
use crate::clock::ClockFace;
use crate::popup::Popup;
use crate::timing::{FRAME_TIME, TICK_INTERVAL};
use crate::widgets::{draw_chooser, draw_popup};

type Controller = DisplayController<ShapeCanvas>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides the -d level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .try_init()
        .context("failed to initialise logger")?;

    info!("Starting segclock v{}", env!("CARGO_PKG_VERSION"));

    // The window cannot be resized, so it is sized for the starting height
    // and Up/Down move the row between MIN_HEIGHT and that height.
    let max_height = cli.height;
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(window_size(max_height));
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();
    let mut window = Window::new("Seven-segment clock", &output_settings);

    let mut height = max_height;
    let row = layout_row(display.bounding_box(), height);
    let mut controller = Controller::new(
        row.digits.map(ShapeCanvas::new),
        row.separators.map(ShapeCanvas::new),
        cli.color,
    );
    debug!("Digit row at {:?}, color {}", row.digits[0].size, to_hex(cli.color));

    let mut face = ClockFace::new(cli.mode, cli.date);
    let mut chooser = ColorChooser::new();
    let mut active_popup: Option<Popup> = None;
    let mut last_tick: Option<Instant> = None;
    let mut dirty = true;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if chooser.is_open() {
                        match keycode {
                            Keycode::Left => chooser.previous(),
                            Keycode::Right => chooser.next(),
                            Keycode::Return | Keycode::KpEnter if !repeat => {
                                if let Some(color) = chooser.confirm() {
                                    info!("Color set to {}", to_hex(color));
                                    controller.set_color(color);
                                    active_popup = Some(Popup::Color(Instant::now()));
                                }
                            }
                            Keycode::Escape if !repeat => {
                                chooser.cancel();
                            }
                            _ => continue,
                        }
                        dirty = true;
                        continue;
                    }

                    match keycode {
                        Keycode::Q | Keycode::Escape => return Ok(()),
                        Keycode::C if !repeat => {
                            chooser.open(controller.color());
                            active_popup = None;
                        }
                        Keycode::M if !repeat => {
                            face.toggle_mode();
                            info!("Time format: {}", face.mode.label());
                            active_popup = Some(Popup::Mode(Instant::now()));
                            // Show the new format without waiting for the next tick
                            last_tick = None;
                        }
                        Keycode::D if !repeat => {
                            face.toggle_date();
                            info!("Date display: {}", face.show_date);
                            active_popup = Some(Popup::Date(Instant::now()));
                            last_tick = None;
                        }
                        Keycode::Up => {
                            let target = (height + HEIGHT_STEP).min(max_height);
                            if target != height {
                                height = target;
                                apply_height(&mut controller, &display, height);
                                active_popup = Some(Popup::Height(Instant::now()));
                            }
                        }
                        Keycode::Down => {
                            let target = height.saturating_sub(HEIGHT_STEP).max(MIN_HEIGHT);
                            if target != height {
                                height = target;
                                apply_height(&mut controller, &display, height);
                                active_popup = Some(Popup::Height(Instant::now()));
                            }
                        }
                        _ => continue,
                    }
                    dirty = true;
                }
                _ => {}
            }
        }

        // Check popup expiration
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
            dirty = true;
        }

        // Tick: push the current time and flip the separators
        if last_tick.is_none_or(|t| t.elapsed() >= TICK_INTERVAL) {
            let text = face.format(&Local::now());
            controller.update(text.chars());
            last_tick = Some(Instant::now());
            dirty = true;
        }

        if dirty {
            display.clear(BLACK).ok();
            for canvas in controller.surfaces() {
                canvas.draw(&mut display);
            }

            if let Some(popup) = active_popup {
                draw_popup(&mut display, &popup_message(popup, &face, &controller, height));
            }
            draw_chooser(&mut display, &chooser);
            dirty = false;
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

/// Re-place every column for `height` and let the controller rebuild.
fn apply_height(
    controller: &mut Controller,
    display: &SimulatorDisplay<Rgb565>,
    height: u32,
) {
    let row = layout_row(display.bounding_box(), height);

    for (canvas, bounds) in controller.digit_surfaces_mut().zip(row.digits) {
        canvas.set_bounds(bounds);
    }
    for (canvas, bounds) in controller.separator_surfaces_mut().zip(row.separators) {
        canvas.set_bounds(bounds);
    }

    if controller.on_resize(row.digits[0].size) {
        info!("Digit height now {height}");
    }
}

fn popup_message(
    popup: Popup,
    face: &ClockFace,
    controller: &Controller,
    height: u32,
) -> String {
    match popup {
        Popup::Mode(_) => face.mode.label().to_string(),
        Popup::Date(_) => if face.show_date { "DATE ON" } else { "DATE OFF" }.to_string(),
        Popup::Height(_) => format!("HEIGHT {height}"),
        Popup::Color(_) => format!("COLOR {}", to_hex(controller.color())),
    }
}
