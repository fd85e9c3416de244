//! Formatting the current time or date into the six symbols the row shows.

use core::fmt::Write;

use chrono::{Datelike, Timelike};
use clap::ValueEnum;
use heapless::String;
use segclock_common::config::DIGIT_COUNT;

/// Hour format for the time display.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum TimeMode {
    /// `HHMMSS`, 00-23 hours.
    #[default]
    #[value(name = "24h")]
    H24,
    /// `HHMMSS`, 01-12 hours, no am/pm marker.
    #[value(name = "12h")]
    H12,
}

impl TimeMode {
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::H24 => Self::H12,
            Self::H12 => Self::H24,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::H24 => "24H TIME",
            Self::H12 => "12H TIME",
        }
    }
}

/// What the row shows: the time in one of the hour formats, or the date.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ClockFace {
    pub mode: TimeMode,
    pub show_date: bool,
}

impl ClockFace {
    pub const fn new(
        mode: TimeMode,
        show_date: bool,
    ) -> Self {
        Self { mode, show_date }
    }

    pub const fn toggle_mode(&mut self) { self.mode = self.mode.toggle(); }

    pub const fn toggle_date(&mut self) { self.show_date = !self.show_date; }

    /// Format `now` as `DDMMYY` when showing the date, else `HHMMSS`.
    pub fn format<T>(
        &self,
        now: &T,
    ) -> String<DIGIT_COUNT>
    where
        T: Datelike + Timelike,
    {
        let (a, b, c) = if self.show_date {
            (now.day(), now.month(), now.year().rem_euclid(100) as u32)
        } else {
            let hour = match self.mode {
                TimeMode::H24 => now.hour(),
                TimeMode::H12 => now.hour12().1,
            };
            (hour, now.minute(), now.second())
        };

        let mut s = String::new();
        write!(s, "{a:02}{b:02}{c:02}").ok();
        s
    }
}
