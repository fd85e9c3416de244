//! Popup state management with time-based expiration.
//!
//! Each popup variant holds its start time for expiration checking.

use std::time::Instant;

use crate::timing::POPUP_DURATION;

/// Active status popup with its start time.
///
/// Only one popup shows at a time; a new one replaces the old.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "24H TIME" / "12H TIME" after toggling the time format.
    Mode(Instant),
    /// "DATE ON" / "DATE OFF" after toggling the date display.
    Date(Instant),
    /// "HEIGHT nnn" after growing or shrinking the row.
    Height(Instant),
    /// "COLOR #rrggbb" after the chooser was confirmed.
    Color(Instant),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Mode(t) | Self::Date(t) | Self::Height(t) | Self::Color(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }
}
