//! Host loop timing.
//!
//! Kept out of `segclock-common`: the core never sees wall-clock time, only
//! the `update` calls the host makes.

use std::time::Duration;

/// Frame budget (~50 FPS). Whatever is left of it after a frame is slept away.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between display updates. Each update also flips the separator
/// blink, so this is half the blink period.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// How long a status popup stays up.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);
