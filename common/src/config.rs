//! Display row configuration constants.
//!
//! The row is laid out as `d0 d1 : d2 d3 : d4 d5`, six digit columns with a
//! separator column after digit 1 and digit 3. Column widths scale with the
//! row height, keeping the proportions of the reference size below.

// =============================================================================
// Slot Counts
// =============================================================================

/// Number of digit slots (HHMMSS or DDMMYY).
pub const DIGIT_COUNT: usize = 6;

/// Number of separator slots.
pub const SEPARATOR_COUNT: usize = 2;

/// Digit index each separator follows.
pub const SEPARATOR_AFTER: [usize; SEPARATOR_COUNT] = [1, 3];

const _: () = assert!(SEPARATOR_AFTER[0] < SEPARATOR_AFTER[1]);
const _: () = assert!(SEPARATOR_AFTER[1] + 1 < DIGIT_COUNT);

// =============================================================================
// Reference Column Size
// =============================================================================

/// Row height at start-up, in pixels.
pub const INITIAL_HEIGHT: u32 = 200;

/// Digit column width at [`INITIAL_HEIGHT`].
pub const DIGIT_COLUMN_WIDTH: u32 = 125;

/// Separator column width at [`INITIAL_HEIGHT`].
pub const SEPARATOR_COLUMN_WIDTH: u32 = 30;

// =============================================================================
// Window Layout
// =============================================================================

/// Horizontal padding around the row.
pub const PADDING_X: u32 = 8;

/// Vertical padding around the row.
pub const PADDING_Y: u32 = 4;

/// Smallest row height the host lets the user shrink to.
pub const MIN_HEIGHT: u32 = 60;

/// Row height change per grow/shrink step.
pub const HEIGHT_STEP: u32 = 20;

const _: () = assert!(MIN_HEIGHT <= INITIAL_HEIGHT);
const _: () = assert!(HEIGHT_STEP > 0);
