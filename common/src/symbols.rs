//! Symbol to segment pattern lookup.
//!
//! Each displayable symbol maps to seven on/off states in [`Segment::ALL`] order:
//!
//! ```text
//!    ---1---
//!   |       |
//!   2       3
//!   |       |
//!    ---4---
//!   |       |
//!   5       6
//!   |       |
//!    ---7---
//! ```
//!
//! The table is total over its domain: digits, upper-case hex letters, blank,
//! low dash, mid dash, vertical bar and the two helper symbols
//! [`Symbol::Lower`] and [`Symbol::Upper`]. Anything else looks up to `None`,
//! which the controller treats as "keep what is shown".

use crate::geometry::{SEGMENT_COUNT, Segment};

// =============================================================================
// Segment Pattern
// =============================================================================

/// On/off state of the seven segments of one digit.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SegmentPattern([bool; SEGMENT_COUNT]);

impl SegmentPattern {
    /// All segments off.
    pub const BLANK: Self = Self([false; SEGMENT_COUNT]);

    /// Build a pattern from `(top, upper_left, upper_right, middle, lower_left, lower_right, bottom)`.
    #[inline]
    pub const fn new(states: [bool; SEGMENT_COUNT]) -> Self { Self(states) }

    /// Whether one segment is lit.
    #[inline]
    pub const fn is_lit(
        &self,
        segment: Segment,
    ) -> bool {
        self.0[segment.index()]
    }

    /// Raw states in [`Segment::ALL`] order.
    #[inline]
    pub const fn states(&self) -> [bool; SEGMENT_COUNT] { self.0 }

    /// Number of lit segments.
    pub fn lit_count(&self) -> usize { self.0.iter().filter(|on| **on).count() }
}

// =============================================================================
// Symbols
// =============================================================================

/// Something a digit slot can be asked to show.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Symbol {
    /// A character. Only the ones in the table are displayable.
    Char(char),
    /// Bottom three segments plus middle.
    Lower,
    /// Top three segments plus middle.
    Upper,
}

impl From<char> for Symbol {
    fn from(c: char) -> Self { Self::Char(c) }
}

const T: bool = true;
const F: bool = false;

const PATTERN_LOWER: SegmentPattern = SegmentPattern::new([F, F, F, T, T, T, T]);
const PATTERN_UPPER: SegmentPattern = SegmentPattern::new([T, T, T, T, F, F, F]);

/// Look up the segment pattern for a symbol.
///
/// Returns `None` for symbols outside the table.
#[inline]
pub const fn lookup(symbol: Symbol) -> Option<SegmentPattern> {
    match symbol {
        Symbol::Char(c) => lookup_char(c),
        Symbol::Lower => Some(PATTERN_LOWER),
        Symbol::Upper => Some(PATTERN_UPPER),
    }
}

/// Look up the segment pattern for a character.
pub const fn lookup_char(c: char) -> Option<SegmentPattern> {
    let states = match c {
        '0' => [T, T, T, F, T, T, T],
        '1' => [F, F, T, F, F, T, F],
        '2' => [T, F, T, T, T, F, T],
        '3' => [T, F, T, T, F, T, T],
        '4' => [F, T, T, T, F, T, F],
        '5' => [T, T, F, T, F, T, T],
        '6' => [T, T, F, T, T, T, T],
        '7' => [T, F, T, F, F, T, F],
        '8' => [T, T, T, T, T, T, T],
        '9' => [T, T, T, T, F, T, T],
        'A' => [T, T, T, T, T, T, F],
        'B' => [F, T, F, T, T, T, T],
        'C' => [T, T, F, F, T, F, T],
        'D' => [F, F, T, T, T, T, T],
        'E' => [T, T, F, T, T, F, T],
        'F' => [T, T, F, T, T, F, F],
        ' ' => [F, F, F, F, F, F, F],
        '_' => [F, F, F, F, F, F, T],
        '-' => [F, F, F, T, F, F, F],
        '|' => [F, T, F, F, T, F, F],
        _ => return None,
    };
    Some(SegmentPattern::new(states))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(c: char) -> [bool; SEGMENT_COUNT] { lookup(Symbol::from(c)).unwrap().states() }

    #[test]
    fn test_digits() {
        assert_eq!(pattern('0'), [T, T, T, F, T, T, T]);
        assert_eq!(pattern('1'), [F, F, T, F, F, T, F]);
        assert_eq!(pattern('2'), [T, F, T, T, T, F, T]);
        assert_eq!(pattern('3'), [T, F, T, T, F, T, T]);
        assert_eq!(pattern('4'), [F, T, T, T, F, T, F]);
        assert_eq!(pattern('5'), [T, T, F, T, F, T, T]);
        assert_eq!(pattern('6'), [T, T, F, T, T, T, T]);
        assert_eq!(pattern('7'), [T, F, T, F, F, T, F]);
        assert_eq!(pattern('8'), [T; SEGMENT_COUNT], "8 should light every segment");
        assert_eq!(pattern('9'), [T, T, T, T, F, T, T]);
    }

    #[test]
    fn test_hex_letters() {
        assert_eq!(pattern('A'), [T, T, T, T, T, T, F]);
        assert_eq!(pattern('B'), [F, T, F, T, T, T, T]);
        assert_eq!(pattern('C'), [T, T, F, F, T, F, T]);
        assert_eq!(pattern('D'), [F, F, T, T, T, T, T]);
        assert_eq!(pattern('E'), [T, T, F, T, T, F, T]);
        assert_eq!(pattern('F'), [T, T, F, T, T, F, F]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(pattern(' '), [F; SEGMENT_COUNT], "blank should light nothing");
        assert_eq!(pattern('_'), [F, F, F, F, F, F, T], "low dash is bottom only");
        assert_eq!(pattern('-'), [F, F, F, T, F, F, F], "mid dash is middle only");
        assert_eq!(pattern('|'), [F, T, F, F, T, F, F], "bar is both left verticals");
    }

    #[test]
    fn test_helper_symbols() {
        let lower = lookup(Symbol::Lower).unwrap();
        let upper = lookup(Symbol::Upper).unwrap();
        assert_eq!(lower.states(), [F, F, F, T, T, T, T]);
        assert_eq!(upper.states(), [T, T, T, T, F, F, F]);
        assert_eq!(lower.lit_count(), 4);
        assert_eq!(upper.lit_count(), 4);
    }

    #[test]
    fn test_outside_domain() {
        for c in ['X', 'a', 'f', 'G', ':', '\n', 'é'] {
            assert_eq!(lookup(Symbol::Char(c)), None, "{c:?} should not be displayable");
        }
    }

    #[test]
    fn test_is_lit_matches_states() {
        let five = lookup_char('5').unwrap();
        for segment in Segment::ALL {
            assert_eq!(five.is_lit(segment), five.states()[segment.index()]);
        }
        assert!(!five.is_lit(Segment::UpperRight));
        assert!(five.is_lit(Segment::LowerRight));
    }

    #[test]
    fn test_blank_is_default() {
        assert_eq!(SegmentPattern::default(), SegmentPattern::BLANK);
        assert_eq!(Some(SegmentPattern::BLANK), lookup_char(' '));
    }
}
