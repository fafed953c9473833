//! Big two-digit numeral renderer
//!
//! Digits are drawn three pages tall from shared band rows. The sign has
//! its own slot left of the tens digit and only ever uses the middle page.

use crate::glyph::{BLANK_BAND, MID_MINUS, SEG_BOT, SEG_MID, SEG_TOP};
use crate::lcd::DisplayController;
use crate::traits::{DisplayError, DisplayTransport};

/// Column of the sign slot
pub const SIGN_COLUMN: u8 = 4;

/// Column of the tens digit
pub const TENS_COLUMN: u8 = 15;

/// Column of the ones digit
pub const ONES_COLUMN: u8 = 28;

/// Pages of the top, middle and bottom bands
pub const TOP_PAGE: u8 = 2;
pub const MID_PAGE: u8 = 3;
pub const BOTTOM_PAGE: u8 = 4;

/// A decimal digit, 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, or `None` if `value` is above 9
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Band rows that draw this digit
    pub const fn bands(self) -> Bands {
        DIGIT_BANDS[self.0 as usize]
    }
}

/// Row indices into the top, middle and bottom band tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bands {
    pub top: u8,
    pub mid: u8,
    pub bottom: u8,
}

const fn bands(top: u8, mid: u8, bottom: u8) -> Bands {
    Bands { top, mid, bottom }
}

/// Band composition of digits 0-9
///
/// Strokes are shared between digits in ways that do not follow a
/// seven-segment rule, so this is a lookup table and not derived.
pub const DIGIT_BANDS: [Bands; 10] = [
    bands(0, 0, 0),
    bands(1, 1, 1),
    bands(2, 2, 2),
    bands(2, 3, 3),
    bands(3, 4, 1),
    bands(4, 5, 3),
    bands(4, 6, 0),
    bands(2, 1, 1),
    bands(0, 7, 0),
    bands(0, 4, 3),
];

/// Draw a signed two-digit number
///
/// A negative number gets a minus bar in the sign slot; a positive one
/// blanks the slot so a previous minus does not linger.
///
/// # Panics
/// If `tens` or `ones` is above 9.
pub fn render_number<T: DisplayTransport>(
    lcd: &mut DisplayController<T>,
    positive: bool,
    tens: u8,
    ones: u8,
) -> Result<(), DisplayError> {
    let tens = Digit::new(tens).expect("tens digit out of range");
    let ones = Digit::new(ones).expect("ones digit out of range");

    lcd.set_position(SIGN_COLUMN, MID_PAGE)?;
    if positive {
        lcd.write_bytes(&BLANK_BAND)?;
    } else {
        lcd.write_glyph_row(&SEG_MID, MID_MINUS)?;
    }

    render_digit(lcd, TENS_COLUMN, tens)?;
    render_digit(lcd, ONES_COLUMN, ones)
}

/// Draw one big digit with its left edge at `column`
pub fn render_digit<T: DisplayTransport>(
    lcd: &mut DisplayController<T>,
    column: u8,
    digit: Digit,
) -> Result<(), DisplayError> {
    let bands = digit.bands();

    lcd.set_position(column, TOP_PAGE)?;
    lcd.write_glyph_row(&SEG_TOP, bands.top as usize)?;
    lcd.set_position(column, MID_PAGE)?;
    lcd.write_glyph_row(&SEG_MID, bands.mid as usize)?;
    lcd.set_position(column, BOTTOM_PAGE)?;
    lcd.write_glyph_row(&SEG_BOT, bands.bottom as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use proptest::prelude::*;

    fn rendered(positive: bool, tens: u8, ones: u8) -> RecordingTransport {
        let mut lcd = DisplayController::new(RecordingTransport::new());
        render_number(&mut lcd, positive, tens, ones).unwrap();
        lcd.release()
    }

    #[test]
    fn test_digit_table() {
        let expected = [
            (0, 0, 0),
            (1, 1, 1),
            (2, 2, 2),
            (2, 3, 3),
            (3, 4, 1),
            (4, 5, 3),
            (4, 6, 0),
            (2, 1, 1),
            (0, 7, 0),
            (0, 4, 3),
        ];
        for (value, &(top, mid, bottom)) in expected.iter().enumerate() {
            let digit = Digit::new(value as u8).unwrap();
            assert_eq!(digit.bands(), Bands { top, mid, bottom }, "digit {}", value);
        }
    }

    #[test]
    fn test_digit_rejects_ten() {
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
    }

    #[test]
    fn test_negative_sign_slot() {
        let log = rendered(false, 1, 2);
        let runs = log.runs();

        assert_eq!(runs[0].0, (SIGN_COLUMN, MID_PAGE));
        assert_eq!(runs[0].1, SEG_MID[MID_MINUS]);
    }

    #[test]
    fn test_positive_sign_slot() {
        let log = rendered(true, 1, 2);
        let runs = log.runs();

        assert_eq!(runs[0].0, (SIGN_COLUMN, MID_PAGE));
        assert_eq!(runs[0].1, [0u8; 12]);
    }

    #[test]
    fn test_layout_of_27() {
        let log = rendered(true, 2, 7);
        let runs = log.runs();

        assert_eq!(runs.len(), 7);
        let positions: std::vec::Vec<(u8, u8)> = runs.iter().map(|r| r.0).collect();
        assert_eq!(
            positions,
            [(4, 3), (15, 2), (15, 3), (15, 4), (28, 2), (28, 3), (28, 4)]
        );
        // 2 = (2, 2, 2), 7 = (2, 1, 1)
        assert_eq!(runs[1].1, SEG_TOP[2]);
        assert_eq!(runs[2].1, SEG_MID[2]);
        assert_eq!(runs[3].1, SEG_BOT[2]);
        assert_eq!(runs[4].1, SEG_TOP[2]);
        assert_eq!(runs[5].1, SEG_MID[1]);
        assert_eq!(runs[6].1, SEG_BOT[1]);
    }

    #[test]
    #[should_panic]
    fn test_render_rejects_out_of_range_digit() {
        let _ = rendered(true, 10, 0);
    }

    proptest! {
        #[test]
        fn prop_bands_depend_only_on_digit(
            before in (any::<bool>(), 0u8..10, 0u8..10),
            positive in any::<bool>(),
            tens in 0u8..10,
            ones in 0u8..10,
        ) {
            let mut lcd = DisplayController::new(RecordingTransport::new());
            render_number(&mut lcd, before.0, before.1, before.2).unwrap();
            let mut transport = lcd.release();
            transport.reset();

            let mut lcd = DisplayController::new(transport);
            render_number(&mut lcd, positive, tens, ones).unwrap();
            let fresh = rendered(positive, tens, ones);

            prop_assert_eq!(lcd.transport().log(), fresh.log());

            let t = DIGIT_BANDS[tens as usize];
            let o = DIGIT_BANDS[ones as usize];
            let runs = fresh.runs();
            prop_assert_eq!(&runs[1].1[..], &SEG_TOP[t.top as usize][..]);
            prop_assert_eq!(&runs[2].1[..], &SEG_MID[t.mid as usize][..]);
            prop_assert_eq!(&runs[3].1[..], &SEG_BOT[t.bottom as usize][..]);
            prop_assert_eq!(&runs[4].1[..], &SEG_TOP[o.top as usize][..]);
            prop_assert_eq!(&runs[5].1[..], &SEG_MID[o.mid as usize][..]);
            prop_assert_eq!(&runs[6].1[..], &SEG_BOT[o.bottom as usize][..]);
        }
    }
}
