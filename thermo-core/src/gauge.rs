//! Mercury gauge renderer
//!
//! The thermometer tube is three stacked one-page segments. Each segment
//! is filled to one of nine levels from [`MERCURY`]; the scale covers
//! roughly -9°C to 37°C in 2°C steps.

use crate::glyph::{MERCURY, MERCURY_FULL};
use crate::lcd::DisplayController;
use crate::traits::{DisplayError, DisplayTransport};

/// Column of the mercury inside the tube
pub const MERCURY_COLUMN: u8 = 73;

/// Page of the bottom segment; higher segments sit on lower pages
pub const BASE_PAGE: u8 = 4;

/// Number of stacked segments
pub const SEGMENTS: u8 = 3;

/// Fill levels of the three segments
///
/// `None` means the segment is left as blanked by the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GaugeLevels {
    pub bottom: Option<u8>,
    pub middle: Option<u8>,
    pub top: Option<u8>,
}

impl GaugeLevels {
    /// Levels as drawn, with untouched segments reported as empty
    pub fn effective(&self) -> [u8; 3] {
        [
            self.bottom.unwrap_or(0),
            self.middle.unwrap_or(0),
            self.top.unwrap_or(0),
        ]
    }
}

/// Map a temperature onto segment levels
///
/// Range edges are exclusive below and inclusive above, and the
/// divisions truncate.
pub fn gauge_levels(celsius: i16) -> GaugeLevels {
    let t = celsius as i32;
    let full = Some(MERCURY_FULL);

    if t > 36 {
        GaugeLevels {
            bottom: full,
            middle: full,
            top: full,
        }
    } else if t > 22 {
        GaugeLevels {
            bottom: full,
            middle: full,
            top: Some(((t - 22) / 2) as u8),
        }
    } else if t > 6 {
        GaugeLevels {
            bottom: full,
            middle: Some(((t - 6) / 2) as u8),
            top: None,
        }
    } else if t > -9 {
        GaugeLevels {
            bottom: Some(((t + 9) / 2 + 1) as u8),
            middle: None,
            top: None,
        }
    } else {
        GaugeLevels::default()
    }
}

/// Draw the gauge for `celsius`
///
/// All three segments are emptied first, then the lit ones are drawn
/// bottom-up.
pub fn render_gauge<T: DisplayTransport>(
    lcd: &mut DisplayController<T>,
    celsius: i16,
) -> Result<(), DisplayError> {
    for offset in 0..SEGMENTS {
        render_segment(lcd, offset, 0)?;
    }

    let levels = gauge_levels(celsius);
    let segments = [levels.bottom, levels.middle, levels.top];
    for (offset, level) in (0..SEGMENTS).zip(segments) {
        if let Some(level) = level {
            render_segment(lcd, offset, level)?;
        }
    }
    Ok(())
}

/// Draw one segment at `offset` pages above the base
///
/// # Panics
/// If `level` is above 8 or `offset` is not a segment.
pub fn render_segment<T: DisplayTransport>(
    lcd: &mut DisplayController<T>,
    offset: u8,
    level: u8,
) -> Result<(), DisplayError> {
    assert!(offset < SEGMENTS, "gauge segment out of range");
    lcd.set_position(MERCURY_COLUMN, BASE_PAGE - offset)?;
    lcd.write_glyph_row(&MERCURY, level as usize)
}
