//! Static screen layout
//!
//! Everything that does not change between readings: the banner, the
//! "°C" unit after the digits and the empty thermometer tube around the
//! mercury gauge. Drawn once after init; the renderers never touch these
//! columns.

use crate::glyph::{
    BANNER, DEGREE, LETTER_C, SEG_BOT, SEG_MID, SEG_TOP, THERMO_BULB, THERMO_CAP, THERMO_WALL,
};
use crate::lcd::DisplayController;
use crate::traits::{DisplayError, DisplayTransport};

/// Banner position
pub const BANNER_AT: (u8, u8) = (10, 0);

/// Column of the degree symbol
pub const DEGREE_COLUMN: u8 = 41;

/// Column of the letter C
pub const UNIT_COLUMN: u8 = 54;

/// Tube cap position
pub const CAP_AT: (u8, u8) = (72, 1);

/// Column and page span of the tube wall
pub const WALL_COLUMN: u8 = 71;
pub const WALL_PAGES: core::ops::RangeInclusive<u8> = 2..=4;

/// Bulb position
pub const BULB_AT: (u8, u8) = (70, 5);

/// Draw the fixed parts of the screen
pub fn draw_static_layout<T: DisplayTransport>(
    lcd: &mut DisplayController<T>,
) -> Result<(), DisplayError> {
    lcd.set_position(BANNER_AT.0, BANNER_AT.1)?;
    lcd.write_bytes(&BANNER)?;

    // °
    lcd.set_position(DEGREE_COLUMN, 2)?;
    lcd.write_glyph_row(&SEG_TOP, DEGREE.0)?;
    lcd.set_position(DEGREE_COLUMN, 3)?;
    lcd.write_glyph_row(&SEG_MID, DEGREE.1)?;

    // C
    lcd.set_position(UNIT_COLUMN, 2)?;
    lcd.write_glyph_row(&SEG_TOP, LETTER_C.0)?;
    lcd.set_position(UNIT_COLUMN, 3)?;
    lcd.write_glyph_row(&SEG_MID, LETTER_C.1)?;
    lcd.set_position(UNIT_COLUMN, 4)?;
    lcd.write_glyph_row(&SEG_BOT, LETTER_C.2)?;

    draw_tube(lcd)
}

fn draw_tube<T: DisplayTransport>(lcd: &mut DisplayController<T>) -> Result<(), DisplayError> {
    lcd.set_position(CAP_AT.0, CAP_AT.1)?;
    lcd.write_bytes(&THERMO_CAP)?;
    for page in WALL_PAGES {
        lcd.set_position(WALL_COLUMN, page)?;
        lcd.write_bytes(&THERMO_WALL)?;
    }
    lcd.set_position(BULB_AT.0, BULB_AT.1)?;
    lcd.write_bytes(&THERMO_BULB)
}
