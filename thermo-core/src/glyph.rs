//! Glyph atlas
//!
//! Pre-rendered bitmap fragments for the PCD8544. Every byte is one
//! column of 8 vertical pixels, least significant bit at the top.
//!
//! Big digits are 12 columns wide and three pages tall. Each page is a
//! *band* (top, mid, bottom) and the bands are shared between glyphs, so
//! a glyph is a triple of row indices into [`SEG_TOP`], [`SEG_MID`] and
//! [`SEG_BOT`] rather than a bitmap of its own.

/// Width of a band row in columns
pub const BAND_WIDTH: usize = 12;

/// Width of a mercury gauge row in columns
pub const MERCURY_WIDTH: usize = 3;

/// Highest mercury fill level (full segment)
pub const MERCURY_FULL: u8 = 8;

/// One band of a big glyph
pub type BandRow = [u8; BAND_WIDTH];

/// One segment of the mercury column
pub type MercuryRow = [u8; MERCURY_WIDTH];

/// Top bands
pub const SEG_TOP: [BandRow; 5] = [
    // 0: digits 0, 8, 9 and the degree symbol
    [0xFC, 0xFA, 0xF6, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0xF6, 0xFA, 0xFC],
    // 1: digit 1
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF8, 0xFC],
    // 2: digits 2, 3, 7
    [0x00, 0x02, 0x06, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0xF6, 0xFA, 0xFC],
    // 3: digit 4
    [0xFC, 0xF8, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF8, 0xFC],
    // 4: digits 5, 6 and letter C
    [0xFC, 0xFA, 0xF6, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x06, 0x02, 0x00],
];

/// Middle bands
pub const SEG_MID: [BandRow; 11] = [
    // 0: digit 0
    [0xEF, 0xC7, 0x83, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x83, 0xC7, 0xEF],
    // 1: digits 1, 7
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x83, 0xC7, 0xEF],
    // 2: digit 2
    [0xE0, 0xD0, 0xB8, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x3B, 0x17, 0x0F],
    // 3: digit 3
    [0x00, 0x10, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0xBB, 0xD7, 0xEF],
    // 4: digits 4, 9
    [0x0F, 0x17, 0x3B, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0xBB, 0xD7, 0xEF],
    // 5: digit 5
    [0x0F, 0x17, 0x3B, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0xB8, 0xD0, 0xE0],
    // 6: digit 6
    [0xEF, 0xD7, 0xBB, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0xB8, 0xD0, 0xE0],
    // 7: digit 8
    [0xEF, 0xD7, 0xBB, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0xBB, 0xD7, 0xEF],
    // 8: degree symbol
    [0x0F, 0x17, 0x3B, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x3B, 0x17, 0x0F],
    // 9: letter C
    [0xEF, 0xC7, 0x83, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 10: minus sign
    [0x00, 0x10, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x38, 0x10, 0x00],
];

/// Bottom bands
pub const SEG_BOT: [BandRow; 4] = [
    // 0: digits 0, 6, 8
    [0x7F, 0xBF, 0xDF, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xDF, 0xBF, 0x7F],
    // 1: digits 1, 4, 7
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x3F, 0x7F],
    // 2: digit 2 and letter C
    [0x7F, 0xBF, 0xDF, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xC0, 0x80, 0x00],
    // 3: digits 3, 5, 9
    [0x00, 0x80, 0xC0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xDF, 0xBF, 0x7F],
];

/// Mid band index of the minus sign
pub const MID_MINUS: usize = 10;

/// Band indices of the degree symbol (top, mid); it has no bottom band
pub const DEGREE: (usize, usize) = (0, 8);

/// Band indices of the letter C (top, mid, bottom)
pub const LETTER_C: (usize, usize, usize) = (4, 9, 2);

/// Blank band, written in place of the sign for positive readings
pub const BLANK_BAND: BandRow = [0x00; BAND_WIDTH];

/// "Temperatura" in a 5x7 font, one page tall
pub const BANNER: [u8; 65] = [
    0x02, 0x02, 0xFE, 0x02, 0x02, 0x00, 0x70, 0xA8, 0xA8, 0xA8, 0x30, 0x00, 0xF8, 0x08, 0x30,
    0x08, 0xF0, 0x00, 0xF8, 0x28, 0x28, 0x28, 0x10, 0x00, 0x70, 0xA8, 0xA8, 0xA8, 0xB0, 0x00,
    0xF8, 0x10, 0x08, 0x08, 0x10, 0x00, 0x40, 0xA8, 0xA8, 0xA8, 0xF0, 0x00, 0x08, 0x7E, 0x88,
    0x80, 0x40, 0x00, 0x78, 0x80, 0x80, 0x40, 0xF8, 0x00, 0xF8, 0x10, 0x08, 0x08, 0x10, 0x00,
    0x40, 0xA8, 0xA8, 0xA8, 0xF0,
];

/// Rounded cap of the thermometer tube
pub const THERMO_CAP: [u8; 5] = [0x80, 0x40, 0x40, 0x40, 0x80];

/// Empty tube wall, one page tall
pub const THERMO_WALL: [u8; 7] = [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF];

/// Filled bulb at the base of the tube
pub const THERMO_BULB: [u8; 9] = [0x0E, 0x11, 0x2E, 0x5F, 0x5F, 0x5F, 0x2E, 0x11, 0x0E];

/// Mercury column fill levels, indexed by level 0 (empty) to 8 (full)
///
/// The first column is the tick marks on the left of the tube; the other
/// two fill from the bottom of the page upwards.
pub const MERCURY: [MercuryRow; 9] = [
    [0x55, 0x00, 0x00],
    [0x55, 0x80, 0x80],
    [0x55, 0xC0, 0xC0],
    [0x55, 0xE0, 0xE0],
    [0x55, 0xF0, 0xF0],
    [0x55, 0xF8, 0xF8],
    [0x55, 0xFC, 0xFC],
    [0x55, 0xFE, 0xFE],
    [0x55, 0xFF, 0xFF],
];
