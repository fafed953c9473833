//! PCD8544 display controller
//!
//! The PCD8544 is a write-only 84x48 controller organised as 6 pages of
//! 8-pixel-tall columns. This module owns the addressing protocol and the
//! software copy of the write cursor; [`composer`] adds the data-writing
//! half on top.

pub mod composer;

use crate::config::DisplayConfig;
use crate::traits::{DisplayError, DisplayTransport, Transfer};

/// Display width in columns
pub const COLUMNS: u8 = 84;

/// Display height in 8-pixel pages
pub const PAGES: u8 = 6;

/// Number of data bytes that cover the whole display
pub const DDRAM_SIZE: usize = COLUMNS as usize * PAGES as usize;

/// PCD8544 instruction set
pub mod cmd {
    /// Function set; OR with the flag below
    pub const FUNCTION_SET: u8 = 0x20;
    /// Function set flag: extended instruction set (H = 1)
    pub const EXTENDED: u8 = 0x01;

    /// Display control; OR with D/E bits
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_BLANK: u8 = DISPLAY_CONTROL;
    pub const DISPLAY_ALL_ON: u8 = DISPLAY_CONTROL | 0x01;
    pub const DISPLAY_NORMAL: u8 = DISPLAY_CONTROL | 0x04;
    pub const DISPLAY_INVERSE: u8 = DISPLAY_CONTROL | 0x05;

    /// Set Y address (page), basic instruction set
    pub const SET_Y: u8 = 0x40;
    /// Set X address (column), basic instruction set
    pub const SET_X: u8 = 0x80;

    /// Temperature coefficient, extended instruction set
    pub const TEMP_CONTROL: u8 = 0x04;
    /// Bias system, extended instruction set
    pub const BIAS: u8 = 0x10;
    /// Operating voltage (contrast), extended instruction set
    pub const SET_VOP: u8 = 0x80;
}

/// Cursor position in column/page units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinate {
    /// Column, 0-83
    pub column: u8,
    /// Page, 0-5
    pub page: u8,
}

impl Coordinate {
    /// Top-left corner
    pub const ORIGIN: Self = Self { column: 0, page: 0 };

    /// Create a coordinate
    ///
    /// # Panics
    /// If `column` or `page` is outside the display.
    pub const fn new(column: u8, page: u8) -> Self {
        assert!(column < COLUMNS, "column out of range");
        assert!(page < PAGES, "page out of range");
        Self { column, page }
    }

    /// Position after one data byte, following the controller's
    /// horizontal auto-increment
    pub const fn advanced(self) -> Self {
        if self.column + 1 < COLUMNS {
            Self {
                column: self.column + 1,
                page: self.page,
            }
        } else {
            Self {
                column: 0,
                page: (self.page + 1) % PAGES,
            }
        }
    }
}

/// Display control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Segments off, DDRAM retained (power saving)
    Blank,
    /// Normal video
    Normal,
    /// All segments on
    AllOn,
    /// Inverse video
    Inverse,
}

impl DisplayMode {
    /// Display-control instruction for this mode
    pub const fn command(self) -> u8 {
        match self {
            DisplayMode::Blank => cmd::DISPLAY_BLANK,
            DisplayMode::Normal => cmd::DISPLAY_NORMAL,
            DisplayMode::AllOn => cmd::DISPLAY_ALL_ON,
            DisplayMode::Inverse => cmd::DISPLAY_INVERSE,
        }
    }

    /// Mode that shows content, honouring the inverse setting
    pub const fn visible(inverse: bool) -> Self {
        if inverse {
            DisplayMode::Inverse
        } else {
            DisplayMode::Normal
        }
    }
}

/// Display controller
///
/// Wraps a [`DisplayTransport`] and mirrors the controller's address
/// counter, since the hardware cannot be read back.
pub struct DisplayController<T> {
    transport: T,
    cursor: Coordinate,
    mode: DisplayMode,
}

impl<T: DisplayTransport> DisplayController<T> {
    /// Create a controller
    ///
    /// The PCD8544 comes out of reset blank with the address counter at
    /// the origin.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cursor: Coordinate::ORIGIN,
            mode: DisplayMode::Blank,
        }
    }

    /// Send the power-on sequence and clear the display
    pub fn init(&mut self, config: &DisplayConfig) -> Result<(), DisplayError> {
        let sequence = [
            cmd::FUNCTION_SET | cmd::EXTENDED,
            cmd::SET_VOP | (config.contrast & 0x7F),
            cmd::TEMP_CONTROL | (config.temperature_coefficient & 0x03),
            cmd::BIAS | (config.bias & 0x07),
            cmd::FUNCTION_SET,
        ];
        self.transport.send_all(Transfer::Command, &sequence)?;
        self.set_mode(DisplayMode::visible(config.inverse))?;
        self.clear()
    }

    /// Move the write cursor
    ///
    /// # Panics
    /// If the position is outside the display.
    pub fn set_position(&mut self, column: u8, page: u8) -> Result<(), DisplayError> {
        let target = Coordinate::new(column, page);
        self.transport.send(Transfer::Command, cmd::SET_X | target.column)?;
        self.transport.send(Transfer::Command, cmd::SET_Y | target.page)?;
        self.cursor = target;
        Ok(())
    }

    /// Zero the whole DDRAM and home the cursor
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.set_position(0, 0)?;
        self.write_bytes(&[0u8; DDRAM_SIZE])?;
        self.set_position(0, 0)
    }

    /// Switch the display-control mode
    pub fn set_mode(&mut self, mode: DisplayMode) -> Result<(), DisplayError> {
        self.transport.send(Transfer::Command, mode.command())?;
        self.mode = mode;
        Ok(())
    }

    /// Current software cursor
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Last mode sent to the display
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Borrow the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport
    ///
    /// Bytes sent directly bypass cursor tracking; reposition afterwards.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the controller and return the transport
    pub fn release(self) -> T {
        self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;

    #[test]
    fn test_set_position_sends_x_then_y() {
        let mut lcd = DisplayController::new(RecordingTransport::new());
        lcd.set_position(41, 3).unwrap();

        assert_eq!(lcd.transport().commands(), [0x80 | 41, 0x40 | 3]);
        assert_eq!(lcd.cursor(), Coordinate::new(41, 3));
    }

    #[test]
    #[should_panic]
    fn test_set_position_rejects_column_84() {
        let mut lcd = DisplayController::new(RecordingTransport::new());
        let _ = lcd.set_position(COLUMNS, 0);
    }

    #[test]
    #[should_panic]
    fn test_set_position_rejects_page_6() {
        let mut lcd = DisplayController::new(RecordingTransport::new());
        let _ = lcd.set_position(0, PAGES);
    }

    #[test]
    fn test_clear_writes_full_ddram() {
        let mut lcd = DisplayController::new(RecordingTransport::new());
        lcd.set_position(30, 4).unwrap();
        lcd.transport_mut().reset();

        lcd.clear().unwrap();

        let log = lcd.transport().log();
        assert_eq!(lcd.transport().data_count(), 504);
        assert!(lcd.transport().data().iter().all(|&b| b == 0));
        // Homed before and after the fill
        assert_eq!(log[0], (Transfer::Command, 0x80));
        assert_eq!(log[1], (Transfer::Command, 0x40));
        assert_eq!(log[log.len() - 2], (Transfer::Command, 0x80));
        assert_eq!(log[log.len() - 1], (Transfer::Command, 0x40));
        assert_eq!(lcd.cursor(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_init_sequence() {
        let mut lcd = DisplayController::new(RecordingTransport::new());
        lcd.init(&DisplayConfig::default()).unwrap();

        let commands = lcd.transport().commands();
        assert_eq!(commands[..6], [0x21, 0xC0, 0x06, 0x13, 0x20, 0x0C]);
        assert_eq!(lcd.transport().data_count(), DDRAM_SIZE);
        assert_eq!(lcd.mode(), DisplayMode::Normal);
        assert_eq!(lcd.cursor(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_init_inverse() {
        let mut lcd = DisplayController::new(RecordingTransport::new());
        let config = DisplayConfig {
            inverse: true,
            ..DisplayConfig::default()
        };
        lcd.init(&config).unwrap();

        assert_eq!(lcd.transport().commands()[5], 0x0D);
        assert_eq!(lcd.mode(), DisplayMode::Inverse);
    }

    #[test]
    fn test_mode_commands() {
        assert_eq!(DisplayMode::Blank.command(), 0x08);
        assert_eq!(DisplayMode::Normal.command(), 0x0C);
        assert_eq!(DisplayMode::AllOn.command(), 0x09);
        assert_eq!(DisplayMode::Inverse.command(), 0x0D);
    }

    #[test]
    fn test_cursor_wraps_like_hardware() {
        assert_eq!(Coordinate::new(82, 0).advanced(), Coordinate::new(83, 0));
        assert_eq!(Coordinate::new(83, 0).advanced(), Coordinate::new(0, 1));
        assert_eq!(Coordinate::new(83, 5).advanced(), Coordinate::ORIGIN);
    }
}
