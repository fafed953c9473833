//! Thermometer panel
//!
//! Owns all mutable display state: the display controller (and with it
//! the cursor) and the refresh countdown. The firmware drives it from a
//! single task, so a button event can only be handled between two
//! frames, never inside one.

use crate::config::{DisplayConfig, RefreshConfig};
use crate::gauge::render_gauge;
use crate::lcd::{DisplayController, DisplayMode};
use crate::numeral::render_number;
use crate::reading::Reading;
use crate::scheduler::RefreshScheduler;
use crate::screen::draw_static_layout;
use crate::traits::{DisplayError, DisplayTransport};

/// Display controller plus refresh policy
pub struct ThermoPanel<T> {
    lcd: DisplayController<T>,
    scheduler: RefreshScheduler,
    display: DisplayConfig,
    blank_after_render: bool,
}

impl<T: DisplayTransport> ThermoPanel<T> {
    /// Create a panel; nothing is sent until [`start`](Self::start)
    pub fn new(transport: T, display: DisplayConfig, refresh: RefreshConfig) -> Self {
        Self {
            lcd: DisplayController::new(transport),
            scheduler: RefreshScheduler::new(refresh.period_ticks),
            display,
            blank_after_render: refresh.blank_after_render,
        }
    }

    /// Initialise the display and draw the static layout
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.lcd.init(&self.display)?;
        draw_static_layout(&mut self.lcd)
    }

    /// Draw the readout and gauge for one reading
    pub fn render(&mut self, reading: Reading) -> Result<(), DisplayError> {
        let readout = reading.readout();
        render_number(&mut self.lcd, readout.positive, readout.tens, readout.ones)?;
        render_gauge(&mut self.lcd, reading.celsius())
    }

    /// Feed one sample cycle
    ///
    /// Renders if the countdown has expired and then blanks the display
    /// when configured to. Returns whether a frame was drawn.
    pub fn on_sample(&mut self, reading: Reading) -> Result<bool, DisplayError> {
        if !self.scheduler.tick() {
            return Ok(false);
        }

        self.render(reading)?;
        if self.blank_after_render {
            self.lcd.set_mode(DisplayMode::Blank)?;
        }
        Ok(true)
    }

    /// Button went down: light the display
    pub fn on_button_press(&mut self) -> Result<(), DisplayError> {
        self.lcd.set_mode(DisplayMode::visible(self.display.inverse))
    }

    /// Button came back up: render on the next sample
    pub fn on_button_release(&mut self) {
        self.scheduler.request_refresh();
    }

    /// The display controller
    pub fn lcd(&self) -> &DisplayController<T> {
        &self.lcd
    }

    /// The refresh countdown
    pub fn scheduler(&self) -> &RefreshScheduler {
        &self.scheduler
    }
}
