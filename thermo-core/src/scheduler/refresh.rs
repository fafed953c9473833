//! Refresh countdown

/// Sample cycles between frames when nobody presses the button
pub const DEFAULT_PERIOD_TICKS: u8 = 255;

/// Countdown of sample cycles until the next frame
///
/// A fresh scheduler is due immediately so the first sample is shown.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshScheduler {
    /// Cycles left before the next frame
    countdown: u8,
    /// Value the countdown reloads to after a frame
    period: u8,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD_TICKS)
    }
}

impl RefreshScheduler {
    /// Create a scheduler that renders every `period` cycles
    ///
    /// A period of 0 behaves like 1: every cycle renders.
    pub const fn new(period: u8) -> Self {
        Self {
            countdown: 0,
            period,
        }
    }

    /// Advance one sample cycle
    ///
    /// Returns `true` if this cycle should render. The due cycle itself
    /// counts toward the next period, so the countdown reloads one short.
    pub fn tick(&mut self) -> bool {
        if self.countdown == 0 {
            self.countdown = self.period.saturating_sub(1);
            true
        } else {
            self.countdown -= 1;
            false
        }
    }

    /// Make the next cycle render
    pub fn request_refresh(&mut self) {
        self.countdown = 0;
    }

    /// Whether the next cycle will render
    pub fn is_due(&self) -> bool {
        self.countdown == 0
    }

    /// Cycles left before the next frame
    pub fn remaining(&self) -> u8 {
        self.countdown
    }

    /// Cycles from one frame to the next
    pub fn period(&self) -> u8 {
        self.period
    }
}
