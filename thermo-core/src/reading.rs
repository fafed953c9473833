//! Temperature readings

/// Largest magnitude the two-digit readout can show
pub const MAX_MAGNITUDE: u16 = 99;

/// A temperature sample in whole degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading(pub i16);

/// Sign and digits of a reading as shown on the big readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    pub positive: bool,
    pub tens: u8,
    pub ones: u8,
}

impl Reading {
    /// Degrees Celsius
    pub const fn celsius(self) -> i16 {
        self.0
    }

    /// Split into a sign flag and two decimal digits
    ///
    /// Only readings above zero count as positive, so 0°C is shown with
    /// the minus bar. Magnitudes beyond two digits saturate at 99.
    pub fn readout(self) -> Readout {
        let magnitude = self.0.unsigned_abs().min(MAX_MAGNITUDE);
        Readout {
            positive: self.0 > 0,
            tens: (magnitude / 10) as u8,
            ones: (magnitude % 10) as u8,
        }
    }
}

impl From<i16> for Reading {
    fn from(celsius: i16) -> Self {
        Self(celsius)
    }
}
