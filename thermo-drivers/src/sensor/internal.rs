//! On-chip temperature sensor
//!
//! Converts raw ADC codes with a two-point linear calibration:
//!
//! ```text
//! t = (adc - adc_30) * 55 / (adc_85 - adc_30) + 30
//! ```
//!
//! The slope may be negative; the RP2040 diode voltage falls as the die
//! warms. Integer math only, truncating toward zero.

use thermo_core::config::SensorConfig;
use thermo_core::traits::{SensorError, TemperatureSensor};

/// Lower calibration temperature in °C
const LOW_POINT_C: i32 = 30;

/// Distance between the calibration points in °C
const SPAN_C: i32 = 55;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read a raw ADC code
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Raw ADC codes measured at 30°C and 85°C
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TwoPointCalibration {
    pub adc_at_30c: u16,
    pub adc_at_85c: u16,
}

impl TwoPointCalibration {
    /// Create a calibration, rejecting identical points
    pub fn new(adc_at_30c: u16, adc_at_85c: u16) -> Result<Self, SensorError> {
        if adc_at_30c == adc_at_85c {
            return Err(SensorError::InvalidCalibration);
        }
        Ok(Self {
            adc_at_30c,
            adc_at_85c,
        })
    }

    /// Whole degrees Celsius for a raw code
    pub fn celsius(&self, adc: u16) -> Result<i16, SensorError> {
        self.interpolate(adc, 1)
    }

    /// Tenths of a degree Celsius for a raw code
    pub fn celsius_x10(&self, adc: u16) -> Result<i16, SensorError> {
        self.interpolate(adc, 10)
    }

    fn interpolate(&self, adc: u16, scale: i32) -> Result<i16, SensorError> {
        let span = self.adc_at_85c as i32 - self.adc_at_30c as i32;
        if span == 0 {
            return Err(SensorError::InvalidCalibration);
        }

        let offset = adc as i32 - self.adc_at_30c as i32;
        let t = offset * SPAN_C * scale / span + LOW_POINT_C * scale;
        i16::try_from(t).map_err(|_| SensorError::OutOfRange)
    }
}

impl From<SensorConfig> for TwoPointCalibration {
    fn from(config: SensorConfig) -> Self {
        Self {
            adc_at_30c: config.adc_at_30c,
            adc_at_85c: config.adc_at_85c,
        }
    }
}

/// Die temperature sensor read through an ADC channel
pub struct InternalTempSensor<ADC> {
    adc: ADC,
    calibration: TwoPointCalibration,
}

impl<ADC> InternalTempSensor<ADC> {
    pub fn new(adc: ADC, calibration: TwoPointCalibration) -> Self {
        Self { adc, calibration }
    }

    pub fn calibration(&self) -> TwoPointCalibration {
        self.calibration
    }
}

impl<ADC: AdcReader> InternalTempSensor<ADC> {
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        self.adc.read().map_err(|_| SensorError::ConversionError)
    }
}

impl<ADC: AdcReader> TemperatureSensor for InternalTempSensor<ADC> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let raw = self.read_raw()?;
        self.calibration.celsius_x10(raw)
    }

    // Whole degrees straight from the code, so rounding matches the
    // calibration formula rather than a truncated tenth
    fn read_celsius(&mut self) -> Result<i16, SensorError> {
        let raw = self.read_raw()?;
        self.calibration.celsius(raw)
    }
}

/// Dummy ADC for testing (returns a fixed value)
#[cfg(test)]
pub struct DummyAdc(pub u16);

#[cfg(test)]
impl AdcReader for DummyAdc {
    fn read(&mut self) -> Result<u16, ()> {
        Ok(self.0)
    }
}
