//! Temperature sensor trait

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Reading does not fit the reported range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
    /// Calibration points are identical, so no slope can be derived
    InvalidCalibration,
}

/// Trait for temperature sensors
///
/// Calibration and unit conversion live entirely in the implementation;
/// the rendering engine only ever sees whole degrees Celsius.
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// Returns a fixed-point value with 0.1°C resolution.
    /// For example, 45.5°C is returned as 455.
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError>;

    /// Read the current temperature in whole degrees Celsius
    fn read_celsius(&mut self) -> Result<i16, SensorError> {
        self.read_celsius_x10().map(|t| t / 10)
    }
}
