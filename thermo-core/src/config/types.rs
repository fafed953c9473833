//! Configuration type definitions
//!
//! Defaults reproduce the stock board: mid contrast on a 3.3V module,
//! the RP2040 internal sensor, and roughly 25s between frames.

use crate::scheduler::DEFAULT_PERIOD_TICKS;

/// Highest operating-voltage setting (7 bits)
pub const MAX_CONTRAST: u8 = 0x7F;

/// Highest temperature coefficient setting (2 bits)
pub const MAX_TEMPERATURE_COEFFICIENT: u8 = 0x03;

/// Highest bias setting (3 bits)
pub const MAX_BIAS: u8 = 0x07;

/// Highest raw code of the 12-bit ADC
pub const MAX_ADC_CODE: u16 = 0x0FFF;

/// PCD8544 panel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Operating voltage (Vop), 0-127
    pub contrast: u8,
    /// Temperature coefficient, 0-3
    pub temperature_coefficient: u8,
    /// Bias system, 0-7 (3 = 1:48)
    pub bias: u8,
    /// Use inverse video instead of normal
    pub inverse: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            contrast: 0x40,
            temperature_coefficient: 2,
            bias: 3,
            inverse: false,
        }
    }
}

/// Temperature sensor settings
///
/// The two calibration points are raw ADC codes measured at 30°C and
/// 85°C; readings are interpolated linearly between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// ADC code at 30°C
    pub adc_at_30c: u16,
    /// ADC code at 85°C
    pub adc_at_85c: u16,
    /// Time between samples in milliseconds
    pub sample_interval_ms: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        // RP2040: 0.706V at 27°C, -1.721mV/°C, 12-bit ADC on 3.3V
        Self {
            adc_at_30c: 870,
            adc_at_85c: 752,
            sample_interval_ms: 100,
        }
    }
}

/// Refresh behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshConfig {
    /// Sample cycles between frames
    pub period_ticks: u8,
    /// Blank the display after each frame to save power
    pub blank_after_render: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            period_ticks: DEFAULT_PERIOD_TICKS,
            blank_after_render: true,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermoConfig {
    pub display: DisplayConfig,
    pub sensor: SensorConfig,
    pub refresh: RefreshConfig,
}
