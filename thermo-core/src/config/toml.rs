//! Minimal TOML parser for the thermometer configuration
//!
//! Handles only the subset the configuration file uses. It does NOT
//! support the full TOML spec.
//!
//! Supported features:
//! - `[display]`, `[sensor]` and `[refresh]` section headers
//! - Key = value pairs (integer, hex integer, boolean)
//! - Comments (# ...), whole-line and trailing
//!
//! Keys that are not set keep their default value.

use super::types::{ThermoConfig, MAX_ADC_CODE, MAX_BIAS, MAX_CONTRAST, MAX_TEMPERATURE_COEFFICIENT};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Key not recognised in the current section
    UnknownKey,
    /// Value has the wrong type
    InvalidValue,
    /// Value parsed but is outside the allowed range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Sensor,
    Refresh,
}

/// Parse TOML configuration into a [`ThermoConfig`]
pub fn parse_config(input: &str) -> Result<ThermoConfig, ParseError> {
    let mut config = ThermoConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    if config.sensor.adc_at_30c == config.sensor.adc_at_85c {
        return Err(ParseError::OutOfRange);
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "sensor" => Ok(Section::Sensor),
        "refresh" => Ok(Section::Refresh),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ThermoConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Display, "contrast") => {
            config.display.contrast = parse_bounded(value, MAX_CONTRAST as u32)? as u8;
        }
        (Section::Display, "temperature_coefficient") => {
            config.display.temperature_coefficient =
                parse_bounded(value, MAX_TEMPERATURE_COEFFICIENT as u32)? as u8;
        }
        (Section::Display, "bias") => {
            config.display.bias = parse_bounded(value, MAX_BIAS as u32)? as u8;
        }
        (Section::Display, "inverse") => {
            config.display.inverse = parse_bool(value)?;
        }
        (Section::Sensor, "adc_at_30c") => {
            config.sensor.adc_at_30c = parse_bounded(value, MAX_ADC_CODE as u32)? as u16;
        }
        (Section::Sensor, "adc_at_85c") => {
            config.sensor.adc_at_85c = parse_bounded(value, MAX_ADC_CODE as u32)? as u16;
        }
        (Section::Sensor, "sample_interval_ms") => {
            let interval = parse_int(value)?;
            if interval == 0 {
                return Err(ParseError::OutOfRange);
            }
            config.sensor.sample_interval_ms = interval;
        }
        (Section::Refresh, "period_ticks") => {
            config.refresh.period_ticks = parse_bounded(value, u8::MAX as u32)? as u8;
        }
        (Section::Refresh, "blank_after_render") => {
            config.refresh.blank_after_render = parse_bool(value)?;
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a decimal or `0x` hex integer, allowing `_` separators
fn parse_int(value: &str) -> Result<u32, ParseError> {
    let mut digits = [0u8; 16];
    let mut len = 0;
    for b in value.bytes().filter(|&b| b != b'_') {
        *digits.get_mut(len).ok_or(ParseError::InvalidValue)? = b;
        len += 1;
    }
    let cleaned = core::str::from_utf8(&digits[..len]).map_err(|_| ParseError::InvalidValue)?;

    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => cleaned.parse(),
    };
    parsed.map_err(|_| ParseError::InvalidValue)
}

fn parse_bounded(value: &str, max: u32) -> Result<u32, ParseError> {
    let v = parse_int(value)?;
    if v > max {
        return Err(ParseError::OutOfRange);
    }
    Ok(v)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}
