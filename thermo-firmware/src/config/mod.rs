//! Configuration loading
//!
//! The configuration is compiled in from `thermo.toml` (validated by
//! build.rs) and parsed at boot with the no_std parser from thermo-core.

use defmt::*;

use thermo_core::config::{parse_config, ParseError, ThermoConfig};

/// Embedded configuration (compiled into firmware)
/// Edit thermo.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../thermo.toml");

/// Configuration loading errors
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML parsing failed
    TomlParse(ParseError),
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::TomlParse(e)
    }
}

/// Parse the embedded configuration
pub fn load_embedded() -> Result<ThermoConfig, ConfigError> {
    Ok(parse_config(EMBEDDED_CONFIG)?)
}

/// Load the configuration, falling back to defaults on error
pub fn load_or_default() -> ThermoConfig {
    match load_embedded() {
        Ok(config) => {
            info!("Configuration loaded from thermo.toml");
            config
        }
        Err(e) => {
            warn!("Failed to load configuration: {:?}, using defaults", e);
            ThermoConfig::default()
        }
    }
}
