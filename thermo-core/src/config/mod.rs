//! Configuration types and parsing
//!
//! The firmware embeds a small TOML file; [`toml::parse_config`] turns
//! it into a [`ThermoConfig`] without allocation.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
