//! Board-agnostic core logic for the PCD8544 thermometer firmware
//!
//! This crate contains everything that does not depend on a specific
//! microcontroller:
//!
//! - Hardware abstraction traits (display transport, temperature sensor)
//! - Glyph atlas (digit bands, banner text, thermometer art)
//! - Display controller with cursor tracking and segment composition
//! - Numeral and gauge renderers
//! - Refresh scheduling and the thermometer panel that ties it together
//! - Configuration types and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod gauge;
pub mod glyph;
pub mod lcd;
pub mod numeral;
pub mod panel;
pub mod reading;
pub mod scheduler;
pub mod screen;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use lcd::{Coordinate, DisplayController, DisplayMode};
pub use panel::ThermoPanel;
pub use reading::Reading;
