//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering engine
//! and hardware-specific implementations.

pub mod display;
pub mod sensor;

pub use display::{DisplayError, DisplayTransport, Transfer};
pub use sensor::{SensorError, TemperatureSensor};
