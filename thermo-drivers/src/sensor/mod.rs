//! Temperature sensors

pub mod internal;

pub use internal::{AdcReader, InternalTempSensor, TwoPointCalibration};
