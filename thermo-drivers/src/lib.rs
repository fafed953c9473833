//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermo-core:
//!
//! - Display transports (PCD8544 over SPI)
//! - Temperature sensors (two-point calibrated on-chip sensor)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
