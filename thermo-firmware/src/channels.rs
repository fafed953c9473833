//! Inter-task communication channels
//!
//! The display task is the only owner of the panel; everything else
//! talks to it through these statics.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

/// Channel capacity for button edges
const BUTTON_CHANNEL_SIZE: usize = 4;

/// Button edge, after debouncing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Latest temperature in whole °C (updated by sampler task)
pub static TEMP_READING: Signal<CriticalSectionRawMutex, i16> = Signal::new();

/// Button edges (from button task)
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();
