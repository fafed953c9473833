//! Display task
//!
//! Sole owner of the panel. Readings and button edges are handled one
//! at a time, so a button can never interrupt a frame halfway through
//! and leave the cursor somewhere unexpected.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};

use thermo_core::ThermoPanel;
use thermo_drivers::display::Pcd8544;

use crate::channels::{ButtonEvent, BUTTON_EVENTS, TEMP_READING};

/// Concrete panel type on this board
pub type BoardPanel =
    ThermoPanel<Pcd8544<Spi<'static, SPI0, Blocking>, Output<'static>, Output<'static>>>;

/// Display task - renders readings and reacts to the button
#[embassy_executor::task]
pub async fn display_task(mut panel: BoardPanel) {
    info!("Display task started");

    if let Err(e) = panel.start() {
        error!("Display init failed: {:?}", e);
    }

    loop {
        match select(TEMP_READING.wait(), BUTTON_EVENTS.receive()).await {
            Either::First(celsius) => match panel.on_sample(celsius.into()) {
                Ok(true) => debug!("Rendered {}°C", celsius),
                Ok(false) => {}
                Err(e) => warn!("Render failed: {:?}", e),
            },
            Either::Second(ButtonEvent::Pressed) => {
                if let Err(e) = panel.on_button_press() {
                    warn!("Wake failed: {:?}", e);
                }
            }
            Either::Second(ButtonEvent::Released) => {
                panel.on_button_release();
                trace!("Refresh requested");
            }
        }
    }
}
