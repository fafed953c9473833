//! Wake button task
//!
//! Active-low push-button with the internal pull-up. Both edges are
//! reported: press lights the display, release schedules a redraw.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use crate::channels::{ButtonEvent, BUTTON_EVENTS};

/// Contact bounce settling time
const DEBOUNCE_MS: u64 = 20;

/// Button task
#[embassy_executor::task]
pub async fn button_task(mut btn: Input<'static>) {
    info!("Button task started");

    loop {
        btn.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
        if btn.is_high() {
            // Glitch
            continue;
        }

        BUTTON_EVENTS.send(ButtonEvent::Pressed).await;
        debug!("Button: Pressed");

        btn.wait_for_high().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        BUTTON_EVENTS.send(ButtonEvent::Released).await;
        debug!("Button: Released");
    }
}
