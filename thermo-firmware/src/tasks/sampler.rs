//! Temperature sampling task
//!
//! Reads the RP2040 die sensor on a fixed cadence. A failed read skips
//! that cycle.

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_time::{Duration, Ticker};

use thermo_core::traits::TemperatureSensor;
use thermo_drivers::sensor::{AdcReader, InternalTempSensor};

use crate::channels::TEMP_READING;

/// Blocking ADC bound to the internal temperature channel
pub struct RpTempAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl RpTempAdc {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for RpTempAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.adc.blocking_read(&mut self.channel).map_err(|_| ())
    }
}

/// Sampler task - publishes whole-degree readings
#[embassy_executor::task]
pub async fn sampler_task(mut sensor: InternalTempSensor<RpTempAdc>, interval_ms: u32) {
    info!("Sampler task started ({} ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));

    loop {
        match sensor.read_celsius() {
            Ok(celsius) => {
                trace!("Temperature: {}°C", celsius);
                TEMP_READING.signal(celsius);
            }
            Err(e) => warn!("Temperature read failed: {:?}", e),
        }

        ticker.next().await;
    }
}
