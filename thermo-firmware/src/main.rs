//! thermo5110 - PCD8544 Thermometer Firmware
//!
//! Reads the RP2040 die temperature and shows it on a Nokia 5110 module
//! as two large digits with a mercury gauge. The display stays blank
//! between frames; pressing the button lights it.
//!
//! Wiring (Raspberry Pi Pico):
//!
//! | Signal | GPIO |
//! |--------|------|
//! | SCLK   | 18   |
//! | DIN    | 19   |
//! | SCE    | 17   |
//! | D/C    | 20   |
//! | RST    | 21   |
//! | Button | 15 (to GND) |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use thermo_core::ThermoPanel;
use thermo_drivers::display::Pcd8544;
use thermo_drivers::sensor::{InternalTempSensor, TwoPointCalibration};

use crate::tasks::RpTempAdc;

mod channels;
mod config;
mod tasks;

/// PCD8544 maximum serial clock is 4 MHz
const SPI_FREQUENCY_HZ: u32 = 4_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("thermo5110 firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_or_default();
    info!(
        "Config: contrast={}, period={} ticks, interval={} ms",
        config.display.contrast, config.refresh.period_ticks, config.sensor.sample_interval_ms
    );

    // Display on SPI0, transmit only
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let dc = Output::new(p.PIN_20, Level::Low);
    let cs = Output::new(p.PIN_17, Level::High);
    let mut rst = Output::new(p.PIN_21, Level::High);

    let mut pcd = match Pcd8544::new(spi, dc, cs) {
        Ok(pcd) => pcd,
        Err(e) => defmt::panic!("Display pins unavailable: {:?}", e),
    };
    if let Err(e) = pcd.reset(&mut rst, &mut Delay) {
        warn!("Display reset failed: {:?}", e);
    }
    let panel = ThermoPanel::new(pcd, config.display, config.refresh);
    info!("Display initialized");

    // Internal temperature sensor
    let adc = Adc::new_blocking(p.ADC, Default::default());
    let temp_channel = Channel::new_temp_sensor(p.ADC_TEMP_SENSOR);
    let calibration = match TwoPointCalibration::new(
        config.sensor.adc_at_30c,
        config.sensor.adc_at_85c,
    ) {
        Ok(calibration) => calibration,
        Err(e) => {
            warn!("Invalid sensor calibration: {:?}, using defaults", e);
            TwoPointCalibration::from(thermo_core::config::SensorConfig::default())
        }
    };
    let sensor = InternalTempSensor::new(RpTempAdc::new(adc, temp_channel), calibration);
    info!("ADC initialized");

    let button = Input::new(p.PIN_15, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::display_task(panel)).unwrap();
    spawner
        .spawn(tasks::sampler_task(sensor, config.sensor.sample_interval_ms))
        .unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();

    info!("All tasks spawned, firmware running");
}
