//! PCD8544 SPI transport
//!
//! Driver for the 84x48 PCD8544 controller found on Nokia 5110 modules.
//! The controller is write-only: MOSI and SCK carry the byte, D/C selects
//! command or data, and SCE (chip enable, active low) frames the transfer.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use thermo_core::traits::{DisplayError, DisplayTransport, Transfer};

/// Minimum time RES must be held low, rounded up generously
const RESET_PULSE_MS: u32 = 10;

/// PCD8544 over an SPI bus with separate D/C and chip-enable pins
pub struct Pcd8544<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> Pcd8544<SPI, DC, CS>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Create a new driver
    ///
    /// Chip enable is released so the controller ignores the bus until
    /// the first transfer.
    pub fn new(spi: SPI, dc: DC, mut cs: CS) -> Result<Self, DisplayError> {
        cs.set_high().map_err(|_| DisplayError::Pin)?;
        Ok(Self { spi, dc, cs })
    }

    /// Pulse the reset line
    ///
    /// The controller's registers are undefined until reset, so this must
    /// run before the init sequence.
    pub fn reset<RST, D>(&mut self, rst: &mut RST, delay: &mut D) -> Result<(), DisplayError>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        rst.set_low().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        rst.set_high().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, DC, CS) {
        (self.spi, self.dc, self.cs)
    }

    fn select_kind(&mut self, kind: Transfer) -> Result<(), DisplayError> {
        match kind {
            Transfer::Command => self.dc.set_low(),
            Transfer::Data => self.dc.set_high(),
        }
        .map_err(|_| DisplayError::Pin)
    }
}

impl<SPI, DC, CS> DisplayTransport for Pcd8544<SPI, DC, CS>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    fn send(&mut self, kind: Transfer, byte: u8) -> Result<(), DisplayError> {
        self.send_all(kind, &[byte])
    }

    fn send_all(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), DisplayError> {
        if bytes.is_empty() {
            return Ok(());
        }

        self.select_kind(kind)?;
        self.cs.set_low().map_err(|_| DisplayError::Pin)?;

        // D/C is sampled on the last bit, so the bus must drain before CS rises
        let written = self.spi.write(bytes).and_then(|()| self.spi.flush());

        self.cs.set_high().map_err(|_| DisplayError::Pin)?;
        written.map_err(|_| DisplayError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType as SpiErrorType};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Dc(bool),
        Cs(bool),
        Rst(bool),
        Write(Vec<u8>),
        Flush,
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    #[derive(Debug)]
    struct MockSpiError;

    impl embedded_hal::spi::Error for MockSpiError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl SpiErrorType for MockSpi {
        type Error = MockSpiError;
    }

    impl SpiBus<u8> for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockSpiError);
            }
            self.log.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    /// Mock GPIO pin that records its level changes
    struct MockPin {
        log: Log,
        event: fn(bool) -> Event,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.event)(false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.event)(true));
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    fn driver(fail: bool) -> (Pcd8544<MockSpi, MockPin, MockPin>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let spi = MockSpi {
            log: log.clone(),
            fail,
        };
        let dc = MockPin {
            log: log.clone(),
            event: Event::Dc,
        };
        let cs = MockPin {
            log: log.clone(),
            event: Event::Cs,
        };
        let pcd = Pcd8544::new(spi, dc, cs).unwrap();
        log.borrow_mut().clear();
        (pcd, log)
    }

    #[test]
    fn test_new_releases_chip_enable() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let spi = MockSpi {
            log: log.clone(),
            fail: false,
        };
        let dc = MockPin {
            log: log.clone(),
            event: Event::Dc,
        };
        let cs = MockPin {
            log: log.clone(),
            event: Event::Cs,
        };
        let _pcd = Pcd8544::new(spi, dc, cs).unwrap();

        assert_eq!(*log.borrow(), [Event::Cs(true)]);
    }

    #[test]
    fn test_command_framing() {
        let (mut pcd, log) = driver(false);
        pcd.send(Transfer::Command, 0x21).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(false),
                Event::Cs(false),
                Event::Write(vec![0x21]),
                Event::Flush,
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn test_data_run_in_one_transfer() {
        let (mut pcd, log) = driver(false);
        pcd.send_all(Transfer::Data, &[1, 2, 3, 4]).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(true),
                Event::Cs(false),
                Event::Write(vec![1, 2, 3, 4]),
                Event::Flush,
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn test_empty_run_is_a_no_op() {
        let (mut pcd, log) = driver(false);
        pcd.send_all(Transfer::Data, &[]).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_bus_error_still_releases_chip() {
        let (mut pcd, log) = driver(true);

        assert_eq!(pcd.send(Transfer::Data, 0xFF), Err(DisplayError::Bus));
        assert_eq!(log.borrow().last(), Some(&Event::Cs(true)));
    }

    #[test]
    fn test_reset_pulse() {
        let (mut pcd, log) = driver(false);
        let mut rst = MockPin {
            log: log.clone(),
            event: Event::Rst,
        };
        let mut delay = MockDelay { log: log.clone() };

        pcd.reset(&mut rst, &mut delay).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Rst(false),
                Event::DelayMs(10),
                Event::Rst(true),
                Event::DelayMs(10),
            ]
        );
    }

    #[test]
    fn test_release_returns_parts() {
        let (pcd, log) = driver(false);
        let (mut spi, mut dc, _cs) = pcd.release();

        spi.write(&[0x0C]).unwrap();
        dc.set_high().unwrap();
        assert_eq!(*log.borrow(), [Event::Write(vec![0x0C]), Event::Dc(true)]);
    }

    #[test]
    fn test_drives_display_controller() {
        use thermo_core::DisplayController;

        let (pcd, log) = driver(false);
        let mut lcd = DisplayController::new(pcd);
        lcd.set_position(15, 2).unwrap();
        lcd.write_bytes(&[0xAA; 12]).unwrap();

        let writes: Vec<Vec<u8>> = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(writes, [vec![0x80 | 15], vec![0x40 | 2], vec![0xAA; 12]]);
    }
}
