//! Display transport trait for the PCD8544

/// Errors that can occur while shifting bytes to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI bus write failed
    Bus,
    /// Driving the D/C or chip-enable line failed
    Pin,
}

/// How the controller interprets a transferred byte
///
/// The PCD8544 samples its D/C line with every byte: low selects the
/// instruction decoder, high writes one column of pixels into DDRAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transfer {
    /// Addressing, contrast, mode and other instructions
    Command,
    /// One 8-pixel column of display data
    Data,
}

/// Trait for the byte-level display link
///
/// The display has no readable state, so this is the only channel the
/// rendering engine has to the hardware. Implementations are expected to
/// block until the byte has been accepted.
pub trait DisplayTransport {
    /// Send a single byte as command or data
    fn send(&mut self, kind: Transfer, byte: u8) -> Result<(), DisplayError>;

    /// Send a run of bytes of the same kind
    ///
    /// The default loops over [`send`](Self::send). Bus implementations
    /// should override this to keep the chip selected for the whole run.
    fn send_all(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), DisplayError> {
        for &byte in bytes {
            self.send(kind, byte)?;
        }
        Ok(())
    }
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for &mut T {
    fn send(&mut self, kind: Transfer, byte: u8) -> Result<(), DisplayError> {
        (**self).send(kind, byte)
    }

    fn send_all(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), DisplayError> {
        (**self).send_all(kind, bytes)
    }
}
