//! Test doubles shared by the unit tests

use std::vec::Vec;

use crate::traits::{DisplayError, DisplayTransport, Transfer};

/// Transport that records every byte it is given
#[derive(Default)]
pub struct RecordingTransport {
    log: Vec<(Transfer, u8)>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.log.clear();
    }

    pub fn log(&self) -> &[(Transfer, u8)] {
        &self.log
    }

    pub fn commands(&self) -> Vec<u8> {
        self.bytes_of(Transfer::Command)
    }

    pub fn data(&self) -> Vec<u8> {
        self.bytes_of(Transfer::Data)
    }

    pub fn data_count(&self) -> usize {
        self.log.iter().filter(|(k, _)| *k == Transfer::Data).count()
    }

    /// Data bytes written at each `set_position`, in order
    ///
    /// A new run starts at every X/Y command pair; the entry holds the
    /// position and the data bytes that followed it.
    pub fn runs(&self) -> Vec<((u8, u8), Vec<u8>)> {
        let mut runs: Vec<((u8, u8), Vec<u8>)> = Vec::new();
        let mut pending_x = None;
        for &(kind, byte) in &self.log {
            match kind {
                Transfer::Command if byte & 0x80 != 0 => pending_x = Some(byte & 0x7F),
                Transfer::Command if byte & 0xF8 == 0x40 => {
                    if let Some(x) = pending_x.take() {
                        runs.push(((x, byte & 0x07), Vec::new()));
                    }
                }
                Transfer::Command => {}
                Transfer::Data => {
                    if let Some(run) = runs.last_mut() {
                        run.1.push(byte);
                    }
                }
            }
        }
        runs
    }

    fn bytes_of(&self, kind: Transfer) -> Vec<u8> {
        self.log
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|&(_, b)| b)
            .collect()
    }
}

impl DisplayTransport for RecordingTransport {
    fn send(&mut self, kind: Transfer, byte: u8) -> Result<(), DisplayError> {
        self.log.push((kind, byte));
        Ok(())
    }
}

/// Transport that fails after accepting a fixed number of bytes
pub struct FailingTransport {
    pub remaining: usize,
}

impl DisplayTransport for FailingTransport {
    fn send(&mut self, _kind: Transfer, _byte: u8) -> Result<(), DisplayError> {
        if self.remaining == 0 {
            return Err(DisplayError::Bus);
        }
        self.remaining -= 1;
        Ok(())
    }
}
