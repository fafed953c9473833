//! Segment composer
//!
//! Writes byte runs and atlas rows at the current cursor. Callers are
//! responsible for positioning first; the cursor then advances by one
//! column per byte, exactly as the controller's address counter does.

use super::DisplayController;
use crate::traits::{DisplayError, DisplayTransport, Transfer};

impl<T: DisplayTransport> DisplayController<T> {
    /// Write raw display data at the cursor
    ///
    /// The cursor only advances once the whole run has been accepted. After
    /// an error the controller's own address counter may already have moved
    /// past some of the bytes, so call `set_position` before writing again.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.transport.send_all(Transfer::Data, bytes)?;
        for _ in 0..bytes.len() {
            self.cursor = self.cursor.advanced();
        }
        Ok(())
    }

    /// Write row `row` of a fixed-width glyph table at the cursor
    ///
    /// # Panics
    /// If `row` is not a valid index into `table`.
    pub fn write_glyph_row<const W: usize>(
        &mut self,
        table: &[[u8; W]],
        row: usize,
    ) -> Result<(), DisplayError> {
        self.write_bytes(&table[row])
    }
}
