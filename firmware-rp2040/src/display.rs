//! Serial character display sink.
//!
//! Drives a 16x2 serial character display (SerLCD-style command set)
//! over UART TX. Each update homes the cursor and repaints both rows;
//! the rows are rendered at full width, so no explicit clear is needed
//! and the display never flickers through a blank frame.

use embassy_rp::uart::{Async, UartTx};
use heading_core::{render_lines, DisplayError, DisplaySink, HeadingSnapshot};

/// Command escape byte for the display's instruction set.
const CMD: u8 = 0xFE;
/// Move the cursor to row 0, column 0.
const CURSOR_ROW0: u8 = 0x80;
/// Move the cursor to row 1, column 0.
const CURSOR_ROW1: u8 = 0xC0;

/// Serial character display sink.
pub struct SerialDisplay<'d> {
    tx: UartTx<'d, Async>,
}

impl<'d> SerialDisplay<'d> {
    /// Create a new display sink from the given UART transmitter.
    #[must_use]
    pub fn new(tx: UartTx<'d, Async>) -> Self {
        Self { tx }
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.tx.write(bytes).await.map_err(|_| DisplayError::Io)
    }
}

impl DisplaySink for SerialDisplay<'_> {
    async fn show(&mut self, snapshot: &HeadingSnapshot) -> Result<(), DisplayError> {
        let [top, bottom] = render_lines(snapshot);

        self.write_all(&[CMD, CURSOR_ROW0]).await?;
        self.write_all(top.as_bytes()).await?;
        self.write_all(&[CMD, CURSOR_ROW1]).await?;
        self.write_all(bottom.as_bytes()).await?;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}
