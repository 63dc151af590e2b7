//! Buffered ANSI output writer.

use crate::ansi;
use crate::style::Style;
use std::io::{self, Write};

/// Buffered writer that assembles a whole frame before touching the terminal.
///
/// Every write lands in an in-memory buffer; [`AnsiWriter::flush`] hands the
/// complete frame to the underlying writer in one `write_all`.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
        }
    }

    /// Write raw bytes to the buffer.
    pub fn write_raw(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Write `n` spaces.
    pub fn pad(&mut self, n: usize) {
        self.buffer.resize(self.buffer.len() + n, b' ');
    }

    /// Move cursor to an absolute 0-indexed position.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
    }

    /// Switch to `style`, dropping whatever attributes were active.
    pub fn set_style(&mut self, style: Style) {
        self.reset();
        let _ = style.write_sgr(&mut self.buffer);
    }

    /// Reset all ANSI attributes.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
    }

    /// Clear the screen and home the cursor.
    pub fn clear_screen(&mut self) {
        self.write_str(ansi::CLEAR_SCREEN);
        self.write_str(ansi::CURSOR_HOME);
    }

    /// Clear from the cursor to the end of the line.
    pub fn clear_line_right(&mut self) {
        self.write_str(ansi::CLEAR_LINE_RIGHT);
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Get a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Get a reference to the buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer without flushing.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }
}
