//! Terminal abstraction: raw mode ownership and frame output.

mod raw;

pub use raw::{RawModeGuard, enable_raw_mode, is_tty, terminal_size};

use crate::ansi::AnsiWriter;
use std::io::{self, Write};

/// Size used when the terminal cannot report one (e.g. output is a pipe).
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Terminal state manager.
///
/// Owns the frame writer and, once [`Terminal::enter_raw_mode`] succeeded, the
/// raw-mode guard. Dropping the terminal runs [`Terminal::cleanup`], so raw mode
/// never outlives it.
pub struct Terminal<W: Write> {
    out: AnsiWriter<W>,
    raw_mode_guard: Option<RawModeGuard>,
}

impl<W: Write> Terminal<W> {
    /// Create a new terminal with the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            out: AnsiWriter::new(writer),
            raw_mode_guard: None,
        }
    }

    /// Check if terminal is in raw mode.
    #[must_use]
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode_guard.is_some()
    }

    /// Enter raw mode on stdin.
    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        if self.raw_mode_guard.is_none() {
            self.raw_mode_guard = Some(raw::enable_raw_mode()?);
        }
        Ok(())
    }

    /// Exit raw mode, restoring the original settings.
    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        if let Some(mut guard) = self.raw_mode_guard.take() {
            guard.restore()?;
        }
        Ok(())
    }

    /// Current size as `(cols, rows)`, falling back to [`FALLBACK_SIZE`].
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        terminal_size().unwrap_or(FALLBACK_SIZE)
    }

    /// The frame writer.
    pub fn writer(&mut self) -> &mut AnsiWriter<W> {
        &mut self.out
    }

    /// Flush the pending frame.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Leave the screen clean and the terminal cooked.
    ///
    /// Raw mode is restored even when writing the final clear fails.
    pub fn cleanup(&mut self) -> io::Result<()> {
        self.out.clear_buffer();
        self.out.reset();
        self.out.clear_screen();
        let flushed = self.out.flush();
        self.exit_raw_mode()?;
        flushed
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        if self.is_raw_mode() {
            if let Err(err) = self.cleanup() {
                tracing::warn!(%err, "terminal cleanup failed");
            }
        }
    }
}
