//! Byte-level parser for terminal keyboard input.
//!
//! Turns raw bytes read from a raw-mode terminal into [`KeyEvent`]s. The only
//! escape sequences understood are the CSI arrow keys (`ESC [ A..D`, with an
//! optional `1;N` modifier parameter) and backtab (`ESC [ Z`). A lone `ESC`
//! is ambiguous until the read timeout expires; [`InputParser::feed`] keeps it
//! pending and [`InputParser::flush_pending`] resolves it to the Escape key.

// Result wrapping is for consistency in the parsing API
#![allow(clippy::unnecessary_wraps)]
// Self is used for consistency with other methods even when not needed
#![allow(clippy::unused_self)]

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape sequence (need more bytes).
    Incomplete,
    /// Unrecognized escape sequence; the whole sequence should be skipped.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 in input; skip one byte.
    InvalidUtf8,
}

/// Result of parsing input: the key and the number of bytes consumed.
pub type ParseResult = Result<(KeyEvent, usize), ParseError>;

/// Longest escape sequence kept pending before it is discarded.
const MAX_PENDING_SEQUENCE: usize = 32;

/// Parser state for byte streams split across reads.
#[derive(Clone, Debug, Default)]
pub struct InputParser {
    /// Bytes of an unfinished sequence carried over from the last feed.
    pending: Vec<u8>,
}

impl InputParser {
    /// Create a new input parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one key from the front of `input`.
    ///
    /// Returns the key and number of bytes consumed, or an error.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            0x00 => Ok((KeyEvent::key(KeyCode::Null), 1)),
            b'\t' => Ok((KeyEvent::key(KeyCode::Tab), 1)),
            b'\r' | b'\n' => Ok((KeyEvent::key(KeyCode::Enter), 1)),
            0x08 | 0x7f => Ok((KeyEvent::key(KeyCode::Backspace), 1)),
            0x01..=0x1a => {
                // Ctrl+A through Ctrl+Z
                let c = (first - 1 + b'a') as char;
                Ok((KeyEvent::with_ctrl(KeyCode::Char(c)), 1))
            }
            0x1c..=0x1f => {
                let c = (first + 0x40) as char;
                Ok((KeyEvent::with_ctrl(KeyCode::Char(c)), 1))
            }
            0x20..=0x7e => Ok((KeyEvent::char(first as char), 1)),
            0x80..=0xff => self.parse_utf8(input),
        }
    }

    /// Feed freshly read bytes and return every complete key.
    ///
    /// An unfinished escape sequence at the end stays pending for the next
    /// call.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<KeyEvent> {
        self.pending.extend_from_slice(bytes);
        let mut keys = Vec::new();
        let mut offset = 0;

        while offset < self.pending.len() {
            match self.parse(&self.pending[offset..]) {
                Ok((key, consumed)) => {
                    keys.push(key);
                    offset += consumed;
                }
                Err(ParseError::Incomplete) => {
                    if self.pending.len() - offset > MAX_PENDING_SEQUENCE {
                        tracing::debug!("dropping oversized escape sequence");
                        offset = self.pending.len();
                    }
                    break;
                }
                Err(ParseError::UnrecognizedSequence(seq)) => {
                    tracing::debug!(?seq, "ignoring unrecognized sequence");
                    offset += seq.len().max(1);
                }
                Err(ParseError::InvalidUtf8 | ParseError::Empty) => offset += 1,
            }
        }

        self.pending.drain(..offset);
        keys
    }

    /// Resolve pending bytes after a read returned nothing.
    ///
    /// No continuation arrived in time, so a pending `ESC` is the Escape key
    /// and whatever followed it is parsed on its own.
    pub fn flush_pending(&mut self) -> Vec<KeyEvent> {
        let mut keys = Vec::new();
        loop {
            let pending = std::mem::take(&mut self.pending);
            let Some((&first, rest)) = pending.split_first() else {
                break;
            };
            if first == 0x1b {
                keys.push(KeyEvent::key(KeyCode::Esc));
            }
            // Otherwise it is the lead byte of truncated UTF-8; drop it.
            keys.extend(self.feed(rest));
        }
        keys
    }

    /// Check whether bytes are waiting for a sequence to complete.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Parse an escape sequence.
    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        match input.get(1) {
            None => Err(ParseError::Incomplete),
            Some(b'[') => self.parse_csi(input),
            // ESC followed by anything else: the Escape key, then that byte
            // as a key of its own.
            Some(_) => Ok((KeyEvent::key(KeyCode::Esc), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ ...).
    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        // Find the final byte (0x40-0x7e)
        let Some(end) = input
            .iter()
            .skip(2)
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|i| i + 2)
        else {
            return Err(ParseError::Incomplete);
        };

        let params = &input[2..end];
        let consumed = end + 1;

        match input[end] {
            b'A' => self.parse_modified_key(params, KeyCode::Up, consumed),
            b'B' => self.parse_modified_key(params, KeyCode::Down, consumed),
            b'C' => self.parse_modified_key(params, KeyCode::Right, consumed),
            b'D' => self.parse_modified_key(params, KeyCode::Left, consumed),
            b'Z' => Ok((
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                consumed,
            )),
            _ => Err(ParseError::UnrecognizedSequence(input[..consumed].to_vec())),
        }
    }

    /// Parse a key with modifiers from CSI params.
    fn parse_modified_key(&self, params: &[u8], base_key: KeyCode, consumed: usize) -> ParseResult {
        Ok((
            KeyEvent::new(base_key, self.parse_modifiers(params)),
            consumed,
        ))
    }

    /// Parse modifiers from CSI parameter bytes.
    ///
    /// Format: `1;N` where `N = 1 + shift + 2*alt + 4*ctrl`.
    fn parse_modifiers(&self, params: &[u8]) -> KeyModifiers {
        let mut mods = KeyModifiers::empty();
        let Some(n) = std::str::from_utf8(params)
            .ok()
            .and_then(|s| s.split(';').nth(1))
            .and_then(|n| n.parse::<u8>().ok())
        else {
            return mods;
        };
        let n = n.saturating_sub(1);
        if n & 1 != 0 {
            mods |= KeyModifiers::SHIFT;
        }
        if n & 2 != 0 {
            mods |= KeyModifiers::ALT;
        }
        if n & 4 != 0 {
            mods |= KeyModifiers::CTRL;
        }
        mods
    }

    /// Parse a UTF-8 character sequence.
    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let first = input[0];

        let expected_len = if first & 0b1110_0000 == 0b1100_0000 {
            2
        } else if first & 0b1111_0000 == 0b1110_0000 {
            3
        } else if first & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            return Err(ParseError::InvalidUtf8);
        };

        if input.len() < expected_len {
            return Err(ParseError::Incomplete);
        }

        let s = std::str::from_utf8(&input[..expected_len]).map_err(|_| ParseError::InvalidUtf8)?;
        let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;

        Ok((KeyEvent::char(c), expected_len))
    }

    /// Drop any pending bytes.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
