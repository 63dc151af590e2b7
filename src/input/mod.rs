//! Input parsing for terminal key events.
//!
//! Raw bytes from the terminal become [`KeyEvent`]s: printable characters,
//! the control keys the editor reacts to (Tab, Enter, Backspace, Escape) and
//! the CSI arrow and backtab sequences.

mod keyboard;
mod parser;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, ParseError, ParseResult};
