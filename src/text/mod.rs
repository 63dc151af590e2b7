//! Text storage and editing.
//!
//! A [`Buffer`] holds one file as a vector of byte lines plus a cursor and a
//! bounded snapshot [`History`]. Columns are byte offsets: the editor only
//! ever inserts printable ASCII, and lines read from disk are kept verbatim
//! even when they are not valid UTF-8.
//!
//! # Examples
//!
//! ```
//! use termedit::text::{Buffer, Cursor};
//!
//! let mut buffer = Buffer::from_text("notes.txt", "hi");
//! buffer.set_cursor(2, 0);
//! buffer.insert_byte(b'!');
//! assert_eq!(buffer.text(), "hi!");
//!
//! assert!(buffer.undo());
//! assert_eq!(buffer.text(), "hi");
//! assert_eq!(buffer.cursor(), Cursor::new(2, 0));
//! ```

mod buffer;
mod history;

pub use buffer::{Buffer, Cursor, Direction, Snapshot};
pub use history::{DEFAULT_MAX_HISTORY_DEPTH, History};
