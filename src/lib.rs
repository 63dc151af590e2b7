//! `termedit` - modal, multi-buffer terminal text editor
//!
//! A small vi-flavored editor: NORMAL/INSERT/COMMAND modes, several files
//! open at once with a tab bar, per-buffer snapshot undo/redo and
//! single-line syntax highlighting for C-family source.
//!
//! The library is split along the event loop the binary runs:
//!
//! - [`input`] turns raw terminal bytes into [`KeyEvent`]s,
//! - [`editor`] routes each key through the mode state machine,
//! - [`text`] holds the buffers being edited,
//! - [`render`] draws a full frame through [`ansi`] and [`highlight`],
//! - [`terminal`] owns raw mode for the lifetime of the session.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow EditorOptions, RenderStats etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod input;
pub mod render;
pub mod style;
pub mod terminal;
pub mod text;

// Re-export core types at crate root
pub use config::EditorOptions;
pub use editor::{BufferId, Command, Control, Editor, Mode};
pub use error::{Error, Result};
pub use style::{Color, Style, TextAttributes};

// Re-export input types
pub use input::{InputParser, KeyCode, KeyEvent, KeyModifiers};

// Re-export commonly used types
pub use highlight::Highlighter;
pub use render::Renderer;
pub use terminal::{RawModeGuard, Terminal, enable_raw_mode, is_tty, terminal_size};
pub use text::{Buffer, Cursor};
