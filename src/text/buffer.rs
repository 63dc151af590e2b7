//! One file's lines, cursor and edit history.

use super::history::{DEFAULT_MAX_HISTORY_DEPTH, History};
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Cursor position. `x` is a byte offset into line `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Direction for single-cell cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Full copy of the editable state, as stored in the undo history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub lines: Vec<Vec<u8>>,
    pub cursor: Cursor,
}

/// An in-memory file.
///
/// `lines` is never empty; an empty file is one empty line.
#[derive(Clone, Debug)]
pub struct Buffer {
    lines: Vec<Vec<u8>>,
    path: PathBuf,
    modified: bool,
    cursor: Cursor,
    scroll: usize,
    history: History<Snapshot>,
}

/// Split file contents into lines. A trailing newline does not start a new line.
fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = data.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect();
    if lines.len() > 1 && lines.last().is_some_and(Vec::is_empty) {
        lines.pop();
    }
    lines
}

impl Buffer {
    /// Empty buffer bound to `path`. Nothing is read from disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_undo_depth(path, DEFAULT_MAX_HISTORY_DEPTH)
    }

    /// Empty buffer with a custom undo bound.
    #[must_use]
    pub fn with_undo_depth(path: impl Into<PathBuf>, undo_depth: usize) -> Self {
        Self {
            lines: vec![Vec::new()],
            path: path.into(),
            modified: false,
            cursor: Cursor::default(),
            scroll: 0,
            history: History::with_max_depth(undo_depth),
        }
    }

    /// Buffer bound to `path` and loaded from it.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, undo_depth: usize) -> Self {
        let mut buffer = Self::with_undo_depth(path, undo_depth);
        buffer.load();
        buffer
    }

    /// Buffer holding `text`, split the same way a loaded file is.
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let mut buffer = Self::new(path);
        buffer.lines = split_lines(text.as_bytes());
        buffer
    }

    /// Replace the contents with the file at `path`.
    ///
    /// A missing or unreadable file gives a single empty line; that is a new
    /// file, not an error. Returns whether anything was read from disk.
    pub fn load(&mut self) -> bool {
        let loaded = match fs::read(&self.path) {
            Ok(data) => {
                self.lines = split_lines(&data);
                tracing::debug!(path = %self.path.display(), lines = self.lines.len(), "loaded file");
                true
            }
            Err(err) => {
                if err.kind() == ErrorKind::NotFound {
                    tracing::debug!(path = %self.path.display(), "new file");
                } else {
                    tracing::warn!(path = %self.path.display(), error = %err, "could not read file, starting empty");
                }
                self.lines = vec![Vec::new()];
                false
            }
        };
        self.cursor = Cursor::default();
        self.scroll = 0;
        self.modified = false;
        self.history.clear();
        loaded
    }

    /// Write the lines joined by `\n`, with no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] if the file cannot be written; the buffer stays
    /// modified.
    pub fn save(&mut self) -> Result<()> {
        let data = self.lines.join(&b'\n');
        match fs::write(&self.path, &data) {
            Ok(()) => {
                self.modified = false;
                tracing::info!(path = %self.path.display(), bytes = data.len(), "saved file");
                Ok(())
            }
            Err(source) => {
                tracing::warn!(path = %self.path.display(), error = %source, "save failed");
                Err(Error::Save {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name: the path as given.
    #[must_use]
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    #[must_use]
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, y: usize) -> Option<&[u8]> {
        self.lines.get(y).map(Vec::as_slice)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Contents joined by `\n`, lossily decoded.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.lines.join(&b'\n')).into_owned()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor to `(x, y)`, clamped into the buffer.
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursor = Cursor::new(x, y);
        self.clamp_cursor();
    }

    /// Pull the cursor back inside the buffer.
    pub fn clamp_cursor(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        self.cursor.y = self.cursor.y.min(self.lines.len() - 1);
        self.cursor.x = self.cursor.x.min(self.lines[self.cursor.y].len());
    }

    /// Move one cell. Vertical moves clamp `x` to the new line.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.clamp_cursor();
        match direction {
            Direction::Left => self.cursor.x = self.cursor.x.saturating_sub(1),
            Direction::Right => self.cursor.x += 1,
            Direction::Up => self.cursor.y = self.cursor.y.saturating_sub(1),
            Direction::Down => self.cursor.y += 1,
        }
        self.clamp_cursor();
    }

    /// First line shown in the viewport.
    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Adjust `scroll` so the cursor line is within `rows` visible lines.
    pub fn scroll_to_cursor(&mut self, rows: usize) {
        let rows = rows.max(1);
        if self.cursor.y < self.scroll {
            self.scroll = self.cursor.y;
        } else if self.cursor.y >= self.scroll + rows {
            self.scroll = self.cursor.y + 1 - rows;
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            lines: self.lines.clone(),
            cursor: self.cursor,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.lines = snapshot.lines;
        self.cursor = snapshot.cursor;
        self.clamp_cursor();
        self.modified = true;
    }

    /// Record the current state for undo. Clears redo.
    pub fn push_undo(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }

    /// Restore the most recent undo entry. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone state. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    /// Insert a printable ASCII byte at the cursor.
    ///
    /// Returns false (and changes nothing) for any other byte.
    pub fn insert_byte(&mut self, byte: u8) -> bool {
        if !(0x20..0x7f).contains(&byte) {
            return false;
        }
        self.clamp_cursor();
        self.push_undo();
        let Cursor { x, y } = self.cursor;
        self.lines[y].insert(x, byte);
        self.cursor.x += 1;
        self.modified = true;
        true
    }

    /// Split the current line at the cursor; the cursor moves to the start of
    /// the new line.
    pub fn insert_newline(&mut self) {
        self.clamp_cursor();
        self.push_undo();
        let Cursor { x, y } = self.cursor;
        let rest = self.lines[y].split_off(x);
        self.lines.insert(y + 1, rest);
        self.cursor = Cursor::new(0, y + 1);
        self.modified = true;
    }

    /// Delete the byte before the cursor, joining lines at column 0.
    ///
    /// At the very start of the buffer this is a no-op and returns false.
    pub fn backspace(&mut self) -> bool {
        self.clamp_cursor();
        let Cursor { x, y } = self.cursor;
        if x > 0 {
            self.push_undo();
            self.lines[y].remove(x - 1);
            self.cursor.x -= 1;
        } else if y > 0 {
            self.push_undo();
            let line = self.lines.remove(y);
            let joined_at = self.lines[y - 1].len();
            self.lines[y - 1].extend_from_slice(&line);
            self.cursor = Cursor::new(joined_at, y - 1);
        } else {
            return false;
        }
        self.modified = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lines_of(buffer: &Buffer) -> Vec<&str> {
        buffer
            .lines()
            .iter()
            .map(|l| std::str::from_utf8(l).unwrap())
            .collect()
    }

    // ============================================
    // Loading and saving
    // ============================================

    #[test]
    fn missing_file_loads_as_one_empty_line() {
        let dir = tempdir().unwrap();
        let buffer = Buffer::open(dir.path().join("nope.txt"), 100);
        assert_eq!(buffer.line_count(), 1);
        assert!(buffer.lines()[0].is_empty());
        assert!(!buffer.is_modified());
        assert_eq!(buffer.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "one\ntwo\n").unwrap();
        let buffer = Buffer::open(&path, 100);
        assert_eq!(lines_of(&buffer), vec!["one", "two"]);
    }

    #[test]
    fn inner_blank_lines_are_kept() {
        let buffer = Buffer::from_text("x", "a\n\nb\n\n");
        assert_eq!(lines_of(&buffer), vec!["a", "", "b", ""]);
    }

    #[test]
    fn empty_file_is_one_empty_line() {
        let buffer = Buffer::from_text("x", "");
        assert_eq!(lines_of(&buffer), vec![""]);
    }

    #[test]
    fn save_writes_without_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut buffer = Buffer::from_text(&path, "a\nb");
        buffer.insert_byte(b'!');
        assert!(buffer.is_modified());
        buffer.save().unwrap();
        assert!(!buffer.is_modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), "!a\nb");
    }

    #[test]
    fn save_failure_keeps_modified() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("f.txt");
        let mut buffer = Buffer::new(&path);
        buffer.insert_byte(b'x');
        let err = buffer.save().unwrap_err();
        assert!(matches!(err, Error::Save { .. }));
        assert!(buffer.is_modified());
    }

    #[test]
    fn load_resets_cursor_scroll_and_history() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, "abc\ndef").unwrap();
        let mut buffer = Buffer::open(&path, 100);
        buffer.set_cursor(2, 1);
        buffer.insert_byte(b'z');
        buffer.scroll_to_cursor(1);
        assert!(buffer.load());
        assert_eq!(buffer.cursor(), Cursor::new(0, 0));
        assert_eq!(buffer.scroll(), 0);
        assert!(!buffer.history().can_undo());
        assert!(!buffer.is_modified());
    }

    // ============================================
    // Mutations
    // ============================================

    #[test]
    fn insert_byte_advances_cursor() {
        let mut buffer = Buffer::from_text("x", "hi");
        buffer.set_cursor(2, 0);
        assert!(buffer.insert_byte(b'!'));
        assert_eq!(lines_of(&buffer), vec!["hi!"]);
        assert_eq!(buffer.cursor(), Cursor::new(3, 0));
        assert!(buffer.is_modified());
    }

    #[test]
    fn non_printable_bytes_are_rejected() {
        let mut buffer = Buffer::from_text("x", "hi");
        assert!(!buffer.insert_byte(0x07));
        assert!(!buffer.insert_byte(0x7f));
        assert!(!buffer.insert_byte(0xc3));
        assert!(!buffer.is_modified());
        assert!(!buffer.history().can_undo());
    }

    #[test]
    fn newline_splits_line() {
        let mut buffer = Buffer::from_text("x", "hello");
        buffer.set_cursor(2, 0);
        buffer.insert_newline();
        assert_eq!(lines_of(&buffer), vec!["he", "llo"]);
        assert_eq!(buffer.cursor(), Cursor::new(0, 1));
    }

    #[test]
    fn backspace_removes_previous_byte() {
        let mut buffer = Buffer::from_text("x", "abc");
        buffer.set_cursor(2, 0);
        assert!(buffer.backspace());
        assert_eq!(lines_of(&buffer), vec!["ac"]);
        assert_eq!(buffer.cursor(), Cursor::new(1, 0));
    }

    #[test]
    fn backspace_at_line_start_joins_lines() {
        let mut buffer = Buffer::from_text("x", "ab\ncd");
        buffer.set_cursor(0, 1);
        assert!(buffer.backspace());
        assert_eq!(lines_of(&buffer), vec!["abcd"]);
        assert_eq!(buffer.cursor(), Cursor::new(2, 0));
    }

    #[test]
    fn backspace_at_origin_is_a_noop() {
        let mut buffer = Buffer::from_text("x", "ab");
        assert!(!buffer.backspace());
        assert_eq!(lines_of(&buffer), vec!["ab"]);
        assert!(!buffer.is_modified());
        assert!(!buffer.history().can_undo());
    }

    #[test]
    fn mutation_clamps_stale_cursor_first() {
        let mut buffer = Buffer::from_text("x", "ab\ncd");
        buffer.set_cursor(1, 1);
        buffer.backspace();
        buffer.backspace();
        buffer.set_cursor(99, 99);
        assert_eq!(buffer.cursor(), Cursor::new(3, 0));
        buffer.insert_byte(b'x');
        assert_eq!(lines_of(&buffer), vec!["abdx"]);
    }

    // ============================================
    // Cursor movement
    // ============================================

    #[test]
    fn move_cursor_clamps_at_edges() {
        let mut buffer = Buffer::from_text("x", "ab\nc");
        buffer.move_cursor(Direction::Left);
        buffer.move_cursor(Direction::Up);
        assert_eq!(buffer.cursor(), Cursor::new(0, 0));
        buffer.move_cursor(Direction::Right);
        buffer.move_cursor(Direction::Right);
        buffer.move_cursor(Direction::Right);
        assert_eq!(buffer.cursor(), Cursor::new(2, 0));
        buffer.move_cursor(Direction::Down);
        assert_eq!(buffer.cursor(), Cursor::new(1, 1));
        buffer.move_cursor(Direction::Down);
        assert_eq!(buffer.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn scroll_follows_cursor() {
        let text = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut buffer = Buffer::from_text("x", &text);
        buffer.set_cursor(0, 15);
        buffer.scroll_to_cursor(5);
        assert_eq!(buffer.scroll(), 11);
        buffer.set_cursor(0, 3);
        buffer.scroll_to_cursor(5);
        assert_eq!(buffer.scroll(), 3);
        buffer.scroll_to_cursor(0);
        assert_eq!(buffer.scroll(), 3);
    }

    // ============================================
    // Undo / redo
    // ============================================

    #[test]
    fn undo_restores_lines_and_cursor() {
        let mut buffer = Buffer::from_text("x", "ab");
        buffer.set_cursor(1, 0);
        buffer.insert_byte(b'X');
        buffer.insert_newline();
        assert!(buffer.undo());
        assert_eq!(lines_of(&buffer), vec!["aXb"]);
        assert_eq!(buffer.cursor(), Cursor::new(2, 0));
        assert!(buffer.undo());
        assert_eq!(lines_of(&buffer), vec!["ab"]);
        assert_eq!(buffer.cursor(), Cursor::new(1, 0));
        assert!(!buffer.undo());
    }

    #[test]
    fn redo_reapplies() {
        let mut buffer = Buffer::from_text("x", "");
        buffer.insert_byte(b'a');
        assert!(buffer.undo());
        assert!(buffer.redo());
        assert_eq!(lines_of(&buffer), vec!["a"]);
        assert_eq!(buffer.cursor(), Cursor::new(1, 0));
        assert!(!buffer.redo());
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut buffer = Buffer::from_text("x", "");
        buffer.insert_byte(b'a');
        buffer.undo();
        buffer.insert_byte(b'b');
        assert!(!buffer.redo());
    }

    #[test]
    fn undo_depth_is_configurable() {
        let mut buffer = Buffer::with_undo_depth("x", 2);
        for b in b"abcd" {
            buffer.insert_byte(*b);
        }
        assert!(buffer.undo());
        assert!(buffer.undo());
        assert!(!buffer.undo());
        assert_eq!(lines_of(&buffer), vec!["ab"]);
    }
}
