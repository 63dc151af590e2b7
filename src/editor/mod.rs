//! Modal multi-buffer editor state.
//!
//! [`Editor`] owns every open [`Buffer`], the current [`Mode`], the command
//! line being typed and the status message. All mutation goes through
//! [`Editor::handle_key`], which routes one key event through the mode state
//! machine and reports whether the session should end.
//!
//! # Example
//!
//! ```
//! use termedit::editor::{Control, Editor, Mode};
//! use termedit::input::{KeyCode, KeyEvent};
//! use termedit::text::Buffer;
//! use termedit::EditorOptions;
//!
//! let mut editor =
//!     Editor::from_buffers(vec![Buffer::from_text("a.txt", "hi")], EditorOptions::default())
//!         .unwrap();
//! let keys = [KeyEvent::char('i'), KeyEvent::char('!'), KeyEvent::key(KeyCode::Esc)];
//! assert_eq!(editor.handle_keys(keys), Control::Continue);
//! assert_eq!(editor.active_buffer().text(), "!hi");
//! assert_eq!(editor.mode(), Mode::Normal);
//!
//! // The only buffer cannot be closed with a plain `:q`.
//! let _ = editor.handle_keys(":q".chars().map(KeyEvent::char));
//! assert_eq!(editor.handle_key(KeyEvent::key(KeyCode::Enter)), Control::Continue);
//! assert_eq!(editor.status(), "Unsaved changes! Use :q! or :wq");
//! ```

mod command;
mod mode;

pub use command::Command;
pub use mode::Mode;

use crate::config::EditorOptions;
use crate::error::Error;
use crate::input::{KeyCode, KeyEvent};
use crate::text::{Buffer, Direction};
use std::path::PathBuf;

/// Handle to one of the editor's buffers.
///
/// Handles are positional: closing a buffer shifts the ones after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BufferId(usize);

impl BufferId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What the caller should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Control {
    /// Keep running.
    Continue,
    /// The session is over; restore the terminal and exit.
    Quit,
}

/// The editor: buffers, mode, command line and status.
#[derive(Debug)]
pub struct Editor {
    buffers: Vec<Buffer>,
    active: BufferId,
    mode: Mode,
    command_line: String,
    status: String,
    options: EditorOptions,
}

impl Editor {
    /// Open one buffer per path, in order; the last one is active.
    ///
    /// Returns `None` if `paths` is empty.
    pub fn open<I, P>(paths: I, options: EditorOptions) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let buffers = paths
            .into_iter()
            .map(|p| Buffer::open(p, options.undo_depth))
            .collect();
        Self::from_buffers(buffers, options)
    }

    /// Editor over already-built buffers; the last one is active.
    ///
    /// Returns `None` if `buffers` is empty.
    #[must_use]
    pub fn from_buffers(buffers: Vec<Buffer>, options: EditorOptions) -> Option<Self> {
        if buffers.is_empty() {
            return None;
        }
        tracing::info!(buffers = buffers.len(), "editor started");
        let active = BufferId(buffers.len() - 1);
        Some(Self {
            buffers,
            active,
            mode: Mode::Normal,
            command_line: String::new(),
            status: String::new(),
            options,
        })
    }

    // ============================================
    // Accessors
    // ============================================

    fn active_index(&self) -> usize {
        self.active.0.min(self.buffers.len() - 1)
    }

    #[must_use]
    pub fn active_id(&self) -> BufferId {
        BufferId(self.active_index())
    }

    #[must_use]
    pub fn active_buffer(&self) -> &Buffer {
        &self.buffers[self.active_index()]
    }

    pub fn active_buffer_mut(&mut self) -> &mut Buffer {
        let index = self.active_index();
        &mut self.buffers[index]
    }

    #[must_use]
    pub fn buffer(&self, id: BufferId) -> Option<&Buffer> {
        self.buffers.get(id.0)
    }

    #[must_use]
    pub fn buffers(&self) -> &[Buffer] {
        &self.buffers
    }

    #[must_use]
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    // ============================================
    // Key dispatch
    // ============================================

    /// Route one key through the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match self.mode {
            Mode::Normal => {
                self.handle_normal(key);
                Control::Continue
            }
            Mode::Insert => {
                self.handle_insert(key);
                Control::Continue
            }
            Mode::Command => self.handle_command_key(key),
        }
    }

    /// Feed keys in order, stopping at the first one that ends the session.
    pub fn handle_keys(&mut self, keys: impl IntoIterator<Item = KeyEvent>) -> Control {
        for key in keys {
            if self.handle_key(key) == Control::Quit {
                return Control::Quit;
            }
        }
        Control::Continue
    }

    fn handle_normal(&mut self, key: KeyEvent) {
        // Arrows move in every mode whatever modifiers the terminal reports.
        if let Some(direction) = arrow_direction(key.code) {
            self.active_buffer_mut().move_cursor(direction);
            return;
        }
        if key.ctrl() || key.alt() {
            return;
        }
        match key.code {
            KeyCode::Char('i') => {
                self.mode = Mode::Insert;
                self.status.clear();
            }
            KeyCode::Char(':') => {
                self.mode = Mode::Command;
                self.command_line.clear();
            }
            KeyCode::Char('u') => {
                let undone = self.active_buffer_mut().undo();
                self.set_status(if undone { "Undo" } else { "Nothing to undo" });
            }
            KeyCode::Char('r') => {
                let redone = self.active_buffer_mut().redo();
                self.set_status(if redone { "Redo" } else { "Nothing to redo" });
            }
            KeyCode::Tab => self.next_buffer(),
            KeyCode::BackTab | KeyCode::Char('Z') => self.prev_buffer(),
            _ => {}
        }
    }

    fn handle_insert(&mut self, key: KeyEvent) {
        if let Some(direction) = arrow_direction(key.code) {
            self.active_buffer_mut().move_cursor(direction);
            return;
        }
        let mutated = match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.status.clear();
                false
            }
            KeyCode::Enter => {
                self.active_buffer_mut().insert_newline();
                true
            }
            KeyCode::Backspace => self.active_buffer_mut().backspace(),
            _ => match key.printable_byte() {
                Some(byte) => self.active_buffer_mut().insert_byte(byte),
                None => false,
            },
        };
        if mutated {
            self.status.clear();
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Enter => {
                let text = std::mem::take(&mut self.command_line);
                self.mode = Mode::Normal;
                return self.run_command_line(&text);
            }
            KeyCode::Esc => {
                self.command_line.clear();
                self.mode = Mode::Normal;
                self.status.clear();
            }
            KeyCode::Backspace => {
                if self.command_line.pop().is_none() {
                    self.mode = Mode::Normal;
                }
            }
            _ => {
                if let Some(byte) = key.printable_byte() {
                    self.command_line.push(char::from(byte));
                }
            }
        }
        Control::Continue
    }

    // ============================================
    // Commands
    // ============================================

    /// Parse and run command-line text as if typed after `:`.
    pub fn run_command_line(&mut self, text: &str) -> Control {
        self.status.clear();
        match Command::parse(text) {
            Ok(command) => self.execute(command),
            Err(Error::EmptyPath) => {
                self.set_status("No file name given");
                Control::Continue
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected command");
                let shown = match err {
                    Error::UnknownCommand(text) => text,
                    other => other.to_string(),
                };
                self.set_status(format!("Unknown: {shown}"));
                Control::Continue
            }
        }
    }

    /// Run one parsed command.
    pub fn execute(&mut self, command: Command) -> Control {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Write => {
                self.save_active();
                Control::Continue
            }
            Command::Quit { force: false } => {
                if self.active_buffer().is_modified() {
                    self.set_status("Unsaved changes! Use :q! or :wq");
                } else if self.buffers.len() == 1 {
                    self.set_status("Cannot close last buffer");
                } else {
                    return self.close_active();
                }
                Control::Continue
            }
            Command::Quit { force: true } => self.close_active(),
            Command::WriteQuit => {
                if self.save_active() {
                    self.close_active()
                } else {
                    Control::Continue
                }
            }
            Command::WriteAll => {
                let (saved, failed) = self.save_all_modified();
                self.set_status(saved_report(saved, failed));
                Control::Continue
            }
            Command::QuitAll { force: false } => {
                if self.buffers.iter().any(Buffer::is_modified) {
                    self.set_status("Unsaved changes! Use :qa! or :wqa");
                    Control::Continue
                } else {
                    self.end_session()
                }
            }
            Command::QuitAll { force: true } => self.end_session(),
            Command::WriteQuitAll => {
                let (saved, failed) = self.save_all_modified();
                if failed == 0 {
                    self.end_session()
                } else {
                    self.set_status(saved_report(saved, failed));
                    Control::Continue
                }
            }
            Command::Edit(path) => {
                self.open_buffer(path);
                Control::Continue
            }
            Command::NextBuffer => {
                self.next_buffer();
                Control::Continue
            }
            Command::PrevBuffer => {
                self.prev_buffer();
                Control::Continue
            }
            Command::List => {
                let names: Vec<String> = self.buffers.iter().map(Buffer::name).collect();
                self.set_status(format!("Buffers: {}", names.join(", ")));
                Control::Continue
            }
        }
    }

    /// Load `path` into a new buffer and make it active.
    pub fn open_buffer(&mut self, path: impl Into<PathBuf>) -> BufferId {
        let buffer = Buffer::open(path, self.options.undo_depth);
        let name = buffer.name();
        self.buffers.push(buffer);
        self.active = BufferId(self.buffers.len() - 1);
        tracing::info!(name = %name, buffers = self.buffers.len(), "opened buffer");
        self.set_status(format!("Opened: {name}"));
        self.active
    }

    /// Cycle to the next buffer. A single buffer is left alone.
    pub fn next_buffer(&mut self) {
        let len = self.buffers.len();
        if len > 1 {
            self.active = BufferId((self.active_index() + 1) % len);
            self.announce_switch();
        }
    }

    /// Cycle to the previous buffer. A single buffer is left alone.
    pub fn prev_buffer(&mut self) {
        let len = self.buffers.len();
        if len > 1 {
            self.active = BufferId((self.active_index() + len - 1) % len);
            self.announce_switch();
        }
    }

    fn announce_switch(&mut self) {
        let name = self.active_buffer().name();
        self.set_status(format!("Switched to: {name}"));
    }

    /// Save the active buffer, reporting the outcome in the status line.
    fn save_active(&mut self) -> bool {
        let buffer = self.active_buffer_mut();
        let name = buffer.name();
        match buffer.save() {
            Ok(()) => {
                self.set_status(format!("Saved: {name}"));
                true
            }
            Err(err) => {
                let reason = match err {
                    Error::Save { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                self.set_status(format!("Error saving {name}: {reason}"));
                false
            }
        }
    }

    /// Save every modified buffer. Returns `(saved, failed)`.
    fn save_all_modified(&mut self) -> (usize, usize) {
        let mut saved = 0;
        let mut failed = 0;
        for buffer in self.buffers.iter_mut().filter(|b| b.is_modified()) {
            if buffer.save().is_ok() {
                saved += 1;
            } else {
                failed += 1;
            }
        }
        (saved, failed)
    }

    /// Remove the active buffer. Removing the last one ends the session.
    fn close_active(&mut self) -> Control {
        if self.buffers.len() == 1 {
            return self.end_session();
        }
        let index = self.active_index();
        let closed = self.buffers.remove(index);
        self.active = BufferId(index.min(self.buffers.len() - 1));
        tracing::info!(name = %closed.name(), buffers = self.buffers.len(), "closed buffer");
        self.set_status("Buffer closed");
        Control::Continue
    }

    fn end_session(&self) -> Control {
        tracing::info!(buffers = self.buffers.len(), "session ended");
        Control::Quit
    }
}

fn saved_report(saved: usize, failed: usize) -> String {
    if failed == 0 {
        format!("Saved {saved} buffers")
    } else {
        format!("Saved {saved} buffers, {failed} failed")
    }
}

fn arrow_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}
