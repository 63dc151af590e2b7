//! Shared helpers for integration tests.

#![allow(dead_code)]

use termedit::ansi::AnsiWriter;
use termedit::{Buffer, Control, Editor, EditorOptions, InputParser, KeyEvent, Renderer};

/// Editor over in-memory buffers `(name, text)`; the last one is active.
pub fn editor_with(texts: &[(&str, &str)]) -> Editor {
    let buffers = texts
        .iter()
        .map(|(name, text)| Buffer::from_text(*name, text))
        .collect();
    Editor::from_buffers(buffers, EditorOptions::default()).expect("at least one buffer")
}

/// Feed raw terminal bytes through the input parser into the editor, the
/// way the binary does, flushing a trailing lone ESC as a read timeout would.
pub fn send_bytes(editor: &mut Editor, bytes: &[u8]) -> Control {
    let mut parser = InputParser::new();
    let mut keys = parser.feed(bytes);
    keys.extend(parser.flush_pending());
    editor.handle_keys(keys)
}

/// Type a string of plain characters.
pub fn type_text(editor: &mut Editor, text: &str) -> Control {
    editor.handle_keys(text.chars().map(KeyEvent::char))
}

/// Run `:cmd` followed by Enter.
pub fn run_command(editor: &mut Editor, cmd: &str) -> Control {
    send_bytes(editor, format!(":{cmd}\r").as_bytes())
}

/// Render one frame and load it into a vt100 screen.
pub fn render_screen(editor: &mut Editor, renderer: &mut Renderer, cols: u16, rows: u16) -> vt100::Parser {
    let mut out = AnsiWriter::new(Vec::new());
    renderer.render(editor, &mut out, cols, rows);
    let mut screen = vt100::Parser::new(rows, cols, 0);
    screen.process(out.buffer());
    screen
}

/// Text of one screen row.
pub fn row(screen: &vt100::Parser, row: u16) -> String {
    let (_, cols) = screen.screen().size();
    screen.screen().contents_between(row, 0, row, cols)
}
