//! Fuzz target driving the editor with raw terminal bytes.
//!
//! Commands that touch the filesystem are kept out by dropping `:`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termedit::ansi::AnsiWriter;
use termedit::text::Buffer;
use termedit::{Editor, EditorOptions, InputParser, Renderer};

fuzz_target!(|data: &[u8]| {
    let buffers = vec![
        Buffer::from_text("a.cpp", "int main() {\n  return 0;\n}"),
        Buffer::from_text("b.txt", ""),
    ];
    let Some(mut editor) = Editor::from_buffers(buffers, EditorOptions::default()) else {
        return;
    };
    let bytes: Vec<u8> = data.iter().copied().filter(|&b| b != b':').collect();

    let mut parser = InputParser::new();
    let mut keys = parser.feed(&bytes);
    keys.extend(parser.flush_pending());
    let _ = editor.handle_keys(keys);

    let buffer = editor.active_buffer();
    let cursor = buffer.cursor();
    assert!(cursor.y < buffer.line_count());
    assert!(cursor.x <= buffer.lines()[cursor.y].len());

    let mut out = AnsiWriter::new(Vec::new());
    Renderer::default().render(&mut editor, &mut out, 40, 10);
});
