//! Full-frame rendering of the editor.
//!
//! Every frame is drawn from scratch into the [`AnsiWriter`]'s buffer and
//! flushed once; there is no diffing. Layout, top to bottom:
//!
//! | Row | Content |
//! |---|---|
//! | 0 | tab bar: one ` name[+] ` segment per buffer on blue |
//! | 1 | header: ` Mode: X \| hints \| Buffers: N ` in reverse video |
//! | 2 .. rows-2 | visible lines of the active buffer, highlighted |
//! | rows-1 | status: `:command`, the status message, or `line,col` |

use crate::ansi::{self, AnsiWriter};
use crate::config::EditorOptions;
use crate::editor::{Editor, Mode};
use crate::highlight::Highlighter;
use crate::style::{Color, Style};
use crate::terminal::Terminal;
use std::io::{self, Write};

/// Rows taken by the tab bar, header and status line.
pub const CHROME_ROWS: u16 = 3;

const TAB_BAR: Style = Style::bg(Color::BLUE);
const TAB_ACTIVE: Style = Style::fg(Color::WHITE).with_bg(Color::BLUE).with_bold();
const TAB_INACTIVE: Style = Style::fg(Color::WHITE).with_bg(Color::BLUE);

/// Rendering statistics.
#[derive(Clone, Debug, Default)]
pub struct RenderStats {
    pub frames: u64,
    pub last_frame_bytes: usize,
}

/// Draws editor frames.
#[derive(Debug)]
pub struct Renderer {
    highlighter: Highlighter,
    stats: RenderStats,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::with_highlighter(Highlighter::new())
    }
}

/// Longest prefix of `text` that fits in `width` columns, one column per char.
fn fit(text: &str, width: usize) -> (&str, usize) {
    match text.char_indices().nth(width) {
        Some((end, _)) => (&text[..end], width),
        None => (text, text.chars().count()),
    }
}

impl Renderer {
    /// Renderer configured from session options.
    #[must_use]
    pub fn new(options: &EditorOptions) -> Self {
        Self::with_highlighter(options.highlighter())
    }

    #[must_use]
    pub fn with_highlighter(highlighter: Highlighter) -> Self {
        Self {
            highlighter,
            stats: RenderStats::default(),
        }
    }

    #[must_use]
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    #[must_use]
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Draw one frame into `out`'s buffer without flushing.
    ///
    /// Scrolls the active buffer so its cursor line is visible.
    pub fn render<W: Write>(&mut self, editor: &mut Editor, out: &mut AnsiWriter<W>, cols: u16, rows: u16) {
        let start = out.buffer().len();
        let cols = usize::from(cols.max(1));
        let rows = rows.max(CHROME_ROWS);
        let content_rows = rows - CHROME_ROWS;

        editor
            .active_buffer_mut()
            .scroll_to_cursor(usize::from(content_rows));

        out.write_str(ansi::CURSOR_HIDE);
        out.clear_screen();

        draw_tab_bar(editor, out, cols);
        draw_header(editor, out, cols);
        self.draw_content(editor, out, cols, content_rows);
        draw_status(editor, out, cols, rows);

        let (row, col) = cursor_cell(editor, cols, rows);
        out.move_cursor(row, col);
        out.write_str(ansi::CURSOR_SHOW);

        self.stats.frames += 1;
        self.stats.last_frame_bytes = out.buffer().len() - start;
    }

    /// Render a frame sized to `terminal` and flush it.
    pub fn present<W: Write>(&mut self, editor: &mut Editor, terminal: &mut Terminal<W>) -> io::Result<()> {
        let (cols, rows) = terminal.size();
        self.render(editor, terminal.writer(), cols, rows);
        terminal.flush()
    }

    fn draw_content<W: Write>(&self, editor: &Editor, out: &mut AnsiWriter<W>, cols: usize, content_rows: u16) {
        let buffer = editor.active_buffer();
        let scroll = buffer.scroll();
        for i in 0..content_rows {
            out.move_cursor(2 + u32::from(i), 0);
            if let Some(line) = buffer.line(scroll + usize::from(i)) {
                let visible = &line[..line.len().min(cols)];
                out.write_raw(&self.highlighter.highlight_line(visible));
            }
            out.clear_line_right();
        }
    }
}

fn draw_tab_bar<W: Write>(editor: &Editor, out: &mut AnsiWriter<W>, cols: usize) {
    out.move_cursor(0, 0);
    let active = editor.active_id().index();
    let mut used = 0;
    for (i, buffer) in editor.buffers().iter().enumerate() {
        if used >= cols {
            break;
        }
        let segment = format!(
            " {}{} ",
            buffer.name(),
            if buffer.is_modified() { "[+]" } else { "" }
        );
        let (shown, width) = fit(&segment, cols - used);
        out.set_style(if i == active { TAB_ACTIVE } else { TAB_INACTIVE });
        out.write_str(shown);
        used += width;
    }
    out.set_style(TAB_BAR);
    out.pad(cols - used);
    out.reset();
}

fn draw_header<W: Write>(editor: &Editor, out: &mut AnsiWriter<W>, cols: usize) {
    out.move_cursor(1, 0);
    let mode = editor.mode();
    let header = format!(
        " Mode: {} | {} | Buffers: {} ",
        mode,
        mode.hints(),
        editor.buffer_count()
    );
    out.set_style(Style::inverse());
    let (shown, width) = fit(&header, cols);
    out.write_str(shown);
    out.pad(cols - width);
    out.reset();
}

fn draw_status<W: Write>(editor: &Editor, out: &mut AnsiWriter<W>, cols: usize, rows: u16) {
    out.move_cursor(u32::from(rows - 1), 0);
    out.set_style(Style::inverse());
    if editor.mode() == Mode::Command {
        let line = format!(":{}", editor.command_line());
        let (shown, width) = fit(&line, cols);
        out.write_str(shown);
        out.pad(cols - width);
    } else if !editor.status().is_empty() {
        let (shown, width) = fit(editor.status(), cols);
        out.write_str(shown);
        out.pad(cols - width);
    } else {
        let cursor = editor.active_buffer().cursor();
        let position = format!("{},{}", cursor.y + 1, cursor.x + 1);
        let (shown, width) = fit(&position, cols);
        out.pad(cols - width);
        out.write_str(shown);
    }
    out.reset();
}

/// Where the hardware cursor goes, as a 0-indexed `(row, col)`.
fn cursor_cell(editor: &Editor, cols: usize, rows: u16) -> (u32, u32) {
    let max_col = cols.saturating_sub(1);
    if editor.mode() == Mode::Command {
        let col = (editor.command_line().chars().count() + 1).min(max_col);
        return (u32::from(rows - 1), col as u32);
    }
    let buffer = editor.active_buffer();
    let cursor = buffer.cursor();
    let col = cursor.x.min(max_col) as u32;
    if rows <= CHROME_ROWS {
        // No content rows: park on the status line.
        return (u32::from(rows - 1), col);
    }
    let row = 2 + cursor.y.saturating_sub(buffer.scroll());
    let last_content_row = usize::from(rows - 2);
    (row.min(last_content_row) as u32, col)
}
