//! Runtime options for an editing session.

use crate::highlight::Highlighter;
use crate::text::DEFAULT_MAX_HISTORY_DEPTH;

/// Options fixed for the lifetime of an [`Editor`](crate::editor::Editor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Colorize keywords, literals, comments and numbers.
    pub syntax_highlight: bool,
    /// Undo entries kept per buffer.
    pub undo_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            syntax_highlight: true,
            undo_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn with_syntax_highlight(mut self, enabled: bool) -> Self {
        self.syntax_highlight = enabled;
        self
    }

    #[must_use]
    pub fn with_undo_depth(mut self, depth: usize) -> Self {
        self.undo_depth = depth;
        self
    }

    /// Highlighter matching these options.
    #[must_use]
    pub fn highlighter(&self) -> Highlighter {
        if self.syntax_highlight {
            Highlighter::new()
        } else {
            Highlighter::disabled()
        }
    }
}
