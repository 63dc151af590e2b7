//! Token types for syntax highlighting.

use std::ops::Range;

/// Lexical classes the highlighter distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A word from the keyword set.
    Keyword,
    /// A quoted string or character literal, quotes included.
    String,
    /// A line comment, marker included, running to end of line.
    Comment,
    /// A digit run, extended through embedded dots.
    Number,
    /// Everything else; rendered unchanged.
    Text,
}

impl TokenKind {
    /// Short lowercase name, used in debug output and snapshots.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

/// A classified byte range of one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token range must be start <= end");
        Self { kind, start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
