//! Syntax highlighting for the content area.
//!
//! Highlighting is a pure function of one line: the [`Tokenizer`] splits the
//! line into classified byte ranges, the [`Theme`] picks a style for each
//! class, and [`Highlighter::highlight_line`] wraps every styled range in its
//! SGR sequence followed by a reset. Plain bytes pass through untouched, so
//! stripping the escapes from the output always gives back the input line.
//!
//! # Example
//!
//! ```
//! use termedit::highlight::Highlighter;
//!
//! let hl = Highlighter::new();
//! let out = hl.highlight_line(b"int x");
//! assert_eq!(out, b"\x1b[38;5;205mint\x1b[0m x".to_vec());
//! ```

pub mod theme;
pub mod token;
pub mod tokenizer;

pub use theme::Theme;
pub use token::{Token, TokenKind};
pub use tokenizer::{C_LIKE_KEYWORDS, CLikeTokenizer, Tokenizer};

use crate::ansi;
use std::fmt;
use std::io::{self, Write};

/// Line colorizer combining a tokenizer and a theme.
pub struct Highlighter {
    tokenizer: Box<dyn Tokenizer>,
    theme: Theme,
    enabled: bool,
}

impl fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Highlighter")
            .field("tokenizer", &self.tokenizer.name())
            .field("theme", &self.theme.name())
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// C-like tokenizer with the default theme, enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(CLikeTokenizer::new()),
            theme: Theme::default(),
            enabled: true,
        }
    }

    /// A highlighter that returns every line unchanged.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Tokens for one line, regardless of whether highlighting is enabled.
    #[must_use]
    pub fn tokens(&self, line: &[u8]) -> Vec<Token> {
        self.tokenizer.tokenize_line(line)
    }

    /// Write `line` to `w`, colorized if enabled.
    pub fn write_line<W: Write>(&self, w: &mut W, line: &[u8]) -> io::Result<()> {
        if !self.enabled {
            return w.write_all(line);
        }
        for token in self.tokenizer.tokenize_line(line) {
            let style = self.theme.style_for(token.kind);
            let bytes = &line[token.range()];
            if style.is_empty() {
                w.write_all(bytes)?;
            } else {
                style.write_sgr(w)?;
                w.write_all(bytes)?;
                w.write_all(ansi::RESET.as_bytes())?;
            }
        }
        Ok(())
    }

    /// Colorized copy of `line`.
    #[must_use]
    pub fn highlight_line(&self, line: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(line.len() + 16);
        // Writing into a Vec cannot fail.
        let _ = self.write_line(&mut out, line);
        out
    }
}
