//! Color themes for syntax highlighting.

use super::token::TokenKind;
use crate::style::{Color, Style};

/// Maps token kinds to styles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: String,
    keyword: Style,
    string: Style,
    comment: Style,
    number: Style,
}

impl Theme {
    /// The built-in 256-color theme.
    #[must_use]
    pub fn xterm256() -> Self {
        Self {
            name: "xterm-256".to_string(),
            keyword: Style::fg(Color::Indexed(205)),
            string: Style::fg(Color::Indexed(180)),
            comment: Style::fg(Color::Indexed(244)),
            number: Style::fg(Color::Indexed(141)),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn style_for(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::String => self.string,
            TokenKind::Comment => self.comment,
            TokenKind::Number => self.number,
            TokenKind::Text => Style::NONE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::xterm256()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_256_color_palette() {
        let theme = Theme::default();
        assert_eq!(theme.name(), "xterm-256");
        assert_eq!(theme.style_for(TokenKind::Keyword).sgr(), "\x1b[38;5;205m");
        assert_eq!(theme.style_for(TokenKind::String).sgr(), "\x1b[38;5;180m");
        assert_eq!(theme.style_for(TokenKind::Comment).sgr(), "\x1b[38;5;244m");
        assert_eq!(theme.style_for(TokenKind::Number).sgr(), "\x1b[38;5;141m");
        assert!(theme.style_for(TokenKind::Text).is_empty());
    }
}
