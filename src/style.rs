//! Text styling with attributes and palette colors.
//!
//! The editor only speaks the classic SGR palette: the eight basic colors
//! for the bars and the 256-color cube for syntax highlighting. A [`Style`]
//! renders to a single `ESC [ ... m` sequence through [`Style::write_sgr`].
//!
//! # Examples
//!
//! ```
//! use termedit::style::{Color, Style};
//!
//! let tab = Style::fg(Color::WHITE).with_bg(Color::BLUE).with_bold();
//! assert_eq!(tab.sgr(), "\x1b[1;37;44m");
//! ```

use bitflags::bitflags;
use std::io::{self, Write};

bitflags! {
    /// Text rendering attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD    = 0x01;
        /// Dim/decreased intensity.
        const DIM     = 0x02;
        /// Underlined text.
        const UNDERLINE = 0x04;
        /// Swapped foreground/background.
        const INVERSE = 0x08;
    }
}

impl TextAttributes {
    /// SGR parameter codes for the set flags, in ascending order.
    fn codes(self) -> impl Iterator<Item = u8> {
        [
            (Self::BOLD, 1),
            (Self::DIM, 2),
            (Self::UNDERLINE, 4),
            (Self::INVERSE, 7),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, code)| code)
    }
}

/// A terminal palette color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Terminal default; emits nothing.
    #[default]
    Default,
    /// One of the eight basic ANSI colors (0-7).
    Basic(u8),
    /// Index into the 256-color palette.
    Indexed(u8),
}

impl Color {
    pub const BLACK: Self = Self::Basic(0);
    pub const RED: Self = Self::Basic(1);
    pub const GREEN: Self = Self::Basic(2);
    pub const YELLOW: Self = Self::Basic(3);
    pub const BLUE: Self = Self::Basic(4);
    pub const MAGENTA: Self = Self::Basic(5);
    pub const CYAN: Self = Self::Basic(6);
    pub const WHITE: Self = Self::Basic(7);
}

/// Complete text style: foreground, background and attributes.
///
/// Styles are immutable and cheap to copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attributes: TextAttributes,
}

impl Style {
    /// The empty style (terminal defaults).
    pub const NONE: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        attributes: TextAttributes::empty(),
    };

    /// Style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Self::NONE
        }
    }

    /// Style with only a background color.
    #[must_use]
    pub const fn bg(color: Color) -> Self {
        Self {
            bg: color,
            ..Self::NONE
        }
    }

    /// Reverse-video style.
    #[must_use]
    pub const fn inverse() -> Self {
        Self {
            attributes: TextAttributes::INVERSE,
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn with_bg(self, color: Color) -> Self {
        Self { bg: color, ..self }
    }

    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::BOLD),
            ..self
        }
    }

    /// Check if this style changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Write this style as one SGR sequence. Writes nothing for [`Style::NONE`].
    pub fn write_sgr(&self, w: &mut impl Write) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        let mut codes: Vec<String> = self.attributes.codes().map(|c| c.to_string()).collect();
        match self.fg {
            Color::Default => {}
            Color::Basic(n) => codes.push((30 + (n & 7)).to_string()),
            Color::Indexed(n) => codes.push(format!("38;5;{n}")),
        }
        match self.bg {
            Color::Default => {}
            Color::Basic(n) => codes.push((40 + (n & 7)).to_string()),
            Color::Indexed(n) => codes.push(format!("48;5;{n}")),
        }
        write!(w, "\x1b[{}m", codes.join(";"))
    }

    /// The SGR sequence for this style as a string.
    #[must_use]
    pub fn sgr(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_sgr(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
