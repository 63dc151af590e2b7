//! Editor modes.

use std::fmt;

/// Input mode of the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Navigation, buffer switching, undo/redo.
    #[default]
    Normal,
    /// Text entry into the active buffer.
    Insert,
    /// Typing an ex-style command after `:`.
    Command,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }

    /// Key hints shown in the header while in this mode.
    #[must_use]
    pub const fn hints(self) -> &'static str {
        match self {
            Self::Normal => "i=insert :=cmd Tab=next Shift+Tab=prev",
            Self::Insert => "ESC=normal",
            Self::Command => "Enter=run ESC=cancel",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strings() {
        assert_eq!(Mode::Normal.as_str(), "NORMAL");
        assert_eq!(Mode::Insert.as_str(), "INSERT");
        assert_eq!(Mode::Command.to_string(), "COMMAND");
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn test_mode_hints() {
        assert!(Mode::Normal.hints().contains("Shift+Tab=prev"));
        assert_eq!(Mode::Insert.hints(), "ESC=normal");
        assert_eq!(Mode::Command.hints(), "Enter=run ESC=cancel");
    }
}
