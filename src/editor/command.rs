//! Command-line parsing.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// A parsed `:` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `w`
    Write,
    /// `q` / `q!`
    Quit { force: bool },
    /// `wq`
    WriteQuit,
    /// `wa`
    WriteAll,
    /// `qa` / `qa!`
    QuitAll { force: bool },
    /// `wqa`
    WriteQuitAll,
    /// `e <path>`
    Edit(PathBuf),
    /// `bn`
    NextBuffer,
    /// `bp`
    PrevBuffer,
    /// `ls`
    List,
}

impl Command {
    /// Parse command-line text (without the leading `:`).
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownCommand`] for text outside the vocabulary and
    /// [`Error::EmptyPath`] for `e` without a file name.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let command = match trimmed {
            "w" => Self::Write,
            "q" => Self::Quit { force: false },
            "q!" => Self::Quit { force: true },
            "wq" => Self::WriteQuit,
            "wa" => Self::WriteAll,
            "qa" => Self::QuitAll { force: false },
            "qa!" => Self::QuitAll { force: true },
            "wqa" => Self::WriteQuitAll,
            "bn" => Self::NextBuffer,
            "bp" => Self::PrevBuffer,
            "ls" => Self::List,
            "e" => return Err(Error::EmptyPath),
            _ => match trimmed.strip_prefix("e ") {
                Some(path) => Self::Edit(PathBuf::from(path.trim_start())),
                None => return Err(Error::UnknownCommand(trimmed.to_string())),
            },
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit() {
        assert_eq!(Command::parse("q").unwrap(), Command::Quit { force: false });
        assert_eq!(Command::parse("q!").unwrap(), Command::Quit { force: true });
        assert_eq!(Command::parse("qa").unwrap(), Command::QuitAll { force: false });
        assert_eq!(Command::parse("qa!").unwrap(), Command::QuitAll { force: true });
    }

    #[test]
    fn test_parse_write() {
        assert_eq!(Command::parse("w").unwrap(), Command::Write);
        assert_eq!(Command::parse("wq").unwrap(), Command::WriteQuit);
        assert_eq!(Command::parse("wa").unwrap(), Command::WriteAll);
        assert_eq!(Command::parse("wqa").unwrap(), Command::WriteQuitAll);
    }

    #[test]
    fn test_parse_buffers() {
        assert_eq!(Command::parse("bn").unwrap(), Command::NextBuffer);
        assert_eq!(Command::parse("bp").unwrap(), Command::PrevBuffer);
        assert_eq!(Command::parse("ls").unwrap(), Command::List);
    }

    #[test]
    fn test_parse_edit() {
        assert_eq!(
            Command::parse("e notes.txt").unwrap(),
            Command::Edit(PathBuf::from("notes.txt"))
        );
        assert_eq!(
            Command::parse("  e   dir/a b.txt  ").unwrap(),
            Command::Edit(PathBuf::from("dir/a b.txt"))
        );
    }

    #[test]
    fn test_parse_edit_without_path() {
        assert!(matches!(Command::parse("e"), Err(Error::EmptyPath)));
        assert!(matches!(Command::parse("e   "), Err(Error::EmptyPath)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Command::parse("  w  ").unwrap(), Command::Write);
    }

    #[test]
    fn test_parse_unknown() {
        match Command::parse("bogus") {
            Err(Error::UnknownCommand(s)) => assert_eq!(s, "bogus"),
            other => panic!("Expected UnknownCommand, got {other:?}"),
        }
        assert!(matches!(Command::parse(""), Err(Error::UnknownCommand(s)) if s.is_empty()));
        assert!(matches!(Command::parse("W"), Err(Error::UnknownCommand(_))));
        assert!(matches!(Command::parse("edit x"), Err(Error::UnknownCommand(_))));
    }
}
