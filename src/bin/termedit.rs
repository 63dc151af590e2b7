//! `termedit` command-line entry point.
//!
//! Opens every file named on the command line, puts the terminal into raw
//! mode and runs the read → dispatch → render loop until a quit command ends
//! the session.

use clap::{CommandFactory, Parser};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use termedit::text::DEFAULT_MAX_HISTORY_DEPTH;
use termedit::{Control, Editor, EditorOptions, InputParser, Renderer, Terminal};
use tracing_subscriber::EnvFilter;

/// Modal, multi-buffer terminal text editor.
#[derive(Parser, Debug)]
#[command(name = "termedit", version, about)]
struct Cli {
    /// Files to open; the last one starts active
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Disable syntax highlighting
    #[arg(long)]
    no_highlight: bool,

    /// Undo steps kept per buffer
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_HISTORY_DEPTH)]
    undo_depth: usize,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> EditorOptions {
        EditorOptions::default()
            .with_syntax_highlight(!self.no_highlight)
            .with_undo_depth(self.undo_depth)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.files.is_empty() {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!("Example: termedit main.cpp header.h utils.cpp");
        return ExitCode::from(1);
    }

    if let Some(path) = cli.log_file.as_deref() {
        if let Err(err) = init_logging(path) {
            eprintln!("termedit: cannot log to {}: {err}", path.display());
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "editor failed");
            eprintln!("termedit: {err}");
            ExitCode::from(1)
        }
    }
}

/// Send `tracing` output to `path`. The terminal belongs to the editor, so
/// without a log file nothing is installed.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

fn run(cli: &Cli) -> termedit::Result<()> {
    let options = cli.options();
    let Some(mut editor) = Editor::open(cli.files.iter().cloned(), options) else {
        return Ok(());
    };
    let mut renderer = Renderer::new(&options);
    let mut parser = InputParser::new();

    let mut terminal = Terminal::new(io::stdout());
    terminal.enter_raw_mode()?;
    renderer.present(&mut editor, &mut terminal)?;

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut buf = [0u8; 1024];

    loop {
        let keys = match stdin.read(&mut buf) {
            // VTIME expired with nothing to read: a pending lone ESC is a real Escape.
            Ok(0) => parser.flush_pending(),
            Ok(n) => parser.feed(&buf[..n]),
            Err(err) if matches!(err.kind(), io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock) => {
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };

        if editor.handle_keys(keys) == Control::Quit {
            terminal.cleanup()?;
            return Ok(());
        }
        renderer.present(&mut editor, &mut terminal)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_flags_build_options() {
        let cli = Cli::parse_from(["termedit", "--no-highlight", "--undo-depth", "7", "a.c", "b.c"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.c"), PathBuf::from("b.c")]);
        let options = cli.options();
        assert!(!options.syntax_highlight);
        assert_eq!(options.undo_depth, 7);
    }

    #[test]
    fn second_logging_init_reports_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("termedit.log");
        assert!(init_logging(&path).is_ok());
        assert!(path.exists());
        assert!(init_logging(&path).is_err());
    }
}
