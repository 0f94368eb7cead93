//! Diagnostic logging setup
//!
//! Level is overridden by `RUST_LOG`. The TUI owns the screen, so it only
//! logs when a file is given; line modes log to stderr. The target word and
//! rejections are debug-level only, so the default output never spoils the
//! game or repeats what the front end already printed.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where diagnostic output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

impl<'a> LogSink<'a> {
    /// Pick the sink for a front end
    #[must_use]
    pub const fn for_mode(owns_terminal: bool, log_file: Option<&'a Path>) -> Self {
        match (log_file, owns_terminal) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Disabled,
            (None, false) => Self::Stderr,
        }
    }
}

const fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(sink: LogSink<'_>, verbose: bool) -> Result<()> {
    match sink {
        LogSink::Disabled => {}
        LogSink::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(default_filter(verbose))
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogSink::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(default_filter(verbose))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::{Intent, Session};
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Start a session and make a short guess, returning what was logged
    fn log_short_guess(verbose: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(default_level(verbose)))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut session = Session::new(Word::new("PRICE").unwrap());
            session.apply(Intent::AppendLetter('w')).unwrap();
            session.apply(Intent::SubmitGuess).unwrap_err();
        });

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn default_level_keeps_target_and_rejections_quiet() {
        let output = log_short_guess(false);
        assert!(output.contains("session started"));
        assert!(!output.contains("PRICE"));
        assert!(!output.contains("intent rejected"));
    }

    #[test]
    fn verbose_level_shows_target_and_rejections() {
        let output = log_short_guess(true);
        assert!(output.contains("target_word=PRICE"));
        assert!(output.contains("intent rejected"));
    }

    #[test]
    fn tui_without_file_stays_quiet() {
        assert_eq!(LogSink::for_mode(true, None), LogSink::Disabled);
    }

    #[test]
    fn line_modes_log_to_stderr() {
        assert_eq!(LogSink::for_mode(false, None), LogSink::Stderr);
    }

    #[test]
    fn file_wins_in_every_mode() {
        let path = Path::new("game.log");
        assert_eq!(LogSink::for_mode(true, Some(path)), LogSink::File(path));
        assert_eq!(LogSink::for_mode(false, Some(path)), LogSink::File(path));
    }
}
