//! TUI application state and logic
//!
//! The app is the input collector: it maps keys to intents, forwards them to
//! the session, and keeps display-only state (messages, log panel, banner
//! timing). The session stays the single source of truth for the board.

use crate::config::TargetSource;
use crate::session::{Intent, LetterHints, Rejection, Session, SessionEvent};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Entries kept in the log panel
pub const LOG_CAPACITY: usize = 20;

/// Pause between game over and the end-of-game banner
pub const BANNER_DELAY: Duration = Duration::from_millis(600);

/// How long to wait for input before redrawing
const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub elapsed: Duration,
    pub message: Message,
}

/// Bounded log panel, newest entry first
#[derive(Debug, Clone, Default)]
pub struct LogPanel {
    entries: VecDeque<LogEntry>,
}

impl LogPanel {
    pub fn push(&mut self, elapsed: Duration, text: impl Into<String>, style: MessageStyle) {
        self.entries.push_front(LogEntry {
            elapsed,
            message: Message {
                text: text.into(),
                style,
            },
        });
        self.entries.truncate(LOG_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a key press means to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Intent(Intent),
    NewGame,
    Quit,
    /// Game is over; letter/delete/submit keys go nowhere
    Suppressed,
    Ignored(String),
}

/// Map a key press to an action
///
/// Once the game is over, keys that would produce intents are suppressed and
/// Enter starts a new game instead.
#[must_use]
pub fn map_key(key: KeyEvent, game_over: bool) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('n') if ctrl => KeyAction::NewGame,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter if game_over => KeyAction::NewGame,
        KeyCode::Backspace if game_over => KeyAction::Suppressed,
        KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => {
            if game_over {
                KeyAction::Suppressed
            } else {
                KeyAction::Intent(Intent::AppendLetter(c))
            }
        }
        KeyCode::Enter => KeyAction::Intent(Intent::SubmitGuess),
        KeyCode::Backspace => KeyAction::Intent(Intent::DeleteLetter),
        other => KeyAction::Ignored(other.to_string()),
    }
}

/// Application state
pub struct App {
    pub session: Session,
    pub hints: LetterHints,
    pub message: Option<Message>,
    pub log: LogPanel,
    pub should_quit: bool,
    targets: TargetSource,
    started_at: Instant,
    game_over_at: Option<Instant>,
    games_played: usize,
    games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(mut targets: TargetSource) -> Self {
        let session = Session::new(targets.next_target());
        let mut app = Self {
            session,
            hints: LetterHints::default(),
            message: None,
            log: LogPanel::default(),
            should_quit: false,
            targets,
            started_at: Instant::now(),
            game_over_at: None,
            games_played: 0,
            games_won: 0,
        };
        app.greet();
        app
    }

    fn greet(&mut self) {
        self.record("🎮 Game initialized successfully!", MessageStyle::Success);
        self.record(
            "💡 Try typing letters, pressing Backspace, or Enter",
            MessageStyle::Info,
        );
        self.message = Some(Message {
            text: "Guess the word in 6 tries".to_string(),
            style: MessageStyle::Info,
        });
    }

    fn record(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.log.push(self.started_at.elapsed(), text, style);
    }

    /// Start a fresh session with the next target
    pub fn new_game(&mut self) {
        self.session = Session::new(self.targets.next_target());
        self.hints = LetterHints::default();
        self.game_over_at = None;
        self.started_at = Instant::now();
        self.log.clear();
        info!("new game");
        self.greet();
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    /// Route one key press arriving at `now`
    ///
    /// After game over, a new game only starts once the banner has shown.
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        match map_key(key, self.session.is_over()) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NewGame if self.session.is_over() && !self.banner_visible(now) => {
                debug!("new game held until the banner shows");
            }
            KeyAction::NewGame => self.new_game(),
            KeyAction::Suppressed => {
                self.record(
                    "Game is over. Press Enter to play again.",
                    MessageStyle::Warning,
                );
            }
            KeyAction::Ignored(name) => {
                debug!(key = %name, "ignored key");
                self.record(format!("Ignored key: {name}"), MessageStyle::Info);
            }
            KeyAction::Intent(intent) => self.apply(intent),
        }
    }

    /// Forward an intent to the session and reflect the outcome
    pub fn apply(&mut self, intent: Intent) {
        self.record(format!("{intent:?}"), MessageStyle::Info);
        match self.session.apply(intent) {
            Ok(event) => self.on_event(&event),
            Err(rejection) => self.on_rejection(rejection),
        }
    }

    fn on_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::LetterAppended { tile, letter, .. } => {
                self.record(
                    format!("Letter \"{letter}\" added to position {tile}"),
                    MessageStyle::Success,
                );
            }
            SessionEvent::LetterDeleted { tile, .. } => {
                self.record(
                    format!("Letter removed from position {tile}"),
                    MessageStyle::Success,
                );
            }
            SessionEvent::GuessScored { row, feedback } => {
                self.hints = LetterHints::from_board(self.session.board());
                self.record(
                    format!("Guess {} scored {feedback}", row + 1),
                    MessageStyle::Info,
                );
                self.message = None;
            }
            SessionEvent::Won { feedback, .. } => {
                self.hints = LetterHints::from_board(self.session.board());
                self.games_played += 1;
                self.games_won += 1;
                self.game_over_at = Some(Instant::now());
                self.record(format!("🎉 Solved! {feedback}"), MessageStyle::Success);
                self.message = None;
            }
            SessionEvent::Lost { target, .. } => {
                self.hints = LetterHints::from_board(self.session.board());
                self.games_played += 1;
                self.game_over_at = Some(Instant::now());
                self.record(format!("Out of guesses. The word was {target}"), MessageStyle::Error);
                self.message = None;
            }
        }

        if !self.session.is_over() {
            let word = self.session.current_word();
            self.record(format!("Current word: {word}"), MessageStyle::Info);
        }
    }

    fn on_rejection(&mut self, rejection: Rejection) {
        if rejection.is_visible() {
            self.record(rejection.to_string(), MessageStyle::Warning);
            self.message = Some(Message {
                text: rejection.to_string(),
                style: MessageStyle::Warning,
            });
        }
    }

    /// Whether the end-of-game banner should be showing at `now`
    #[must_use]
    pub fn banner_visible(&self, now: Instant) -> bool {
        self.game_over_at
            .is_some_and(|at| now.saturating_duration_since(at) >= BANNER_DELAY)
    }

    #[must_use]
    pub const fn games_played(&self) -> usize {
        self.games_played
    }

    #[must_use]
    pub const fn games_won(&self) -> usize {
        self.games_won
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so the delayed banner appears without a key press
        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::GameStatus;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app(target: &str) -> App {
        App::new(TargetSource::Fixed(Word::new(target).unwrap()))
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn keys_map_to_intents_while_playing() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), false),
            KeyAction::Intent(Intent::AppendLetter('a'))
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), false),
            KeyAction::Intent(Intent::DeleteLetter)
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), false),
            KeyAction::Intent(Intent::SubmitGuess)
        );
        assert_eq!(map_key(key(KeyCode::Esc), false), KeyAction::Quit);
        assert_eq!(map_key(ctrl('c'), false), KeyAction::Quit);
        assert_eq!(map_key(ctrl('n'), false), KeyAction::NewGame);
        assert!(matches!(
            map_key(key(KeyCode::Char('1')), false),
            KeyAction::Ignored(_)
        ));
        assert!(matches!(
            map_key(key(KeyCode::Tab), false),
            KeyAction::Ignored(_)
        ));
    }

    #[test]
    fn keys_are_suppressed_after_game_over() {
        assert_eq!(map_key(key(KeyCode::Char('a')), true), KeyAction::Suppressed);
        assert_eq!(map_key(key(KeyCode::Backspace), true), KeyAction::Suppressed);
        assert_eq!(map_key(key(KeyCode::Enter), true), KeyAction::NewGame);
        assert_eq!(map_key(key(KeyCode::Esc), true), KeyAction::Quit);
    }

    #[test]
    fn typing_fills_the_current_row() {
        let mut app = app("WORDS");
        for c in "wor".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.session.current_word(), "WOR");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.session.current_word(), "WO");
    }

    #[test]
    fn incomplete_submit_shows_message() {
        let mut app = app("WORDS");
        app.handle_key(key(KeyCode::Char('w')));
        app.handle_key(key(KeyCode::Enter));

        let message = app.message.clone().unwrap();
        assert_eq!(message.style, MessageStyle::Warning);
        assert_eq!(message.text, Rejection::RowIncomplete.to_string());
    }

    #[test]
    fn empty_delete_is_silent() {
        let mut app = app("WORDS");
        let before = app.message.clone();
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.message, before);
    }

    #[test]
    fn win_freezes_board_and_delays_banner() {
        let mut app = app("WORDS");
        type_keys(&mut app, "words");

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.games_won(), 1);
        assert!(!app.banner_visible(Instant::now()));
        assert!(app.banner_visible(Instant::now() + BANNER_DELAY));

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.session.current_row(), 0);
        assert_eq!(app.session.row(0).text(), "WORDS");
    }

    #[test]
    fn enter_after_game_over_starts_new_game() {
        let mut app = app("WORDS");
        type_keys(&mut app, "words");
        app.handle_key_at(key(KeyCode::Enter), Instant::now() + BANNER_DELAY);

        assert_eq!(app.session.status(), GameStatus::Playing);
        assert_eq!(app.session.current_row(), 0);
        assert!(app.hints.is_empty());
        assert_eq!(app.games_played(), 1);
    }

    #[test]
    fn enter_before_banner_keeps_finished_game() {
        let mut app = app("WORDS");
        type_keys(&mut app, "words");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(ctrl('n'));

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.session.row(0).text(), "WORDS");
        assert!(app.banner_visible(Instant::now() + BANNER_DELAY));
    }

    #[test]
    fn ctrl_n_while_playing_starts_new_game_at_once() {
        let mut app = app("WORDS");
        app.handle_key(key(KeyCode::Char('w')));
        app.handle_key(ctrl('n'));
        assert_eq!(app.session.current_word(), "");
    }

    #[test]
    fn loss_counts_as_played_not_won() {
        let mut app = app("WORDS");
        for _ in 0..6 {
            type_keys(&mut app, "crane");
        }
        assert_eq!(app.session.status(), GameStatus::Lost);
        assert_eq!(app.games_played(), 1);
        assert_eq!(app.games_won(), 0);
    }

    #[test]
    fn log_panel_is_bounded_newest_first() {
        let mut panel = LogPanel::default();
        for i in 0..30 {
            panel.push(Duration::from_secs(i), format!("entry {i}"), MessageStyle::Info);
        }
        assert_eq!(panel.len(), LOG_CAPACITY);
        assert_eq!(panel.iter().next().unwrap().message.text, "entry 29");
        assert_eq!(panel.iter().last().unwrap().message.text, "entry 10");
    }

    #[test]
    fn scored_guess_updates_hints() {
        let mut app = app("WORDS");
        type_keys(&mut app, "world");
        assert_eq!(app.hints.get(b'L'), Some(crate::core::Verdict::Absent));
    }
}
