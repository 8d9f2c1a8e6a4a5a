//! TUI application state and logic

use crate::core::{Charset, GuessError, Letter, Pattern, Word};
use crate::manager::{Game, GameConfig, GameError, GameState, Mode};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Options fixed on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct AppOptions {
    /// Mode for every round; chosen on screen when `None`
    pub mode: Option<Mode>,
    /// Budget override for dictionary-backed modes
    pub budget: Option<usize>,
    /// Show the candidate pool size (spoils the adaptive modes)
    pub show_pool: bool,
}

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub options: AppOptions,
    pub mode: Mode,
    pub game: Option<Game>,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Two-player secret waiting for its charset and budget
    pending_secret: Option<(Word, Charset)>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    ChooseMode,
    Secret,
    HideDigits,
    Budget,
    Guess,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letter: Letter,
    pub hit: bool,
    pub pattern: Pattern,
    pub pool_before: usize,
    pub pool_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64
        } else {
            0.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [Word], options: AppOptions, rng: StdRng) -> Self {
        let mut app = Self {
            words,
            options,
            mode: options.mode.unwrap_or(Mode::Normal),
            game: None,
            history: Vec::new(),
            input_buffer: String::new(),
            input_mode: InputMode::ChooseMode,
            messages: vec![Message {
                text: "Welcome to the Hangman Player!".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            pending_secret: None,
            rng,
        };

        match options.mode {
            Some(mode) => app.start_round(mode),
            None => app.prompt_mode(),
        }
        app
    }

    fn prompt_mode(&mut self) {
        self.game = None;
        self.input_mode = InputMode::ChooseMode;
        self.add_message(
            "Choose: 1 easy, 2 normal, 3 hard, 4 two players",
            MessageStyle::Info,
        );
    }

    /// Begin a round in `mode`
    pub fn start_round(&mut self, mode: Mode) {
        self.mode = mode;
        self.game = None;
        self.history.clear();
        self.input_buffer.clear();
        self.pending_secret = None;

        if mode == Mode::TwoPlayer {
            self.input_mode = InputMode::Secret;
            self.add_message("Player one: type the secret word", MessageStyle::Info);
            return;
        }

        let mut config = GameConfig::for_mode(mode);
        if let Some(budget) = self.options.budget {
            config = config.with_budget(budget);
        }

        match Game::start(self.words, config, &mut self.rng) {
            Ok(game) => self.begin(game),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.prompt_mode();
            }
        }
    }

    fn begin(&mut self, game: Game) {
        self.add_message(
            &format!(
                "New {} game: {} letters, {} wrong guesses allowed",
                self.mode,
                game.pattern().len(),
                game.budget()
            ),
            MessageStyle::Info,
        );
        self.game = Some(game);
        self.input_mode = InputMode::Guess;
    }

    pub fn submit_secret(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);

        let Ok(word) = Word::new(text.trim()) else {
            self.add_message(
                "Sorry, that secret word contained an illegal character.",
                MessageStyle::Error,
            );
            return;
        };

        if word.text().chars().any(|c| c.is_ascii_digit()) {
            self.pending_secret = Some((word, Charset::Alphabetic));
            self.input_mode = InputMode::HideDigits;
            self.add_message(
                "The secret contains numbers. Hide them too? (y/n)",
                MessageStyle::Info,
            );
        } else {
            self.accept_secret(word, Charset::Alphabetic);
        }
    }

    pub fn choose_hide_digits(&mut self, hide: bool) {
        if let Some((word, _)) = self.pending_secret.take() {
            let charset = if hide {
                Charset::Alphanumeric
            } else {
                Charset::Alphabetic
            };
            self.accept_secret(word, charset);
        }
    }

    fn accept_secret(&mut self, word: Word, charset: Charset) {
        if !word.has_guessable(charset) {
            self.input_mode = InputMode::Secret;
            self.add_message(
                "Sorry, that secret word has nothing to guess.",
                MessageStyle::Error,
            );
            return;
        }

        self.add_message(
            &format!(
                "How many wrong guesses are allowed? (1-{})",
                charset.max_budget()
            ),
            MessageStyle::Info,
        );
        self.pending_secret = Some((word, charset));
        self.input_mode = InputMode::Budget;
    }

    pub fn submit_budget(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        let Some((word, charset)) = self.pending_secret.clone() else {
            return;
        };

        let config = GameConfig::for_mode(Mode::TwoPlayer).with_charset(charset);
        let config = config.with_budget(text.trim().parse().unwrap_or(0));

        if !config.budget_is_valid() {
            self.add_message(
                "Sorry, that is not a valid number of guesses.",
                MessageStyle::Error,
            );
            return;
        }

        match Game::with_secret(word, config) {
            Ok(game) => {
                self.pending_secret = None;
                self.add_message("Player two: start guessing!", MessageStyle::Info);
                self.begin(game);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Play `c` as the next guess
    pub fn handle_guess(&mut self, c: char) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let result = Letter::new(c, game.charset())
            .map_err(GameError::from)
            .and_then(|letter| game.make_guess(letter));

        match result {
            Ok(report) => {
                let (text, style) = if report.hit {
                    (
                        format!("Yes! '{}' is in the word", report.letter),
                        MessageStyle::Success,
                    )
                } else {
                    (
                        format!("No '{}' in the word", report.letter),
                        MessageStyle::Error,
                    )
                };
                self.history.push(HistoryEntry {
                    letter: report.letter,
                    hit: report.hit,
                    pattern: report.pattern,
                    pool_before: report.pool_before,
                    pool_after: report.pool_after,
                });
                self.add_message(&text, style);
            }
            Err(GameError::InvalidGuess(GuessError::AlreadyGuessed(_))) => {
                self.add_message("You already guessed that!", MessageStyle::Error);
            }
            Err(GameError::InvalidGuess(_)) => {
                self.add_message("Sorry, that is not a valid input", MessageStyle::Error);
            }
            Err(e) => {
                self.add_message(&format!("Game aborted: {e}"), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
                return;
            }
        }

        if self.game.as_ref().is_some_and(Game::is_terminal) {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(game) = &self.game else {
            return;
        };

        let won = game.state() == GameState::Won;
        let word = game.reveal_word().map(|w| w.text().to_string());

        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            self.add_message("You win!!", MessageStyle::Success);
        } else {
            self.add_message("You lost.", MessageStyle::Error);
        }
        if let Some(word) = word {
            self.add_message(&format!("The word was {word}."), MessageStyle::Info);
        }
        self.add_message(
            "Press 'n' to play again, 'm' to change mode or 'q' to quit.",
            MessageStyle::Info,
        );
        self.input_mode = InputMode::GameOver;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::ChooseMode => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('4') => self.start_round(Mode::TwoPlayer),
                KeyCode::Char(c) => {
                    if let Some(mode) = Mode::from_name(&c.to_string()) {
                        self.start_round(mode);
                    }
                }
                _ => {}
            },
            InputMode::Secret | InputMode::Budget => match key.code {
                KeyCode::Esc => {
                    self.input_buffer.clear();
                    self.pending_secret = None;
                    self.prompt_mode();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter if self.input_mode == InputMode::Secret => self.submit_secret(),
                KeyCode::Enter => self.submit_budget(),
                _ => {}
            },
            InputMode::HideDigits => match key.code {
                KeyCode::Char('y' | 'Y') => self.choose_hide_digits(true),
                KeyCode::Char(_) | KeyCode::Enter => self.choose_hide_digits(false),
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.handle_guess(c),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.start_round(self.mode),
                KeyCode::Char('m') => self.prompt_mode(),
                _ => {}
            },
        }
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
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
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn app(words: &[Word], mode: Option<Mode>) -> App<'_> {
        let options = AppOptions {
            mode,
            ..AppOptions::default()
        };
        App::new(words, options, StdRng::seed_from_u64(0))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn last_message<'b>(app: &'b App<'_>) -> &'b str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn fixed_mode_starts_guessing() {
        let words = words_from_slice(&["cat"]);
        let app = app(&words, Some(Mode::Hard));

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.game.as_ref().unwrap().budget(), 14);
    }

    #[test]
    fn winning_updates_stats() {
        let words = words_from_slice(&["cat"]);
        let mut app = app(&words, Some(Mode::Normal));

        type_text(&mut app, "cat");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.history.len(), 3);
        assert!(app.messages.iter().any(|m| m.text == "The word was cat."));
    }

    #[test]
    fn repeated_and_invalid_guesses_are_reported() {
        let words = words_from_slice(&["cat"]);
        let mut app = app(&words, Some(Mode::Normal));

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(last_message(&app), "You already guessed that!");

        press(&mut app, KeyCode::Char('7'));
        assert_eq!(last_message(&app), "Sorry, that is not a valid input");
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn choose_mode_then_new_round() {
        let words = words_from_slice(&["cat", "cot", "car"]);
        let mut app = app(&words, None);
        assert_eq!(app.input_mode, InputMode::ChooseMode);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.mode, Mode::Easy);
        assert_eq!(app.input_mode, InputMode::Guess);

        type_text(&mut app, "zqxj");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 0);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.history.is_empty());
    }

    #[test]
    fn two_player_setup() {
        let words = words_from_slice(&["cat"]);
        let mut app = app(&words, Some(Mode::TwoPlayer));
        assert_eq!(app.input_mode, InputMode::Secret);

        type_text(&mut app, "r2d2");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::HideDigits);

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.input_mode, InputMode::Budget);

        type_text(&mut app, "37");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Budget);

        type_text(&mut app, "3");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Guess);

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.charset(), Charset::Alphanumeric);
        assert_eq!(game.pattern().as_str(), "____");

        type_text(&mut app, "r2d");
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn illegal_secret_is_rejected() {
        let words = words_from_slice(&["cat"]);
        let mut app = app(&words, Some(Mode::TwoPlayer));

        type_text(&mut app, "a/b");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Secret);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn quit_keys() {
        let words = words_from_slice(&["cat"]);
        let mut app = app(&words, Some(Mode::Normal));

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
