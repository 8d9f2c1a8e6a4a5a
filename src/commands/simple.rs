//! Simple line-mode game
//!
//! Plays Hangman on plain standard input and output, without the TUI.

use crate::core::{Charset, GuessError, Word};
use crate::manager::{Game, GameConfig, GameError, GameState, Mode};
use anyhow::Result;
use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use rand::Rng;
use std::io::{self, BufRead, IsTerminal, Write};

/// Options fixed on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleOptions {
    /// Mode for every round; asked each round when `None`
    pub mode: Option<Mode>,
    /// Budget override for dictionary-backed modes
    pub budget: Option<usize>,
}

/// Run the line-mode game on the process's terminal
///
/// # Errors
///
/// Returns an error on I/O failure or if a game cannot be started.
pub fn run_simple<R: Rng + ?Sized>(
    words: &[Word],
    options: SimpleOptions,
    rng: &mut R,
) -> Result<()> {
    let masked = io::stdin().is_terminal();
    let mut console = Console::new(io::stdin().lock(), io::stdout()).with_masked_secret(masked);
    console.run(words, options, rng)
}

/// A line-oriented conversation with the player
pub struct Console<I, O> {
    input: I,
    output: O,
    masked_secret: bool,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub const fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            masked_secret: false,
        }
    }

    /// Read the two-player secret from the raw terminal, echoing `*`
    #[must_use]
    pub const fn with_masked_secret(mut self, masked: bool) -> Self {
        self.masked_secret = masked;
        self
    }

    /// Give back the output, for inspection
    pub fn into_output(self) -> O {
        self.output
    }

    /// Play rounds until the player declines another or input ends
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or if a game cannot be started.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        words: &[Word],
        options: SimpleOptions,
        rng: &mut R,
    ) -> Result<()> {
        writeln!(self.output, "Welcome to the Hangman Player!")?;

        loop {
            let mode = match options.mode {
                Some(mode) => mode,
                None => match self.choose_mode()? {
                    Some(mode) => mode,
                    None => return Ok(()),
                },
            };

            let game = if mode == Mode::TwoPlayer {
                match self.setup_two_player()? {
                    Some(game) => game,
                    None => return Ok(()),
                }
            } else {
                let mut config = GameConfig::for_mode(mode);
                if let Some(budget) = options.budget {
                    config = config.with_budget(budget);
                }
                Game::start(words, config, rng)?
            };

            if !self.play_round(game)? {
                return Ok(());
            }

            writeln!(self.output)?;
            let Some(again) = self.prompt(
                "Would you like to play again? Type 'y' for yes, and anything else for no. ",
            )?
            else {
                return Ok(());
            };
            if !is_yes(&again) {
                return Ok(());
            }
        }
    }

    fn choose_mode(&mut self) -> Result<Option<Mode>> {
        let Some(players) = self.prompt_number(
            "How many players? (Enter 1 or 2): ",
            1..=2,
            "Sorry, that is not a valid number of players.",
        )?
        else {
            return Ok(None);
        };

        if players == 2 {
            return Ok(Some(Mode::TwoPlayer));
        }

        let level = self.prompt_number(
            "What level CPU do you want to play against? (Enter 1 for EASY, 2 for NORMAL, 3 for HARD): ",
            1..=3,
            "Sorry, that is not a valid difficulty level.",
        )?;

        Ok(level.and_then(|n| Mode::from_name(&n.to_string())))
    }

    fn setup_two_player(&mut self) -> Result<Option<Game>> {
        let (secret, charset) = loop {
            let Some(text) = self.read_secret("Please enter the secret word: ")? else {
                return Ok(None);
            };

            let Ok(word) = Word::new(text.trim()) else {
                writeln!(
                    self.output,
                    "Sorry, that secret word contained an illegal character."
                )?;
                continue;
            };

            let mut charset = Charset::Alphabetic;
            if word.text().chars().any(|c| c.is_ascii_digit()) {
                let Some(answer) = self.prompt(
                    "Your secret word contained some numbers. Would you like these to be hidden? Type 'y' for yes, and anything else for no. ",
                )?
                else {
                    return Ok(None);
                };
                if is_yes(&answer) {
                    charset = Charset::Alphanumeric;
                }
            }

            if word.has_guessable(charset) {
                break (word, charset);
            }
            writeln!(self.output, "Sorry, that secret word has nothing to guess.")?;
        };

        let Some(budget) = self.prompt_number(
            "How many wrong guesses are allowed? ",
            1..=charset.max_budget(),
            "Sorry, that is not a valid number of guesses.",
        )?
        else {
            return Ok(None);
        };

        let config = GameConfig::for_mode(Mode::TwoPlayer)
            .with_charset(charset)
            .with_budget(budget);
        Ok(Some(Game::with_secret(secret, config)?))
    }

    /// Play one game to the end; `false` if input ran out
    fn play_round(&mut self, mut game: Game) -> Result<bool> {
        while !game.is_terminal() {
            writeln!(self.output)?;
            writeln!(self.output)?;
            writeln!(self.output, "guesses left: {}", game.guesses_left())?;
            writeln!(self.output, "guessed so far : {}", game.guesses())?;
            writeln!(self.output, "current word : {}", game.pattern())?;

            loop {
                let Some(input) = self.prompt("What is your next guess? ")? else {
                    return Ok(false);
                };

                match game.guess_input(&input) {
                    Ok(_) => break,
                    Err(GameError::InvalidGuess(GuessError::AlreadyGuessed(_))) => {
                        writeln!(self.output, "You already guessed that!")?;
                    }
                    Err(GameError::InvalidGuess(_)) => {
                        writeln!(self.output, "Sorry, that is not a valid input")?;
                    }
                    Err(e @ GameError::InvariantViolation(_)) => {
                        writeln!(self.output, "{}", format!("Game aborted: {e}").red())?;
                        return Ok(true);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        writeln!(self.output)?;
        if game.state() == GameState::Won {
            writeln!(self.output, "{}", "You win!!".bright_green().bold())?;
        } else {
            writeln!(self.output, "{}", "You lost.".red())?;
        }

        if let Some(word) = game.reveal_word() {
            writeln!(self.output, "The word was {word}.")?;
        }

        Ok(true)
    }

    /// Print `message` and read one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_number(
        &mut self,
        message: &str,
        range: std::ops::RangeInclusive<usize>,
        complaint: &str,
    ) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };

            match line.parse::<usize>() {
                Ok(n) if range.contains(&n) => return Ok(Some(n)),
                _ => writeln!(self.output, "{complaint}")?,
            }
        }
    }

    fn read_secret(&mut self, message: &str) -> Result<Option<String>> {
        if !self.masked_secret {
            return self.prompt(message);
        }

        write!(self.output, "{message}")?;
        self.output.flush()?;

        enable_raw_mode()?;
        let secret = read_masked(&mut self.output);
        disable_raw_mode()?;
        writeln!(self.output)?;

        secret
    }
}

/// Collect keystrokes until Enter, echoing one `*` per character
fn read_masked<O: Write>(output: &mut O) -> Result<Option<String>> {
    let mut secret = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Enter => return Ok(Some(secret)),
            KeyCode::Esc => return Ok(None),
            KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None);
            }
            KeyCode::Backspace => {
                if secret.pop().is_some() {
                    write!(output, "\u{8} \u{8}")?;
                }
            }
            KeyCode::Char(c) => {
                secret.push(c);
                write!(output, "*")?;
            }
            _ => {}
        }
        output.flush()?;
    }
}

fn is_yes(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}
