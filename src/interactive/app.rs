//! TUI application state and logic

use crate::commands::{Game, TurnResult};
use crate::player::{Item, ItemEffect, ItemError};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: WordSource> {
    pub game: Game<S>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    /// Guesses used up; waiting for an item, a life, or giving up
    OutOfGuesses,
    RoundOver,
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

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(game: Game<S>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message("Type a word and press Enter.", MessageStyle::Info);
        app.add_message(
            "F1 extra guess | F2 remove letter | F3 reveal letter",
            MessageStyle::Info,
        );
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.quit(),
                KeyCode::Enter | KeyCode::Char('n') => self.next_round(),
                _ => {}
            },
            InputMode::OutOfGuesses => match key.code {
                KeyCode::Esc => self.quit(),
                KeyCode::F(1) => self.use_item(Item::AddGuess),
                KeyCode::F(4) => self.spend_life(),
                KeyCode::Enter | KeyCode::Tab => self.give_up(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.quit(),
                KeyCode::Tab => self.give_up(),
                KeyCode::F(1) => self.use_item(Item::AddGuess),
                KeyCode::F(2) => self.use_item(Item::RemoveLetter),
                KeyCode::F(3) => self.use_item(Item::RevealLetter),
                KeyCode::Char(c) => {
                    if !self.game.type_letter(c) && self.game.session().is_eliminated(c) {
                        self.add_message(
                            &format!("{} is not in the word", c.to_ascii_uppercase()),
                            MessageStyle::Error,
                        );
                    }
                }
                KeyCode::Backspace => {
                    self.game.delete_letter();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    fn submit(&mut self) {
        match self.game.submit() {
            TurnResult::Incomplete => {
                let length = self.game.session().target().len();
                self.add_message(&format!("Word must be {length} letters!"), MessageStyle::Error);
            }
            TurnResult::NotAWord => {
                self.add_message("Not in the word list!", MessageStyle::Error);
            }
            TurnResult::Scored => {}
            TurnResult::Won(settlement) => {
                let used = self.game.session().completed_guesses().len();
                let celebration = match used {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                if settlement.replay {
                    self.add_message("Replay: no rewards this time", MessageStyle::Info);
                } else if settlement.coins_awarded > 0 {
                    self.add_message(
                        &format!("+{} coins", settlement.coins_awarded),
                        MessageStyle::Success,
                    );
                }
                self.finish_round();
            }
            TurnResult::OutOfGuesses => {
                self.input_mode = InputMode::OutOfGuesses;
                self.add_message(
                    "Out of guesses! F1 extra guess, F4 spend a life, Enter to give up",
                    MessageStyle::Error,
                );
            }
        }
    }

    fn use_item(&mut self, item: Item) {
        let result = self.game.use_item(item);
        self.report(result);
    }

    fn spend_life(&mut self) {
        let result = self.game.spend_life();
        self.report(result);
    }

    fn report(&mut self, result: Result<ItemEffect, ItemError>) {
        match result {
            Ok(effect) => {
                let text = match effect {
                    ItemEffect::BonusGuesses(count) => format!("+{count} guess(es)"),
                    ItemEffect::RemovedLetter(letter) => format!("{letter} removed"),
                    ItemEffect::RevealedLetter { position, letter } => {
                        format!("Letter {} is {letter}", position + 1)
                    }
                };
                self.add_message(&text, MessageStyle::Success);
                self.input_mode = InputMode::Guessing;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn give_up(&mut self) {
        if let Some(settlement) = self.game.give_up() {
            let target = self.game.session().target().text().to_string();
            self.add_message(&format!("The word was {target}"), MessageStyle::Error);
            if settlement.life_consumed {
                self.add_message("-1 life", MessageStyle::Error);
            }
            self.finish_round();
        } else {
            self.add_message("Finish or run out of guesses first", MessageStyle::Info);
        }
    }

    fn finish_round(&mut self) {
        if let Some(definition) = self.game.definition() {
            let text = format!("{}: {definition}", self.game.session().target());
            self.add_message(&text, MessageStyle::Info);
        }
        self.add_message("Press 'n' for the next round or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::RoundOver;
    }

    pub fn next_round(&mut self) {
        match self.game.next_round() {
            Ok(()) => {
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
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

    fn quit(&mut self) {
        self.game.give_up();
        self.should_quit = true;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

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
    use crate::commands::RoundChoice;
    use crate::config::{Difficulty, GameConfig};
    use crate::core::Word;
    use crate::pool::Tier;
    use crate::session::SessionStatus;
    use crate::wordlists::{Entry, MemoryWords};

    fn app() -> App<MemoryWords> {
        let source = MemoryWords::new()
            .with_level_words(
                4,
                ["ABLE", "BARK"]
                    .iter()
                    .map(|w| Entry::new(w, "").unwrap())
                    .collect(),
            )
            .with_valid_words(4, vec![Word::new("DARK").unwrap()]);
        let choice = RoundChoice::Level {
            tier: Tier::Standard,
            difficulty: Difficulty::Easy,
            level: Some(1),
        };
        App::new(Game::new(source, GameConfig::default(), choice).unwrap())
    }

    fn press(app: &mut App<MemoryWords>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<MemoryWords>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_winning() {
        let mut app = app();
        let target = app.game.session().target().text().to_string();
        type_word(&mut app, &target);

        assert_eq!(app.game.session().status(), SessionStatus::Won);
        assert_eq!(app.input_mode, InputMode::RoundOver);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.game.session().completed_guesses().is_empty());
    }

    #[test]
    fn running_out_then_extra_guess() {
        let mut app = app();
        for _ in 0..6 {
            type_word(&mut app, "dark");
        }
        assert_eq!(app.input_mode, InputMode::OutOfGuesses);

        // letters are ignored until the round is extended
        press(&mut app, KeyCode::Char('a'));
        assert!(app.game.session().current_input().is_empty());

        press(&mut app, KeyCode::F(1));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.session().guesses_remaining(), 1);
    }

    #[test]
    fn removed_letters_cannot_be_typed() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        let removed = app.game.session().eliminated_letters()[0];
        press(&mut app, KeyCode::Char(removed));
        assert!(app.game.session().current_input().is_empty());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
