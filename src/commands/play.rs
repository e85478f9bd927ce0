//! Round setup and the play loop shared by the TUI and the plain CLI
//!
//! A [`Game`] owns everything one player needs: pools, dictionary, config,
//! player state and the round being played. Front ends forward keys and draw
//! what it exposes.

use crate::config::{Difficulty, GameConfig};
use crate::daily::{DAILY_LENGTHS, DATE_FORMAT, DailySelector};
use crate::player::{
    Item, ItemEffect, ItemError, PlayerState, Settlement, settle, spend_life, use_item,
};
use crate::pool::{Tier, WordPoolManager};
use crate::session::{DEFAULT_MAX_GUESSES, GameSession, SessionKind, SessionStatus, SubmitOutcome};
use crate::wordlists::{Dictionary, WordSource};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use tracing::debug;

/// Which round to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundChoice {
    /// A level; `None` means the player's next unbeaten level
    Level {
        tier: Tier,
        difficulty: Difficulty,
        level: Option<u32>,
    },
    Daily { date: NaiveDate, length: usize },
}

/// Player-facing result of a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Incomplete,
    NotAWord,
    Scored,
    Won(Settlement),
    /// Guesses ran out; the round can still be extended or given up
    OutOfGuesses,
}

pub struct Game<S: WordSource> {
    manager: WordPoolManager<S>,
    dictionary: Dictionary,
    config: GameConfig,
    player: PlayerState,
    choice: RoundChoice,
    kind: SessionKind,
    session: GameSession,
    settlement: Option<Settlement>,
}

impl<S: WordSource> Game<S> {
    /// Build pools and a dictionary over `source` and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen round has no word.
    pub fn new(source: S, config: GameConfig, choice: RoundChoice) -> Result<Self> {
        let player = PlayerState::starting(&config);
        Self::with_player(source, config, player, choice)
    }

    /// Same as [`Game::new`] for an existing player
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen round has no word.
    pub fn with_player(
        source: S,
        config: GameConfig,
        player: PlayerState,
        choice: RoundChoice,
    ) -> Result<Self> {
        let dictionary = Dictionary::from_source(&source);
        let mut manager = WordPoolManager::new(source, config.seed, config.splits.clone());
        let (kind, session) = start_round(&mut manager, &config, &player, choice)?;

        Ok(Self {
            manager,
            dictionary,
            config,
            player,
            choice,
            kind,
            session,
            settlement: None,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub const fn kind(&self) -> &SessionKind {
        &self.kind
    }

    #[must_use]
    pub const fn settlement(&self) -> Option<Settlement> {
        self.settlement
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Definition of the current target, if the word lists carry one
    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        self.dictionary.definition_of(self.session.target())
    }

    pub fn type_letter(&mut self, letter: char) -> bool {
        self.session.on_key_pressed(letter)
    }

    pub fn delete_letter(&mut self) -> bool {
        self.session.on_delete()
    }

    /// Submit the open row against the dictionary
    pub fn submit(&mut self) -> TurnResult {
        let dictionary = &self.dictionary;
        let outcome = self
            .session
            .on_submit(|candidate, length| dictionary.is_valid_word(candidate, length));

        match outcome {
            SubmitOutcome::NotReady => TurnResult::Incomplete,
            SubmitOutcome::InvalidWord => TurnResult::NotAWord,
            SubmitOutcome::Evaluated { is_win: true, .. } => {
                match settle(&mut self.player, &self.config, &self.kind, &self.session) {
                    Some(settlement) => {
                        self.settlement = Some(settlement);
                        TurnResult::Won(settlement)
                    }
                    None => TurnResult::Scored,
                }
            }
            SubmitOutcome::Evaluated {
                is_out_of_guesses: true,
                ..
            } => TurnResult::OutOfGuesses,
            SubmitOutcome::Evaluated { .. } => TurnResult::Scored,
        }
    }

    /// Use one item on the current round
    ///
    /// # Errors
    ///
    /// Returns `ItemError` if the item cannot be used right now.
    pub fn use_item(&mut self, item: Item) -> Result<ItemEffect, ItemError> {
        if self.settlement.is_some() {
            return Err(ItemError::WrongStatus);
        }
        use_item(&mut self.player, &self.config, &mut self.session, item)
    }

    /// Trade a life for more guesses after running out
    ///
    /// # Errors
    ///
    /// Returns `ItemError` if the round is not out of guesses or no lives remain.
    pub fn spend_life(&mut self) -> Result<ItemEffect, ItemError> {
        if self.settlement.is_some() {
            return Err(ItemError::WrongStatus);
        }
        spend_life(&mut self.player, &self.config, &mut self.session)
    }

    /// Accept the loss of a round that ran out of guesses
    ///
    /// Returns the settlement, or `None` if the round is not lost or was
    /// already settled.
    pub fn give_up(&mut self) -> Option<Settlement> {
        if self.settlement.is_some() || self.session.status() != SessionStatus::OutOfGuesses {
            return None;
        }
        self.settlement = settle(&mut self.player, &self.config, &self.kind, &self.session);
        self.settlement
    }

    /// Settle any pending loss and start the next round
    ///
    /// Levels continue at the player's next unbeaten level; the daily
    /// challenge moves on to the next word length.
    ///
    /// # Errors
    ///
    /// Returns an error if the next round has no word. The current round is
    /// kept in that case.
    pub fn next_round(&mut self) -> Result<()> {
        self.give_up();

        let choice = match self.choice {
            RoundChoice::Level {
                tier, difficulty, ..
            } => RoundChoice::Level {
                tier,
                difficulty,
                level: None,
            },
            RoundChoice::Daily { date, length } => {
                let position = DAILY_LENGTHS.iter().position(|&n| n == length).unwrap_or(0);
                RoundChoice::Daily {
                    date,
                    length: DAILY_LENGTHS[(position + 1) % DAILY_LENGTHS.len()],
                }
            }
        };

        let (kind, session) = start_round(&mut self.manager, &self.config, &self.player, choice)?;
        debug!(?kind, "started next round");
        self.choice = choice;
        self.kind = kind;
        self.session = session;
        self.settlement = None;
        Ok(())
    }
}

fn start_round<S: WordSource>(
    manager: &mut WordPoolManager<S>,
    config: &GameConfig,
    player: &PlayerState,
    choice: RoundChoice,
) -> Result<(SessionKind, GameSession)> {
    match choice {
        RoundChoice::Level {
            tier,
            difficulty,
            level,
        } => {
            let level = level.unwrap_or_else(|| player.progress.next_level(tier, difficulty));
            let rule = config.rule(difficulty);
            let target = manager
                .word_for_level(tier, level, rule.word_length)
                .ok_or_else(|| {
                    anyhow!(
                        "no {tier} word for {difficulty} level {level} ({} letters)",
                        rule.word_length
                    )
                })?;
            let session = GameSession::for_difficulty(target, config, difficulty);
            Ok((
                SessionKind::Level {
                    tier,
                    difficulty,
                    level,
                },
                session,
            ))
        }
        RoundChoice::Daily { date, length } => {
            let target = DailySelector::new(manager.source())
                .word_for(date, length)
                .ok_or_else(|| anyhow!("no daily word of length {length} for {date}"))?;
            Ok((
                SessionKind::Daily {
                    date: date.format(DATE_FORMAT).to_string(),
                },
                GameSession::new(target, DEFAULT_MAX_GUESSES),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::{Entry, MemoryWords};

    fn source() -> MemoryWords {
        let level = ["ABLE", "BARK", "CALM"]
            .iter()
            .map(|w| Entry::new(w, "a word").unwrap())
            .collect();
        let valid = ["DARK", "FARM", "LAKE"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        MemoryWords::new()
            .with_level_words(4, level)
            .with_valid_words(4, valid)
    }

    fn easy(level: Option<u32>) -> RoundChoice {
        RoundChoice::Level {
            tier: Tier::Standard,
            difficulty: Difficulty::Easy,
            level,
        }
    }

    fn play(game: &mut Game<MemoryWords>, word: &str) -> TurnResult {
        for letter in word.chars() {
            game.type_letter(letter);
        }
        game.submit()
    }

    fn wrong_word(game: &Game<MemoryWords>) -> &'static str {
        if game.session().target().text() == "DARK" {
            "FARM"
        } else {
            "DARK"
        }
    }

    #[test]
    fn winning_a_level_settles_and_advances() {
        let mut game = Game::new(source(), GameConfig::default(), easy(None)).unwrap();
        assert_eq!(game.kind(), &SessionKind::Level {
            tier: Tier::Standard,
            difficulty: Difficulty::Easy,
            level: 1
        });
        assert_eq!(game.definition(), Some("a word"));

        let target = game.session().target().text().to_string();
        let TurnResult::Won(settlement) = play(&mut game, &target) else {
            panic!("expected a win");
        };
        assert_eq!(settlement.coins_awarded, 100);
        assert_eq!(game.player().currency.coins, 100);

        game.next_round().unwrap();
        assert!(matches!(game.kind(), SessionKind::Level { level: 2, .. }));
        assert_eq!(game.settlement(), None);
    }

    #[test]
    fn unknown_words_are_rejected() {
        let mut game = Game::new(source(), GameConfig::default(), easy(Some(1))).unwrap();
        assert_eq!(play(&mut game, "ZZZZ"), TurnResult::NotAWord);
        assert_eq!(game.submit(), TurnResult::NotAWord);
        assert!(game.delete_letter());
        assert_eq!(game.submit(), TurnResult::Incomplete);
    }

    #[test]
    fn losing_waits_for_give_up() {
        let config = GameConfig {
            starting_items: 0,
            ..GameConfig::default()
        };
        let mut game = Game::new(source(), config, easy(Some(1))).unwrap();
        let lives = game.player().currency.lives;

        let miss = wrong_word(&game);
        for _ in 0..5 {
            assert_eq!(play(&mut game, miss), TurnResult::Scored);
        }
        assert_eq!(play(&mut game, miss), TurnResult::OutOfGuesses);
        assert_eq!(game.player().currency.lives, lives);
        assert_eq!(
            game.use_item(Item::AddGuess),
            Err(ItemError::OutOfStock(Item::AddGuess))
        );

        let settlement = game.give_up().unwrap();
        assert!(settlement.life_consumed);
        assert_eq!(game.player().currency.lives, lives - 1);
        assert_eq!(game.give_up(), None);
        assert_eq!(game.spend_life(), Err(ItemError::WrongStatus));
    }

    #[test]
    fn spent_life_keeps_the_round_going() {
        let mut game = Game::new(source(), GameConfig::default(), easy(Some(1))).unwrap();
        let miss = wrong_word(&game);
        for _ in 0..6 {
            play(&mut game, miss);
        }
        game.spend_life().unwrap();
        let target = game.session().target().text().to_string();
        assert!(matches!(play(&mut game, &target), TurnResult::Won(_)));
        assert_eq!(game.player().currency.lives, 4);
    }

    #[test]
    fn daily_rounds_cycle_lengths() {
        let source = MemoryWords::new()
            .with_valid_words(4, vec![Word::new("DARK").unwrap()])
            .with_valid_words(5, vec![Word::new("SPEED").unwrap()]);
        let date = NaiveDate::from_ymd_opt(2026, 2, 23).unwrap();
        let mut game = Game::new(source, GameConfig::default(), RoundChoice::Daily { date, length: 4 }).unwrap();
        assert_eq!(game.session().target().text(), "DARK");
        assert_eq!(game.session().max_guesses(), DEFAULT_MAX_GUESSES);

        game.next_round().unwrap();
        assert_eq!(game.session().target().text(), "SPEED");
        assert_eq!(
            game.kind(),
            &SessionKind::Daily {
                date: "2026-02-23".to_string()
            }
        );

        // nothing of length 6; the current round stays
        assert!(game.next_round().is_err());
        assert_eq!(game.session().target().text(), "SPEED");
    }
}
