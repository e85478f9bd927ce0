//! Consumable items and lives
//!
//! The engine only applies effects; choosing which letter to remove or
//! reveal happens here, from the target the caller already knows.

use super::PlayerState;
use crate::config::GameConfig;
use crate::session::{GameSession, SessionStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    AddGuess,
    RemoveLetter,
    RevealLetter,
}

impl Item {
    pub const ALL: [Self; 3] = [Self::AddGuess, Self::RemoveLetter, Self::RevealLetter];
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddGuess => f.write_str("add guess"),
            Self::RemoveLetter => f.write_str("remove letter"),
            Self::RevealLetter => f.write_str("reveal letter"),
        }
    }
}

/// What an item did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    BonusGuesses(usize),
    RemovedLetter(char),
    RevealedLetter { position: usize, letter: char },
}

/// Why an item was not used; nothing is consumed in any of these cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("no {0} items left")]
    OutOfStock(Item),
    #[error("no lives left")]
    NoLives,
    #[error("every absent letter is already known")]
    NothingToRemove,
    #[error("every position is already revealed")]
    NothingToReveal,
    #[error("the round is not accepting this item")]
    WrongStatus,
}

/// Alphabetically first letter absent from the target and not yet known
#[must_use]
pub fn absent_letter(session: &GameSession) -> Option<char> {
    ('A'..='Z').find(|&letter| {
        !session.target().has_letter(letter)
            && !session.is_eliminated(letter)
            && session.keyboard_state(letter).is_none()
    })
}

/// First position neither prefilled nor already solved, with its letter
#[must_use]
pub fn unrevealed_position(session: &GameSession) -> Option<(usize, char)> {
    session
        .target()
        .letters()
        .iter()
        .enumerate()
        .find(|&(position, _)| {
            !session.prefilled_positions().contains_key(&position) && !session.solved_at(position)
        })
        .map(|(position, &letter)| (position, letter))
}

/// True when `count` more guesses leave the session open for input
fn grant_resumes(session: &GameSession, count: usize) -> bool {
    count > 0
        && session.completed_guesses().len() < session.max_guesses().saturating_add(count)
}

/// Consume one item and apply it to the session
///
/// # Errors
///
/// Returns `ItemError` if the player has none of the item, the session is
/// in the wrong state, or the item would have no effect. The inventory is
/// unchanged on error.
pub fn use_item(
    player: &mut PlayerState,
    config: &GameConfig,
    session: &mut GameSession,
    item: Item,
) -> Result<ItemEffect, ItemError> {
    if player.inventory.count(item) == 0 {
        return Err(ItemError::OutOfStock(item));
    }

    let status = session.status();
    let effect = match item {
        Item::AddGuess => {
            if status == SessionStatus::Won
                || !grant_resumes(session, config.bonus_guesses_per_item)
            {
                return Err(ItemError::WrongStatus);
            }
            session.add_bonus_guesses(config.bonus_guesses_per_item);
            ItemEffect::BonusGuesses(config.bonus_guesses_per_item)
        }
        Item::RemoveLetter => {
            if status != SessionStatus::InProgress {
                return Err(ItemError::WrongStatus);
            }
            let letter = absent_letter(session).ok_or(ItemError::NothingToRemove)?;
            session.remove_letter(letter);
            ItemEffect::RemovedLetter(letter)
        }
        Item::RevealLetter => {
            if status != SessionStatus::InProgress {
                return Err(ItemError::WrongStatus);
            }
            let (position, letter) =
                unrevealed_position(session).ok_or(ItemError::NothingToReveal)?;
            session.prefill_position(position, letter);
            ItemEffect::RevealedLetter { position, letter }
        }
    };

    player.inventory.take(item);
    info!(%item, left = player.inventory.count(item), "used item");
    Ok(effect)
}

/// Spend a life to keep guessing after running out
///
/// # Errors
///
/// Returns `ItemError::WrongStatus` unless the session is out of guesses
/// and the configured grant would reopen it, and `ItemError::NoLives` if
/// the player has none. Nothing is consumed on error.
pub fn spend_life(
    player: &mut PlayerState,
    config: &GameConfig,
    session: &mut GameSession,
) -> Result<ItemEffect, ItemError> {
    if session.status() != SessionStatus::OutOfGuesses {
        return Err(ItemError::WrongStatus);
    }
    if !grant_resumes(session, config.bonus_guesses_per_life) {
        return Err(ItemError::WrongStatus);
    }
    if player.currency.lives == 0 {
        return Err(ItemError::NoLives);
    }

    player.currency.lives -= 1;
    session.add_bonus_guesses(config.bonus_guesses_per_life);
    info!(lives = player.currency.lives, "spent a life for more guesses");
    Ok(ItemEffect::BonusGuesses(config.bonus_guesses_per_life))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TileState, Word};

    fn setup(target: &str, max_guesses: usize) -> (PlayerState, GameConfig, GameSession) {
        let mut player = PlayerState::new(2);
        player.inventory.add(Item::AddGuess, 1);
        player.inventory.add(Item::RemoveLetter, 1);
        player.inventory.add(Item::RevealLetter, 1);
        let session = GameSession::new(Word::new(target).unwrap(), max_guesses);
        (player, GameConfig::default(), session)
    }

    fn guess(session: &mut GameSession, word: &str) {
        for letter in word.chars() {
            session.on_key_pressed(letter);
        }
        session.on_submit(|_, _| true);
    }

    #[test]
    fn remove_letter_picks_first_unknown_absent() {
        let (mut player, config, mut session) = setup("able", 6);
        let effect = use_item(&mut player, &config, &mut session, Item::RemoveLetter).unwrap();

        // A and B are in ABLE, C is the first absent letter
        assert_eq!(effect, ItemEffect::RemovedLetter('C'));
        assert!(session.is_eliminated('C'));
        assert_eq!(session.keyboard_state('C'), Some(TileState::Absent));
        assert_eq!(player.inventory.remove_letter, 0);
    }

    #[test]
    fn remove_letter_skips_letters_already_guessed() {
        let (_, _, mut session) = setup("able", 6);
        guess(&mut session, "acre");
        // C and R are already shown absent
        assert_eq!(absent_letter(&session), Some('D'));
    }

    #[test]
    fn reveal_skips_solved_and_prefilled_positions() {
        let (mut player, config, mut session) = setup("able", 6);
        guess(&mut session, "acre"); // positions 0 and 3 solved
        session.prefill_position(1, 'b');

        let effect = use_item(&mut player, &config, &mut session, Item::RevealLetter).unwrap();
        assert_eq!(
            effect,
            ItemEffect::RevealedLetter {
                position: 2,
                letter: 'L'
            }
        );
        assert_eq!(unrevealed_position(&session), None);

        player.inventory.add(Item::RevealLetter, 1);
        assert_eq!(
            use_item(&mut player, &config, &mut session, Item::RevealLetter),
            Err(ItemError::NothingToReveal)
        );
        assert_eq!(player.inventory.reveal_letter, 1);
    }

    #[test]
    fn out_of_stock_consumes_nothing() {
        let (mut player, config, mut session) = setup("able", 6);
        player.inventory = super::super::Inventory::default();
        assert_eq!(
            use_item(&mut player, &config, &mut session, Item::AddGuess),
            Err(ItemError::OutOfStock(Item::AddGuess))
        );
        assert_eq!(session.max_guesses(), 6);
    }

    #[test]
    fn add_guess_reopens_exhausted_session() {
        let (mut player, config, mut session) = setup("able", 1);
        guess(&mut session, "dark");
        assert_eq!(session.status(), SessionStatus::OutOfGuesses);

        assert_eq!(
            use_item(&mut player, &config, &mut session, Item::RemoveLetter),
            Err(ItemError::WrongStatus)
        );
        let effect = use_item(&mut player, &config, &mut session, Item::AddGuess).unwrap();
        assert_eq!(effect, ItemEffect::BonusGuesses(1));
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn spending_lives() {
        let (mut player, config, mut session) = setup("able", 1);
        assert_eq!(
            spend_life(&mut player, &config, &mut session),
            Err(ItemError::WrongStatus)
        );

        guess(&mut session, "dark");
        spend_life(&mut player, &config, &mut session).unwrap();
        assert_eq!(player.currency.lives, 1);
        assert_eq!(session.status(), SessionStatus::InProgress);

        guess(&mut session, "bark");
        spend_life(&mut player, &config, &mut session).unwrap();
        guess(&mut session, "calm");
        assert_eq!(
            spend_life(&mut player, &config, &mut session),
            Err(ItemError::NoLives)
        );
        assert_eq!(session.status(), SessionStatus::OutOfGuesses);
    }

    #[test]
    fn empty_grants_consume_nothing() {
        let (mut player, mut config, mut session) = setup("able", 1);
        config.bonus_guesses_per_item = 0;
        config.bonus_guesses_per_life = 0;
        guess(&mut session, "dark");

        assert_eq!(
            spend_life(&mut player, &config, &mut session),
            Err(ItemError::WrongStatus)
        );
        assert_eq!(
            use_item(&mut player, &config, &mut session, Item::AddGuess),
            Err(ItemError::WrongStatus)
        );
        assert_eq!(player.currency.lives, 2);
        assert_eq!(player.inventory.add_guess, 1);
        assert_eq!(session.max_guesses(), 1);
        assert_eq!(session.status(), SessionStatus::OutOfGuesses);
    }
}
