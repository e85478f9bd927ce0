//! Guess evaluation
//!
//! Scores a guess against the target with Wordle's exact rules, including
//! duplicate letters.

use super::{Tile, TileState, Word};
use serde::{Deserialize, Serialize};

/// One submitted guess: a tile per letter, in order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessRow(Vec<Tile>);

impl GuessRow {
    /// Wrap already-evaluated tiles, e.g. when reading a saved session
    #[must_use]
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self(tiles)
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every tile is CORRECT
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|t| t.state == TileState::Correct)
    }

    /// The guessed word as text
    #[must_use]
    pub fn text(&self) -> String {
        self.0.iter().map(|t| t.letter).collect()
    }

    /// State at a position, if in range
    #[must_use]
    pub fn state_at(&self, position: usize) -> Option<TileState> {
        self.0.get(position).map(|t| t.state)
    }
}

/// Evaluate `guess` against `target`
///
/// Both words must have the same length; the session checks this before
/// calling.
///
/// # Algorithm
/// 1. Count the letters of the target
/// 2. First pass: mark exact matches CORRECT and use up their counts
/// 3. Second pass: mark remaining letters PRESENT while copies are left,
///    otherwise ABSENT
///
/// # Examples
/// ```
/// use wordle_quest::core::{evaluate, TileState, Word};
///
/// let row = evaluate(&Word::new("dark").unwrap(), &Word::new("able").unwrap());
/// assert_eq!(row.state_at(1), Some(TileState::Present));
/// assert!(!row.is_win());
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> GuessRow {
    debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

    let guess_letters = guess.letters();
    let target_letters = target.letters();
    let mut remaining = target.letter_counts();
    let mut states: Vec<Option<TileState>> = vec![None; guess_letters.len()];

    for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
        if g == t {
            states[i] = Some(TileState::Correct);
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess_letters.iter().enumerate() {
        if states[i].is_some() {
            continue;
        }
        let state = match remaining.get_mut(&g) {
            Some(count) if *count > 0 => {
                *count -= 1;
                TileState::Present
            }
            _ => TileState::Absent,
        };
        states[i] = Some(state);
    }

    GuessRow(
        guess_letters
            .iter()
            .zip(states)
            .map(|(&letter, state)| Tile::new(letter, state.unwrap_or(TileState::Absent)))
            .collect(),
    )
}
