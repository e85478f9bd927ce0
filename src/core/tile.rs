//! Board tiles
//!
//! A tile pairs a letter with its [`TileState`]. Evaluated states carry a
//! priority used when merging into the keyboard:
//! `CORRECT > PRESENT > ABSENT > unknown`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single board or keyboard tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileState {
    /// Nothing typed here yet
    Empty,
    /// Typed but not yet submitted
    Filled,
    /// Right letter, right position
    Correct,
    /// Letter is in the word, elsewhere
    Present,
    /// Letter is not in the word (or all copies are accounted for)
    Absent,
    /// Letter revealed ahead of time
    Hint,
}

impl TileState {
    /// Priority for "best known state" merging; non-evaluated states rank 0.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Filled | Self::Hint => 0,
        }
    }

    /// Whether this state comes from evaluating a guess
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        self.rank() > 0
    }

    /// Keep whichever of the two states is better known.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }

    /// Name used in persisted records
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Filled => "FILLED",
            Self::Correct => "CORRECT",
            Self::Present => "PRESENT",
            Self::Absent => "ABSENT",
            Self::Hint => "HINT",
        }
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A letter on the board with its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub state: TileState,
}

impl Tile {
    #[must_use]
    pub const fn new(letter: char, state: TileState) -> Self {
        Self { letter, state }
    }

    /// A blank tile
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(' ', TileState::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_never_downgrades() {
        assert_eq!(
            TileState::Correct.merge(TileState::Absent),
            TileState::Correct
        );
        assert_eq!(
            TileState::Correct.merge(TileState::Present),
            TileState::Correct
        );
        assert_eq!(
            TileState::Present.merge(TileState::Correct),
            TileState::Correct
        );
        assert_eq!(
            TileState::Absent.merge(TileState::Present),
            TileState::Present
        );
        assert_eq!(TileState::Empty.merge(TileState::Absent), TileState::Absent);
    }

    #[test]
    fn unevaluated_states_rank_zero() {
        for state in [TileState::Empty, TileState::Filled, TileState::Hint] {
            assert_eq!(state.rank(), 0);
            assert!(!state.is_evaluated());
        }
    }

    #[test]
    fn serializes_as_record_names() {
        let json = serde_json::to_string(&TileState::Present).unwrap();
        assert_eq!(json, "\"PRESENT\"");

        let state: TileState = serde_json::from_str("\"CORRECT\"").unwrap();
        assert_eq!(state, TileState::Correct);
        assert_eq!(TileState::Hint.to_string(), "HINT");
    }
}
