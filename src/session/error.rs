//! Reconstruction failures
//!
//! A saved session that fails these checks must be discarded; the engine
//! never repairs one.

use crate::core::{TileState, WordError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("saved target word is invalid")]
    Target(#[from] WordError),
    #[error("max guesses must be at least 1")]
    ZeroMaxGuesses,
    #[error("row {row} has {found} tiles, target has {expected} letters")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{rows} guesses recorded but only {max_guesses} allowed")]
    TooManyRows { rows: usize, max_guesses: usize },
    #[error("row {row} does not match the target's scoring")]
    ScoreMismatch { row: usize },
    #[error("row {row} is a win but more guesses follow it")]
    WinNotLast { row: usize },
    #[error("row {row} position {position} holds unevaluated state {state}")]
    UnevaluatedTile {
        row: usize,
        position: usize,
        state: TileState,
    },
    #[error("current input has {found} letters, target has {expected}")]
    InputTooLong { expected: usize, found: usize },
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("prefilled position {position} is outside a {length}-letter word")]
    PrefillOutOfRange { position: usize, length: usize },
    #[error("malformed session record")]
    Malformed(#[from] serde_json::Error),
}
