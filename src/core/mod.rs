//! Core domain types
//!
//! Words, tiles and guess evaluation. Everything here is pure and
//! deterministic.

mod evaluator;
mod tile;
mod word;

pub use evaluator::{GuessRow, evaluate};
pub use tile::{Tile, TileState};
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
