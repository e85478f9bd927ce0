//! Game session state machine
//!
//! ```text
//! IN_PROGRESS --win--> WON
//! IN_PROGRESS --last guess used--> OUT_OF_GUESSES --bonus guesses--> IN_PROGRESS
//! ```
//!
//! A session is owned by one caller at a time and does no I/O. Word validity
//! is supplied per submit as a predicate.

use super::SessionError;
use crate::config::{Difficulty, GameConfig};
use crate::core::{GuessRow, Tile, TileState, Word, evaluate};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Guess limit used when nothing else is configured
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    InProgress,
    Won,
    OutOfGuesses,
}

/// Result of [`GameSession::on_submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input incomplete or session not in progress; nothing changed
    NotReady,
    /// Predicate rejected the word; nothing changed
    InvalidWord,
    /// The guess was scored and recorded
    Evaluated { is_win: bool, is_out_of_guesses: bool },
}

/// One round of guessing a target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target: Word,
    completed: Vec<GuessRow>,
    input: Vec<char>,
    max_guesses: usize,
    keyboard: FxHashMap<char, TileState>,
    eliminated: FxHashSet<char>,
    prefilled: BTreeMap<usize, char>,
    status: SessionStatus,
}

impl GameSession {
    /// Start a fresh session
    ///
    /// A `max_guesses` of zero is raised to one.
    #[must_use]
    pub fn new(target: Word, max_guesses: usize) -> Self {
        Self {
            target,
            completed: Vec::new(),
            input: Vec::new(),
            max_guesses: max_guesses.max(1),
            keyboard: FxHashMap::default(),
            eliminated: FxHashSet::default(),
            prefilled: BTreeMap::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Start a session with the guess limit of a difficulty
    #[must_use]
    pub fn for_difficulty(target: Word, config: &GameConfig, difficulty: Difficulty) -> Self {
        Self::new(target, config.rule(difficulty).max_guesses)
    }

    /// Rehydrate a session from saved fields
    ///
    /// Status and keyboard are derived from the rows: WON if the last row is
    /// all CORRECT, else OUT_OF_GUESSES if the rows fill the limit, else
    /// IN_PROGRESS.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the saved fields are inconsistent with each
    /// other or with the target. The caller should discard the record.
    pub fn restore(
        target: Word,
        completed: Vec<GuessRow>,
        input: Vec<char>,
        max_guesses: usize,
        prefilled: BTreeMap<usize, char>,
    ) -> Result<Self, SessionError> {
        let length = target.len();
        let completed: Vec<GuessRow> = completed.iter().map(uppercase_row).collect();

        if max_guesses == 0 {
            return Err(SessionError::ZeroMaxGuesses);
        }
        if completed.len() > max_guesses {
            return Err(SessionError::TooManyRows {
                rows: completed.len(),
                max_guesses,
            });
        }
        for (row_index, row) in completed.iter().enumerate() {
            if row.len() != length {
                return Err(SessionError::RowLength {
                    row: row_index,
                    expected: length,
                    found: row.len(),
                });
            }
            for (position, tile) in row.tiles().iter().enumerate() {
                if !tile.state.is_evaluated() {
                    return Err(SessionError::UnevaluatedTile {
                        row: row_index,
                        position,
                        state: tile.state,
                    });
                }
                check_letter(tile.letter)?;
            }
            let letters: Vec<char> = row.tiles().iter().map(|t| t.letter).collect();
            let rescored = Word::from_letters(&letters).map(|guess| evaluate(&guess, &target));
            if rescored.as_ref() != Ok(row) {
                return Err(SessionError::ScoreMismatch { row: row_index });
            }
            if row.is_win() && row_index + 1 != completed.len() {
                return Err(SessionError::WinNotLast { row: row_index });
            }
        }
        if input.len() > length {
            return Err(SessionError::InputTooLong {
                expected: length,
                found: input.len(),
            });
        }
        for &letter in &input {
            check_letter(letter)?;
        }
        for (&position, &letter) in &prefilled {
            if position >= length {
                return Err(SessionError::PrefillOutOfRange { position, length });
            }
            check_letter(letter)?;
        }

        let mut session = Self::new(target, max_guesses);
        for row in &completed {
            session.merge_keyboard(row);
        }
        session.input = input.iter().map(char::to_ascii_uppercase).collect();
        session.prefilled = prefilled
            .into_iter()
            .map(|(position, letter)| (position, letter.to_ascii_uppercase()))
            .collect();
        session.completed = completed;
        session.status = session.derive_status();

        Ok(session)
    }

    /// Type a letter into the open row
    ///
    /// Returns false without changing anything if the session is not in
    /// progress, the row is full, the key is not a letter, or the letter has
    /// been eliminated.
    pub fn on_key_pressed(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        if self.status != SessionStatus::InProgress
            || self.input.len() >= self.target.len()
            || !letter.is_ascii_uppercase()
            || self.eliminated.contains(&letter)
        {
            return false;
        }
        self.input.push(letter);
        true
    }

    /// Remove the last typed letter; false if there is none
    pub fn on_delete(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Row is full and the session is in progress
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status == SessionStatus::InProgress && self.input.len() == self.target.len()
    }

    /// Submit the open row
    ///
    /// `is_valid_word(candidate, required_length)` is asked once, only when
    /// the row is complete.
    pub fn on_submit<F>(&mut self, is_valid_word: F) -> SubmitOutcome
    where
        F: FnOnce(&str, usize) -> bool,
    {
        if !self.can_submit() {
            return SubmitOutcome::NotReady;
        }

        let candidate: String = self.input.iter().collect();
        if !is_valid_word(&candidate, self.target.len()) {
            debug!(guess = %candidate, "rejected guess");
            return SubmitOutcome::InvalidWord;
        }
        let Ok(guess) = Word::new(&candidate) else {
            return SubmitOutcome::InvalidWord;
        };

        let row = evaluate(&guess, &self.target);
        let is_win = row.is_win();
        self.merge_keyboard(&row);
        self.completed.push(row);
        self.input.clear();

        let mut is_out_of_guesses = false;
        if is_win {
            self.status = SessionStatus::Won;
        } else if self.completed.len() >= self.max_guesses {
            self.status = SessionStatus::OutOfGuesses;
            is_out_of_guesses = true;
        }

        debug!(
            guess = %candidate,
            used = self.completed.len(),
            max = self.max_guesses,
            is_win,
            is_out_of_guesses,
            "scored guess"
        );

        SubmitOutcome::Evaluated {
            is_win,
            is_out_of_guesses,
        }
    }

    /// Raise the guess limit by `count`
    ///
    /// An OUT_OF_GUESSES session resumes when the new limit leaves room for
    /// another guess. History and keyboard are untouched.
    pub fn add_bonus_guesses(&mut self, count: usize) {
        self.max_guesses = self.max_guesses.saturating_add(count);
        if self.status == SessionStatus::OutOfGuesses && self.completed.len() < self.max_guesses {
            self.status = SessionStatus::InProgress;
        }
    }

    /// Mark a letter known absent and block it from input
    ///
    /// The caller picks a letter that is not in the target. A letter already
    /// shown CORRECT or PRESENT keeps that keyboard state.
    pub fn remove_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        self.eliminated.insert(letter);
        let state = self.keyboard.entry(letter).or_insert(TileState::Absent);
        if state.rank() < TileState::Present.rank() {
            *state = TileState::Absent;
        }
    }

    /// Reveal `letter` at `position` ahead of time
    ///
    /// Returns false if the position is outside the word or the key is not a
    /// letter. Prefills only affect display, never scoring.
    pub fn prefill_position(&mut self, position: usize, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        if position >= self.target.len() || !letter.is_ascii_uppercase() {
            return false;
        }
        self.prefilled.insert(position, letter);
        true
    }

    /// Rows to draw: completed rows, the open row, then blanks
    ///
    /// In the open row a prefilled empty position shows a HINT tile until a
    /// completed guess has scored CORRECT there.
    #[must_use]
    pub fn board(&self) -> Vec<Vec<Tile>> {
        let length = self.target.len();
        let mut rows: Vec<Vec<Tile>> = self
            .completed
            .iter()
            .map(|row| row.tiles().to_vec())
            .collect();

        if self.status == SessionStatus::InProgress {
            let open_row = (0..length)
                .map(|position| {
                    if let Some(&letter) = self.input.get(position) {
                        Tile::new(letter, TileState::Filled)
                    } else if let Some(&letter) = self.prefilled.get(&position)
                        && !self.solved_at(position)
                    {
                        Tile::new(letter, TileState::Hint)
                    } else {
                        Tile::empty()
                    }
                })
                .collect();
            rows.push(open_row);
        }

        while rows.len() < self.max_guesses {
            rows.push(vec![Tile::empty(); length]);
        }
        rows
    }

    /// Some completed row scored CORRECT at `position`
    #[must_use]
    pub fn solved_at(&self, position: usize) -> bool {
        self.completed
            .iter()
            .any(|row| row.state_at(position) == Some(TileState::Correct))
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn completed_guesses(&self) -> &[GuessRow] {
        &self.completed
    }

    #[must_use]
    pub fn current_input(&self) -> &[char] {
        &self.input
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.completed.len())
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Best known state of a key, if any
    #[must_use]
    pub fn keyboard_state(&self, letter: char) -> Option<TileState> {
        self.keyboard.get(&letter.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub const fn keyboard_states(&self) -> &FxHashMap<char, TileState> {
        &self.keyboard
    }

    #[must_use]
    pub fn is_eliminated(&self, letter: char) -> bool {
        self.eliminated.contains(&letter.to_ascii_uppercase())
    }

    /// Eliminated letters in alphabetical order
    #[must_use]
    pub fn eliminated_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.eliminated.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub const fn prefilled_positions(&self) -> &BTreeMap<usize, char> {
        &self.prefilled
    }

    fn merge_keyboard(&mut self, row: &GuessRow) {
        for tile in row.tiles() {
            let known = self.keyboard.entry(tile.letter).or_insert(tile.state);
            *known = known.merge(tile.state);
        }
    }

    fn derive_status(&self) -> SessionStatus {
        if self.completed.last().is_some_and(GuessRow::is_win) {
            SessionStatus::Won
        } else if self.completed.len() >= self.max_guesses {
            SessionStatus::OutOfGuesses
        } else {
            SessionStatus::InProgress
        }
    }
}

fn uppercase_row(row: &GuessRow) -> GuessRow {
    GuessRow::from_tiles(
        row.tiles()
            .iter()
            .map(|tile| Tile::new(tile.letter.to_ascii_uppercase(), tile.state))
            .collect(),
    )
}

fn check_letter(letter: char) -> Result<(), SessionError> {
    if letter.is_ascii_alphabetic() {
        Ok(())
    } else {
        Err(SessionError::InvalidLetter(letter))
    }
}
