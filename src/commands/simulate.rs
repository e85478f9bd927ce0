//! Replay a list of guesses through a session

use crate::core::Word;
use crate::session::{GameSession, SessionRecord, SubmitOutcome};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::path::Path;

/// One submitted guess and what the session made of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    pub outcome: SubmitOutcome,
}

pub struct SimulationResult {
    pub session: GameSession,
    pub turns: Vec<Turn>,
}

/// Start a session for `target` and submit each guess in order
///
/// Without a dictionary every complete guess is accepted.
///
/// # Errors
///
/// Returns an error if `target` is not a valid word.
pub fn simulate(
    target: &str,
    guesses: &[String],
    max_guesses: usize,
    dictionary: Option<&Dictionary>,
) -> Result<SimulationResult> {
    let target = Word::new(target).with_context(|| format!("invalid target word '{target}'"))?;
    let session = GameSession::new(target, max_guesses);
    Ok(continue_session(session, guesses, dictionary))
}

/// Load a saved session and keep playing it
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid
/// session record.
pub fn simulate_from_record<P: AsRef<Path>>(
    path: P,
    guesses: &[String],
    dictionary: Option<&Dictionary>,
) -> Result<SimulationResult> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let record = SessionRecord::from_json(&json)
        .with_context(|| format!("{} is not a session record", path.display()))?;
    let session = GameSession::from_record(&record)
        .with_context(|| format!("saved session in {} is corrupt", path.display()))?;
    Ok(continue_session(session, guesses, dictionary))
}

fn continue_session(
    mut session: GameSession,
    guesses: &[String],
    dictionary: Option<&Dictionary>,
) -> SimulationResult {
    let mut turns = Vec::with_capacity(guesses.len());

    for guess in guesses {
        while session.on_delete() {}
        for letter in guess.trim().chars() {
            session.on_key_pressed(letter);
        }
        let outcome = session.on_submit(|candidate, length| {
            dictionary.is_none_or(|d| d.is_valid_word(candidate, length))
        });
        turns.push(Turn {
            guess: guess.trim().to_ascii_uppercase(),
            outcome,
        });
    }

    SimulationResult { session, turns }
}
