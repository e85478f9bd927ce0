//! Saved session records
//!
//! The JSON shape written at session boundaries. Tile states are stored by
//! name (`"CORRECT"`, `"PRESENT"`, ...), rows as `[letter, state]` pairs.

use super::{GameSession, SessionError};
use crate::config::Difficulty;
use crate::core::{GuessRow, Tile, TileState, Word};
use crate::daily;
use crate::pool::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// What started a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionKind {
    Level {
        tier: Tier,
        difficulty: Difficulty,
        level: u32,
    },
    Daily {
        date: String,
    },
    Timed,
}

/// A session as persisted between app runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub target_word: String,
    pub completed_guesses: Vec<Vec<(char, TileState)>>,
    pub current_input: Vec<char>,
    pub max_guesses: usize,
    pub prefilled_positions: BTreeMap<usize, char>,
    /// Only set for daily challenges
    #[serde(default)]
    pub saved_date: String,
    #[serde(default)]
    pub eliminated_letters: Vec<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SessionKind>,
}

impl SessionRecord {
    /// # Errors
    /// Returns `SessionError::Malformed` if `json` is not a session record.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns `SessionError::Malformed` if serialisation fails.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Daily record saved on a different day than `today`
    #[must_use]
    pub fn is_stale(&self, today: &str) -> bool {
        daily::is_stale(&self.saved_date, today)
    }
}

impl GameSession {
    /// Snapshot for persistence
    #[must_use]
    pub fn to_record(&self, saved_date: &str, kind: Option<SessionKind>) -> SessionRecord {
        SessionRecord {
            target_word: self.target().text().to_string(),
            completed_guesses: self
                .completed_guesses()
                .iter()
                .map(|row| row.tiles().iter().map(|t| (t.letter, t.state)).collect())
                .collect(),
            current_input: self.current_input().to_vec(),
            max_guesses: self.max_guesses(),
            prefilled_positions: self.prefilled_positions().clone(),
            saved_date: saved_date.to_string(),
            eliminated_letters: self.eliminated_letters(),
            kind,
        }
    }

    /// Rebuild a session from a record
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the record is inconsistent; the caller
    /// should drop the record and start fresh.
    pub fn from_record(record: &SessionRecord) -> Result<Self, SessionError> {
        let result = Self::rebuild(record);
        if let Err(err) = &result {
            warn!(target_word = %record.target_word, error = %err, "discarding saved session");
        }
        result
    }

    fn rebuild(record: &SessionRecord) -> Result<Self, SessionError> {
        let target = Word::new(&record.target_word)?;
        let completed = record
            .completed_guesses
            .iter()
            .map(|row| {
                GuessRow::from_tiles(
                    row.iter()
                        .map(|&(letter, state)| Tile::new(letter, state))
                        .collect(),
                )
            })
            .collect();

        let mut session = Self::restore(
            target,
            completed,
            record.current_input.clone(),
            record.max_guesses,
            record.prefilled_positions.clone(),
        )?;
        for &letter in &record.eliminated_letters {
            if !letter.is_ascii_alphabetic() {
                return Err(SessionError::InvalidLetter(letter));
            }
            session.remove_letter(letter);
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{DEFAULT_MAX_GUESSES, SessionStatus};

    fn played() -> GameSession {
        let mut session = GameSession::new(Word::new("able").unwrap(), DEFAULT_MAX_GUESSES);
        for letter in "dark".chars() {
            session.on_key_pressed(letter);
        }
        session.on_submit(|_, _| true);
        session.remove_letter('z');
        session.prefill_position(3, 'e');
        session.on_key_pressed('b');
        session
    }

    #[test]
    fn record_json_shape() {
        let record = played().to_record("2026-02-23", None);
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert_eq!(json["targetWord"], "ABLE");
        assert_eq!(json["completedGuesses"][0][1], serde_json::json!(["A", "PRESENT"]));
        assert_eq!(json["currentInput"], serde_json::json!(["B"]));
        assert_eq!(json["maxGuesses"], 6);
        assert_eq!(json["prefilledPositions"]["3"], "E");
        assert_eq!(json["savedDate"], "2026-02-23");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn record_restores_same_session() {
        let session = played();
        let json = session.to_record("", None).to_json().unwrap();
        let restored = GameSession::from_record(&SessionRecord::from_json(&json).unwrap()).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn legacy_record_without_optional_fields() {
        let json = r#"{
            "targetWord": "ABLE",
            "completedGuesses": [[["A","CORRECT"],["B","CORRECT"],["L","CORRECT"],["E","CORRECT"]]],
            "currentInput": [],
            "maxGuesses": 6,
            "prefilledPositions": {}
        }"#;
        let record = SessionRecord::from_json(json).unwrap();
        assert_eq!(record.saved_date, "");
        assert!(!record.is_stale("2026-02-23"));

        let session = GameSession::from_record(&record).unwrap();
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn stale_daily_record() {
        let record = played().to_record("2026-02-22", None);
        assert!(record.is_stale("2026-02-23"));
        assert!(!record.is_stale("2026-02-22"));
    }

    #[test]
    fn session_kind_round_trips() {
        let kind = SessionKind::Level {
            tier: Tier::Premium,
            difficulty: Difficulty::Hard,
            level: 12,
        };
        let record = played().to_record("", Some(kind.clone()));
        let json = record.to_json().unwrap();
        assert!(json.contains(r#""type":"level""#));
        assert_eq!(SessionRecord::from_json(&json).unwrap().kind, Some(kind));
    }

    #[test]
    fn corrupt_records_are_rejected() {
        let mut record = played().to_record("", None);
        record.target_word = "ABLES".to_string();
        assert!(matches!(
            GameSession::from_record(&record),
            Err(SessionError::RowLength { .. })
        ));

        let mut record = played().to_record("", None);
        record.target_word = "4BLE".to_string();
        assert!(matches!(
            GameSession::from_record(&record),
            Err(SessionError::Target(_))
        ));

        let mut record = played().to_record("", None);
        record.eliminated_letters.push('#');
        assert!(matches!(
            GameSession::from_record(&record),
            Err(SessionError::InvalidLetter('#'))
        ));

        assert!(matches!(
            SessionRecord::from_json("{\"targetWord\": 3}"),
            Err(SessionError::Malformed(_))
        ));
    }
}
