//! Game configuration
//!
//! Everything tunable lives here: the shuffle seed, premium splits, the
//! difficulty table and economy constants. Defaults match the shipped word
//! lists; a JSON file may override any subset of fields.

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::pool::SplitTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Difficulty tier; each maps to a word length and a starting guess limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Easy,
    Regular,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Easy,
        Self::Regular,
        Self::Hard,
        Self::Expert,
    ];

    /// Parse a difficulty name (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "easy" => Some(Self::Easy),
            "regular" | "normal" => Some(Self::Regular),
            "hard" => Some(Self::Hard),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Easy => "easy",
            Self::Regular => "regular",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        f.write_str(name)
    }
}

/// Word length and starting guess limit for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRule {
    pub word_length: usize,
    pub max_guesses: usize,
}

/// Errors loading or validating a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shuffle seed for level pools
    pub seed: u64,
    /// Standard/premium split per word length
    pub splits: SplitTable,
    pub difficulties: BTreeMap<Difficulty, DifficultyRule>,
    /// Guesses granted by one "add guess" item
    pub bonus_guesses_per_item: usize,
    /// Guesses granted by spending a life after running out
    pub bonus_guesses_per_life: usize,
    /// Coins for a win, indexed by guesses used minus one; the last entry
    /// covers anything longer
    pub coin_rewards: Vec<u64>,
    pub max_lives: u32,
    /// Items of each kind a new player starts with
    pub starting_items: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let rule = |word_length, max_guesses| DifficultyRule {
            word_length,
            max_guesses,
        };

        Self {
            seed: 1844,
            splits: SplitTable::from([(4, 50), (5, 55), (6, 30)]),
            difficulties: BTreeMap::from([
                (Difficulty::Beginner, rule(3, 6)),
                (Difficulty::Easy, rule(4, 6)),
                (Difficulty::Regular, rule(5, 6)),
                (Difficulty::Hard, rule(6, 7)),
                (Difficulty::Expert, rule(7, 8)),
            ]),
            bonus_guesses_per_item: 1,
            bonus_guesses_per_life: 1,
            coin_rewards: vec![100, 80, 60, 40, 30, 20],
            max_lives: 5,
            starting_items: 2,
        }
    }
}

impl GameConfig {
    /// Read a JSON config; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, is not valid JSON,
    /// or fails [`GameConfig::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every difficulty can actually be played
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in Difficulty::ALL {
            let Some(rule) = self.difficulties.get(&difficulty) else {
                return Err(ConfigError::Invalid(format!(
                    "no rule for difficulty {difficulty}"
                )));
            };
            if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&rule.word_length) {
                return Err(ConfigError::Invalid(format!(
                    "{difficulty}: word length {} out of range",
                    rule.word_length
                )));
            }
            if rule.max_guesses == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{difficulty}: max_guesses must be positive"
                )));
            }
        }
        if self.bonus_guesses_per_item == 0 {
            return Err(ConfigError::Invalid(
                "bonus_guesses_per_item must be positive".to_string(),
            ));
        }
        if self.bonus_guesses_per_life == 0 {
            return Err(ConfigError::Invalid(
                "bonus_guesses_per_life must be positive".to_string(),
            ));
        }
        if self.coin_rewards.is_empty() {
            return Err(ConfigError::Invalid("coin_rewards is empty".to_string()));
        }
        Ok(())
    }

    /// Rule for a difficulty, falling back to the default table
    #[must_use]
    pub fn rule(&self, difficulty: Difficulty) -> DifficultyRule {
        self.difficulties
            .get(&difficulty)
            .copied()
            .unwrap_or_else(|| Self::default().difficulties[&difficulty])
    }

    /// Coins for winning in `guesses_used` guesses
    #[must_use]
    pub fn coins_for(&self, guesses_used: usize) -> u64 {
        let index = guesses_used.saturating_sub(1);
        self.coin_rewards
            .get(index)
            .or_else(|| self.coin_rewards.last())
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rule(Difficulty::Regular).word_length, 5);
        assert_eq!(config.rule(Difficulty::Regular).max_guesses, 6);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.splits, GameConfig::default().splits);
    }

    #[test]
    fn difficulty_table_round_trips_through_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"regular\""));
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }

    #[test]
    fn zero_guesses_is_invalid() {
        let mut config = GameConfig::default();
        config.difficulties.insert(
            Difficulty::Easy,
            DifficultyRule {
                word_length: 4,
                max_guesses: 0,
            },
        );
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_bonus_grants_are_invalid() {
        let config: GameConfig =
            serde_json::from_str(r#"{"bonus_guesses_per_item": 0}"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config: GameConfig =
            serde_json::from_str(r#"{"bonus_guesses_per_life": 0}"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_difficulty_is_invalid() {
        let mut config = GameConfig::default();
        config.difficulties.remove(&Difficulty::Expert);
        assert!(config.validate().is_err());
        // lookups still fall back to the default rule
        assert_eq!(config.rule(Difficulty::Expert).word_length, 7);
    }

    #[test]
    fn coin_rewards_clamp_to_last() {
        let config = GameConfig::default();
        assert_eq!(config.coins_for(1), 100);
        assert_eq!(config.coins_for(3), 60);
        assert_eq!(config.coins_for(12), 20);
    }

    #[test]
    fn load_reports_missing_file_and_bad_json() {
        assert!(matches!(
            GameConfig::load("/no/such/config.json"),
            Err(ConfigError::Io { .. })
        ));

        let path = std::env::temp_dir().join(format!("wordle_quest_cfg_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let result = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn difficulty_names() {
        assert_eq!(Difficulty::from_name("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("normal"), Some(Difficulty::Regular));
        assert_eq!(Difficulty::from_name("nightmare"), None);
        assert_eq!(Difficulty::Expert.to_string(), "expert");
    }
}
