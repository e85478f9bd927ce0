//! Player state
//!
//! One aggregate made of small cohesive parts. Sessions never see it; items
//! and round settlement are the only bridges.

mod items;
mod settlement;

pub use items::{Item, ItemEffect, ItemError, absent_letter, spend_life, unrevealed_position, use_item};
pub use settlement::{Settlement, settle};

use crate::config::{Difficulty, GameConfig};
use crate::pool::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerState {
    pub currency: Currency,
    pub streaks: Streaks,
    pub inventory: Inventory,
    pub settings: Settings,
    pub cosmetics: Cosmetics,
    pub stats: Statistics,
    pub progress: Progress,
}

impl PlayerState {
    /// New player with full lives
    #[must_use]
    pub fn new(lives: u32) -> Self {
        Self {
            currency: Currency {
                lives,
                ..Currency::default()
            },
            ..Self::default()
        }
    }

    /// New player with the configured lives and starting items
    #[must_use]
    pub fn starting(config: &GameConfig) -> Self {
        let mut player = Self::new(config.max_lives);
        for item in Item::ALL {
            player.inventory.add(item, config.starting_items);
        }
        player
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub coins: u64,
    pub diamonds: u64,
    pub lives: u32,
}

/// What a streak counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakCategory {
    Level,
    Daily,
    Timed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakCounter {
    pub current: u32,
    pub best: u32,
}

impl StreakCounter {
    pub fn record(&mut self, won: bool) {
        if won {
            self.current += 1;
            self.best = self.best.max(self.current);
        } else {
            self.current = 0;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Streaks(BTreeMap<StreakCategory, StreakCounter>);

impl Streaks {
    #[must_use]
    pub fn get(&self, category: StreakCategory) -> StreakCounter {
        self.0.get(&category).copied().unwrap_or_default()
    }

    pub fn record(&mut self, category: StreakCategory, won: bool) {
        self.0.entry(category).or_default().record(won);
    }
}

/// Consumable items held by the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub add_guess: u32,
    pub remove_letter: u32,
    pub reveal_letter: u32,
}

impl Inventory {
    #[must_use]
    pub const fn count(&self, item: Item) -> u32 {
        match item {
            Item::AddGuess => self.add_guess,
            Item::RemoveLetter => self.remove_letter,
            Item::RevealLetter => self.reveal_letter,
        }
    }

    pub fn add(&mut self, item: Item, count: u32) {
        *self.slot(item) += count;
    }

    /// Take one item; false if none are left
    pub fn take(&mut self, item: Item) -> bool {
        let slot = self.slot(item);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    fn slot(&mut self, item: Item) -> &mut u32 {
        match item {
            Item::AddGuess => &mut self.add_guess,
            Item::RemoveLetter => &mut self.remove_letter,
            Item::RevealLetter => &mut self.reveal_letter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound: bool,
    pub music: bool,
    pub haptics: bool,
    pub show_definitions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            music: true,
            haptics: true,
            show_definitions: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cosmetics {
    pub theme: String,
    pub owned_themes: Vec<String>,
}

impl Default for Cosmetics {
    fn default() -> Self {
        Self {
            theme: "classic".to_string(),
            owned_themes: vec!["classic".to_string()],
        }
    }
}

/// Results across every finished round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    /// Wins keyed by guesses used
    pub guess_distribution: BTreeMap<usize, u32>,
}

impl Statistics {
    pub fn record(&mut self, won: bool, guesses_used: usize) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
            *self.guess_distribution.entry(guesses_used).or_insert(0) += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}

/// Highest completed level per tier and difficulty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(BTreeMap<Tier, BTreeMap<Difficulty, u32>>);

impl Progress {
    #[must_use]
    pub fn completed(&self, tier: Tier, difficulty: Difficulty) -> u32 {
        self.0
            .get(&tier)
            .and_then(|levels| levels.get(&difficulty))
            .copied()
            .unwrap_or(0)
    }

    /// The level a player plays next
    #[must_use]
    pub fn next_level(&self, tier: Tier, difficulty: Difficulty) -> u32 {
        self.completed(tier, difficulty) + 1
    }

    /// Level already beaten
    #[must_use]
    pub fn is_replay(&self, tier: Tier, difficulty: Difficulty, level: u32) -> bool {
        level <= self.completed(tier, difficulty)
    }

    pub fn complete(&mut self, tier: Tier, difficulty: Difficulty, level: u32) {
        let completed = self.0.entry(tier).or_default().entry(difficulty).or_insert(0);
        *completed = (*completed).max(level);
    }
}
