//! Level word lookup over seeded pools
//!
//! One [`WordPool`] per `(length, seed)` is built lazily from the word
//! source and cached. Changing the seed drops every cached pool.

use super::shuffle::{canonical_order, partition, shuffle};
use crate::core::Word;
use crate::wordlists::WordSource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Which window of a pool a level draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Standard,
    Premium,
}

impl Tier {
    /// Parse a tier name ("standard" / "premium", case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" | "std" => Some(Self::Standard),
            "premium" | "vip" => Some(Self::Premium),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Premium => f.write_str("premium"),
        }
    }
}

/// Split index per word length; lengths without an entry are unpartitioned
pub type SplitTable = BTreeMap<usize, usize>;

/// A seeded permutation of every word of one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    length: usize,
    seed: u64,
    order: Vec<Word>,
    split: Option<usize>,
}

impl WordPool {
    /// Canonicalise, shuffle and (optionally) split `words`
    #[must_use]
    pub fn build(length: usize, seed: u64, words: Vec<Word>, split: Option<usize>) -> Self {
        let order = shuffle(&canonical_order(words), seed);
        let split = split.map(|s| s.min(order.len()));
        Self {
            length,
            seed,
            order,
            split,
        }
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The full permutation
    #[must_use]
    pub fn order(&self) -> &[Word] {
        &self.order
    }

    /// Whether standard and premium windows are disjoint
    #[must_use]
    pub const fn is_partitioned(&self) -> bool {
        self.split.is_some()
    }

    /// Words a tier draws from
    ///
    /// Without a split both tiers see the full permutation.
    #[must_use]
    pub fn window(&self, tier: Tier) -> &[Word] {
        match self.split {
            None => &self.order,
            Some(split) => {
                let (standard, premium) = partition(&self.order, split);
                match tier {
                    Tier::Standard => standard,
                    Tier::Premium => premium,
                }
            }
        }
    }

    /// Word for a 1-based level, cycling once the window is used up
    ///
    /// Returns `None` for level 0 or an empty window.
    #[must_use]
    pub fn word_for_level(&self, tier: Tier, level: u32) -> Option<&Word> {
        let window = self.window(tier);
        if level == 0 || window.is_empty() {
            return None;
        }
        let index = (level as usize - 1) % window.len();
        window.get(index)
    }
}

/// Seeded level-word selection with a per-`(length, seed)` cache
pub struct WordPoolManager<S: WordSource> {
    source: S,
    seed: u64,
    splits: SplitTable,
    cache: FxHashMap<(usize, u64), WordPool>,
}

impl<S: WordSource> WordPoolManager<S> {
    /// Create a manager over `source`
    ///
    /// # Parameters
    /// - `source`: where level words come from
    /// - `seed`: shuffle seed shared by every player
    /// - `splits`: standard/premium split index per word length
    pub fn new(source: S, seed: u64, splits: SplitTable) -> Self {
        Self {
            source,
            seed,
            splits,
            cache: FxHashMap::default(),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn splits(&self) -> &SplitTable {
        &self.splits
    }

    /// Switch to a new seed, discarding every cached pool
    ///
    /// Setting the current seed again keeps the cache.
    pub fn set_seed(&mut self, seed: u64) {
        if seed == self.seed {
            return;
        }
        debug!(
            old_seed = self.seed,
            new_seed = seed,
            dropped = self.cache.len(),
            "seed changed, clearing word pools"
        );
        self.seed = seed;
        self.cache.clear();
    }

    /// Number of pools built so far under the current seed
    #[must_use]
    pub fn cached_pools(&self) -> usize {
        self.cache.len()
    }

    /// The pool for a length, building it on first use
    ///
    /// Returns `None` when the source has no words of that length.
    pub fn pool(&mut self, length: usize) -> Option<&WordPool> {
        let key = (length, self.seed);

        if !self.cache.contains_key(&key) {
            let words = self.source.level_words(length);
            if words.is_empty() {
                debug!(length, "no level words for length");
                return None;
            }
            let pool = WordPool::build(length, self.seed, words, self.splits.get(&length).copied());
            debug!(
                length,
                seed = self.seed,
                words = pool.order().len(),
                partitioned = pool.is_partitioned(),
                "built word pool"
            );
            self.cache.insert(key, pool);
        }

        self.cache.get(&key)
    }

    /// Word for a 1-based level in a tier
    ///
    /// `None` means no word is available: unknown length, empty window, or
    /// level 0.
    pub fn word_for_level(&mut self, tier: Tier, level: u32, length: usize) -> Option<Word> {
        self.pool(length)?.word_for_level(tier, level).cloned()
    }
}
