//! Level word lookup

use crate::config::{Difficulty, GameConfig};
use crate::core::Word;
use crate::pool::{Tier, WordPoolManager};
use crate::wordlists::WordSource;

/// Result of looking up one level
#[derive(Debug, Clone)]
pub struct LevelLookup {
    pub tier: Tier,
    pub difficulty: Difficulty,
    pub level: u32,
    pub word_length: usize,
    pub max_guesses: usize,
    /// Words in the tier's window; levels cycle through this many
    pub window_size: usize,
    pub word: Option<Word>,
    pub definition: Option<String>,
}

/// Find the word for a level of a tier and difficulty
pub fn lookup_level<S: WordSource>(
    manager: &mut WordPoolManager<S>,
    config: &GameConfig,
    tier: Tier,
    difficulty: Difficulty,
    level: u32,
) -> LevelLookup {
    let rule = config.rule(difficulty);
    let window_size = manager
        .pool(rule.word_length)
        .map_or(0, |pool| pool.window(tier).len());
    let word = manager.word_for_level(tier, level, rule.word_length);
    let definition = word.as_ref().and_then(|word| {
        manager
            .source()
            .level_entries(rule.word_length)
            .into_iter()
            .find(|entry| &entry.word == word && !entry.definition.is_empty())
            .map(|entry| entry.definition)
    });

    LevelLookup {
        tier,
        difficulty,
        level,
        word_length: rule.word_length,
        max_guesses: rule.max_guesses,
        window_size,
        word,
        definition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EmbeddedWords;

    fn manager(config: &GameConfig) -> WordPoolManager<EmbeddedWords> {
        WordPoolManager::new(EmbeddedWords, config.seed, config.splits.clone())
    }

    #[test]
    fn regular_levels_use_five_letter_words() {
        let config = GameConfig::default();
        let mut manager = manager(&config);
        let lookup = lookup_level(&mut manager, &config, Tier::Standard, Difficulty::Regular, 1);

        assert_eq!(lookup.word_length, 5);
        assert_eq!(lookup.window_size, 55);
        let word = lookup.word.unwrap();
        assert_eq!(word.len(), 5);
        assert!(lookup.definition.is_some());
    }

    #[test]
    fn level_zero_has_no_word() {
        let config = GameConfig::default();
        let mut manager = manager(&config);
        let lookup = lookup_level(&mut manager, &config, Tier::Premium, Difficulty::Easy, 0);
        assert!(lookup.word.is_none());
        assert!(lookup.definition.is_none());
    }

    #[test]
    fn premium_window_is_the_remainder() {
        let config = GameConfig::default();
        let mut manager = manager(&config);
        let lookup = lookup_level(&mut manager, &config, Tier::Premium, Difficulty::Easy, 1);
        // 74 four-letter level words, 50 of them standard
        assert_eq!(lookup.window_size, 24);
        assert!(lookup.word.is_some());
    }
}
