//! Word validity predicate and definitions
//!
//! Built once from a [`WordSource`]; answers "is this an accepted guess of
//! this length" for the session engine.

use super::WordSource;
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Accepted guesses and definitions for every length a source provides
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
    definitions: FxHashMap<String, String>,
}

impl Dictionary {
    /// Collect level words and valid guesses from a source
    #[must_use]
    pub fn from_source<S: WordSource + ?Sized>(source: &S) -> Self {
        let mut dictionary = Self::default();

        for length in source.lengths() {
            for entry in source.level_entries(length) {
                if !entry.definition.is_empty() {
                    dictionary
                        .definitions
                        .insert(entry.word.text().to_string(), entry.definition);
                }
                dictionary.words.insert(entry.word.text().to_string());
            }
            for word in source.valid_words(length) {
                dictionary.words.insert(word.text().to_string());
            }
        }

        dictionary
    }

    /// True iff `candidate` has `required_length` letters and is a known word
    ///
    /// Matching is case-insensitive.
    #[must_use]
    pub fn is_valid_word(&self, candidate: &str, required_length: usize) -> bool {
        candidate.len() == required_length
            && self.words.contains(&candidate.to_ascii_uppercase())
    }

    /// Definition shown after a round, if the word has one
    #[must_use]
    pub fn definition_of(&self, word: &Word) -> Option<&str> {
        self.definitions.get(word.text()).map(String::as_str)
    }

    /// Number of distinct accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
