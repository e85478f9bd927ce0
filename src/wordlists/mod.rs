//! Word sources
//!
//! The engine never owns a word store. It reads per-length lists through
//! the [`WordSource`] trait: level words with definitions, plus extra
//! accepted guesses for the daily challenge lengths.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{LEVEL_WORDS, VALID_WORDS};

use crate::core::{Word, WordError};
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// A word with its definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: Word,
    pub definition: String,
}

impl Entry {
    /// # Errors
    /// Returns `WordError` if `word` is not a valid game word.
    pub fn new(word: &str, definition: &str) -> Result<Self, WordError> {
        Ok(Self {
            word: Word::new(word)?,
            definition: definition.trim().to_string(),
        })
    }
}

/// Supplier of unordered word lists, one per length
///
/// Order is not significant; the pool manager canonicalises what it gets.
pub trait WordSource {
    /// Level words (with definitions) of the given length
    fn level_entries(&self, length: usize) -> Vec<Entry>;

    /// Extra accepted guesses of the given length
    fn valid_words(&self, length: usize) -> Vec<Word>;

    /// Every length this source has any words for, ascending
    fn lengths(&self) -> Vec<usize>;

    /// Level words without definitions
    fn level_words(&self, length: usize) -> Vec<Word> {
        self.level_entries(length)
            .into_iter()
            .map(|entry| entry.word)
            .collect()
    }
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn level_entries(&self, length: usize) -> Vec<Entry> {
        (**self).level_entries(length)
    }

    fn valid_words(&self, length: usize) -> Vec<Word> {
        (**self).valid_words(length)
    }

    fn lengths(&self) -> Vec<usize> {
        (**self).lengths()
    }
}

/// Word lists compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn level_entries(&self, length: usize) -> Vec<Entry> {
        loader::entries_from_slice(embedded::table_for(LEVEL_WORDS, length))
    }

    fn valid_words(&self, length: usize) -> Vec<Word> {
        embedded::table_for(VALID_WORDS, length)
            .iter()
            .filter_map(|&(word, _)| Word::new(word).ok())
            .collect()
    }

    fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = LEVEL_WORDS
            .iter()
            .chain(VALID_WORDS)
            .map(|(n, _)| *n)
            .collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }
}

/// Word lists held in memory, loaded from files or built in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryWords {
    levels: FxHashMap<usize, Vec<Entry>>,
    valid: FxHashMap<usize, Vec<Word>>,
}

impl MemoryWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the level words for one length
    #[must_use]
    pub fn with_level_words(mut self, length: usize, entries: Vec<Entry>) -> Self {
        self.levels.insert(length, entries);
        self
    }

    /// Replace the accepted guesses for one length
    #[must_use]
    pub fn with_valid_words(mut self, length: usize, words: Vec<Word>) -> Self {
        self.valid.insert(length, words);
        self
    }

    /// Load `levels/words_<n>.txt` and `valid/words_<n>.txt` from a directory
    ///
    /// Missing files are skipped; words whose length does not match the file
    /// name are dropped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `dir` cannot be listed or a file cannot be read.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref();
        let mut words = Self::new();

        for (subdir, is_level) in [("levels", true), ("valid", false)] {
            let path = dir.join(subdir);
            if !path.is_dir() {
                continue;
            }
            for file in std::fs::read_dir(&path)? {
                let file = file?.path();
                let Some(length) = length_from_file_name(&file) else {
                    continue;
                };
                let entries: Vec<Entry> = loader::load_entries_from_file(&file)?
                    .into_iter()
                    .filter(|entry| entry.word.len() == length)
                    .collect();
                if is_level {
                    words.levels.insert(length, entries);
                } else {
                    words
                        .valid
                        .insert(length, entries.into_iter().map(|e| e.word).collect());
                }
            }
        }

        Ok(words)
    }
}

impl WordSource for MemoryWords {
    fn level_entries(&self, length: usize) -> Vec<Entry> {
        self.levels.get(&length).cloned().unwrap_or_default()
    }

    fn valid_words(&self, length: usize) -> Vec<Word> {
        self.valid.get(&length).cloned().unwrap_or_default()
    }

    fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.levels.keys().chain(self.valid.keys()).copied().collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }
}

/// `words_5.txt` -> 5
fn length_from_file_name(path: &Path) -> Option<usize> {
    path.file_stem()?
        .to_str()?
        .strip_prefix("words_")?
        .parse()
        .ok()
}
