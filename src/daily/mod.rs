//! Daily challenge word selection
//!
//! Everyone gets the same word on the same calendar day. The seed mixes the
//! date with the word length so the 4, 5 and 6 letter challenges diverge.

use crate::core::Word;
use crate::pool::canonical_order;
use crate::wordlists::WordSource;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Word lengths offered as daily challenges
pub const DAILY_LENGTHS: [usize; 3] = [4, 5, 6];

/// Date format used for seeds and saved records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date string that does not parse as `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{input}': expected YYYY-MM-DD")]
pub struct DateSeedError {
    pub input: String,
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
/// Returns `DateSeedError` if the string is not a valid calendar date or
/// falls before year 0.
pub fn parse_date(date: &str) -> Result<NaiveDate, DateSeedError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .ok()
        .filter(|parsed| parsed.year() >= 0)
        .ok_or_else(|| DateSeedError {
            input: date.to_string(),
        })
}

/// Seed for a date and word length
///
/// `day * 1_000_000 + month * 10_000 + year + word_length * 31`. Negative
/// years are rejected by [`parse_date`] and count as 0 here.
#[must_use]
pub fn date_seed(date: NaiveDate, word_length: usize) -> u64 {
    let day = u64::from(date.day());
    let month = u64::from(date.month());
    let year = u64::try_from(date.year()).unwrap_or(0);
    day * 1_000_000 + month * 10_000 + year + word_length as u64 * 31
}

/// Seed for a `YYYY-MM-DD` date string and word length
///
/// # Errors
/// Returns `DateSeedError` if the date does not parse.
///
/// # Examples
/// ```
/// use wordle_quest::daily::compute_date_seed;
///
/// assert_eq!(compute_date_seed("2026-02-23", 5).unwrap(), 23_022_181);
/// ```
pub fn compute_date_seed(date: &str, word_length: usize) -> Result<u64, DateSeedError> {
    Ok(date_seed(parse_date(date)?, word_length))
}

/// Pick `pool[seed mod len]`
///
/// Returns `None` only for an empty pool.
#[must_use]
pub fn pick_word_by_date_seed<T>(pool: &[T], seed: u64) -> Option<&T> {
    if pool.is_empty() {
        return None;
    }
    let index = (seed % pool.len() as u64) as usize;
    pool.get(index)
}

/// Whether a saved daily session belongs to an earlier day
///
/// An empty saved date predates the field and counts as fresh.
#[must_use]
pub fn is_stale(saved_date: &str, today: &str) -> bool {
    !saved_date.is_empty() && saved_date != today
}

/// Candidate daily words of one length
///
/// Accepted guesses minus level words, canonically ordered, so daily words
/// never repeat a level. Falls back to all accepted guesses when the
/// difference is empty.
#[must_use]
pub fn daily_pool<S: WordSource + ?Sized>(source: &S, length: usize) -> Vec<Word> {
    let level_words = source.level_words(length);
    let valid = source.valid_words(length);

    let pool = canonical_order(
        valid
            .iter()
            .filter(|word| !level_words.contains(word))
            .cloned(),
    );
    if pool.is_empty() {
        canonical_order(valid)
    } else {
        pool
    }
}

/// Today's word for each daily length
pub struct DailySelector<'a, S: WordSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: WordSource + ?Sized> DailySelector<'a, S> {
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// The word for `date` at `length`, or `None` if there are no candidates
    pub fn word_for(&self, date: NaiveDate, length: usize) -> Option<Word> {
        let pool = daily_pool(self.source, length);
        pick_word_by_date_seed(&pool, date_seed(date, length)).cloned()
    }

    /// `(length, seed, word)` for every daily length
    pub fn words_for(&self, date: NaiveDate) -> Vec<(usize, u64, Option<Word>)> {
        DAILY_LENGTHS
            .iter()
            .map(|&length| (length, date_seed(date, length), self.word_for(date, length)))
            .collect()
    }
}
