//! Daily challenge report

use crate::core::Word;
use crate::daily::{DATE_FORMAT, DailySelector, daily_pool};
use crate::wordlists::WordSource;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct DailyEntry {
    pub length: usize,
    pub seed: u64,
    pub pool_size: usize,
    pub word: Option<Word>,
}

/// Daily words for every length on one date
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: String,
    pub entries: Vec<DailyEntry>,
}

pub fn daily_report<S: WordSource + ?Sized>(source: &S, date: NaiveDate) -> DailyReport {
    let entries = DailySelector::new(source)
        .words_for(date)
        .into_iter()
        .map(|(length, seed, word)| DailyEntry {
            length,
            seed,
            pool_size: daily_pool(source, length).len(),
            word,
        })
        .collect();

    DailyReport {
        date: date.format(DATE_FORMAT).to_string(),
        entries,
    }
}
