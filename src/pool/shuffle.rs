//! Seeded permutation
//!
//! The same seed and the same set of words give a bit-identical order on
//! every run and platform. The generator is ChaCha8, whose output stream is
//! fixed by its algorithm rather than by the `rand` version or the target.

use crate::core::Word;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sort and deduplicate a word list
///
/// Sources hand over words in no particular order; shuffling the canonical
/// order makes the result depend only on the set of words and the seed.
#[must_use]
pub fn canonical_order(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut words: Vec<Word> = words.into_iter().collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Deterministic Fisher–Yates shuffle
///
/// # Examples
/// ```
/// use wordle_quest::pool::shuffle;
///
/// let items = [1, 2, 3, 4, 5, 6, 7, 8];
/// assert_eq!(shuffle(&items, 42), shuffle(&items, 42));
/// ```
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        // u64 bounds keep the draw identical on 32- and 64-bit targets
        let j = rng.random_range(0..=i as u64) as usize;
        shuffled.swap(i, j);
    }

    shuffled
}

/// Split a permutation into `[0, split)` and `[split, len)`
///
/// A split past the end is clamped, leaving the second window empty.
#[must_use]
pub fn partition<T>(permutation: &[T], split: usize) -> (&[T], &[T]) {
    permutation.split_at(split.min(permutation.len()))
}
