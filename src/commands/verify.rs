//! Pool verification across many seeds
//!
//! Rebuilds every level pool for a range of seeds in parallel and checks the
//! properties players rely on: same seed gives the same order, every word
//! appears exactly once, premium never overlaps standard, and levels cycle
//! through a whole window before repeating.

use crate::core::Word;
use crate::pool::{SplitTable, Tier, WordPool, WordPoolManager, canonical_order};
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::warn;

/// Property that failed for a seed and length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    Determinism,
    Permutation,
    Disjoint,
    Cycling,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Determinism => "determinism",
            Self::Permutation => "permutation",
            Self::Disjoint => "disjoint tiers",
            Self::Cycling => "level cycling",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyFailure {
    pub seed: u64,
    pub length: usize,
    pub check: Check,
}

#[derive(Debug)]
pub struct VerifyReport {
    pub seeds: u64,
    pub lengths: Vec<usize>,
    pub pools_checked: usize,
    pub failures: Vec<VerifyFailure>,
    pub duration: Duration,
}

impl VerifyReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check seeds `first_seed..first_seed + seeds` for every length in `source`
pub fn run_verify<S: WordSource + Sync>(
    source: &S,
    splits: &SplitTable,
    first_seed: u64,
    seeds: u64,
    show_progress: bool,
) -> VerifyReport {
    let lengths = source.lengths();
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(seeds)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} seeds ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let results: Vec<(usize, Vec<VerifyFailure>)> = (first_seed..first_seed.saturating_add(seeds))
        .into_par_iter()
        .map(|seed| {
            let mut manager = WordPoolManager::new(source, seed, splits.clone());
            let mut failures = Vec::new();
            let mut checked = 0;

            for &length in &lengths {
                let Some(pool) = manager.pool(length) else {
                    continue;
                };
                checked += 1;
                let words = source.level_words(length);
                for check in check_pool(pool, words, splits.get(&length).copied()) {
                    warn!(seed, length, %check, "pool check failed");
                    failures.push(VerifyFailure {
                        seed,
                        length,
                        check,
                    });
                }
            }

            pb.inc(1);
            (checked, failures)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let pools_checked: usize = results.iter().map(|(checked, _)| checked).sum();
    let mut failures: Vec<VerifyFailure> = results.into_iter().flat_map(|(_, f)| f).collect();
    failures.sort_by_key(|f| (f.seed, f.length));

    VerifyReport {
        seeds,
        lengths,
        pools_checked,
        failures,
        duration: start.elapsed(),
    }
}

/// Every property a single pool must hold
fn check_pool(pool: &WordPool, words: Vec<Word>, split: Option<usize>) -> Vec<Check> {
    let mut failed = Vec::new();
    let canonical = canonical_order(words);

    let rebuilt = WordPool::build(pool.length(), pool.seed(), canonical.clone(), split);
    if rebuilt.order() != pool.order() {
        failed.push(Check::Determinism);
    }

    if canonical_order(pool.order().to_vec()) != canonical || pool.order().len() != canonical.len() {
        failed.push(Check::Permutation);
    }

    if pool.is_partitioned() {
        let standard: FxHashSet<&Word> = pool.window(Tier::Standard).iter().collect();
        let premium = pool.window(Tier::Premium);
        let overlaps = premium.iter().any(|word| standard.contains(word));
        let covers = standard.len() + premium.len() == pool.order().len();
        if overlaps || !covers {
            failed.push(Check::Disjoint);
        }
    }

    for tier in [Tier::Standard, Tier::Premium] {
        if !cycles(pool, tier) {
            failed.push(Check::Cycling);
            break;
        }
    }

    failed
}

/// Levels `1..=n` visit the whole window once, then level `n + k` repeats `k`
fn cycles(pool: &WordPool, tier: Tier) -> bool {
    let window = pool.window(tier);
    let Ok(size) = u32::try_from(window.len()) else {
        return false;
    };
    if size == 0 {
        return pool.word_for_level(tier, 1).is_none();
    }

    let first_pass: FxHashSet<&Word> = (1..=size)
        .filter_map(|level| pool.word_for_level(tier, level))
        .collect();
    first_pass.len() == window.len()
        && (1..=size).all(|level| {
            pool.word_for_level(tier, level) == pool.word_for_level(tier, level + size)
        })
}
