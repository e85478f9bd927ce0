//! Deterministic word pools
//!
//! Every player gets the same level words for the same seed, no word repeats
//! before its window is exhausted, and premium words never appear in the
//! standard window of a partitioned length.

mod manager;
mod shuffle;

pub use manager::{SplitTable, Tier, WordPool, WordPoolManager};
pub use shuffle::{canonical_order, partition, shuffle};
