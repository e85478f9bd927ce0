//! Embedded word lists
//!
//! Word tables compiled into the binary at build time.

// Include generated word tables from build script
include!(concat!(env!("OUT_DIR"), "/levels.rs"));
include!(concat!(env!("OUT_DIR"), "/valid.rs"));

/// Look up one length in a generated table
pub(crate) fn table_for(
    table: &'static [(usize, &'static [(&'static str, &'static str)])],
    length: usize,
) -> &'static [(&'static str, &'static str)] {
    table
        .iter()
        .find(|(n, _)| *n == length)
        .map_or(&[], |(_, words)| words)
}
