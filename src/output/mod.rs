//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_daily_report, print_item_effect, print_level_lookup, print_player_summary,
    print_settlement, print_simulation, print_verify_report,
};
