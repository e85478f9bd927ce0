//! Command implementations

pub mod daily;
pub mod level;
pub mod play;
pub mod simple;
pub mod simulate;
pub mod verify;

pub use daily::{DailyEntry, DailyReport, daily_report};
pub use level::{LevelLookup, lookup_level};
pub use play::{Game, RoundChoice, TurnResult};
pub use simple::run_simple;
pub use simulate::{SimulationResult, Turn, simulate, simulate_from_record};
pub use verify::{Check, VerifyFailure, VerifyReport, run_verify};
