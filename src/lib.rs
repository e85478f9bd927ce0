//! Wordle Quest
//!
//! Deterministic rules engine for a level-based Wordle game: guess scoring,
//! seeded word pools split into standard and premium tiers, a date-seeded
//! daily challenge, and resumable game sessions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_quest::core::{Word, evaluate};
//! use wordle_quest::session::{GameSession, SubmitOutcome};
//!
//! let row = evaluate(&Word::new("erase").unwrap(), &Word::new("speed").unwrap());
//! assert!(!row.is_win());
//!
//! let mut session = GameSession::new(Word::new("speed").unwrap(), 6);
//! for letter in "speed".chars() {
//!     session.on_key_pressed(letter);
//! }
//! let outcome = session.on_submit(|_, _| true);
//! assert!(matches!(outcome, SubmitOutcome::Evaluated { is_win: true, .. }));
//! ```

// Core domain types
pub mod core;

// Seeded level pools
pub mod pool;

// Date-seeded daily challenge
pub mod daily;

// Sessions and save/restore
pub mod session;

// Word lists and dictionary
pub mod wordlists;

// Player economy and progress
pub mod player;

// Tunable settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
