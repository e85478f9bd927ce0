//! Game sessions
//!
//! Input handling, submission, bonus guesses, letter elimination and
//! prefills on top of the evaluator, plus save/restore.

mod engine;
mod error;
mod record;

pub use engine::{DEFAULT_MAX_GUESSES, GameSession, SessionStatus, SubmitOutcome};
pub use error::SessionError;
pub use record::{SessionKind, SessionRecord};
