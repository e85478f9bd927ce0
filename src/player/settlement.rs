//! End-of-round bookkeeping
//!
//! Coins, lives, streaks, statistics and progress change here and nowhere
//! else. Replays of a beaten level change nothing.

use super::{PlayerState, StreakCategory};
use crate::config::GameConfig;
use crate::session::{GameSession, SessionKind, SessionStatus};
use tracing::info;

/// What settling a round did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settlement {
    pub won: bool,
    pub replay: bool,
    pub coins_awarded: u64,
    pub life_consumed: bool,
}

/// Apply a finished round to the player
///
/// Returns `None` while the session is still in progress. Only level losses
/// cost a life; daily and timed rounds never do.
pub fn settle(
    player: &mut PlayerState,
    config: &GameConfig,
    kind: &SessionKind,
    session: &GameSession,
) -> Option<Settlement> {
    let won = match session.status() {
        SessionStatus::InProgress => return None,
        SessionStatus::Won => true,
        SessionStatus::OutOfGuesses => false,
    };
    let guesses_used = session.completed_guesses().len();

    let category = match kind {
        SessionKind::Level {
            tier,
            difficulty,
            level,
        } => {
            if player.progress.is_replay(*tier, *difficulty, *level) {
                return Some(Settlement {
                    won,
                    replay: true,
                    ..Settlement::default()
                });
            }
            if won {
                player.progress.complete(*tier, *difficulty, *level);
            }
            StreakCategory::Level
        }
        SessionKind::Daily { .. } => StreakCategory::Daily,
        SessionKind::Timed => StreakCategory::Timed,
    };

    let mut settlement = Settlement {
        won,
        ..Settlement::default()
    };
    if won {
        settlement.coins_awarded = config.coins_for(guesses_used);
        player.currency.coins += settlement.coins_awarded;
    } else if category == StreakCategory::Level && player.currency.lives > 0 {
        player.currency.lives -= 1;
        settlement.life_consumed = true;
    }

    player.streaks.record(category, won);
    player.stats.record(won, guesses_used);

    info!(
        ?category,
        won,
        guesses_used,
        coins = settlement.coins_awarded,
        life_consumed = settlement.life_consumed,
        "settled round"
    );
    Some(settlement)
}
