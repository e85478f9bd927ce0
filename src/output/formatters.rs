//! Formatting utilities for terminal output

use crate::core::{GuessRow, TileState};
use crate::session::SessionKind;

/// Emoji for one tile state
#[must_use]
pub const fn tile_to_emoji(state: TileState) -> char {
    match state {
        TileState::Correct => '🟩',
        TileState::Present => '🟨',
        TileState::Absent => '⬜',
        TileState::Hint => '🟦',
        TileState::Filled | TileState::Empty => '⬛',
    }
}

/// Format a scored row as an emoji string
#[must_use]
pub fn row_to_emoji(row: &GuessRow) -> String {
    row.tiles().iter().map(|tile| tile_to_emoji(tile.state)).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short description of what a round is
#[must_use]
pub fn kind_label(kind: &SessionKind) -> String {
    match kind {
        SessionKind::Level {
            tier,
            difficulty,
            level,
        } => format!("Level {level} ({difficulty}, {tier})"),
        SessionKind::Daily { date } => format!("Daily {date}"),
        SessionKind::Timed => "Timed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use crate::core::{Word, evaluate};
    use crate::pool::Tier;

    #[test]
    fn row_to_emoji_mixed() {
        let row = evaluate(&Word::new("lolly").unwrap(), &Word::new("hello").unwrap());
        assert_eq!(row_to_emoji(&row), "⬜🟨🟩🟩⬜");
    }

    #[test]
    fn row_to_emoji_all_green() {
        let word = Word::new("speed").unwrap();
        assert_eq!(row_to_emoji(&evaluate(&word, &word)), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(150.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn kind_labels() {
        let level = SessionKind::Level {
            tier: Tier::Premium,
            difficulty: Difficulty::Hard,
            level: 12,
        };
        assert_eq!(kind_label(&level), "Level 12 (hard, premium)");
        assert_eq!(
            kind_label(&SessionKind::Daily {
                date: "2026-02-23".to_string()
            }),
            "Daily 2026-02-23"
        );
    }
}
