//! Display functions for command results

use super::formatters::{create_progress_bar, kind_label, row_to_emoji};
use crate::commands::{DailyReport, LevelLookup, SimulationResult, VerifyReport};
use crate::core::{Tile, TileState};
use crate::player::{ItemEffect, PlayerState, Settlement};
use crate::session::{GameSession, SessionStatus, SubmitOutcome};
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn paint_tile(tile: Tile) -> ColoredString {
    let text = format!(" {} ", if tile.letter == ' ' { '_' } else { tile.letter });
    match tile.state {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black(),
        TileState::Hint => text.bright_blue().bold(),
        TileState::Filled => text.bright_white().bold(),
        TileState::Empty => text.bright_black(),
    }
}

/// Print the board and keyboard of a session
pub fn print_board(session: &GameSession) {
    println!();
    for row in session.board() {
        let tiles: Vec<String> = row.into_iter().map(|t| paint_tile(t).to_string()).collect();
        println!("   {}", tiles.join(" "));
    }

    println!();
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = keys
            .chars()
            .map(|letter| {
                if session.is_eliminated(letter) {
                    return letter.to_string().bright_black().strikethrough().to_string();
                }
                let state = session.keyboard_state(letter).unwrap_or(TileState::Empty);
                let key = letter.to_string();
                match state {
                    TileState::Correct => key.green().bold().to_string(),
                    TileState::Present => key.yellow().bold().to_string(),
                    TileState::Absent => key.bright_black().to_string(),
                    _ => key,
                }
            })
            .collect();
        println!("   {}{}", " ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print a level lookup
pub fn print_level_lookup(lookup: &LevelLookup) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LEVEL".bright_cyan().bold(),
        format!("{} ({}, {})", lookup.level, lookup.difficulty, lookup.tier)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("   Word length:  {}", lookup.word_length);
    println!("   Max guesses:  {}", lookup.max_guesses);
    println!("   Window size:  {}", lookup.window_size);
    match &lookup.word {
        Some(word) => {
            println!("   Word:         {}", word.text().green().bold());
            if let Some(definition) = &lookup.definition {
                println!("   Definition:   {definition}");
            }
        }
        None => println!("   Word:         {}", "none".red()),
    }
}

/// Print the daily words for a date
pub fn print_daily_report(report: &DailyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DAILY CHALLENGE".bright_cyan().bold(),
        report.date.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for entry in &report.entries {
        let word = entry.word.as_ref().map_or_else(
            || "none".red().to_string(),
            |word| word.text().green().bold().to_string(),
        );
        println!(
            "   {} letters: {word:<10} seed {:>10}  pool {}",
            entry.length, entry.seed, entry.pool_size
        );
    }
}

/// Print pool verification results
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "POOL VERIFICATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Seeds:        {}", report.seeds);
    println!("   Lengths:      {:?}", report.lengths);
    println!("   Pools:        {}", report.pools_checked);
    println!("   Time taken:   {:.2}s", report.duration.as_secs_f64());

    if report.passed() {
        println!("\n{}", "✅ All checks passed".green().bold());
        return;
    }

    println!(
        "\n{}",
        format!("❌ {} checks failed", report.failures.len()).red().bold()
    );
    for failure in report.failures.iter().take(20) {
        println!(
            "   seed {:>8}  length {}  {}",
            failure.seed, failure.length, failure.check
        );
    }
}

/// Print every replayed guess and the final board
pub fn print_simulation(result: &SimulationResult) {
    let mut scored = result.session.completed_guesses().iter();
    for (i, turn) in result.turns.iter().enumerate() {
        let note = match turn.outcome {
            SubmitOutcome::NotReady => "incomplete".yellow().to_string(),
            SubmitOutcome::InvalidWord => "not a word".red().to_string(),
            SubmitOutcome::Evaluated { .. } => scored.next().map_or_else(String::new, row_to_emoji),
        };
        println!("Turn {}: {} {note}", i + 1, turn.guess);
    }

    print_board(&result.session);

    let session = &result.session;
    match session.status() {
        SessionStatus::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", session.completed_guesses().len())
                .green()
                .bold()
        ),
        SessionStatus::OutOfGuesses => println!(
            "{}",
            format!("❌ Out of guesses, the word was {}", session.target())
                .red()
                .bold()
        ),
        SessionStatus::InProgress => println!(
            "{} guesses remaining",
            session.guesses_remaining().to_string().bright_cyan()
        ),
    }
}

/// Print what an item did
pub fn print_item_effect(effect: &ItemEffect) {
    let text = match effect {
        ItemEffect::BonusGuesses(count) => format!("➕ {count} extra guess(es)"),
        ItemEffect::RemovedLetter(letter) => format!("🚫 {letter} is not in the word"),
        ItemEffect::RevealedLetter { position, letter } => {
            format!("💡 Letter {} is {letter}", position + 1)
        }
    };
    println!("{}\n", text.bright_cyan());
}

/// Print the end of a round
pub fn print_settlement(settlement: &Settlement, target: &str, definition: Option<&str>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if settlement.won {
        println!("{}", "    🎉  S O L V E D !  🎉".bright_green().bold());
    } else {
        println!("{}", format!("    The word was {target}").bright_red().bold());
    }
    if let Some(definition) = definition {
        println!("    {}: {definition}", target.bright_white().bold());
    }
    if settlement.replay {
        println!("    {}", "Replay: no rewards".bright_black());
    }
    if settlement.coins_awarded > 0 {
        println!("    +{} coins", settlement.coins_awarded.to_string().yellow());
    }
    if settlement.life_consumed {
        println!("    -1 life");
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print coins, lives, streaks and statistics
pub fn print_player_summary(player: &PlayerState) {
    let stats = &player.stats;
    println!("\n📊 {}", "Player:".bright_cyan().bold());
    println!(
        "   Coins {}  Lives {}  Games {}  Win rate {:.0}%",
        player.currency.coins, player.currency.lives, stats.games_played, stats.win_rate()
    );

    if stats.games_won == 0 {
        return;
    }
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, count) in &stats.guess_distribution {
        let bar = create_progress_bar(f64::from(*count), f64::from(max), 30);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}
