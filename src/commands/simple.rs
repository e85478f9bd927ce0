//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use super::play::{Game, TurnResult};
use crate::output::formatters::kind_label;
use crate::output::{print_board, print_item_effect, print_player_summary, print_settlement};
use crate::player::{Item, ItemEffect, ItemError};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the next
/// round has no word.
pub fn run_simple<S: WordSource>(game: &mut Game<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Quest - Plain Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a guess and press Enter.");
    println!("Items: '!add' extra guess, '!remove' drop a letter, '!reveal' show a letter");
    println!("Commands: '!life' spend a life, '!next' next round, 'quit' to exit\n");

    loop {
        print_round_header(game);
        print_board(game.session());

        let input = get_user_input("Guess")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                game.give_up();
                print_player_summary(game.player());
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "!add" => report_item(game.use_item(Item::AddGuess)),
            "!remove" => report_item(game.use_item(Item::RemoveLetter)),
            "!reveal" => report_item(game.use_item(Item::RevealLetter)),
            "!life" => report_item(game.spend_life()),
            "!next" | "n" => {
                if let Some(settlement) = game.give_up() {
                    print_settlement(&settlement, game.session().target().text(), game.definition());
                }
                game.next_round()?;
                println!("\n🔄 New round started!\n");
            }
            guess => {
                while game.delete_letter() {}
                for letter in guess.chars() {
                    game.type_letter(letter);
                }
                match game.submit() {
                    TurnResult::Incomplete => println!(
                        "❌ Need {} letters (eliminated letters cannot be typed)\n",
                        game.session().target().len()
                    ),
                    TurnResult::NotAWord => println!("❌ Not in the word list\n"),
                    TurnResult::Scored => {}
                    TurnResult::Won(settlement) => {
                        print_board(game.session());
                        print_settlement(&settlement, game.session().target().text(), game.definition());
                        game.next_round()?;
                    }
                    TurnResult::OutOfGuesses => {
                        println!(
                            "{}",
                            "Out of guesses! '!add' or '!life' to keep going, '!next' to give up."
                                .yellow()
                        );
                    }
                }
            }
        }
    }
}

fn print_round_header<S: WordSource>(game: &Game<S>) {
    let session = game.session();
    println!("────────────────────────────────────────────────────────────");
    println!(
        "{} | {} guesses left | lives {} | coins {}",
        kind_label(game.kind()),
        session.guesses_remaining(),
        game.player().currency.lives,
        game.player().currency.coins
    );
    println!("────────────────────────────────────────────────────────────");
}

fn report_item(result: Result<ItemEffect, ItemError>) {
    match result {
        Ok(effect) => print_item_effect(&effect),
        Err(err) => println!("❌ {err}\n"),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
