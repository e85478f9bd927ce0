//! Wordle Quest - CLI
//!
//! Level-based Wordle with a TUI, a plain CLI mode and tools for inspecting
//! the deterministic word pools and the daily challenge.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_quest::{
    commands::{
        Game, RoundChoice, daily_report, lookup_level, run_simple, run_verify, simulate,
        simulate_from_record,
    },
    config::{Difficulty, GameConfig},
    daily::{DATE_FORMAT, parse_date},
    output::{print_daily_report, print_level_lookup, print_simulation, print_verify_report},
    pool::{Tier, WordPoolManager},
    session::DEFAULT_MAX_GUESSES,
    wordlists::{Dictionary, EmbeddedWords, MemoryWords, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_quest",
    about = "Level-based Wordle with seeded word pools and a daily challenge",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file (missing fields use defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the level shuffle seed
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Directory with levels/words_N.txt and valid/words_N.txt (default: built-in lists)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Debug logging to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the TUI (default)
    Play {
        /// beginner, easy, regular, hard or expert
        #[arg(short, long, default_value = "regular", value_parser = parse_difficulty)]
        difficulty: Difficulty,

        /// standard or premium
        #[arg(short, long, default_value = "standard", value_parser = parse_tier)]
        tier: Tier,

        /// Level to start at (default: first level)
        #[arg(short, long)]
        level: Option<u32>,

        /// Play the daily challenge for a date (YYYY-MM-DD) or "today"
        #[arg(long)]
        daily: Option<String>,

        /// Word length for the daily challenge
        #[arg(long, default_value = "5")]
        length: usize,

        /// Line-based mode without the TUI
        #[arg(long)]
        plain: bool,
    },

    /// Show the word for a level
    Level {
        #[arg(short, long, default_value = "standard", value_parser = parse_tier)]
        tier: Tier,

        #[arg(short, long, default_value = "regular", value_parser = parse_difficulty)]
        difficulty: Difficulty,

        /// 1-based level number
        level: u32,
    },

    /// Show the daily words and seeds for a date
    Daily {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Check pool determinism, partitioning and cycling over many seeds
    Verify {
        /// Number of seeds to check
        #[arg(short = 'n', long, default_value = "1000")]
        seeds: u64,

        /// First seed (default: the configured seed)
        #[arg(long)]
        from: Option<u64>,
    },

    /// Replay guesses through a session and show the board
    Simulate {
        /// Target word
        #[arg(short, long, required_unless_present = "resume")]
        target: Option<String>,

        /// Continue a saved session record (JSON) instead of starting fresh
        #[arg(short, long, conflicts_with = "target")]
        resume: Option<PathBuf>,

        /// Comma-separated guesses
        #[arg(short, long, value_delimiter = ',')]
        guesses: Vec<String>,

        #[arg(short, long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,

        /// Reject guesses missing from the word lists
        #[arg(long)]
        strict: bool,

        /// Print the resulting session record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_tier(name: &str) -> Result<Tier, String> {
    Tier::from_name(name).ok_or_else(|| format!("unknown tier '{name}'"))
}

fn parse_difficulty(name: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(name).ok_or_else(|| format!("unknown difficulty '{name}'"))
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

/// Built-in lists, or lists read from the `--words` directory
fn load_words(dir: Option<&PathBuf>) -> Result<Box<dyn WordSource + Sync>> {
    match dir {
        None => Ok(Box::new(EmbeddedWords)),
        Some(dir) => {
            let words = MemoryWords::load_dir(dir)
                .with_context(|| format!("failed to load word lists from {}", dir.display()))?;
            if words.lengths().is_empty() {
                bail!("no word lists found in {}", dir.display());
            }
            Ok(Box::new(words))
        }
    }
}

fn parse_date_arg(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        None | Some("today") => Ok(Local::now().date_naive()),
        Some(date) => Ok(parse_date(date)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wordle_quest::logging::init(cli.verbose)?;

    let config = load_config(&cli)?;
    let words = load_words(cli.words.as_ref())?;
    let source = words.as_ref();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        difficulty: Difficulty::Regular,
        tier: Tier::Standard,
        level: None,
        daily: None,
        length: 5,
        plain: false,
    });

    match command {
        Commands::Play {
            difficulty,
            tier,
            level,
            daily,
            length,
            plain,
        } => {
            let choice = match daily {
                Some(date) => RoundChoice::Daily {
                    date: parse_date_arg(Some(date.as_str()))?,
                    length,
                },
                None => RoundChoice::Level {
                    tier,
                    difficulty,
                    level,
                },
            };
            run_play_command(source, config, choice, plain)
        }
        Commands::Level {
            tier,
            difficulty,
            level,
        } => {
            let mut manager = WordPoolManager::new(source, config.seed, config.splits.clone());
            let lookup = lookup_level(&mut manager, &config, tier, difficulty, level);
            print_level_lookup(&lookup);
            Ok(())
        }
        Commands::Daily { date } => {
            let date = parse_date_arg(date.as_deref())?;
            print_daily_report(&daily_report(source, date));
            Ok(())
        }
        Commands::Verify { seeds, from } => {
            println!("🎯 Verifying {seeds} seeds...");
            let report = run_verify(&source, &config.splits, from.unwrap_or(config.seed), seeds, true);
            print_verify_report(&report);
            if report.passed() {
                Ok(())
            } else {
                Err(anyhow!("{} pool checks failed", report.failures.len()))
            }
        }
        Commands::Simulate {
            target,
            resume,
            guesses,
            max_guesses,
            strict,
            json,
        } => {
            let dictionary = strict.then(|| Dictionary::from_source(source));
            let result = match (resume, target) {
                (Some(path), _) => simulate_from_record(path, &guesses, dictionary.as_ref())?,
                (None, Some(target)) => simulate(&target, &guesses, max_guesses, dictionary.as_ref())?,
                (None, None) => bail!("either --target or --resume is required"),
            };
            print_simulation(&result);
            if json {
                let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
                let record = result.session.to_record(&today, None);
                println!("{}", record.to_json()?);
            }
            Ok(())
        }
    }
}

fn run_play_command(
    source: &(dyn WordSource + Sync),
    config: GameConfig,
    choice: RoundChoice,
    plain: bool,
) -> Result<()> {
    use wordle_quest::interactive::{App, run_tui};

    let mut game = Game::new(source, config, choice)?;
    if plain {
        run_simple(&mut game)
    } else {
        run_tui(App::new(game))
    }
}
