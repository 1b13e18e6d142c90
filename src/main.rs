//! Wordle Daily - CLI
//!
//! Plays the daily five-letter word puzzle in a TUI or on the plain terminal.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use wordle_daily::{
    commands::{SimulationConfig, puzzle_for, run_simple, run_simulation, score_guess},
    daily::{CalendarDate, DateSource, FixedDate, SystemDate},
    game::{PlayerId, SessionConfig, SessionStore},
    output::{print_puzzle_info, print_score_result, print_simulation_statistics},
    wordlists::{
        WordBank,
        loader::{embedded_bank, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word puzzle: one answer per day, six guesses to find it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Play the puzzle for this date (YYYY-MM-DD) instead of today (UTC)
    #[arg(short, long, global = true)]
    date: Option<CalendarDate>,

    /// Player id the session is stored under
    #[arg(short, long, global = true, default_value = "local")]
    player: String,

    /// Only accept guesses that are in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show which puzzle a date maps to
    Today {
        /// Also print the answer
        #[arg(long)]
        reveal: bool,
    },

    /// Score a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Play many random players through the day's puzzle in parallel
    Simulate {
        /// Number of simulated players
        #[arg(short = 'n', long, default_value = "1000")]
        players: usize,

        /// Base RNG seed; player i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the answer list selected by `-w`
fn load_bank(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "embedded" => embedded_bank().context("embedded answer list is malformed"),
        path => load_from_file(path).with_context(|| format!("failed to load word list {path}")),
    }
}

/// Open a session store over the answer list selected by `-w`
fn open_store(wordlist: &str, strict: bool) -> Result<SessionStore> {
    let bank = Arc::new(load_bank(wordlist)?);
    let config = SessionConfig {
        require_known_word: strict,
    };
    SessionStore::new(bank, config).context("cannot serve puzzles")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let date_source: Box<dyn DateSource> = match cli.date {
        Some(date) => Box::new(FixedDate(date)),
        None => Box::new(SystemDate::utc()),
    };
    let today = date_source.today();
    debug!("playing date {today}");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Score { guess, answer } => {
            let result = score_guess(&guess, &answer)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Play => {
            let store = open_store(&cli.wordlist, cli.strict)?;
            run_play_command(&store, PlayerId::new(cli.player), today)
        }
        Commands::Simple => {
            let store = open_store(&cli.wordlist, cli.strict)?;
            run_simple(&store, &PlayerId::new(cli.player), today)
        }
        Commands::Today { reveal } => {
            let store = open_store(&cli.wordlist, cli.strict)?;
            let info = puzzle_for(today, store.bank(), store.selector())?;
            print_puzzle_info(&info, reveal);
            Ok(())
        }
        Commands::Simulate { players, seed } => {
            let store = open_store(&cli.wordlist, cli.strict)?;
            println!("Simulating {players} players on puzzle {today}...");
            let stats = run_simulation(
                &store,
                &SimulationConfig {
                    players,
                    seed,
                    date: today,
                    show_progress: true,
                },
            )?;
            print_simulation_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(store: &SessionStore, player: PlayerId, date: CalendarDate) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let app = App::new(store, player, date)?;
    run_tui(app)
}
