//! Simulate command
//!
//! Plays many independent players through one day's puzzle at once. Every player
//! gets its own session in a shared [`SessionStore`] and guesses at random among
//! the bank words still consistent with the feedback it has seen.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::core::{ConfigError, Feedback, GameError, Word};
use crate::daily::CalendarDate;
use crate::game::{GameState, MAX_ATTEMPTS, PlayerId, SessionStore};

/// How a simulation run is set up
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub players: usize,
    /// Player `i` draws from an RNG seeded with `seed + i`
    pub seed: u64,
    pub date: CalendarDate,
    pub show_progress: bool,
}

/// Aggregated results of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationStatistics {
    pub answer: Word,
    pub total_players: usize,
    pub won: usize,
    pub lost: usize,
    /// Winning attempt number to player count
    pub distribution: FxHashMap<usize, usize>,
    /// Mean guesses over won games; 0 when nobody won
    pub average_guesses: f64,
    pub duration: Duration,
}

/// Outcome of one simulated player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlayerResult {
    state: GameState,
    guesses: usize,
}

/// Run `config.players` simulated players in parallel
///
/// # Errors
/// Returns `ConfigError::EmptyWordBank` if the store's bank is empty.
///
/// # Panics
/// Will not panic - the progress bar template is a constant.
pub fn run_simulation(
    store: &SessionStore,
    config: &SimulationConfig,
) -> Result<SimulationStatistics, ConfigError> {
    let answer = store.answer_for(config.date)?.clone();
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.players as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("progress template is valid")
                .progress_chars("█▓▒░"),
        );
        pb.set_message(format!("puzzle {}", store.selector().puzzle_number(config.date)));
        pb
    } else {
        ProgressBar::hidden()
    };

    let results = (0..config.players)
        .into_par_iter()
        .map(|i| {
            let player = PlayerId::new(format!("sim-{i}"));
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let result = play_one(store, &player, config.date, &mut rng);
            store.evict(&player);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    pb.finish_with_message("Complete!");

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut won_guesses = 0;
    for result in results.iter().filter(|r| r.state == GameState::Won) {
        *distribution.entry(result.guesses).or_insert(0) += 1;
        won_guesses += result.guesses;
    }
    let won = distribution.values().sum::<usize>();

    Ok(SimulationStatistics {
        answer,
        total_players: results.len(),
        won,
        lost: results.len() - won,
        distribution,
        average_guesses: if won > 0 {
            won_guesses as f64 / won as f64
        } else {
            0.0
        },
        duration: start.elapsed(),
    })
}

fn play_one(
    store: &SessionStore,
    player: &PlayerId,
    date: CalendarDate,
    rng: &mut StdRng,
) -> Result<PlayerResult, ConfigError> {
    store.start_session(player, date)?;

    let mut candidates: Vec<&Word> = store.bank().iter().collect();
    let mut state = GameState::InProgress;
    let mut guesses = 0;

    while !state.is_terminal() && guesses < MAX_ATTEMPTS {
        // The answer is always consistent with its own feedback
        let Some(&guess) = candidates.choose(rng) else {
            break;
        };
        match store.submit_guess(player, guess.text()) {
            Ok(outcome) => {
                state = outcome.state;
                guesses = outcome.attempt;
                candidates.retain(|c| Feedback::calculate(guess, c) == outcome.feedback);
            }
            Err(GameError::SessionTerminated(terminal)) => state = terminal,
            Err(e) => {
                warn!("{player} stopped early: {e}");
                break;
            }
        }
    }

    debug!("{player} finished: {state} after {guesses}");
    Ok(PlayerResult { state, guesses })
}
