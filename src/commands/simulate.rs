//! Self-play simulation command
//!
//! Plays many games with a random consistent-guess bot and aggregates
//! win statistics. Games run in parallel; each game gets its own RNG
//! seeded from the base seed, so a run is reproducible end to end.

use crate::game::{GameSession, GameState};
use crate::wordlist::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of one simulated game
struct GameOutcome {
    won: bool,
    attempts: usize,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationStats {
    pub games: usize,
    pub wins: usize,
    /// Attempts taken -> number of won games, won games only
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Average attempts across won games
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.wins == 0 {
            return 0.0;
        }
        let total: usize = self
            .distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        total as f64 / self.wins as f64
    }
}

/// Play `games` self-play games and collect statistics
///
/// Game `i` draws its target and guesses from an RNG seeded with
/// `base_seed + i`, so the whole run is deterministic for a given seed
/// regardless of how the games are scheduled across threads.
#[must_use]
pub fn run_simulation(dictionary: &Dictionary, games: usize, base_seed: u64) -> SimulationStats {
    let start = Instant::now();

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<GameOutcome> = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let outcome = play_one(dictionary, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();

    let wins = outcomes.iter().filter(|o| o.won).count();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in outcomes.iter().filter(|o| o.won) {
        *distribution.entry(outcome.attempts).or_insert(0) += 1;
    }

    SimulationStats {
        games,
        wins,
        distribution,
        duration: start.elapsed(),
    }
}

/// Play one game with a bot that guesses a uniformly random word still
/// consistent with everything the verdicts have revealed
fn play_one(dictionary: &Dictionary, rng: &mut StdRng) -> GameOutcome {
    let mut session = GameSession::new(dictionary, rng);

    while session.state() == GameState::InProgress {
        let candidates = session.candidates();
        let guess = candidates
            .choose(rng)
            .copied()
            .expect("the target always remains a candidate");

        if session.submit_guess(guess.text()).is_err() {
            break;
        }
    }

    GameOutcome {
        won: session.state() == GameState::Won,
        attempts: session.attempts().len(),
    }
}
