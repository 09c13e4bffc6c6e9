//! Slovo - CLI
//!
//! Guess-the-word game for 5-letter Russian words, with a TUI board,
//! a plain console mode and a few dictionary utilities.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use slovo::{
    commands::{analyze_pair, run_letters, run_simple, run_simulation, run_suggest},
    output::{print_analysis, print_simulation_summary},
    wordlist::{Dictionary, loader},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "slovo",
    about = "Guess-the-word game for 5-letter Russian words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom word list (default: built-in Russian list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for the random number generator (default: from the OS)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode without the TUI
    Simple {
        /// Append a plain transcript of each game to this file
        #[arg(short, long)]
        log: Option<PathBuf>,
    },

    /// List dictionary words matching letter constraints
    Suggest {
        /// Letters the word must contain (e.g. "г,о")
        #[arg(short, long)]
        contains: Option<String>,

        /// Letters the word must not contain
        #[arg(short = 'x', long)]
        without: Option<String>,

        /// Positional pattern with '_' for unknown slots (e.g. "г___й")
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Score a guess against a known target word
    Analyze {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Play many games automatically and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,
    },

    /// Show the most common letters in the dictionary
    Letters {
        /// How many letters to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

/// Load the dictionary from the -w flag or fall back to the built-in list
fn load_dictionary(wordlist: Option<&Path>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => Ok(loader::load_from_file(path)?),
        None => Ok(loader::load_builtin()),
    }
}

/// Build the RNG from the --seed flag, or from the OS if unset
fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let rng = rng_from_seed(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, rng),
        Commands::Simple { log } => run_simple_command(&dictionary, rng, log.as_deref()),
        Commands::Suggest {
            contains,
            without,
            pattern,
        } => run_suggest(
            &dictionary,
            contains.as_deref(),
            without.as_deref(),
            pattern.as_deref(),
        )
        .map_err(|e| anyhow::anyhow!(e)),
        Commands::Analyze { target, guess } => run_analyze_command(&target, &guess),
        Commands::Simulate { games } => {
            run_simulate_command(&dictionary, games, cli.seed);
            Ok(())
        }
        Commands::Letters { count } => {
            run_letters(&dictionary, count);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, rng: StdRng) -> Result<()> {
    use slovo::interactive::{App, run_tui};

    let app = App::new(dictionary, rng);
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, mut rng: StdRng, log: Option<&Path>) -> Result<()> {
    run_simple(dictionary, &mut rng, log).map_err(|e| anyhow::anyhow!(e))
}

fn run_analyze_command(target: &str, guess: &str) -> Result<()> {
    let result = analyze_pair(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis(&result.target, &result.guess, result.verdict);
    Ok(())
}

fn run_simulate_command(dictionary: &Dictionary, games: usize, seed: Option<u64>) {
    let base_seed = seed.unwrap_or_else(rand::random);
    println!("Simulating {games} games (seed {base_seed})...");

    let stats = run_simulation(dictionary, games, base_seed);
    print_simulation_summary(&stats);
}
