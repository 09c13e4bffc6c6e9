//! Display functions for command results

use super::formatters::{create_progress_bar, verdict_cells};
use crate::commands::SimulationStats;
use crate::core::{Verdict, Word};
use crate::game::MAX_ATTEMPTS;
use colored::Colorize;

/// Print one scored guess as a colored row with its mark string
pub fn print_attempt(word: &Word, verdict: Verdict) {
    println!(
        "  {}   {}",
        verdict_cells(word, verdict),
        verdict.to_string().bright_black()
    );
}

/// Print the verdict of scoring one guess against a known target
pub fn print_analysis(target: &Word, guess: &Word, verdict: Verdict) {
    println!("\n{}", "─".repeat(44).cyan());
    println!(
        "Target: {}   Guess: {}",
        target.text().to_uppercase().bright_yellow().bold(),
        guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(44).cyan());

    println!();
    print_attempt(guess, verdict);
    println!(
        "\n  {} exact, {} present",
        verdict.exact_count().to_string().green().bold(),
        verdict.present_count().to_string().yellow().bold()
    );
}

/// Print query results as an uppercase word table
pub fn print_suggestions(words: &[&Word]) {
    if words.is_empty() {
        println!("{}", "No words match the query".yellow());
        return;
    }

    println!(
        "{} matching {}:",
        words.len().to_string().bright_cyan().bold(),
        if words.len() == 1 { "word" } else { "words" }
    );
    for chunk in words.chunks(8) {
        let row: Vec<String> = chunk.iter().map(|w| w.text().to_uppercase()).collect();
        println!("  {}", row.join("  "));
    }
}

/// Print the most common letters as a bar chart
pub fn print_letter_frequency(entries: &[(char, usize)]) {
    let Some(&(_, max)) = entries.first() else {
        println!("{}", "No letters to report".yellow());
        return;
    };

    println!("\n📊 {}", "Most common letters:".bright_cyan().bold());
    for &(letter, count) in entries {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!(
            "   {}  {} {count}",
            letter.to_uppercase().to_string().bright_white().bold(),
            bar.green()
        );
    }
}

/// Print self-play statistics with a distribution chart
pub fn print_simulation_summary(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Games won:        {}",
        format!("{} ({:.1}%)", stats.wins, stats.win_rate() * 100.0).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution (won games):".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        let count = stats.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if stats.games == 0 {
            0.0
        } else {
            (count as f64 / stats.games as f64) * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }

    let losses = stats.games.saturating_sub(stats.wins);
    if losses > 0 {
        println!(
            "\n   {} {}",
            losses.to_string().red().bold(),
            format!("games were not solved within {MAX_ATTEMPTS} attempts").red()
        );
    }
}
