//! Display functions for command results

use colored::Colorize;

use super::formatters::create_progress_bar;
use crate::commands::{PuzzleInfo, ScoreResult, SimulationStatistics};
use crate::game::MAX_ATTEMPTS;

/// Print a scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().bright_white().bold(),
        result.answer.text().bright_yellow().bold()
    );
    println!("  {}  {}", result.feedback.to_emoji(), result.feedback);
    println!(
        "  {} correct, {} present",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print which puzzle a date maps to, optionally revealing the answer
pub fn print_puzzle_info(info: &PuzzleInfo, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle {} for {}",
        info.number.to_string().bright_yellow().bold(),
        info.date
    );
    println!("{}", "─".repeat(60).cyan());
    println!("  Word index:  {} of {}", info.index, info.bank_size);
    if reveal {
        println!("  Answer:      {}", info.answer.text().bright_green().bold());
    } else {
        println!("  Answer:      {}", "hidden (use --reveal)".bright_black());
    }
}

/// Print the results of a simulation run
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = stats.total_players.max(1) as f64;

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Answer:           {}", stats.answer.text().bright_yellow());
    println!("   Players:          {}", stats.total_players);
    println!(
        "   Won:              {} {}",
        stats.won,
        format!("({:.1}%)", stats.won as f64 / total * 100.0).green()
    );
    println!(
        "   Lost:             {} {}",
        stats.lost,
        format!("({:.1}%)", stats.lost as f64 / total * 100.0).red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (label, count, bar) in distribution_rows(stats, 40) {
        let pct = count as f64 / total * 100.0;
        let bar = if label == "X" {
            bar.as_str().red()
        } else {
            bar.as_str().green()
        };
        println!("   {label}: {bar} {count:5} ({pct:5.1}%)");
    }
}

/// One `(label, count, bar)` per winning attempt plus a final `X` row for losses,
/// all drawn on the same scale
fn distribution_rows(stats: &SimulationStatistics, width: usize) -> Vec<(String, usize, String)> {
    let max_count = stats
        .distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0)
        .max(stats.lost);

    (1..=MAX_ATTEMPTS)
        .map(|attempt| {
            (
                attempt.to_string(),
                stats.distribution.get(&attempt).copied().unwrap_or(0),
            )
        })
        .chain(std::iter::once(("X".to_string(), stats.lost)))
        .map(|(label, count)| {
            let bar = create_progress_bar(count as f64, max_count as f64, width);
            (label, count, bar)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rustc_hash::FxHashMap;
    use std::time::Duration;

    fn stats(distribution: &[(usize, usize)], lost: usize) -> SimulationStatistics {
        let distribution: FxHashMap<usize, usize> = distribution.iter().copied().collect();
        let won: usize = distribution.values().sum();
        SimulationStatistics {
            answer: Word::new("cigar").unwrap(),
            total_players: won + lost,
            won,
            lost,
            distribution,
            average_guesses: 0.0,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn losses_share_the_guess_bar_scale() {
        let rows = distribution_rows(&stats(&[(3, 5), (4, 10)], 10), 10);

        assert_eq!(rows.len(), MAX_ATTEMPTS + 1);
        assert_eq!(rows[2], ("3".to_string(), 5, "█████░░░░░".to_string()));
        assert_eq!(rows[3].2, "██████████");
        assert_eq!(rows[6], ("X".to_string(), 10, "██████████".to_string()));
    }

    #[test]
    fn many_losses_shrink_the_win_bars() {
        let rows = distribution_rows(&stats(&[(2, 5)], 20), 8);
        assert_eq!(rows[1].2, "██░░░░░░");
        assert_eq!(rows[6].2, "████████");
        assert_eq!(rows[0].2, "░░░░░░░░");
    }

    #[test]
    fn nobody_played() {
        let rows = distribution_rows(&stats(&[], 0), 4);
        assert!(rows.iter().all(|(_, count, bar)| *count == 0 && bar == "░░░░"));
    }
}
