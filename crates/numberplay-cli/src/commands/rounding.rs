use clap::Args;
use numberplay_core::games::rounding::{self, AnswerOutcome, VisualizationLayout};
use numberplay_core::games::{GameShell, RoundingVariant};
use numberplay_core::storage::Config;

use super::{group_digits, print_session_stats, prompt, rng_from_seed, Cache};

#[derive(Args)]
pub struct RoundingArgs {
    /// Digit-count difficulties to draw from, e.g. --digits 3,4 (default: config)
    #[arg(long, value_delimiter = ',')]
    digits: Vec<u32>,
    /// Number of problems to play (default: until quit)
    #[arg(long)]
    rounds: Option<u32>,
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

pub fn run(cache: &Cache, args: RoundingArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let digits = if args.digits.is_empty() {
        config.rounding.digit_counts
    } else {
        args.digits
    };

    let mut rng = rng_from_seed(args.seed);
    let mut shell = GameShell::new(cache, &RoundingVariant);

    println!("Round each number to its leading significant digits.");
    println!("Type just those digits; the zeros are filled in for you. 'q' quits.");

    let mut played = 0u32;
    'session: while args.rounds.map_or(true, |r| played < r) {
        let problem = rounding::generate(&mut rng, &digits);
        let zeros = "0".repeat(problem.trailing_zero_count as usize);

        println!();
        println!(
            "Round {} to {} significant digit{}:",
            group_digits(problem.value),
            problem.significant_digits,
            if problem.significant_digits == 1 { "" } else { "s" }
        );

        // Invalid input re-asks the same problem; it never counts.
        let outcome = loop {
            let Some(input) = prompt(&format!("  answer: ?{zeros} > "))? else {
                break 'session;
            };
            if input == "q" {
                break 'session;
            }
            match problem.validate(&input) {
                AnswerOutcome::Invalid => println!("Please enter a valid number."),
                outcome => break outcome,
            }
        };

        match outcome {
            AnswerOutcome::Correct { .. } => {
                println!("Correct! Well done!");
                shell.record_outcome(true)?;
            }
            AnswerOutcome::Incorrect {
                reconstructed,
                error,
            } => {
                println!(
                    "Incorrect. The correct rounded value is {} (you were {} off the original):",
                    group_digits(problem.canonical_answer),
                    group_digits(error)
                );
                let layout = rounding::visualization_layout(
                    problem.value,
                    reconstructed,
                    problem.canonical_answer,
                );
                print_axis(&layout);
                shell.record_outcome(false)?;
            }
            AnswerOutcome::Invalid => unreachable!("invalid input re-asks above"),
        }
        played += 1;
    }

    print_session_stats(shell.stat_labels(), shell.stats());
    Ok(())
}

/// Render the feedback axis: V original value, G guess, C correct answer.
fn print_axis(layout: &VisualizationLayout) {
    const WIDTH: usize = 41;
    let mut line = ['-'; WIDTH];
    for (pos, marker) in [
        (layout.original_pos, 'V'),
        (layout.guess_pos, 'G'),
        (layout.correct_pos, 'C'),
    ] {
        let idx = ((pos / 100.0) * (WIDTH - 1) as f64).round() as usize;
        line[idx.min(WIDTH - 1)] = marker;
    }
    println!("  {}", line.iter().collect::<String>());
    println!(
        "  {:<20}{:>21}",
        group_digits(layout.min_display.round() as u64),
        group_digits(layout.max_display.round() as u64)
    );
}
