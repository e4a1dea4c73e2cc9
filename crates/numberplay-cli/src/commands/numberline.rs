use clap::Args;
use numberplay_core::games::numberline;
use numberplay_core::games::{GameShell, NumberLineVariant};
use numberplay_core::storage::Config;

use super::{print_session_stats, prompt, rng_from_seed, Cache};

#[derive(Args)]
pub struct NumberlineArgs {
    /// Lower end of the line (default: config)
    #[arg(long)]
    min: Option<i64>,
    /// Upper end of the line (default: config)
    #[arg(long)]
    max: Option<i64>,
    /// Draw decimal targets
    #[arg(long)]
    decimals: bool,
    /// Allow negative ranges when randomizing
    #[arg(long)]
    negatives: bool,
    /// Use large-magnitude ranges when randomizing
    #[arg(long)]
    large: bool,
    /// Pick a fresh range before every target
    #[arg(long)]
    randomize: bool,
    /// Number of targets to play (default: until quit)
    #[arg(long)]
    rounds: Option<u32>,
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

pub fn run(cache: &Cache, args: NumberlineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default().numberline;
    let decimals = args.decimals || config.allow_decimals;
    let negatives = args.negatives || config.allow_negatives;
    let large = args.large || config.large_numbers;
    let randomize = args.randomize || config.randomize_range;

    let mut min = args.min.unwrap_or(config.min) as f64;
    let mut max = args.max.unwrap_or(config.max) as f64;
    if min >= max {
        return Err(format!("invalid range: min ({min}) must be below max ({max})").into());
    }

    let mut rng = rng_from_seed(args.seed);
    let mut shell = GameShell::new(cache, &NumberLineVariant);

    println!("Place each number on the line by entering how far along it sits,");
    println!("as a percentage from 0 (left end) to 100 (right end). 'q' quits.");

    let mut played = 0u32;
    'session: while args.rounds.map_or(true, |r| played < r) {
        if randomize {
            let range = numberline::randomize_range(&mut rng, large, negatives);
            min = range.min as f64;
            max = range.max as f64;
        }

        let target = numberline::generate_target(&mut rng, min, max, decimals);
        println!();
        if decimals {
            println!("Where is {target:.1} on a line from {min} to {max}?");
        } else {
            println!("Where is {target} on a line from {min} to {max}?");
        }

        let normalized = loop {
            let Some(input) = prompt("  position (0-100) > ")? else {
                break 'session;
            };
            if input == "q" {
                break 'session;
            }
            match input.parse::<f64>() {
                Ok(pct) if (0.0..=100.0).contains(&pct) => break pct / 100.0,
                _ => println!("Please enter a percentage between 0 and 100."),
            }
        };

        let error = numberline::score_guess(normalized, min, max, target);
        let band = numberline::band(error);
        let correct_pct = numberline::correct_position(target, min, max) * 100.0;
        let guessed_value = numberline::implied_value(normalized, min, max);

        println!("  {}", "*".repeat(band.stars as usize));
        println!("  {}", band.message);
        println!(
            "  You were {error:.1}% away from the exact spot ({correct_pct:.1}%). \
             Your position means {guessed_value:.1}."
        );

        shell.record_outcome(band.stars == 3)?;
        played += 1;
    }

    print_session_stats(shell.stat_labels(), shell.stats());
    Ok(())
}
