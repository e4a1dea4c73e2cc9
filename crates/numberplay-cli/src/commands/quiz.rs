use clap::{Args, ValueEnum};
use numberplay_core::games::quiz::{self, Operation, QuizOutcome};
use numberplay_core::games::{GameShell, QuizVariant};
use rand::Rng;

use super::{print_session_stats, prompt, rng_from_seed, Cache};

#[derive(Clone, Copy, ValueEnum)]
pub enum OpChoice {
    Add,
    Sub,
    Mul,
    Div,
    Mixed,
}

#[derive(Args)]
pub struct QuizArgs {
    /// Which operation to drill
    #[arg(long, value_enum, default_value = "mixed")]
    op: OpChoice,
    /// Number of questions to play (default: until quit)
    #[arg(long)]
    rounds: Option<u32>,
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

pub fn run(cache: &Cache, args: QuizArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rng_from_seed(args.seed);
    let mut shell = GameShell::new(cache, &QuizVariant);

    println!("Answer each question. 'q' quits.");

    let mut played = 0u32;
    'session: while args.rounds.map_or(true, |r| played < r) {
        let operation = match args.op {
            OpChoice::Add => Operation::Addition,
            OpChoice::Sub => Operation::Subtraction,
            OpChoice::Mul => Operation::Multiplication,
            OpChoice::Div => Operation::Division,
            OpChoice::Mixed => Operation::ALL[rng.gen_range(0..Operation::ALL.len())],
        };
        let problem = quiz::generate(&mut rng, operation);

        println!();
        let outcome = loop {
            let Some(input) = prompt(&format!("{} = ", problem.question))? else {
                break 'session;
            };
            if input == "q" {
                break 'session;
            }
            match problem.check(&input) {
                QuizOutcome::Invalid => println!("Please enter a valid number."),
                outcome => break outcome,
            }
        };

        match outcome {
            QuizOutcome::Correct => {
                println!("Correct! Well done!");
                shell.record_outcome(true)?;
            }
            QuizOutcome::Incorrect { expected } => {
                println!("Incorrect. The answer is {expected}.");
                shell.record_outcome(false)?;
            }
            QuizOutcome::Invalid => unreachable!("invalid input re-asks above"),
        }
        played += 1;
    }

    print_session_stats(shell.stat_labels(), shell.stats());
    Ok(())
}
