use clap::{CommandFactory, Parser, Subcommand};
use numberplay_core::storage::{Database, TtlCache};

mod commands;

#[derive(Parser)]
#[command(name = "numberplay", version, about = "Numberplay CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Significant-digit rounding practice
    Rounding(commands::rounding::RoundingArgs),
    /// Number-line estimation practice
    Numberline(commands::numberline::NumberlineArgs),
    /// Arithmetic quiz
    Quiz(commands::quiz::QuizArgs),
    /// Session statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Saved learning modules
    Module {
        #[command(subcommand)]
        action: commands::module::ModuleAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "numberplay", &mut std::io::stdout());
            Ok(())
        }
        Commands::Config { action } => commands::config::run(action),
        Commands::Rounding(args) => with_cache(|cache| commands::rounding::run(cache, args)),
        Commands::Numberline(args) => with_cache(|cache| commands::numberline::run(cache, args)),
        Commands::Quiz(args) => with_cache(|cache| commands::quiz::run(cache, args)),
        Commands::Stats { action } => with_cache(|cache| commands::stats::run(cache, action)),
        Commands::Module { action } => with_cache(|cache| commands::module::run(cache, action)),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Open the shared database once and hand every command the same cache.
fn with_cache<F>(f: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&TtlCache<&Database>) -> Result<(), Box<dyn std::error::Error>>,
{
    let db = Database::open()?;
    let cache = TtlCache::new(&db);
    f(&cache)
}
