use clap::Subcommand;
use numberplay_core::games::{
    GameVariant, NumberLineVariant, QuizVariant, RoundingVariant,
};
use numberplay_core::stats::SessionTracker;

use super::Cache;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Stats for every game
    Show,
    /// Reset one game's stats (rounding, numberlines, quiz)
    Reset { game: String },
}

pub fn run(cache: &Cache, action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Show => {
            let games: [&dyn GameVariant; 3] =
                [&RoundingVariant, &NumberLineVariant, &QuizVariant];
            let mut report = Vec::new();
            for game in games {
                let stats = SessionTracker::load(cache, game.key()).stats();
                report.push(serde_json::json!({
                    "game": game.key(),
                    "attempts": stats.attempts,
                    "correct": stats.correct,
                    "accuracy_percent": stats.accuracy_percent(),
                }));
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Reset { game } => {
            let games: [&dyn GameVariant; 3] =
                [&RoundingVariant, &NumberLineVariant, &QuizVariant];
            if !games.iter().any(|g| g.key() == game) {
                return Err(format!(
                    "unknown game '{game}' (expected rounding, numberlines, or quiz)"
                )
                .into());
            }
            let mut tracker = SessionTracker::load(cache, &game);
            tracker.reset(cache)?;
            println!("Stats reset for '{game}'.");
        }
    }
    Ok(())
}
