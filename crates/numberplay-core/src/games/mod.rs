//! Procedural problem engines for each practice game.

pub mod numberline;
pub mod quiz;
pub mod rounding;
pub mod shell;

pub use numberline::{AccuracyBand, LineRange};
pub use quiz::{Operation, QuizOutcome, QuizProblem};
pub use rounding::{AnswerOutcome, RoundingProblem, VisualizationLayout};
pub use shell::{GameShell, GameVariant, NumberLineVariant, QuizVariant, RoundingVariant};
