//! Significant-digit rounding game engine.
//!
//! A problem is a randomly drawn integer with a known digit count. The
//! player supplies only the leading significant digits; the engine
//! reconstructs the full answer by appending trailing zeros and compares it
//! against the canonical rounded value.
//!
//! Rules:
//! - 2-3 digit values round to 1 significant digit, 4-6 digit values to 2.
//! - 2-digit values are a special case: no rounding at all, the answer is
//!   the value itself.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The full set of digit-count difficulties.
pub const DIGIT_COUNT_CHOICES: [u32; 5] = [2, 3, 4, 5, 6];

/// One rounding practice problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingProblem {
    /// The value the player is asked to round.
    pub value: u64,
    /// Number of digits in `value` (2..=6).
    pub digit_count: u32,
    /// How many leading digits the player is expected to enter.
    pub significant_digits: u32,
    /// How many zeros the answer carries after the significant digits.
    pub trailing_zero_count: u32,
    /// The rounded value the reconstruction is compared against.
    pub canonical_answer: u64,
}

/// Result of checking a player's significant-digit input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Empty or non-numeric input. Reported to the player; nothing advances.
    Invalid,
    Correct {
        reconstructed: u64,
    },
    Incorrect {
        reconstructed: u64,
        /// Distance from the original value, shown alongside the miss.
        error: u64,
    },
}

impl RoundingProblem {
    /// Build a problem from a concrete value and its digit count.
    pub fn from_value(value: u64, digit_count: u32) -> Self {
        let (significant_digits, trailing_zero_count) = if digit_count <= 2 {
            // 2-digit values are taken verbatim, no zeroed-out tail.
            (digit_count, 0)
        } else {
            let significant = if digit_count <= 3 { 1 } else { 2 };
            (significant, digit_count - significant)
        };

        let canonical_answer = if trailing_zero_count == 0 {
            value
        } else {
            let scale = 10u64.pow(trailing_zero_count);
            round_half_up(value, scale)
        };

        Self {
            value,
            digit_count,
            significant_digits,
            trailing_zero_count,
            canonical_answer,
        }
    }

    /// Check the player's significant-digit input.
    ///
    /// Input longer than `significant_digits` characters is silently
    /// truncated to exactly that many before parsing; this mirrors the
    /// input box which refuses to hold more digits than the answer needs.
    pub fn validate(&self, input: &str) -> AnswerOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return AnswerOutcome::Invalid;
        }

        let truncated: String = trimmed
            .chars()
            .take(self.significant_digits as usize)
            .collect();
        let Ok(parsed) = truncated.parse::<u64>() else {
            return AnswerOutcome::Invalid;
        };

        let reconstructed = parsed * 10u64.pow(self.trailing_zero_count);
        if reconstructed == self.canonical_answer {
            AnswerOutcome::Correct { reconstructed }
        } else {
            AnswerOutcome::Incorrect {
                reconstructed,
                error: self.value.abs_diff(reconstructed),
            }
        }
    }
}

/// Generate a problem from the enabled digit-count difficulties.
///
/// An empty or entirely invalid selection is silently repaired to the full
/// set, so a request can never be unsolvable.
pub fn generate(rng: &mut impl Rng, enabled_digit_counts: &[u32]) -> RoundingProblem {
    let mut choices: Vec<u32> = enabled_digit_counts
        .iter()
        .copied()
        .filter(|d| DIGIT_COUNT_CHOICES.contains(d))
        .collect();
    if choices.is_empty() {
        choices.extend(DIGIT_COUNT_CHOICES);
    }

    let digit_count = choices[rng.gen_range(0..choices.len())];
    let min = 10u64.pow(digit_count - 1);
    let max = 10u64.pow(digit_count) - 1;
    let value = rng.gen_range(min..=max);

    RoundingProblem::from_value(value, digit_count)
}

/// Marker positions for the feedback number line shown after a miss.
///
/// All positions are percentages along the axis. The axis is widened by a
/// buffer so near-duplicate values remain visually separable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizationLayout {
    pub min_display: f64,
    pub max_display: f64,
    pub original_pos: f64,
    pub guess_pos: f64,
    pub correct_pos: f64,
}

/// Compute the feedback axis for the original value, the player's
/// reconstructed guess, and the canonical answer.
pub fn visualization_layout(value: u64, guess: u64, canonical_answer: u64) -> VisualizationLayout {
    let values = [value as f64, guess as f64, canonical_answer as f64];
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let spread = max - min;
    let range_buffer = f64::max(0.1 * spread, 0.1 * max);

    let min_display = f64::max(0.0, min - range_buffer);
    let max_display = max + range_buffer;
    let display_range = max_display - min_display;

    let position = |v: f64| (v - min_display) / display_range * 100.0;

    VisualizationLayout {
        min_display,
        max_display,
        original_pos: position(value as f64),
        guess_pos: position(guess as f64),
        correct_pos: position(canonical_answer as f64),
    }
}

/// Round `value` to the nearest multiple of `scale`, halves away from zero.
fn round_half_up(value: u64, scale: u64) -> u64 {
    (value + scale / 2) / scale * scale
}
