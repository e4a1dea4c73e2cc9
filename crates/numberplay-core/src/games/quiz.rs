//! Generic arithmetic quiz engine.
//!
//! Single-digit operand drills for the four basic operations. Division
//! problems are constructed backwards from the divisor and quotient so the
//! answer is always an exact integer.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '*',
            Operation::Division => '/',
        }
    }
}

/// One quiz question with its exact integer answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProblem {
    pub question: String,
    pub answer: i64,
}

/// Result of checking a quiz answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Empty or non-numeric input. Nothing advances.
    Invalid,
    Correct,
    Incorrect { expected: i64 },
}

/// Generate a problem for the given operation.
pub fn generate(rng: &mut impl Rng, operation: Operation) -> QuizProblem {
    match operation {
        Operation::Addition => {
            let a = rng.gen_range(0..10i64);
            let b = rng.gen_range(0..10i64);
            QuizProblem {
                question: format!("{a} + {b}"),
                answer: a + b,
            }
        }
        Operation::Subtraction => {
            let a = rng.gen_range(0..10i64);
            let b = rng.gen_range(0..10i64);
            QuizProblem {
                question: format!("{a} - {b}"),
                answer: a - b,
            }
        }
        Operation::Multiplication => {
            let a = rng.gen_range(0..10i64);
            let b = rng.gen_range(0..10i64);
            QuizProblem {
                question: format!("{a} * {b}"),
                answer: a * b,
            }
        }
        Operation::Division => {
            // Build from divisor and quotient so the division is exact.
            let divisor = rng.gen_range(1..10i64);
            let dividend = divisor * rng.gen_range(0..10i64);
            QuizProblem {
                question: format!("{dividend} / {divisor}"),
                answer: dividend / divisor,
            }
        }
    }
}

impl QuizProblem {
    /// Check a player's answer against the expected value.
    pub fn check(&self, input: &str) -> QuizOutcome {
        let Ok(parsed) = input.trim().parse::<i64>() else {
            return QuizOutcome::Invalid;
        };
        if parsed == self.answer {
            QuizOutcome::Correct
        } else {
            QuizOutcome::Incorrect {
                expected: self.answer,
            }
        }
    }
}
