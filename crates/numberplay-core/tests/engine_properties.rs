//! Property tests for the problem engines.

use numberplay_core::games::numberline::{
    correct_position, generate_target, randomize_range, score_guess,
};
use numberplay_core::games::rounding::{self, AnswerOutcome, RoundingProblem};
use numberplay_core::stats::SessionStats;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

/// A digit count in 3..=6 paired with a value of exactly that many digits.
fn rounded_value() -> impl Strategy<Value = (u32, u64)> {
    (3u32..=6).prop_flat_map(|d| {
        let min = 10u64.pow(d - 1);
        let max = 10u64.pow(d) - 1;
        (Just(d), min..=max)
    })
}

proptest! {
    #[test]
    fn canonical_answer_is_a_nearby_multiple((digit_count, value) in rounded_value()) {
        let problem = RoundingProblem::from_value(value, digit_count);
        let scale = 10u64.pow(problem.trailing_zero_count);

        prop_assert_eq!(problem.canonical_answer % scale, 0);
        prop_assert!(problem.value.abs_diff(problem.canonical_answer) < scale);
    }

    #[test]
    fn two_digit_values_round_to_themselves(value in 10u64..=99) {
        let problem = RoundingProblem::from_value(value, 2);
        prop_assert_eq!(problem.canonical_answer, value);
        prop_assert_eq!(problem.trailing_zero_count, 0);
    }

    #[test]
    fn validate_is_idempotent((digit_count, value) in rounded_value(), input in "[0-9]{0,4}") {
        let problem = RoundingProblem::from_value(value, digit_count);
        prop_assert_eq!(problem.validate(&input), problem.validate(&input));
    }

    #[test]
    fn correct_significant_digits_always_pass((digit_count, value) in rounded_value()) {
        let problem = RoundingProblem::from_value(value, digit_count);
        let scale = 10u64.pow(problem.trailing_zero_count);
        let leading = (problem.canonical_answer / scale).to_string();

        match problem.validate(&leading) {
            AnswerOutcome::Correct { reconstructed } => {
                prop_assert_eq!(reconstructed, problem.canonical_answer);
            }
            other => prop_assert!(false, "expected Correct, got {:?}", other),
        }
    }

    #[test]
    fn generated_problems_respect_the_selection(seed in any::<u64>(), pick in 0usize..5) {
        let enabled = [rounding::DIGIT_COUNT_CHOICES[pick]];
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        let problem = rounding::generate(&mut rng, &enabled);
        prop_assert_eq!(problem.digit_count, enabled[0]);
    }

    #[test]
    fn layout_positions_stay_on_the_axis(
        value in 10u64..1_000_000,
        guess in 0u64..2_000_000,
        correct in 10u64..1_000_000,
    ) {
        let layout = rounding::visualization_layout(value, guess, correct);
        prop_assert!(layout.min_display < layout.max_display);
        for pos in [layout.original_pos, layout.guess_pos, layout.correct_pos] {
            prop_assert!((0.0..=100.0).contains(&pos));
        }
    }

    #[test]
    fn exact_position_always_scores_zero(
        min in -1_000_000.0f64..1_000_000.0,
        width in 1.0f64..1_000_000.0,
        fraction in 0.0f64..=1.0,
    ) {
        let max = min + width;
        let target = min + width * fraction;
        let exact = correct_position(target, min, max);
        prop_assert_eq!(score_guess(exact, min, max, target), 0.0);
    }

    #[test]
    fn targets_never_escape_the_range(seed in any::<u64>(), decimals in any::<bool>()) {
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        let target = generate_target(&mut rng, -500.0, 500.0, decimals);
        prop_assert!((-500.0..=500.0).contains(&target));
    }

    #[test]
    fn randomized_ranges_are_well_formed(
        seed in any::<u64>(),
        large in any::<bool>(),
        negatives in any::<bool>(),
    ) {
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        let range = randomize_range(&mut rng, large, negatives);
        prop_assert!(range.min < range.max);
        if !negatives {
            prop_assert!(range.min > 0);
        }
        if large {
            // The base magnitude identifies which band was drawn; the
            // width must sit within that band's clamp, 10% of the floor
            // to 90% of the ceiling.
            let base = range.min.abs();
            let (band_floor, band_ceil) = match base {
                1_000..=9_999 => (1_000i64, 10_000i64),
                10_000..=99_999 => (10_000, 100_000),
                _ => {
                    prop_assert!(
                        (100_000..=999_999).contains(&base),
                        "base {} outside every magnitude band",
                        base
                    );
                    (100_000, 1_000_000)
                }
            };
            prop_assert!(range.width() >= band_floor / 10);
            prop_assert!(range.width() <= band_ceil / 10 * 9);
        }
    }

    #[test]
    fn accuracy_percent_is_bounded(attempts in 0u64..10_000, extra in 0u64..10_000) {
        let correct = attempts.saturating_sub(extra);
        let stats = SessionStats { attempts, correct };
        prop_assert!(stats.accuracy_percent() <= 100);
        if attempts == 0 {
            prop_assert_eq!(stats.accuracy_percent(), 0);
        }
    }
}
