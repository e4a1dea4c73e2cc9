//! Number-line estimation game engine.
//!
//! The player is shown a target value and an unlabeled line spanning
//! `[min, max]`. A guess is a normalized position in `[0, 1]` along the
//! line; scoring measures how far the guess landed from the target's true
//! position, as a percentage of the line's width.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A number-line range. Invariant: `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub min: i64,
    pub max: i64,
}

impl LineRange {
    pub fn width(&self) -> i64 {
        self.max - self.min
    }
}

/// Star rating for a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccuracyBand {
    pub stars: u32,
    pub message: &'static str,
}

/// Magnitude bands for large-number range randomization.
const MAGNITUDE_BANDS: [(i64, i64); 3] = [
    (1_000, 10_000),
    (10_000, 100_000),
    (100_000, 1_000_000),
];

/// Draw a target value inside `[min, max]`.
///
/// With decimals the draw is uniform over the reals; without, it is a
/// uniform integer draw inclusive of both endpoints.
pub fn generate_target(rng: &mut impl Rng, min: f64, max: f64, allow_decimals: bool) -> f64 {
    let range = max - min;
    if allow_decimals {
        min + rng.gen::<f64>() * range
    } else {
        (min + rng.gen::<f64>() * (range + 1.0)).floor()
    }
}

/// Map a normalized click position back to the value it implies.
pub fn implied_value(normalized_position: f64, min: f64, max: f64) -> f64 {
    min + (max - min) * normalized_position
}

/// The target's true normalized position on the line.
pub fn correct_position(target: f64, min: f64, max: f64) -> f64 {
    (target - min) / (max - min)
}

/// Percentage error between the guess position and the target position.
pub fn score_guess(normalized_position: f64, min: f64, max: f64, target: f64) -> f64 {
    (normalized_position - correct_position(target, min, max)).abs() * 100.0
}

/// Band a percentage error into stars. Upper bounds are inclusive.
pub fn band(percentage_error: f64) -> AccuracyBand {
    if percentage_error <= 10.0 {
        AccuracyBand {
            stars: 3,
            message: "Amazing! Great job!",
        }
    } else if percentage_error <= 20.0 {
        AccuracyBand {
            stars: 2,
            message: "Good work! Getting closer!",
        }
    } else if percentage_error <= 30.0 {
        AccuracyBand {
            stars: 1,
            message: "Nice try! Keep practicing!",
        }
    } else {
        AccuracyBand {
            stars: 0,
            message: "Keep trying! You'll get better with practice!",
        }
    }
}

/// Produce a fresh practice range.
///
/// Large-magnitude ranges pick one of three bands and build a "round" base
/// value and width (1-2 significant digits scaled to the band), with the
/// width clamped to `[10% of the band floor, 90% of the band ceiling]`.
/// Small ranges multiply a pair of small integers by 10 or 100 (weighted
/// 70/30). The minimum's sign is flipped at random only when negatives are
/// enabled.
pub fn randomize_range(
    rng: &mut impl Rng,
    use_large_magnitude: bool,
    allow_negative: bool,
) -> LineRange {
    if use_large_magnitude {
        let (band_floor, band_ceil) = MAGNITUDE_BANDS[rng.gen_range(0..MAGNITUDE_BANDS.len())];
        let order = (band_floor as f64).log10().floor() as u32;

        let mut min = round_base(rng, order);
        let mut width = round_base(rng, order);

        let min_width = band_floor / 10;
        let max_width = band_ceil / 10 * 9;
        width = width.clamp(min_width, max_width);

        if allow_negative && rng.gen_bool(0.5) {
            min = -min;
        }

        LineRange {
            min,
            max: min + width,
        }
    } else {
        let base_min = rng.gen_range(1..=9i64);
        let base_max = base_min + rng.gen_range(1..=9i64);
        let multiplier = if rng.gen_bool(0.7) { 10 } else { 100 };

        let mut min = base_min * multiplier;
        if allow_negative && rng.gen_bool(0.5) {
            min = -min;
        }

        LineRange {
            min,
            max: min + (base_max - base_min) * multiplier,
        }
    }
}

/// A round number with 1-2 significant digits scaled to the given order of
/// magnitude (e.g. order 3 yields 1_000..=9_900).
fn round_base(rng: &mut impl Rng, order: u32) -> i64 {
    let significant_digits = if rng.gen_bool(0.5) { 1 } else { 2 };
    let base = if significant_digits == 1 {
        rng.gen_range(1..=9i64)
    } else {
        rng.gen_range(10..=99i64)
    };
    base * 10i64.pow(order - (significant_digits - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    #[test]
    fn exact_guess_scores_zero() {
        let error = score_guess(0.63, 0.0, 100.0, 63.0);
        assert!(error.abs() < 1e-9);
    }

    #[test]
    fn concrete_scoring_scenario() {
        // Target 63 on a 0-100 line, click at 65%.
        let error = score_guess(0.65, 0.0, 100.0, 63.0);
        assert!((error - 2.0).abs() < 1e-9);
        assert_eq!(band(error).stars, 3);
    }

    #[test]
    fn band_cut_points_are_inclusive() {
        assert_eq!(band(10.0).stars, 3);
        assert_eq!(band(10.000001).stars, 2);
        assert_eq!(band(20.0).stars, 2);
        assert_eq!(band(30.0).stars, 1);
        assert_eq!(band(30.000001).stars, 0);
    }

    #[test]
    fn implied_value_maps_endpoints() {
        assert_eq!(implied_value(0.0, -50.0, 150.0), -50.0);
        assert_eq!(implied_value(1.0, -50.0, 150.0), 150.0);
        assert_eq!(implied_value(0.5, -50.0, 150.0), 50.0);
    }

    #[test]
    fn integer_targets_stay_in_range() {
        let mut rng = Mcg128Xsl64::seed_from_u64(11);
        for _ in 0..500 {
            let target = generate_target(&mut rng, -20.0, 30.0, false);
            assert_eq!(target, target.floor());
            assert!((-20.0..=30.0).contains(&target));
        }
    }

    #[test]
    fn decimal_targets_stay_in_range() {
        let mut rng = Mcg128Xsl64::seed_from_u64(12);
        for _ in 0..500 {
            let target = generate_target(&mut rng, 0.0, 100.0, true);
            assert!((0.0..=100.0).contains(&target));
        }
    }

    #[test]
    fn small_ranges_are_round_and_ordered() {
        let mut rng = Mcg128Xsl64::seed_from_u64(13);
        for _ in 0..500 {
            let range = randomize_range(&mut rng, false, false);
            assert!(range.min < range.max);
            assert!(range.min > 0);
            // Both bounds are multiples of the 10/100 multiplier.
            assert_eq!(range.min % 10, 0);
            assert_eq!(range.width() % 10, 0);
        }
    }

    #[test]
    fn small_negative_ranges_still_ordered() {
        let mut rng = Mcg128Xsl64::seed_from_u64(14);
        let mut saw_negative = false;
        for _ in 0..500 {
            let range = randomize_range(&mut rng, false, true);
            assert!(range.min < range.max);
            saw_negative |= range.min < 0;
        }
        assert!(saw_negative);
    }

    #[test]
    fn large_ranges_respect_width_clamp() {
        let mut rng = Mcg128Xsl64::seed_from_u64(15);
        for _ in 0..500 {
            let range = randomize_range(&mut rng, true, false);
            assert!(range.min < range.max);
            // The base magnitude identifies the band; check its clamp.
            let (band_floor, band_ceil) = match range.min {
                1_000..=9_999 => (1_000i64, 10_000i64),
                10_000..=99_999 => (10_000, 100_000),
                100_000..=999_999 => (100_000, 1_000_000),
                other => panic!("base {other} outside every magnitude band"),
            };
            assert!(range.width() >= band_floor / 10);
            assert!(range.width() <= band_ceil / 10 * 9);
        }
    }

    #[test]
    fn negatives_require_opt_in() {
        let mut rng = Mcg128Xsl64::seed_from_u64(16);
        for _ in 0..200 {
            let range = randomize_range(&mut rng, true, false);
            assert!(range.min > 0);
        }
    }
}
