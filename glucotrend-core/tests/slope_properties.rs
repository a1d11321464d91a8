//! Property tests for the numeric core
//!
//! The regression is checked against an independently computed closed-form
//! slope (different algebraic form, f64 arithmetic), and the projector's
//! clamp and the pacing counter are checked for their invariants across
//! random input streams.

use glucotrend_core::{
    AlertEngine, Reading, ReadingRing, SlopeEstimator, TrendProjector,
};
use proptest::prelude::*;

/// Closed-form OLS slope in f64: (n Σxy − Σx Σy) / (n Σx² − (Σx)²)
fn reference_slope(points: &[(i64, i32)]) -> f64 {
    let n = points.len() as f64;
    let x = |t: i64| (t / 60) as f64;
    let sum_x: f64 = points.iter().map(|&(t, _)| x(t)).sum();
    let sum_y: f64 = points.iter().map(|&(_, g)| g as f64).sum();
    let sum_xx: f64 = points.iter().map(|&(t, _)| x(t) * x(t)).sum();
    let sum_xy: f64 = points.iter().map(|&(t, g)| x(t) * g as f64).sum();

    (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x)
}

prop_compose! {
    /// Three readings with strictly increasing minutes and qualifying values
    fn three_readings()(
        start in 0i64..20_000,
        gap1 in 300i64..3600,
        gap2 in 300i64..3600,
        g0 in 21i32..400,
        g1 in 21i32..400,
        g2 in 21i32..400,
    ) -> [(i64, i32); 3] {
        [
            (start, g0),
            (start + gap1, g1),
            (start + gap1 + gap2, g2),
        ]
    }
}

proptest! {
    #[test]
    fn slope_matches_independent_regression(points in three_readings()) {
        let mut ring: ReadingRing<3> = ReadingRing::new();
        for &(t, g) in &points {
            ring.push(Reading::new(g, t));
        }

        let slope = SlopeEstimator::default().estimate(&ring) as f64;
        let expected = reference_slope(&points);

        let tolerance = 1e-3 * expected.abs().max(1.0);
        prop_assert!(
            (slope - expected).abs() <= tolerance,
            "slope {} vs reference {}",
            slope,
            expected
        );
    }

    #[test]
    fn unqualified_history_always_yields_zero(
        g0 in 0i32..=20,
        g1 in 0i32..=20,
        g2 in 0i32..=20,
        start in 0i64..100_000,
    ) {
        let mut ring: ReadingRing<3> = ReadingRing::new();
        for (i, g) in [g0, g1, g2].into_iter().enumerate() {
            ring.push(Reading::new(g, start + i as i64 * 300));
        }

        let slope = SlopeEstimator::default().estimate(&ring);
        prop_assert_eq!(slope, 0.0);
        prop_assert!(!slope.is_nan());
    }

    #[test]
    fn estimate_stays_inside_credible_band(
        current in 40i32..=300,
        slope in -20.0f32..20.0,
    ) {
        let projection = TrendProjector::default().project(current, slope);
        prop_assert!((40..=300).contains(&projection.estimated));
    }

    #[test]
    fn pacing_counter_stays_below_largest_ceiling(
        estimates in prop::collection::vec(0i32..=400, 1..100),
    ) {
        let mut engine = AlertEngine::new();
        for estimated in estimates {
            engine.evaluate(estimated, 0.0);
            prop_assert!(engine.state().repeat_counter < 24);
        }
    }
}
