//! Property tests for the estimators
//!
//! Checks the behavioural guarantees over generated inputs rather than
//! hand-picked examples.

use proptest::prelude::*;
use sitewatch_core::{
    time::ManualClock, DecayingRiskGrid, EmaConfig, EmaForecaster, EtaConfig, EtaEstimator,
    Kalman1D, KalmanConfig, RiskGridConfig,
};

proptest! {
    #[test]
    fn ema_cold_start_returns_input(alpha in 0.01f32..=1.0, v in -1.0e6f32..1.0e6) {
        let mut ema = EmaForecaster::new(EmaConfig::default().with_alpha(alpha)).unwrap();
        prop_assert_eq!(ema.update(v), v);
        prop_assert_eq!(ema.predict(5), Ok(v));
    }

    #[test]
    fn ema_approaches_constant_without_overshoot(
        alpha in 0.05f32..0.95,
        start in -100.0f32..100.0,
        target in -100.0f32..100.0,
    ) {
        let mut ema = EmaForecaster::new(EmaConfig::default().with_alpha(alpha)).unwrap();
        ema.update(start);

        let mut gap = (target - start).abs();
        for _ in 0..200 {
            let level = ema.update(target);
            let new_gap = (target - level).abs();
            prop_assert!(new_gap <= gap + 1e-4);
            // Never crosses to the other side of the target
            prop_assert!((level - target) * (start - target).signum() >= -1e-3);
            gap = new_gap;
        }
        prop_assert!(gap < 1e-2);
    }

    #[test]
    fn kalman_cold_start_and_gain_bounds(
        q in 1.0e-5f32..1.0,
        r in 1.0e-5f32..1.0,
        readings in prop::collection::vec(-50.0f32..50.0, 1..60),
    ) {
        let config = KalmanConfig::default().with_process_noise(q).with_measurement_noise(r);
        let mut kf = Kalman1D::new(config).unwrap();

        prop_assert_eq!(kf.update(readings[0]), readings[0]);
        prop_assert_eq!(kf.variance(), Some(1.0));

        let lo = readings.iter().cloned().fold(f32::INFINITY, f32::min);
        let hi = readings.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        for &z in &readings[1..] {
            let x = kf.update(z);
            let k = kf.last_gain().unwrap();
            prop_assert!((0.0..=1.0).contains(&k));
            prop_assert!(kf.variance().unwrap() >= 0.0);
            // A convex blend never leaves the hull of the inputs
            prop_assert!(x >= lo - 1e-3 && x <= hi + 1e-3);
        }
    }

    #[test]
    fn kalman_variance_is_non_increasing(q in 1.0e-4f32..0.1, r in 1.0e-3f32..0.5) {
        let config = KalmanConfig::default().with_process_noise(q).with_measurement_noise(r);
        let mut kf = Kalman1D::new(config).unwrap();
        kf.update(0.0);

        let mut prev = kf.variance().unwrap();
        for _ in 0..400 {
            kf.update(0.0);
            let p = kf.variance().unwrap();
            prop_assert!(p <= prev * (1.0 + 1e-5) + 1e-9);
            prev = p;
        }
        let fixed_point = config.steady_state_variance();
        prop_assert!((prev - fixed_point).abs() <= fixed_point * 2e-3 + 1e-6);
    }

    #[test]
    fn eta_window_holds_latest_non_negative(
        window in 1usize..16,
        speeds in prop::collection::vec(-10.0f32..30.0, 0..64),
    ) {
        let mut eta = EtaEstimator::new(EtaConfig::default().with_window(window)).unwrap();
        for &s in &speeds {
            eta.update_speed(s);
        }

        let kept: Vec<f32> = eta.samples().collect();
        prop_assert!(kept.len() <= window);
        prop_assert!(kept.iter().all(|&s| s >= 0.0));

        let expected: Vec<f32> = speeds
            .iter()
            .skip(speeds.len().saturating_sub(window))
            .map(|&s| s.max(0.0))
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn eta_is_finite_and_bounded_by_floor(
        speeds in prop::collection::vec(0.0f32..30.0, 0..20),
        distance in 0.0f32..10_000.0,
    ) {
        let mut eta = EtaEstimator::new(EtaConfig::default()).unwrap();
        for &s in &speeds {
            eta.update_speed(s);
        }
        let seconds = eta.estimate_eta_seconds(distance);
        prop_assert!(seconds.is_finite());
        prop_assert!(seconds <= distance / eta.min_speed() * (1.0 + 1e-5) + 1e-3);
    }

    #[test]
    fn grid_cells_stay_non_negative(
        ops in prop::collection::vec((0usize..6, 0usize..6, -3.0f32..5.0, 0u64..4_000), 0..40),
    ) {
        let clock = ManualClock::new(0);
        let config = RiskGridConfig::new(4, 4).with_decay_per_sec(0.2);
        let mut grid = DecayingRiskGrid::with_clock(config, &clock).unwrap();

        for (row, col, amount, wait_ms) in ops {
            clock.advance(wait_ms);
            let applied = grid.reinforce([(row, col)], amount);
            prop_assert_eq!(applied, usize::from(row < 4 && col < 4));
            prop_assert!(grid.get().as_slice().iter().all(|&v| v >= 0.0));
        }
    }
}
