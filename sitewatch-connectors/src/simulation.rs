//! Simulated sensor feed
//!
//! Stands in for the temperature / gas / vibration hardware during
//! development. Readings are deliberately biased towards the alert
//! thresholds so every severity shows up within a few refreshes.
//!
//! | Mode | Probability | Temperature | Gas | Vibration |
//! |------|-------------|-------------|-----|-----------|
//! | critical burst | 5% | 98-110 °C | 130-200 ppm | 0.9-1.5 g |
//! | elevated | 95% | 85-105 °C | 80-150 ppm | 0.6-1.2 g |

use rand::{rngs::StdRng, Rng, SeedableRng};
use sitewatch_core::alerts::SensorSnapshot;

use crate::SensorFeed;

/// Probability of a reading with every sensor in the critical band
pub const CRITICAL_BURST_PROBABILITY: f64 = 0.05;

/// Randomized sensor readings
#[derive(Debug, Clone)]
pub struct SimulatedSensorFeed {
    rng: StdRng,
}

impl SimulatedSensorFeed {
    /// Feed seeded from OS entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible feed
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for SimulatedSensorFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorFeed for SimulatedSensorFeed {
    fn next_snapshot(&mut self) -> SensorSnapshot {
        let rng = &mut self.rng;
        if rng.gen_bool(CRITICAL_BURST_PROBABILITY) {
            SensorSnapshot::new(
                rng.gen_range(98.0..=110.0),
                rng.gen_range(130.0..=200.0),
                rng.gen_range(0.9..=1.5),
            )
        } else {
            SensorSnapshot::new(
                rng.gen_range(85.0..=105.0),
                rng.gen_range(80.0..=150.0),
                rng.gen_range(0.6..=1.2),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewatch_core::alerts::{AlertThresholds, Severity};

    #[test]
    fn readings_stay_in_the_widest_band() {
        let mut feed = SimulatedSensorFeed::with_seed(11);
        for _ in 0..1_000 {
            let s = feed.next_snapshot();
            assert!((85.0..=110.0).contains(&s.temperature_c));
            assert!((80.0..=200.0).contains(&s.gas_ppm));
            assert!((0.6..=1.5).contains(&s.vibration_g));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimulatedSensorFeed::with_seed(3);
        let mut b = SimulatedSensorFeed::with_seed(3);
        for _ in 0..20 {
            assert_eq!(a.next_snapshot(), b.next_snapshot());
        }
    }

    #[test]
    fn every_severity_shows_up() {
        let thresholds = AlertThresholds::default();
        let mut feed = SimulatedSensorFeed::with_seed(2024);
        let mut seen = [false; 3];
        for _ in 0..2_000 {
            let severity = thresholds.classify(&feed.next_snapshot()).severity();
            seen[severity as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
        assert!(Severity::Normal < Severity::Critical);
    }
}
