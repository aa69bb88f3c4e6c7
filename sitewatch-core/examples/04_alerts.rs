//! Sensor Alert Example
//!
//! Classifies a handful of temperature / gas / vibration snapshots and
//! smooths the temperature channel before classifying it.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 04_alerts
//! ```

use sitewatch_core::{
    alerts::{AlertThresholds, SensorSnapshot},
    EmaConfig, EmaForecaster, EstimatorResult,
};

fn main() -> EstimatorResult<()> {
    println!("Sitewatch Alert Example");
    println!("=======================\n");

    let thresholds = AlertThresholds::default();
    let snapshots = [
        SensorSnapshot::new(88.0, 95.0, 0.62),
        SensorSnapshot::new(97.3, 110.0, 0.71),
        SensorSnapshot::new(99.1, 135.0, 0.93),
        SensorSnapshot::new(104.6, 182.0, 1.27),
    ];

    // Raw readings vs. an EMA-smoothed temperature channel
    let mut temperature = EmaForecaster::new(EmaConfig::default())?;
    for raw in snapshots {
        let smoothed = SensorSnapshot {
            temperature_c: temperature.update(raw.temperature_c),
            ..raw
        };

        let alert = thresholds.classify(&raw);
        let smoothed_alert = thresholds.classify(&smoothed);
        println!(
            "raw [{:>8}] {}",
            alert.severity().color().unwrap_or("none"),
            alert
        );
        println!(
            "ema [{:>8}] {}\n",
            smoothed_alert.severity().color().unwrap_or("none"),
            smoothed_alert
        );
    }

    Ok(())
}
