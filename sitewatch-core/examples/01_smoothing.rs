//! Smoothing Example
//!
//! Runs the two scalar smoothers over short series and prints how the
//! estimates evolve.
//!
//! ## What You'll Learn
//!
//! - Cold start behaviour of the EMA (first value passes straight through)
//! - Reading the Kalman variance to judge how settled an estimate is
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_smoothing
//! ```

use sitewatch_core::{EmaConfig, EmaForecaster, EstimatorResult, Kalman1D, KalmanConfig};

fn main() -> EstimatorResult<()> {
    println!("Sitewatch Smoothing Example");
    println!("===========================\n");

    println!("EMA over a price signal (alpha = 0.2)");
    println!("-------------------------------------");
    let mut ema = EmaForecaster::new(EmaConfig::default().with_alpha(0.2))?;
    for price in [10.0, 10.5, 11.0, 9.5, 12.0, 11.5] {
        let smoothed = ema.update(price);
        println!("Observation: {:<4} | EMA: {:.3}", price, smoothed);
    }
    println!("\nPrediction for next step: {:.3}\n", ema.predict(1)?);

    println!("Kalman over a noisy 5.0 signal (q = 1e-3, r = 0.1)");
    println!("---------------------------------------------------");
    let config = KalmanConfig::default()
        .with_process_noise(1e-3)
        .with_measurement_noise(0.1);
    let mut kf = Kalman1D::new(config)?;

    // Fixed jitter so every run prints the same table
    let jitter = [0.31, -0.42, 0.18, -0.07, 0.45, -0.29, 0.02, 0.36, -0.48, 0.11];
    println!("| {:<12} | {:<13} | {:<15} |", "Observation", "Filtered Est.", "Uncertainty (P)");
    for n in jitter {
        let measurement = 5.0 + n;
        let estimate = kf.update(measurement);
        println!(
            "| {:<12.3} | {:<13.3} | {:<15.6} |",
            measurement,
            estimate,
            kf.variance().unwrap_or_default()
        );
    }
    println!(
        "\nSteady-state variance for this config: {:.6}",
        config.steady_state_variance()
    );

    Ok(())
}
