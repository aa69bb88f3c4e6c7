//! Arrival Time Example
//!
//! Feeds a speed series with one outlier into a five-sample window and
//! prints the ETA after each sample.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_eta
//! ```

use sitewatch_core::{EtaConfig, EtaEstimator, EstimatorResult};

fn main() -> EstimatorResult<()> {
    println!("Sitewatch ETA Example");
    println!("=====================\n");

    let mut eta = EtaEstimator::new(EtaConfig::default().with_window(5))?;
    let remaining_distance_m = 1000.0;

    println!("Before any samples: {:.1} s (floor speed {} m/s)\n",
        eta.estimate_eta_seconds(remaining_distance_m),
        eta.min_speed()
    );

    println!("Initial distance: {:.1} meters", remaining_distance_m);
    for speed in [5.0, 4.8, 5.2, 10.0, 4.9, 5.1, 4.7] {
        eta.update_speed(speed);
        let seconds = eta.estimate_eta_seconds(remaining_distance_m);
        println!(
            "Speed In: {:<4.1} m/s | Avg Speed: {:.2} m/s | ETA: {:.1} seconds",
            speed,
            remaining_distance_m / seconds,
            seconds
        );
    }

    Ok(())
}
