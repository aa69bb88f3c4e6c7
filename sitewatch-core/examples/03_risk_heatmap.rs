//! Risk Heatmap Example
//!
//! Reinforces a 3x3 grid, waits one second of wall-clock time and shows the
//! decay applied on the next access.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_risk_heatmap
//! ```

use std::{thread, time::Duration};

use sitewatch_core::{DecayingRiskGrid, EstimatorResult, RiskGridConfig, RiskGridView};

fn print_grid(view: RiskGridView<'_>) {
    for row in view.iter_rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.3}")).collect();
        println!("[{}]", cells.join(", "));
    }
}

fn main() -> EstimatorResult<()> {
    println!("Sitewatch Risk Heatmap Example");
    println!("==============================\n");

    // 10% decay per second
    let mut heatmap = DecayingRiskGrid::new(RiskGridConfig::new(3, 3).with_decay_per_sec(0.1))?;

    println!("Initial heatmap:");
    print_grid(heatmap.get());

    heatmap.reinforce([(1, 1), (0, 2)], 5.0);
    println!("\nAfter reinforcing (1,1) and (0,2) by 5.0:");
    print_grid(heatmap.get());

    println!("\n[...waiting 1 second for decay...]");
    thread::sleep(Duration::from_secs(1));

    heatmap.reinforce([(1, 1)], 2.0);
    println!("\nAfter 1s decay + reinforcing (1,1) by 2.0:");
    print_grid(heatmap.get());

    // Stale coordinates are dropped silently
    heatmap.reinforce([(99, 99)], 1.0);

    if let Some((row, col, value)) = heatmap.get().peak() {
        println!("\nHottest cell: ({row}, {col}) = {value:.3}");
    }

    Ok(())
}
