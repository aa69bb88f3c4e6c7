//! Network Status Example
//!
//! Fetches the device's link strength, falling back to a simulated reading
//! when the device is not on the network.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run -p sitewatch-connectors --example network_status -- http://192.168.1.61/network
//! ```

use sitewatch_connectors::{
    http::{NetworkStatusClient, NetworkStatusConfig, DEFAULT_DEVICE_URL},
    NetworkError,
};

fn main() -> Result<(), NetworkError> {
    let url = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_DEVICE_URL.to_string());

    println!("Attempting to fetch network status from {url}...");
    let client = NetworkStatusClient::new(NetworkStatusConfig::new(url))?;

    match client.fetch() {
        Ok(status) => println!("Live reading: {:?}", status),
        Err(e) => println!("Device unavailable ({e}), serving simulated reading"),
    }

    let status = client.fetch_or_simulate();
    println!("--- Network Status Result ---");
    println!("RSSI: {} dBm", status.rssi);
    println!("Quality: {} %", status.quality);
    println!(
        "Full Data: {}",
        serde_json::to_string(&status).unwrap_or_default()
    );

    Ok(())
}
