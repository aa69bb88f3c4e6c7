//! HTTP client for the device network status endpoint
//!
//! ## Overview
//!
//! Polls the field device's `/network` endpoint with a short timeout. The
//! dashboard must keep rendering when the device is offline, so the usual
//! entry point is [`NetworkStatusClient::fetch_or_simulate`], which logs the
//! failure and serves a simulated reading instead.
//!
//! ## Implementation Choices
//!
//! - Blocking `ureq` agent: one small GET per dashboard refresh
//! - No retries: the next refresh is the retry
//! - Anything other than `200 OK` counts as a failure
//!
//! ## Example Usage
//!
//! ```no_run
//! use sitewatch_connectors::http::{NetworkStatusClient, NetworkStatusConfig};
//!
//! let config = NetworkStatusConfig::new("http://192.168.1.61/network").timeout_secs(2);
//! let client = NetworkStatusClient::new(config)?;
//!
//! let reading = client.fetch_or_simulate();
//! println!("RSSI: {} dBm, quality: {}%", reading.rssi, reading.quality);
//! # Ok::<(), sitewatch_connectors::NetworkError>(())
//! ```

use std::time::Duration;

use crate::network::{unix_now_secs, NetworkError, NetworkStrength};

/// Address the device serves its status on out of the box
pub const DEFAULT_DEVICE_URL: &str = "http://192.168.1.61/network";

/// Network status client configuration
#[derive(Debug, Clone)]
pub struct NetworkStatusConfig {
    /// Full URL of the status endpoint
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for NetworkStatusConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_URL)
    }
}

impl NetworkStatusConfig {
    /// Create configuration for the given endpoint
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(2),
            user_agent: format!("Sitewatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set request timeout in milliseconds
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout = Duration::from_millis(ms);
        self
    }
}

/// Fetches link strength from the field device
pub struct NetworkStatusClient {
    config: NetworkStatusConfig,
    agent: ureq::Agent,
}

impl NetworkStatusClient {
    /// Create a client, validating the endpoint URL
    pub fn new(config: NetworkStatusConfig) -> Result<Self, NetworkError> {
        if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
            return Err(NetworkError::Config(
                "URL must start with http:// or https://".into(),
            ));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self { config, agent })
    }

    /// Configuration in use
    pub fn config(&self) -> &NetworkStatusConfig {
        &self.config
    }

    /// Fetch the current reading from the device
    pub fn fetch(&self) -> Result<NetworkStrength, NetworkError> {
        let response = match self.agent.get(&self.config.url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => {
                return Err(NetworkError::UnexpectedStatus { status: code });
            }
            Err(ureq::Error::Transport(e)) => {
                return Err(NetworkError::Request(e.to_string()));
            }
        };

        // ureq only errors on 4xx/5xx; 204 and friends land here
        if response.status() != 200 {
            return Err(NetworkError::UnexpectedStatus { status: response.status() });
        }

        let body = response
            .into_string()
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        NetworkStrength::from_payload(&body, unix_now_secs())
    }

    /// Fetch from the device, or serve a simulated reading if that fails
    pub fn fetch_or_simulate(&self) -> NetworkStrength {
        match self.fetch() {
            Ok(reading) => reading,
            Err(e) => {
                log::warn!("network status unavailable from {}: {}", self.config.url, e);
                NetworkStrength::simulated(&mut rand::thread_rng(), unix_now_secs())
            }
        }
    }
}
