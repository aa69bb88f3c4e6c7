//! Threshold alerts for the monitored sensors
//!
//! Classifies a temperature / gas / vibration snapshot into one of three
//! severities:
//!
//! | Exceeded | Severity | Dashboard colour |
//! |----------|----------|------------------|
//! | all three | `Critical` | red |
//! | one or two | `Warning` | yellow |
//! | none | `Normal` | - |
//!
//! A reading exceeds its threshold only when strictly greater. NaN never
//! exceeds anything.
//!
//! ```rust
//! use sitewatch_core::alerts::{AlertThresholds, SensorSnapshot, Severity};
//!
//! let thresholds = AlertThresholds::default();
//! let alert = thresholds.classify(&SensorSnapshot::new(101.0, 90.0, 0.5));
//! assert_eq!(alert.severity(), Severity::Warning);
//! assert_eq!(
//!     alert.to_string(),
//!     "WARNING: Elevated Sensor Readings: High Temp (101.0°C). Monitor system."
//! );
//! ```

use core::fmt;

use crate::constants::{
    GAS_CRITICAL_THRESHOLD_PPM, TEMP_CRITICAL_THRESHOLD_C, VIB_CRITICAL_THRESHOLD_G,
};

/// Number of sensors covered by a snapshot
const SENSOR_COUNT: usize = 3;

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Nothing exceeded
    Normal,
    /// Some sensors exceeded
    Warning,
    /// Every sensor exceeded
    Critical,
}

impl Severity {
    /// Dashboard colour, `None` when there is nothing to show
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Warning => Some("yellow"),
            Self::Critical => Some("red"),
        }
    }
}

/// Which sensor a reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SensorKind {
    /// Temperature in °C
    Temperature,
    /// Gas concentration in ppm
    Gas,
    /// Vibration amplitude in g
    Vibration,
}

/// One reading from each monitored sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSnapshot {
    /// Temperature (°C)
    #[cfg_attr(feature = "serde", serde(rename = "temperature"))]
    pub temperature_c: f32,
    /// Gas concentration (ppm)
    #[cfg_attr(feature = "serde", serde(rename = "gas_ppm"))]
    pub gas_ppm: f32,
    /// Vibration (g)
    #[cfg_attr(feature = "serde", serde(rename = "vibration_g"))]
    pub vibration_g: f32,
}

impl SensorSnapshot {
    /// Snapshot from raw readings
    pub fn new(temperature_c: f32, gas_ppm: f32, vibration_g: f32) -> Self {
        Self { temperature_c, gas_ppm, vibration_g }
    }

    fn readings(&self) -> [(SensorKind, f32); SENSOR_COUNT] {
        [
            (SensorKind::Temperature, self.temperature_c),
            (SensorKind::Gas, self.gas_ppm),
            (SensorKind::Vibration, self.vibration_g),
        ]
    }
}

/// Critical thresholds per sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertThresholds {
    /// Temperature threshold (°C)
    pub temperature_c: f32,
    /// Gas threshold (ppm)
    pub gas_ppm: f32,
    /// Vibration threshold (g)
    pub vibration_g: f32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            temperature_c: TEMP_CRITICAL_THRESHOLD_C,
            gas_ppm: GAS_CRITICAL_THRESHOLD_PPM,
            vibration_g: VIB_CRITICAL_THRESHOLD_G,
        }
    }
}

impl AlertThresholds {
    /// Set the temperature threshold
    pub fn with_temperature(mut self, celsius: f32) -> Self {
        self.temperature_c = celsius;
        self
    }

    /// Set the gas threshold
    pub fn with_gas(mut self, ppm: f32) -> Self {
        self.gas_ppm = ppm;
        self
    }

    /// Set the vibration threshold
    pub fn with_vibration(mut self, g: f32) -> Self {
        self.vibration_g = g;
        self
    }

    /// Threshold for one sensor
    pub fn threshold(&self, kind: SensorKind) -> f32 {
        match kind {
            SensorKind::Temperature => self.temperature_c,
            SensorKind::Gas => self.gas_ppm,
            SensorKind::Vibration => self.vibration_g,
        }
    }

    /// Compare a snapshot against the thresholds
    pub fn classify(&self, snapshot: &SensorSnapshot) -> Alert {
        // At most one exceedance per sensor, so the capacity always fits
        let exceeded: heapless::Vec<Exceedance, SENSOR_COUNT> = snapshot
            .readings()
            .into_iter()
            .map(|(kind, value)| Exceedance { kind, value, threshold: self.threshold(kind) })
            .filter(|e| e.value > e.threshold)
            .collect();

        let severity = match exceeded.len() {
            0 => Severity::Normal,
            SENSOR_COUNT => Severity::Critical,
            _ => Severity::Warning,
        };

        Alert { severity, snapshot: *snapshot, exceeded }
    }
}

/// A reading above its threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exceedance {
    /// Sensor the reading came from
    pub kind: SensorKind,
    /// The reading
    pub value: f32,
    /// Threshold it exceeded
    pub threshold: f32,
}

/// Classification result
///
/// `Display` renders the operator-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    severity: Severity,
    snapshot: SensorSnapshot,
    exceeded: heapless::Vec<Exceedance, SENSOR_COUNT>,
}

impl Alert {
    /// Overall severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Snapshot that was classified
    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    /// Exceeded sensors, in temperature / gas / vibration order
    pub fn exceeded(&self) -> &[Exceedance] {
        &self.exceeded
    }

    /// True unless severity is `Normal`
    pub fn is_active(&self) -> bool {
        self.severity != Severity::Normal
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Normal => write!(f, "System normal"),
            Severity::Critical => write!(
                f,
                "CRITICAL SYSTEM FAILURE: ALL Sensors Exceeded Thresholds! \
                 T:{:.1}°C, G:{:.0} ppm, V:{:.2}g.",
                self.snapshot.temperature_c, self.snapshot.gas_ppm, self.snapshot.vibration_g,
            ),
            Severity::Warning => {
                write!(f, "WARNING: Elevated Sensor Readings: ")?;
                for (i, e) in self.exceeded.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match e.kind {
                        SensorKind::Temperature => write!(f, "High Temp ({:.1}°C)", e.value)?,
                        SensorKind::Gas => write!(f, "High Gas ({:.0} ppm)", e.value)?,
                        SensorKind::Vibration => write!(f, "High Vib ({:.2} g)", e.value)?,
                    }
                }
                write!(f, ". Monitor system.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_below_is_normal() {
        let alert = AlertThresholds::default().classify(&SensorSnapshot::new(90.0, 100.0, 0.5));
        assert_eq!(alert.severity(), Severity::Normal);
        assert!(alert.exceeded().is_empty());
        assert!(!alert.is_active());
        assert_eq!(alert.severity().color(), None);
    }

    #[test]
    fn threshold_is_exclusive() {
        let alert = AlertThresholds::default().classify(&SensorSnapshot::new(95.0, 120.0, 0.8));
        assert_eq!(alert.severity(), Severity::Normal);
    }

    #[test]
    fn all_above_is_critical() {
        let alert = AlertThresholds::default().classify(&SensorSnapshot::new(101.24, 150.4, 1.234));
        assert_eq!(alert.severity(), Severity::Critical);
        assert_eq!(alert.severity().color(), Some("red"));
        assert_eq!(alert.exceeded().len(), 3);
    }

    #[test]
    fn partial_is_warning_in_sensor_order() {
        let alert = AlertThresholds::default().classify(&SensorSnapshot::new(80.0, 130.0, 0.9));
        assert_eq!(alert.severity(), Severity::Warning);
        assert_eq!(alert.severity().color(), Some("yellow"));
        let kinds: heapless::Vec<SensorKind, 3> = alert.exceeded().iter().map(|e| e.kind).collect();
        assert_eq!(kinds.as_slice(), &[SensorKind::Gas, SensorKind::Vibration]);
        assert_eq!(alert.exceeded()[0].threshold, 120.0);
    }

    #[test]
    fn nan_never_exceeds() {
        let alert = AlertThresholds::default().classify(&SensorSnapshot::new(f32::NAN, 200.0, 1.0));
        assert_eq!(alert.severity(), Severity::Warning);
    }

    #[test]
    fn custom_thresholds() {
        let thresholds = AlertThresholds::default()
            .with_temperature(30.0)
            .with_gas(10.0)
            .with_vibration(0.1);
        let alert = thresholds.classify(&SensorSnapshot::new(31.0, 11.0, 0.2));
        assert_eq!(alert.severity(), Severity::Critical);
    }

    #[test]
    fn severity_orders_by_urgency() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Normal);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages() {
        let thresholds = AlertThresholds::default();

        let critical = thresholds.classify(&SensorSnapshot::new(101.24, 150.4, 1.234));
        assert_eq!(
            critical.to_string(),
            "CRITICAL SYSTEM FAILURE: ALL Sensors Exceeded Thresholds! T:101.2°C, G:150 ppm, V:1.23g."
        );

        let warning = thresholds.classify(&SensorSnapshot::new(96.0, 121.0, 0.1));
        assert_eq!(
            warning.to_string(),
            "WARNING: Elevated Sensor Readings: High Temp (96.0°C), High Gas (121 ppm). Monitor system."
        );

        let normal = thresholds.classify(&SensorSnapshot::default());
        assert_eq!(normal.to_string(), "System normal");
    }
}
