//! Configuration profiles
//!
//! A Configuration is a saved profile describing one modulation run: the
//! message and carrier signals, the sampling grid and the demodulator cutoff.

use serde::{Deserialize, Serialize};

use crate::domain::error::ensure_positive;
use crate::domain::{Waveform, WaveResult};

/// Parameters of one periodic signal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Frequency in Hz
    pub frequency: f64,
    pub amplitude: f64,
    /// Phase offset in radians
    pub phase_offset: f64,
    pub waveform: Waveform,
}

impl SignalConfig {
    pub fn sine(frequency: f64) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            frequency: 400.0,
            amplitude: 1.0,
            phase_offset: 0.0,
            waveform: Waveform::Sine,
        }
    }
}

/// A saved run profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Profile name (e.g., "Default", "Slow carrier")
    pub name: String,
    /// Low-frequency message signal
    pub message: SignalConfig,
    /// High-frequency carrier signal
    pub carrier: SignalConfig,
    /// Wave duration in seconds
    pub duration: f64,
    /// Timestamp of the first sample in seconds
    pub start: f64,
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Demodulator low-pass cutoff in Hz
    pub cutoff_freq: f64,
}

impl Configuration {
    /// Check the parameters a run needs before any wave is generated
    pub fn validate(&self) -> WaveResult<()> {
        ensure_positive("duration", self.duration)?;
        ensure_positive("sample rate", self.sample_rate)?;
        ensure_positive("cutoff frequency", self.cutoff_freq)?;
        let nyquist = self.sample_rate / 2.0;
        if self.carrier.frequency >= nyquist {
            log::warn!(
                "carrier at {} Hz is at or above Nyquist ({nyquist} Hz) and will alias",
                self.carrier.frequency
            );
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            message: SignalConfig::sine(400.0),
            carrier: SignalConfig::sine(10_000.0),
            duration: 2.0,
            start: 0.0,
            sample_rate: 44_100.0,
            cutoff_freq: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WaveError;

    #[test]
    fn default_configuration_has_sensible_values() {
        let config = Configuration::default();
        assert_eq!(config.name, "Default");
        assert_eq!(config.message.frequency, 400.0);
        assert_eq!(config.cutoff_freq, 10_000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn configuration_serializes_to_json() {
        let config = Configuration::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"name\":\"Default\""));
        assert!(json.contains("\"waveform\":\"sine\""));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Configuration =
            serde_json::from_str(r#"{"name":"Short","duration":0.5}"#).unwrap();
        assert_eq!(config.name, "Short");
        assert_eq!(config.duration, 0.5);
        assert_eq!(config.sample_rate, 44_100.0);
        assert_eq!(config.carrier.frequency, 10_000.0);
    }

    #[test]
    fn validate_rejects_non_positive_cutoff() {
        let config = Configuration {
            cutoff_freq: 0.0,
            ..Configuration::default()
        };
        assert!(matches!(config.validate(), Err(WaveError::Config(_))));
    }

    #[test]
    fn validate_rejects_nan_sample_rate() {
        let config = Configuration {
            sample_rate: f64::NAN,
            ..Configuration::default()
        };
        assert!(matches!(config.validate(), Err(WaveError::Config(_))));
    }
}
