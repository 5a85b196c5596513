//! Periodic signals and wave generation
//!
//! A `Signal` is a recipe (frequency, amplitude, phase offset, waveform);
//! `create_wave` samples it over a time window:
//!
//! ```text
//! y(t) = amplitude * waveform(2π * frequency * t + phase_offset)
//! ```

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::domain::error::ensure_positive;
use crate::domain::{SignalConfig, WaveError, WaveResult, Waveform};
use crate::dsp::wave::Wave;

/// Largest wave `create_wave` will allocate
pub const MAX_SAMPLES: usize = 1 << 28;

/// Sampling window used by [`Signal::create_default_wave`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Seconds
    pub duration: f64,
    /// Timestamp of the first sample
    pub start: f64,
    /// Hz
    pub sample_rate: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            duration: 2.0,
            start: 0.0,
            sample_rate: 3000.0,
        }
    }
}

/// A periodic oscillation
#[derive(Debug, Clone, Copy)]
pub struct Signal {
    frequency: f64,
    amplitude: f64,
    phase_offset: f64,
    waveform: Waveform,
}

impl Signal {
    /// Create a signal, rejecting negative or non-finite parameters.
    ///
    /// A frequency of 0.0 is allowed and yields a constant wave.
    pub fn new(
        frequency: f64,
        amplitude: f64,
        phase_offset: f64,
        waveform: Waveform,
    ) -> WaveResult<Self> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(WaveError::Config(format!(
                "frequency must be finite and non-negative, got {frequency}"
            )));
        }
        if !amplitude.is_finite() || !phase_offset.is_finite() {
            return Err(WaveError::Config(format!(
                "amplitude and phase offset must be finite, got {amplitude} and {phase_offset}"
            )));
        }
        Ok(Self {
            frequency,
            amplitude,
            phase_offset,
            waveform,
        })
    }

    /// Unit-amplitude sine at `frequency` Hz
    pub fn sine(frequency: f64) -> WaveResult<Self> {
        Self::new(frequency, 1.0, 0.0, Waveform::Sine)
    }

    pub fn from_config(config: &SignalConfig) -> WaveResult<Self> {
        Self::new(
            config.frequency,
            config.amplitude,
            config.phase_offset,
            config.waveform,
        )
    }

    pub fn builder() -> SignalBuilder {
        SignalBuilder::default()
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Seconds per cycle
    pub fn period(&self) -> WaveResult<f64> {
        if self.frequency == 0.0 {
            return Err(WaveError::Division(
                "period of a zero-frequency signal is undefined".to_string(),
            ));
        }
        Ok(1.0 / self.frequency)
    }

    /// Value of the signal at time `t` (seconds)
    pub fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * self.waveform.eval(TAU * self.frequency * t + self.phase_offset)
    }

    /// Sample the signal for `duration` seconds from `start` at `sample_rate` Hz.
    ///
    /// Produces `round(duration * sample_rate)` evenly spaced samples.
    pub fn create_wave(&self, duration: f64, start: f64, sample_rate: f64) -> WaveResult<Wave> {
        ensure_positive("duration", duration)?;
        ensure_positive("sample rate", sample_rate)?;

        let count = (duration * sample_rate).round();
        if !count.is_finite() || count > MAX_SAMPLES as f64 {
            return Err(WaveError::Config(format!(
                "{duration} s at {sample_rate} Hz needs {count} samples, limit is {MAX_SAMPLES}"
            )));
        }
        let n = count as usize;
        let timestamps: Vec<f64> = (0..n).map(|i| start + i as f64 / sample_rate).collect();
        let samples = timestamps.iter().map(|&t| self.evaluate(t)).collect();

        log::debug!(
            "{} signal at {} Hz: {n} samples over {duration} s at {sample_rate} Hz",
            self.waveform.name(),
            self.frequency
        );
        Wave::new(samples, timestamps, sample_rate)
    }

    pub fn create_wave_with(&self, params: &WaveParams) -> WaveResult<Wave> {
        self.create_wave(params.duration, params.start, params.sample_rate)
    }

    /// Sample with the default window (2 s from t=0 at 3000 Hz)
    pub fn create_default_wave(&self) -> WaveResult<Wave> {
        self.create_wave_with(&WaveParams::default())
    }

    /// Serializable summary of this signal
    pub fn params(&self) -> SignalParams {
        SignalParams {
            amp: self.amplitude,
            freq: self.frequency,
            phase: self.phase_offset,
        }
    }
}

impl Default for Signal {
    /// 400 Hz unit sine
    fn default() -> Self {
        Self {
            frequency: 400.0,
            amplitude: 1.0,
            phase_offset: 0.0,
            waveform: Waveform::Sine,
        }
    }
}

/// Amplitude, frequency and phase of a signal as a flat record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalParams {
    pub amp: f64,
    pub freq: f64,
    pub phase: f64,
}

impl SignalParams {
    /// As a JSON object (`{"amp": .., "freq": .., "phase": ..}`)
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "amp": self.amp,
            "freq": self.freq,
            "phase": self.phase,
        })
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

/// Step-by-step signal construction with validation at `build`.
///
/// The frequency is required; everything else falls back to a unit sine
/// with no phase offset.
#[derive(Debug, Clone, Default)]
pub struct SignalBuilder {
    frequency: Option<f64>,
    amplitude: Option<f64>,
    phase_offset: Option<f64>,
    waveform: Option<Waveform>,
}

impl SignalBuilder {
    pub fn frequency(mut self, hz: f64) -> Self {
        self.frequency = Some(hz);
        self
    }

    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    pub fn phase_offset(mut self, radians: f64) -> Self {
        self.phase_offset = Some(radians);
        self
    }

    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = Some(waveform);
        self
    }

    pub fn build(self) -> WaveResult<Signal> {
        let frequency = self
            .frequency
            .ok_or_else(|| WaveError::Config("signal frequency is required".to_string()))?;
        Signal::new(
            frequency,
            self.amplitude.unwrap_or(1.0),
            self.phase_offset.unwrap_or(0.0),
            self.waveform.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn period_of_400_hz() {
        let signal = Signal::default();
        assert_eq!(signal.period().unwrap(), 0.0025);
    }

    #[test]
    fn period_of_zero_frequency_is_division_error() {
        let signal = Signal::sine(0.0).unwrap();
        assert!(matches!(signal.period(), Err(WaveError::Division(_))));
    }

    #[test]
    fn negative_frequency_is_rejected() {
        assert!(matches!(Signal::sine(-1.0), Err(WaveError::Config(_))));
        assert!(matches!(Signal::sine(f64::INFINITY), Err(WaveError::Config(_))));
    }

    #[test]
    fn create_wave_length_matches_duration_times_rate() {
        let signal = Signal::default();
        let cases = [
            (2.0, 3000.0),
            (0.5, 44_100.0),
            (0.1, 8000.0),
            (1.0 / 3.0, 300.0),
            (0.01, 125.0),
        ];
        for (duration, rate) in cases {
            let wave = signal.create_wave(duration, 0.0, rate).unwrap();
            let expected = (duration * rate).round() as usize;
            assert_eq!(wave.len(), expected, "duration={duration} rate={rate}");
            assert_eq!(wave.timestamps().len(), expected);
            assert_eq!(wave.sample_rate(), rate);
        }
    }

    #[test]
    fn create_wave_starts_at_start() {
        let wave = Signal::default().create_wave(0.01, 1.5, 1000.0).unwrap();
        assert_eq!(wave.timestamps()[0], 1.5);
        assert!((wave.timestamps()[1] - 1.501).abs() < 1e-12);
    }

    #[test]
    fn create_wave_applies_amplitude_and_offset() {
        let signal = Signal::new(1.0, 2.0, PI / 2.0, Waveform::Sine).unwrap();
        let wave = signal.create_wave(1.0, 0.0, 4.0).unwrap();
        // 2*sin(2πt + π/2) = 2*cos(2πt) at t = 0, 0.25, 0.5, 0.75
        let expected = [2.0, 0.0, -2.0, 0.0];
        for (got, want) in wave.samples().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn create_wave_rejects_bad_window() {
        let signal = Signal::default();
        assert!(matches!(signal.create_wave(0.0, 0.0, 100.0), Err(WaveError::Config(_))));
        assert!(matches!(signal.create_wave(1.0, 0.0, -100.0), Err(WaveError::Config(_))));
    }

    #[test]
    fn create_wave_rejects_oversized_window() {
        let signal = Signal::default();
        // Product overflows to infinity
        assert!(matches!(signal.create_wave(1e200, 0.0, 1e200), Err(WaveError::Config(_))));
        // Finite but far beyond any allocatable length
        assert!(matches!(signal.create_wave(1e12, 0.0, 48_000.0), Err(WaveError::Config(_))));
        // One past the limit
        let too_many = (MAX_SAMPLES + 1) as f64;
        assert!(matches!(signal.create_wave(too_many, 0.0, 1.0), Err(WaveError::Config(_))));
    }

    #[test]
    fn default_wave_uses_default_window() {
        let wave = Signal::default().create_default_wave().unwrap();
        assert_eq!(wave.len(), 6000);
        assert_eq!(wave.sample_rate(), 3000.0);
    }

    #[test]
    fn zero_frequency_gives_constant_wave() {
        let signal = Signal::new(0.0, 3.0, PI / 2.0, Waveform::Sine).unwrap();
        let wave = signal.create_wave(0.1, 0.0, 100.0).unwrap();
        assert!(wave.samples().iter().all(|s| (s - 3.0).abs() < 1e-12));
    }

    #[test]
    fn params_serialize_to_flat_object() {
        let signal = Signal::new(440.0, 0.5, 0.25, Waveform::Sine).unwrap();
        let value = signal.params().to_value();
        assert_eq!(value["amp"], 0.5);
        assert_eq!(value["freq"], 440.0);
        assert_eq!(value["phase"], 0.25);

        let json = signal.params().to_json();
        let back: SignalParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signal.params());
    }

    #[test]
    fn builder_requires_frequency() {
        let result = Signal::builder().amplitude(2.0).build();
        assert!(matches!(result, Err(WaveError::Config(_))));
    }

    #[test]
    fn builder_fills_defaults() {
        let signal = Signal::builder()
            .frequency(50.0)
            .waveform(Waveform::Square)
            .build()
            .unwrap();
        assert_eq!(signal.frequency(), 50.0);
        assert_eq!(signal.amplitude(), 1.0);
        assert_eq!(signal.phase_offset(), 0.0);
        assert_eq!(signal.waveform().name(), "square");
    }

    #[test]
    fn from_config_matches_fields() {
        let config = SignalConfig {
            frequency: 1000.0,
            amplitude: 0.2,
            phase_offset: 0.1,
            waveform: Waveform::Triangle,
        };
        let signal = Signal::from_config(&config).unwrap();
        assert_eq!(signal.frequency(), 1000.0);
        assert_eq!(signal.amplitude(), 0.2);
        assert_eq!(signal.waveform().name(), "triangle");
    }
}
