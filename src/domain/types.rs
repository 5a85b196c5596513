//! Core domain types

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A single time-domain sample
pub type Sample = f64;

/// Periodic function evaluated by a signal.
///
/// All built-in shapes have period 2π and peak amplitude 1.0, so they are
/// interchangeable with `f64::sin` in the sampling formula.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sine,
    Cosine,
    Square,
    Sawtooth,
    Triangle,
    /// Caller-supplied periodic function. Not serializable.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Waveform {
    /// Evaluate the waveform at the given phase (radians)
    pub fn eval(&self, phase: f64) -> Sample {
        // Position within the current cycle, in [0, 1)
        let frac = (phase / TAU).rem_euclid(1.0);
        match self {
            Waveform::Sine => phase.sin(),
            Waveform::Cosine => phase.cos(),
            Waveform::Square => {
                if frac < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * frac - 1.0,
            Waveform::Triangle => 1.0 - 4.0 * (frac - 0.5).abs(),
            Waveform::Custom(f) => f(phase),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Cosine => "cosine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
            Waveform::Custom(_) => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn builtin_shapes_stay_within_unit_amplitude() {
        let shapes = [
            Waveform::Sine,
            Waveform::Cosine,
            Waveform::Square,
            Waveform::Sawtooth,
            Waveform::Triangle,
        ];
        for shape in shapes {
            for i in 0..1000 {
                let v = shape.eval(i as f64 * 0.037 - 10.0);
                assert!(v.abs() <= 1.0 + 1e-12, "{} out of range: {v}", shape.name());
            }
        }
    }

    #[test]
    fn square_flips_at_half_period() {
        assert_eq!(Waveform::Square.eval(0.25 * PI), 1.0);
        assert_eq!(Waveform::Square.eval(1.25 * PI), -1.0);
        // Negative phases wrap into the same cycle position
        assert_eq!(Waveform::Square.eval(-0.75 * PI), -1.0);
    }

    #[test]
    fn custom_function_is_called() {
        fn half(x: f64) -> f64 {
            x / 2.0
        }
        assert_eq!(Waveform::Custom(half).eval(3.0), 1.5);
    }

    #[test]
    fn waveform_serializes_lowercase() {
        let json = serde_json::to_string(&Waveform::Sawtooth).unwrap();
        assert_eq!(json, "\"sawtooth\"");
        let back: Waveform = serde_json::from_str("\"triangle\"").unwrap();
        assert_eq!(back.name(), "triangle");
    }
}
