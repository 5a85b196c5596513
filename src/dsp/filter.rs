//! Spectrum-domain filters
//!
//! These are ideal ("brick wall") filters: each bin is either passed through
//! untouched or multiplied by a fixed attenuation factor, depending only on
//! its frequency. A factor of 0.0 removes the bin entirely.

use num_complex::Complex64;

use crate::domain::error::ensure_positive;
use crate::domain::{WaveError, WaveResult};

/// Something that rewrites spectrum bins given their frequencies
pub trait SpectralFilter {
    /// Filter `amplitudes` in place. `frequencies[i]` is the frequency of bin `i`.
    fn filter(&self, amplitudes: &mut [Complex64], frequencies: &[f64]);
}

fn check_factor(factor: f64) -> WaveResult<f64> {
    if factor.is_finite() && factor >= 0.0 {
        Ok(factor)
    } else {
        Err(WaveError::Config(format!(
            "attenuation factor must be finite and non-negative, got {factor}"
        )))
    }
}

/// Attenuates every bin with `|f| > cutoff`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassFilter {
    cutoff: f64,
    factor: f64,
}

impl LowPassFilter {
    /// Default cutoff in Hz
    pub const DEFAULT_CUTOFF: f64 = 10_000.0;

    pub fn new(cutoff: f64) -> WaveResult<Self> {
        ensure_positive("cutoff frequency", cutoff)?;
        Ok(Self { cutoff, factor: 0.0 })
    }

    /// Scale stopband bins by `factor` instead of zeroing them
    pub fn with_attenuation(mut self, factor: f64) -> WaveResult<Self> {
        self.factor = check_factor(factor)?;
        Ok(self)
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn attenuation(&self) -> f64 {
        self.factor
    }
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self {
            cutoff: Self::DEFAULT_CUTOFF,
            factor: 0.0,
        }
    }
}

impl SpectralFilter for LowPassFilter {
    fn filter(&self, amplitudes: &mut [Complex64], frequencies: &[f64]) {
        for (h, f) in amplitudes.iter_mut().zip(frequencies) {
            if f.abs() > self.cutoff {
                *h *= self.factor;
            }
        }
    }
}

/// Attenuates every bin with `|f| < cutoff`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighPassFilter {
    cutoff: f64,
    factor: f64,
}

impl HighPassFilter {
    pub fn new(cutoff: f64) -> WaveResult<Self> {
        ensure_positive("cutoff frequency", cutoff)?;
        Ok(Self { cutoff, factor: 0.0 })
    }

    pub fn with_attenuation(mut self, factor: f64) -> WaveResult<Self> {
        self.factor = check_factor(factor)?;
        Ok(self)
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl SpectralFilter for HighPassFilter {
    fn filter(&self, amplitudes: &mut [Complex64], frequencies: &[f64]) {
        for (h, f) in amplitudes.iter_mut().zip(frequencies) {
            if f.abs() < self.cutoff {
                *h *= self.factor;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(n: usize) -> Vec<Complex64> {
        vec![Complex64::new(1.0, -1.0); n]
    }

    #[test]
    fn low_pass_keeps_bins_at_cutoff() {
        let freqs = [0.0, 100.0, 200.0, -200.0, -100.0];
        let mut bins = ones(5);
        LowPassFilter::new(100.0).unwrap().filter(&mut bins, &freqs);

        assert_eq!(bins[0], Complex64::new(1.0, -1.0));
        assert_eq!(bins[1], Complex64::new(1.0, -1.0));
        assert_eq!(bins[2], Complex64::new(0.0, 0.0));
        assert_eq!(bins[3], Complex64::new(0.0, 0.0));
        assert_eq!(bins[4], Complex64::new(1.0, -1.0));
    }

    #[test]
    fn low_pass_attenuates_instead_of_zeroing() {
        let freqs = [50.0, 500.0];
        let mut bins = ones(2);
        LowPassFilter::new(100.0)
            .unwrap()
            .with_attenuation(0.25)
            .unwrap()
            .filter(&mut bins, &freqs);

        assert_eq!(bins[0], Complex64::new(1.0, -1.0));
        assert_eq!(bins[1], Complex64::new(0.25, -0.25));
    }

    #[test]
    fn high_pass_removes_dc() {
        let freqs = [0.0, 300.0];
        let mut bins = ones(2);
        HighPassFilter::new(10.0).unwrap().filter(&mut bins, &freqs);
        assert_eq!(bins[0], Complex64::new(0.0, 0.0));
        assert_eq!(bins[1], Complex64::new(1.0, -1.0));
    }

    #[test]
    fn non_positive_cutoff_is_rejected() {
        assert!(matches!(LowPassFilter::new(0.0), Err(WaveError::Config(_))));
        assert!(matches!(LowPassFilter::new(-5.0), Err(WaveError::Config(_))));
        assert!(matches!(HighPassFilter::new(f64::NAN), Err(WaveError::Config(_))));
    }

    #[test]
    fn negative_attenuation_is_rejected() {
        let filter = LowPassFilter::new(100.0).unwrap();
        assert!(filter.with_attenuation(-1.0).is_err());
    }

    #[test]
    fn default_cutoff_is_ten_kilohertz() {
        assert_eq!(LowPassFilter::default().cutoff(), 10_000.0);
        assert_eq!(LowPassFilter::default().attenuation(), 0.0);
    }
}
